use std::cell::Cell;

use super::{DomainStatus, LookupError, LookupMx, MailExchanger, check_domain_mx, resolver};
use trust_dns_resolver::{
    Name,
    error::{ResolveError, ResolveErrorKind},
    proto::{
        op::{Query, ResponseCode},
        rr::RecordType,
    },
};

type LookupResult = Result<Vec<MailExchanger>, LookupError>;
type LookupFn = dyn Fn(&str) -> LookupResult;

pub(crate) struct StubResolver {
    pub on_lookup: Box<LookupFn>,
    pub calls: Cell<usize>,
}

impl StubResolver {
    pub(crate) fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> LookupResult + 'static,
    {
        Self {
            on_lookup: Box::new(f),
            calls: Cell::new(0),
        }
    }
}

impl LookupMx for StubResolver {
    fn lookup_mx(&self, domain: &str) -> LookupResult {
        self.calls.set(self.calls.get() + 1);
        (self.on_lookup)(domain)
    }
}

#[test]
fn sorts_by_preference() {
    let stub = StubResolver::new(|domain| {
        assert_eq!(domain, "example.com");
        Ok(vec![
            MailExchanger::new(20, "mx2.example.com."),
            MailExchanger::new(10, "mx1.example.com."),
            MailExchanger::new(30, "mx3.example.com."),
        ])
    });

    let outcome = check_domain_mx(&stub, "example.com");
    assert_eq!(outcome.status, DomainStatus::Valid);
    assert_eq!(outcome.detail, "mx_ok");
    let hosts: Vec<&str> = outcome
        .exchangers
        .iter()
        .map(|mx| mx.exchange.as_str())
        .collect();
    assert_eq!(
        hosts,
        ["mx1.example.com", "mx2.example.com", "mx3.example.com"]
    );
    assert_eq!(outcome.primary().unwrap().exchange, "mx1.example.com");
}

#[test]
fn equal_preferences_keep_answer_order() {
    let stub = StubResolver::new(|_| {
        Ok(vec![
            MailExchanger::new(10, "b.example.com"),
            MailExchanger::new(5, "first.example.com"),
            MailExchanger::new(10, "a.example.com"),
        ])
    });

    let outcome = check_domain_mx(&stub, "example.com");
    let hosts: Vec<&str> = outcome
        .exchangers
        .iter()
        .map(|mx| mx.exchange.as_str())
        .collect();
    assert_eq!(hosts, ["first.example.com", "b.example.com", "a.example.com"]);
}

#[test]
fn null_mx_only_is_invalid() {
    let stub = StubResolver::new(|_| Ok(vec![MailExchanger::new(0, ".")]));

    let outcome = check_domain_mx(&stub, "example.com");
    assert_eq!(outcome.status, DomainStatus::MxInvalid);
    assert!(outcome.exchangers.is_empty());
    assert_eq!(outcome.detail, "mx_records_invalid_or_empty");
    assert!(outcome.primary().is_none());
}

#[test]
fn null_mx_is_dropped_next_to_real_records() {
    let stub = StubResolver::new(|_| {
        Ok(vec![
            MailExchanger::new(0, "."),
            MailExchanger::new(10, "mail.example.com."),
        ])
    });

    let outcome = check_domain_mx(&stub, "example.com");
    assert_eq!(outcome.status, DomainStatus::Valid);
    assert_eq!(outcome.exchangers, vec![MailExchanger::new(10, "mail.example.com")]);
}

#[test]
fn lookup_failures_map_to_status_and_detail() {
    let cases = [
        (LookupError::NxDomain, DomainStatus::Absent, "NXDOMAIN"),
        (LookupError::NoAnswer, DomainStatus::MxInvalid, "no_mx_answer"),
        (LookupError::NoNameservers, DomainStatus::MxInvalid, "no_nameservers"),
        (LookupError::YxDomain, DomainStatus::MxInvalid, "yx_domain"),
        (LookupError::Timeout, DomainStatus::MxInvalid, "dns_timeout"),
        (
            LookupError::Other("io".to_string()),
            DomainStatus::MxInvalid,
            "dns_error:io",
        ),
    ];

    for (error, status, detail) in cases {
        let stub = StubResolver::new(move |_| Err(error.clone()));
        let outcome = check_domain_mx(&stub, "example.com");
        assert_eq!(outcome.status, status, "{detail}");
        assert_eq!(outcome.detail, detail);
        assert!(outcome.exchangers.is_empty());
    }
}

fn no_records(response_code: ResponseCode) -> ResolveError {
    let name = Name::from_ascii("example.test.").expect("name");
    ResolveError::from(ResolveErrorKind::NoRecordsFound {
        query: Box::new(Query::query(name, RecordType::MX)),
        soa: None,
        negative_ttl: None,
        response_code,
        trusted: true,
    })
}

#[test]
fn nxdomain_answer_marks_domain_absent() {
    let stub = StubResolver::new(|_| Err(LookupError::from(&no_records(ResponseCode::NXDomain))));
    let outcome = check_domain_mx(&stub, "missing.test");
    assert_eq!(outcome.status, DomainStatus::Absent);
    assert_eq!(outcome.detail, "NXDOMAIN");
}

#[test]
fn resolve_errors_are_classified() {
    let timeout = ResolveError::from(ResolveErrorKind::Timeout);
    assert_eq!(LookupError::from(&timeout), LookupError::Timeout);

    let no_connections = ResolveError::from(ResolveErrorKind::NoConnections);
    assert_eq!(LookupError::from(&no_connections), LookupError::NoNameservers);

    let cases = [
        (ResponseCode::NXDomain, LookupError::NxDomain),
        (ResponseCode::NoError, LookupError::NoAnswer),
        (ResponseCode::YXDomain, LookupError::YxDomain),
        (ResponseCode::ServFail, LookupError::NoNameservers),
    ];
    for (response_code, expected) in cases {
        let err = no_records(response_code);
        assert_eq!(LookupError::from(&err), expected, "{response_code:?}");
    }

    let message = ResolveError::from("resolver exploded");
    assert_eq!(
        LookupError::from(&message),
        LookupError::Other("message".to_string())
    );
}

#[test]
fn normalize_exchange_trims_trailing_dot() {
    assert_eq!(resolver::normalize_exchange(" Mail.EXAMPLE.com. "), "Mail.EXAMPLE.com");
    assert_eq!(resolver::normalize_exchange("."), "");
}

#[test]
fn idn_exchange_stays_in_punycode() {
    let name = Name::from_ascii("mail.xn--bcher-kva.de.").expect("name");
    assert_eq!(
        resolver::normalize_exchange(&name.to_ascii()),
        "mail.xn--bcher-kva.de"
    );
}
