use crate::mx::{DomainStatus, ResolverOptions};
use crate::smtp_verify::{ProbeOptions, ProbeOutcome};

/// Value shown when a column has nothing to report.
pub const SENTINEL: &str = "-";
/// Probe column value for rows where no SMTP session was attempted.
pub const SKIPPED: &str = "skipped";

/// Column names of the report, in output order.
pub const COLUMNS: [&str; 5] = ["email", "domain_status", "smtp_result", "smtp_code", "details"];

/// Timeouts and identities for one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyOptions {
    pub resolver: ResolverOptions,
    pub probe: ProbeOptions,
}

/// One line of the report, built once per input address.
///
/// `probe` is `Some` only when the domain resolved to at least one usable
/// exchanger. Syntax and domain-encoding failures reuse
/// [`DomainStatus::MxInvalid`]; `details` tells them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub email: String,
    pub domain_status: DomainStatus,
    pub probe: Option<ProbeOutcome>,
    pub details: String,
}

impl ReportRow {
    pub(crate) fn skipped(
        email: impl Into<String>,
        domain_status: DomainStatus,
        details: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            domain_status,
            probe: None,
            details: details.into(),
        }
    }

    pub fn smtp_result(&self) -> &'static str {
        self.probe
            .as_ref()
            .map(|probe| probe.result.as_str())
            .unwrap_or(SKIPPED)
    }

    pub fn smtp_code(&self) -> String {
        self.probe
            .as_ref()
            .map(ProbeOutcome::code_str)
            .unwrap_or_else(|| SENTINEL.to_string())
    }

    /// The five report columns as display strings.
    pub fn columns(&self, labels: &DomainLabels) -> [String; 5] {
        [
            self.email.clone(),
            labels.label(self.domain_status).to_string(),
            self.smtp_result().to_string(),
            self.smtp_code(),
            self.details.clone(),
        ]
    }
}

/// Human-readable phrases for the three domain states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainLabels {
    pub valid: &'static str,
    pub absent: &'static str,
    pub mx_invalid: &'static str,
}

impl DomainLabels {
    pub const fn english() -> Self {
        Self {
            valid: "domain valid",
            absent: "domain absent",
            mx_invalid: "MX records missing or invalid",
        }
    }

    pub const fn russian() -> Self {
        Self {
            valid: "домен валиден",
            absent: "домен отсутствует",
            mx_invalid: "МХ-записи отсутствуют или некорректны",
        }
    }

    pub fn label(&self, status: DomainStatus) -> &'static str {
        match status {
            DomainStatus::Valid => self.valid,
            DomainStatus::Absent => self.absent,
            DomainStatus::MxInvalid => self.mx_invalid,
        }
    }
}

impl Default for DomainLabels {
    fn default() -> Self {
        Self::russian()
    }
}
