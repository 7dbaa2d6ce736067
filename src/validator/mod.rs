//! Address syntax check and domain normalisation.
//!
//! Both run before any network call; a failure here short-circuits the
//! address straight to a report row.

mod domain;
mod types;

use std::sync::LazyLock;

use regex::Regex;

pub use domain::extract_domain;
pub use types::AddressError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@([A-Za-z0-9-]+\.)+[A-Za-z]{2,63}$").expect("static email regex")
});

/// Permissive syntactic check: local part, `@`, dot-separated labels and an
/// alphabetic top-level label of 2 to 63 characters.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Checks syntax and returns the normalised ASCII domain of `email`.
pub fn validate_email(email: &str) -> Result<String, AddressError> {
    if !is_valid_email(email) {
        return Err(AddressError::InvalidFormat);
    }
    extract_domain(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_basic() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("first.last+tag@mail.sub.example.co"));
    }

    #[test]
    fn rejects_malformed() {
        for input in [
            "not-an-email",
            "@example.com",
            "alice@",
            "alice@example",
            "alice@example.c",
            "alice@exa_mple.com",
            "ali ce@example.com",
            "alice@example.c0m",
        ] {
            assert!(!is_valid_email(input), "{input} should be rejected");
        }
    }

    #[test]
    fn tld_length_is_bounded() {
        let ok = format!("a@example.{}", "a".repeat(63));
        let too_long = format!("a@example.{}", "a".repeat(64));
        assert!(is_valid_email(&ok));
        assert!(!is_valid_email(&too_long));
    }

    #[test]
    fn validate_returns_detail_tokens() {
        assert_eq!(validate_email("User@Example.com").unwrap(), "example.com");
        let err = validate_email("not-an-email").unwrap_err();
        assert_eq!(err.detail(), "invalid_email_format");
    }
}
