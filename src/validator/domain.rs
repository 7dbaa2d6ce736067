use super::types::AddressError;

/// Extracts the domain after the final `@`, lower-cases it and converts it to
/// its ASCII (punycode) form. Every label must be 1 to 63 octets long.
pub fn extract_domain(email: &str) -> Result<String, AddressError> {
    let (_, domain) = email.rsplit_once('@').ok_or(AddressError::MissingAt)?;
    let domain = domain.trim().to_lowercase();
    if domain.is_empty() {
        return Err(AddressError::EmptyDomain);
    }
    let ascii = idna::domain_to_ascii(&domain).map_err(|err| AddressError::Idna(err.to_string()))?;
    if ascii.is_empty() {
        return Err(AddressError::EmptyDomain);
    }
    let labels = ascii.strip_suffix('.').unwrap_or(&ascii);
    if let Some(label) = labels.split('.').find(|label| !(1..=63).contains(&label.len())) {
        return Err(AddressError::Idna(format!(
            "label of {} characters, expected 1 to 63",
            label.len()
        )));
    }
    Ok(ascii)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_domain() {
        assert_eq!(extract_domain("Alice@Example.COM").unwrap(), "example.com");
    }

    #[test]
    fn uses_last_at() {
        assert_eq!(
            extract_domain("\"a@b\"@mail.example.org").unwrap(),
            "mail.example.org"
        );
    }

    #[test]
    fn converts_to_punycode() {
        assert_eq!(extract_domain("user@Bücher.de").unwrap(), "xn--bcher-kva.de");
    }

    #[test]
    fn rejects_missing_parts() {
        assert_eq!(extract_domain("no-at-sign"), Err(AddressError::MissingAt));
        assert_eq!(extract_domain("user@  "), Err(AddressError::EmptyDomain));
    }

    #[test]
    fn rejects_overlong_label() {
        let long = format!("user@{}.com", "a".repeat(64));
        let err = extract_domain(&long).unwrap_err();
        assert!(matches!(err, AddressError::Idna(_)), "{err:?}");
        assert_eq!(err.detail(), "invalid_domain");

        let max = format!("user@{}.com", "a".repeat(63));
        assert!(extract_domain(&max).is_ok());
    }

    #[test]
    fn rejects_empty_label() {
        assert!(matches!(
            extract_domain("user@mail..example.com"),
            Err(AddressError::Idna(_))
        ));
    }
}
