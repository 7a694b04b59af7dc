use breakdowns_api::{MethodChoice, SectorChoice, METHOD_OPTIONS};

use crate::error::BreakdownsError;

pub const MAX_QUERY_LENGTH: usize = 100;

/// Strip ASCII control characters (0x00-0x1F and 0x7F) and enforce a
/// byte-length limit. Unlike most inputs, an empty result is allowed.
pub fn strip_control(input: &str, max_len: usize) -> Result<String, BreakdownsError> {
    if input.len() > max_len {
        return Err(BreakdownsError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    Ok(input.chars().filter(|c| !c.is_ascii_control()).collect())
}

/// Validate a free-text query. Empty means "match everything".
pub fn validate_query(input: &str) -> Result<String, BreakdownsError> {
    strip_control(input, MAX_QUERY_LENGTH)
}

/// Validate a sector name. Matching is exact, so no case folding or trimming.
pub fn validate_sector(input: &str) -> Result<SectorChoice, BreakdownsError> {
    let cleaned = strip_control(input, MAX_QUERY_LENGTH)?;
    if cleaned.is_empty() {
        return Err(BreakdownsError::InvalidInput(
            "sector is empty; use 'All' to clear the sector filter".to_string(),
        ));
    }
    Ok(SectorChoice::from(cleaned.as_str()))
}

/// Validate a valuation method: case-insensitive against the fixed options.
pub fn validate_method(input: &str) -> Result<MethodChoice, BreakdownsError> {
    let trimmed = input.trim();
    METHOD_OPTIONS
        .iter()
        .find(|option| option.eq_ignore_ascii_case(trimmed))
        .and_then(|option| option.parse().ok())
        .ok_or_else(|| {
            BreakdownsError::InvalidInput(format!(
                "unknown valuation method '{}'. Valid methods: {}",
                input,
                METHOD_OPTIONS.join(", ")
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakdowns_api::types::ValuationMethod;

    #[test]
    fn query_keeps_empty() {
        assert_eq!(validate_query("").unwrap(), "");
    }

    #[test]
    fn query_strips_control_chars() {
        assert_eq!(validate_query("ac\u{0007}me\n").unwrap(), "acme");
        assert_eq!(validate_query("  spaced  ").unwrap(), "  spaced  ");
    }

    #[test]
    fn query_too_long() {
        let long = "a".repeat(MAX_QUERY_LENGTH + 1);
        assert!(validate_query(&long).is_err());
        assert!(validate_query(&"a".repeat(MAX_QUERY_LENGTH)).is_ok());
    }

    #[test]
    fn sector_is_verbatim() {
        assert_eq!(
            validate_sector("Health Care").unwrap(),
            SectorChoice::Sector("Health Care".to_string())
        );
        assert_eq!(validate_sector("All").unwrap(), SectorChoice::All);
        assert!(validate_sector("\u{0001}").is_err());
    }

    #[test]
    fn method_case_insensitive() {
        assert_eq!(
            validate_method("dcf").unwrap(),
            MethodChoice::Method(ValuationMethod::Dcf)
        );
        assert_eq!(
            validate_method(" sotp ").unwrap(),
            MethodChoice::Method(ValuationMethod::Sotp)
        );
        assert_eq!(validate_method("ALL").unwrap(), MethodChoice::All);
    }

    #[test]
    fn method_unknown() {
        let err = validate_method("EV/EBITDA").unwrap_err();
        assert!(err.to_string().contains("Valid methods: All, DCF, Multiples, SOTP, Other"));
    }
}
