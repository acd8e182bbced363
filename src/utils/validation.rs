use crate::utils::error::{HelperError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HelperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(HelperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(HelperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("display.unknown_user_label", "未知用户").is_ok());
        assert!(validate_non_empty_string("display.unknown_user_label", "").is_err());
        assert!(validate_non_empty_string("display.unknown_user_label", "   ").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("format.default_max_length", 5, 1).is_ok());
        assert!(validate_positive_number("format.default_max_length", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("timing.debounce_ms", 300u64, 1, 60_000).is_ok());
        assert!(validate_range("timing.debounce_ms", 0u64, 1, 60_000).is_err());
        assert!(validate_range("timing.debounce_ms", 60_001u64, 1, 60_000).is_err());
    }
}
