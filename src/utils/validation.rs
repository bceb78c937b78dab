use crate::utils::error::{Result, TarotError};
use chrono::NaiveDate;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(TarotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(TarotError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(TarotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TarotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(TarotError::InvalidConfigValueError {
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
        return Err(TarotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Date-of-birth strings must be `YYYY-MM-DD`. Checked at the boundary so
/// malformed dates never reach the numerology engine.
pub fn validate_date_string(field_name: &str, value: &str) -> Result<()> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(_) => Ok(()),
        Err(_) => Err(TarotError::ValidationError {
            message: format!("{} must be a date in format YYYY-MM-DD, got: {}", field_name, value),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://example.com/v1").is_ok());
        assert!(validate_url("base_url", "http://localhost:8000").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "not-a-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_date_string() {
        assert!(validate_date_string("dob", "1990-01-01").is_ok());
        assert!(validate_date_string("dob", "2000-12-31").is_ok());
        assert!(validate_date_string("dob", "1990-13-01").is_err());
        assert!(validate_date_string("dob", "01-01-1990").is_err());
        assert!(validate_date_string("dob", "not a date").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("card_number", 1u32, 1, 78).is_ok());
        assert!(validate_range("card_number", 78u32, 1, 78).is_ok());
        assert!(validate_range("card_number", 0u32, 1, 78).is_err());
        assert!(validate_range("card_number", 79u32, 1, 78).is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("count", 3, 1).is_ok());
        assert!(validate_positive_number("count", 0, 1).is_err());
    }
}
