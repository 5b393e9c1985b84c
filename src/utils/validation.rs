use crate::utils::error::{Result, ShippingError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ShippingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ShippingError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ShippingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(ShippingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ShippingError::MissingConfig {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShippingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(ShippingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected one of: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// Physical amounts (weights, lengths) must be finite and non-negative.
pub fn validate_measure(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ShippingError::invalid_input(
            field_name,
            format!("{} is not a finite number", value),
        ));
    }
    if value < 0.0 {
        return Err(ShippingError::invalid_input(
            field_name,
            format!("{} must not be negative", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("transport.endpoint", "https://example.com").is_ok());
        assert!(validate_url("transport.endpoint", "http://example.com").is_ok());
        assert!(validate_url("transport.endpoint", "").is_err());
        assert!(validate_url("transport.endpoint", "invalid-url").is_err());
        assert!(validate_url("transport.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("transport.timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("transport.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_measure() {
        assert!(validate_measure("weight", 0.0).is_ok());
        assert!(validate_measure("weight", 12.5).is_ok());
        assert!(validate_measure("weight", -1.0).is_err());
        assert!(validate_measure("weight", f64::NAN).is_err());
        assert!(validate_measure("weight", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.level", "info", &["info", "debug"]).is_ok());
        assert!(validate_one_of("logging.level", "loud", &["info", "debug"]).is_err());
    }
}
