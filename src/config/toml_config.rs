use crate::config::PackageOptions;
use crate::domain::units::UnitSystem;
use crate::utils::error::{Result, ShippingError};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShippingConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    pub transport: Option<TransportConfig>,
    pub logging: Option<LoggingConfig>,
}

/// Seeds for [`PackageOptions`]; applied only when a caller asks for them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub units: Option<UnitSystem>,
    pub currency: Option<String>,
    pub cylinder: Option<bool>,
    pub gift: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl ShippingConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ShippingError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the variable's value; unset variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ShippingError::ConfigParse {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(currency) = &self.defaults.currency {
            crate::core::money::CurrencyCode::parse(currency).map_err(|_| {
                ShippingError::InvalidConfigValue {
                    field: "defaults.currency".to_string(),
                    value: currency.clone(),
                    reason: "Expected a three-letter currency code".to_string(),
                }
            })?;
        }

        if let Some(transport) = &self.transport {
            validate_url("transport.endpoint", &transport.endpoint)?;
            if let Some(timeout) = transport.timeout_seconds {
                validate_positive_number("transport.timeout_seconds", timeout, 1)?;
            }
            if let Some(headers) = &transport.headers {
                for name in headers.keys() {
                    validate_non_empty_string("transport.headers", name)?;
                }
            }
        }

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn package_options(&self) -> PackageOptions {
        PackageOptions {
            units: self.defaults.units.unwrap_or_default(),
            value: None,
            currency: self.defaults.currency.clone(),
            cylinder: self.defaults.cylinder.unwrap_or(false),
            gift: self.defaults.gift.unwrap_or(false),
        }
    }

    pub fn timeout(&self) -> Duration {
        let seconds = self
            .transport
            .as_ref()
            .and_then(|t| t.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        Duration::from_secs(seconds)
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("info")
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for ShippingConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
