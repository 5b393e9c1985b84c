use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShippingError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Cannot resolve a unit for {field}: {value:?}")]
    UnresolvableUnit { field: String, value: String },

    #[error("Carrier {carrier} failed: {message}")]
    Carrier { carrier: String, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Carrier endpoint returned HTTP {status}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Carrier,
    Transport,
    Configuration,
    System,
}

impl ShippingError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ShippingError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn unresolvable_unit(field: impl Into<String>, value: impl Into<String>) -> Self {
        ShippingError::UnresolvableUnit {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ShippingError::InvalidInput { .. } | ShippingError::UnresolvableUnit { .. } => {
                ErrorCategory::Input
            }
            ShippingError::Carrier { .. } => ErrorCategory::Carrier,
            ShippingError::Http(_) | ShippingError::HttpStatus { .. } => ErrorCategory::Transport,
            ShippingError::InvalidConfigValue { .. }
            | ShippingError::MissingConfig { .. }
            | ShippingError::ConfigParse { .. } => ErrorCategory::Configuration,
            ShippingError::Io(_) | ShippingError::Serialization(_) => ErrorCategory::System,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShippingError>;
