use thiserror::Error;

#[derive(Error, Debug)]
pub enum TarotError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Card catalog error: {message}")]
    CatalogError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Model provider error: {message}")]
    ProviderError { message: String },

    #[error("Model response failed schema validation: {message}")]
    SchemaValidationError { message: String },

    #[error("All configured models failed (last error: {last_error})")]
    AllProvidersExhausted { last_error: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Catalog,
    Upstream,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TarotError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TarotError::ConfigError { .. }
            | TarotError::MissingConfigError { .. }
            | TarotError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            TarotError::ValidationError { .. } => ErrorCategory::Validation,
            TarotError::CatalogError { .. } => ErrorCategory::Catalog,
            TarotError::ApiError(_)
            | TarotError::ProviderError { .. }
            | TarotError::SchemaValidationError { .. }
            | TarotError::AllProvidersExhausted { .. } => ErrorCategory::Upstream,
            TarotError::IoError(_) | TarotError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TarotError::ValidationError { .. } => ErrorSeverity::Low,
            TarotError::ApiError(_)
            | TarotError::ProviderError { .. }
            | TarotError::SchemaValidationError { .. } => ErrorSeverity::Medium,
            TarotError::AllProvidersExhausted { .. } => ErrorSeverity::High,
            TarotError::ConfigError { .. }
            | TarotError::MissingConfigError { .. }
            | TarotError::InvalidConfigValueError { .. }
            | TarotError::CatalogError { .. }
            | TarotError::IoError(_)
            | TarotError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TarotError::ApiError(_) | TarotError::ProviderError { .. } => {
                "Check network connectivity and the configured base URL"
            }
            TarotError::SchemaValidationError { .. } => {
                "The model returned malformed output; try again or configure a different model list"
            }
            TarotError::AllProvidersExhausted { .. } => {
                "Every model in the fallback chain failed; verify the API key and model names"
            }
            TarotError::ConfigError { .. }
            | TarotError::MissingConfigError { .. }
            | TarotError::InvalidConfigValueError { .. } => {
                "Fix the configuration file, CLI flags, or environment variables and rerun"
            }
            TarotError::CatalogError { .. } => {
                "Verify the card directory exists and every card document parses"
            }
            TarotError::ValidationError { .. } => "Correct the request input and retry",
            TarotError::IoError(_) => "Check file permissions and paths",
            TarotError::SerializationError(_) => "Check that the input data is well-formed JSON",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TarotError::AllProvidersExhausted { .. } => {
                "The reading service is unavailable: no configured model could answer".to_string()
            }
            TarotError::MissingConfigError { field } => {
                format!("Required configuration is missing: {}", field)
            }
            TarotError::CatalogError { message } => {
                format!("The tarot card catalog could not be loaded: {}", message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TarotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhaustion_is_high_severity_upstream() {
        let err = TarotError::AllProvidersExhausted {
            last_error: "timeout".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Upstream);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_catalog_errors_are_fatal() {
        let err = TarotError::CatalogError {
            message: "duplicate card name".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
