use std::io;
use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Configuration errors
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Factory errors: a tag outside the closed set of variants
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("Unknown shape '{0}' (expected Circle, Square or Rectangle)")]
    UnknownShape(String),

    #[error("Unknown car type '{0}' (expected SUV or Sedan)")]
    UnknownCarType(String),

    #[error("Unknown car company '{0}'")]
    UnknownCompany(String),
}

// =============================================================================
// Construction errors: a singleton constructor that can fail
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("{resource} unavailable on attempt {attempt}")]
    Unavailable { resource: String, attempt: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::invalid("rounds", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid value for field 'rounds': must be at least 1"
        );
    }

    #[test]
    fn test_parse_error_converts() {
        let parse = toml::from_str::<toml::Value>("rounds = ").unwrap_err();
        let err: ConfigError = parse.into();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse config"));
    }

    #[test]
    fn test_factory_error_messages() {
        let err = FactoryError::UnknownCarType("Truck".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown car type 'Truck' (expected SUV or Sedan)"
        );
        let err = FactoryError::UnknownCompany("Tesla".to_string());
        assert_eq!(err.to_string(), "Unknown car company 'Tesla'");
    }

    #[test]
    fn test_construction_error_message() {
        let err = ConstructionError::Unavailable {
            resource: "license server".to_string(),
            attempt: 1,
        };
        assert_eq!(err.to_string(), "license server unavailable on attempt 1");
    }
}
