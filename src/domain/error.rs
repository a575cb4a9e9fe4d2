use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("User not found with id: 7");
        assert_eq!(error.to_string(), "Not found: User not found with id: 7");
        assert!(matches!(error, DomainError::NotFound { .. }));
    }

    #[test]
    fn test_storage_error() {
        let error = DomainError::storage("connection refused");
        assert_eq!(error.to_string(), "Storage error: connection refused");
        assert!(matches!(error, DomainError::Storage { .. }));
    }

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("Unknown storage backend 'mongo'");
        assert_eq!(
            error.to_string(),
            "Configuration error: Unknown storage backend 'mongo'"
        );
    }
}
