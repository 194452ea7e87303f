//! Error types for Agrupar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Agrupar operations.
///
/// Provides detailed context about failures such as invalid hyperparameters
/// and unreadable roster files.
///
/// # Examples
///
/// ```
/// use agrupar::error::AgruparError;
///
/// let err = AgruparError::InvalidHyperparameter {
///     param: "group_size".to_string(),
///     value: "0".to_string(),
///     constraint: ">= 1".to_string(),
/// };
/// assert!(err.to_string().contains("Invalid hyperparameter"));
/// ```
#[derive(Debug)]
pub enum AgruparError {
    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for AgruparError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgruparError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            AgruparError::Io(e) => write!(f, "I/O error: {e}"),
            AgruparError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AgruparError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AgruparError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AgruparError {
    fn from(err: std::io::Error) -> Self {
        AgruparError::Io(err)
    }
}

impl From<&str> for AgruparError {
    fn from(msg: &str) -> Self {
        AgruparError::Other(msg.to_string())
    }
}

impl From<String> for AgruparError {
    fn from(msg: String) -> Self {
        AgruparError::Other(msg)
    }
}

impl AgruparError {
    /// Create an invalid hyperparameter error with descriptive context
    #[must_use]
    pub fn invalid_hyperparameter(param: &str, value: impl fmt::Display, constraint: &str) -> Self {
        Self::InvalidHyperparameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::Other(format!("empty input: {context}"))
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, AgruparError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_hyperparameter_display() {
        let err = AgruparError::InvalidHyperparameter {
            param: "group_size".to_string(),
            value: "0".to_string(),
            constraint: ">= 1".to_string(),
        };
        assert!(err.to_string().contains("Invalid hyperparameter"));
        assert!(err.to_string().contains("group_size"));
        assert!(err.to_string().contains(">= 1"));
    }

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = AgruparError::Io(io_err);
        let msg = err.to_string();
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_from_str() {
        let err: AgruparError = "test error".into();
        assert!(matches!(err, AgruparError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_string() {
        let err: AgruparError = "test error".to_string().into();
        assert!(matches!(err, AgruparError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: AgruparError = io_err.into();
        assert!(matches!(err, AgruparError::Io(_)));
    }

    #[test]
    fn test_invalid_hyperparameter_helper() {
        let err = AgruparError::invalid_hyperparameter("max_iter", 0, ">= 1");
        let msg = err.to_string();
        assert!(msg.contains("max_iter"));
        assert!(msg.contains("0"));
    }

    #[test]
    fn test_empty_input_helper() {
        let err = AgruparError::empty_input("training data");
        let msg = err.to_string();
        assert!(msg.contains("empty input"));
        assert!(msg.contains("training data"));
    }

    #[test]
    fn test_error_source_io() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = AgruparError::Io(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_source_other() {
        use std::error::Error;
        let err = AgruparError::Other("test".to_string());
        assert!(err.source().is_none());
    }
}
