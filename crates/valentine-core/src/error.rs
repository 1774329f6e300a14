//! Error types for the questionnaire library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all questionnaire operations.
///
/// No variant is fatal to the wizard: callers report the error and keep the
/// in-memory answers intact.
#[derive(Error, Debug)]
pub enum QuestionnaireError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Persisted answers could not be read or parsed
    #[error("Failed to read stored answers: {reason}")]
    StorageRead { reason: String },
    /// Answers could not be written, or the write did not verify
    #[error("Failed to save answers: {reason}")]
    StorageWrite { reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// No email relay was configured for this store
    #[error("Email service is not configured; use the export option instead")]
    EmailServiceUnavailable,
    /// The email relay rejected the request
    #[error("Failed to send email: {reason}")]
    EmailSendFailed { reason: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> QuestionnaireError {
        QuestionnaireError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> QuestionnaireError {
        QuestionnaireError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl QuestionnaireError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a storage write error from anything displayable.
    pub fn storage_write(reason: impl fmt::Display) -> Self {
        Self::StorageWrite {
            reason: reason.to_string(),
        }
    }

    /// Creates a storage read error from anything displayable.
    pub fn storage_read(reason: impl fmt::Display) -> Self {
        Self::StorageRead {
            reason: reason.to_string(),
        }
    }

    /// Whether this error came from the email relay path.
    pub fn is_email_error(&self) -> bool {
        matches!(
            self,
            Self::EmailServiceUnavailable | Self::EmailSendFailed { .. }
        )
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to QuestionnaireError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| QuestionnaireError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| QuestionnaireError::database(message).with_source(e))
    }
}

/// Result type alias for questionnaire operations
pub type Result<T> = std::result::Result<T, QuestionnaireError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = QuestionnaireError::invalid_input("date").with_reason("must not be in the past");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'date': must not be in the past"
        );
    }

    #[test]
    fn test_email_error_classification() {
        assert!(QuestionnaireError::EmailServiceUnavailable.is_email_error());
        assert!(QuestionnaireError::EmailSendFailed {
            reason: "rejected".to_string()
        }
        .is_email_error());
        assert!(!QuestionnaireError::storage_write("quota").is_email_error());
    }
}
