//! Error types for the invoicegen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Generation errors wrap the library-level `FieldError` and `TemplateError`.

use crate::exit_codes;
use crate::fields::FieldError;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for invoicegen operations.
#[derive(Error, Debug)]
pub enum GenError {
    /// User provided invalid arguments or unreadable input.
    #[error("{0}")]
    UserError(String),

    /// Configuration file could not be loaded or failed validation.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The field resolver rejected the input.
    #[error("Field resolution failed: {0}")]
    Field(#[from] FieldError),

    /// The contract template could not be fully instantiated.
    #[error("Template instantiation failed: {0}")]
    Template(#[from] TemplateError),

    /// The host-facing `construct` returned an error response.
    #[error("Construction rejected: {0}")]
    Rejected(String),
}

impl GenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenError::UserError(_) => exit_codes::USER_ERROR,
            GenError::ConfigError(_) => exit_codes::USER_ERROR,
            GenError::Field(_) => exit_codes::GENERATION_FAILURE,
            GenError::Template(_) => exit_codes::GENERATION_FAILURE,
            GenError::Rejected(_) => exit_codes::GENERATION_FAILURE,
        }
    }
}

/// Result type alias for invoicegen operations.
pub type Result<T> = std::result::Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = GenError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = GenError::ConfigError("empty log_filter".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn field_error_has_generation_exit_code() {
        let err: GenError = FieldError::InvalidEnum {
            field: "partialReceiver".to_string(),
            value: "Owner".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), exit_codes::GENERATION_FAILURE);
    }

    #[test]
    fn template_error_has_generation_exit_code() {
        let err: GenError = TemplateError::MissingPlaceholder {
            name: "memo".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), exit_codes::GENERATION_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = GenError::Rejected("incorrect `partialReceiver`".to_string());
        assert_eq!(
            err.to_string(),
            "Construction rejected: incorrect `partialReceiver`"
        );

        let err = GenError::ConfigError("log_filter must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: log_filter must not be empty"
        );
    }
}
