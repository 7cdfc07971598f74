use thiserror::Error;

/// Errors produced while turning a submission into a prediction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScreeningError {
    /// The submission itself is unusable; only this submission is rejected.
    #[error("Validation failed for {field}: {message}")]
    Validation { field: String, message: String },

    /// The encoded row does not line up with the classifier's training schema.
    #[error("Feature schema mismatch: encoder produces {expected:?}, classifier expects {found:?}")]
    EncodingMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
}

impl ScreeningError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        ScreeningError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ScreeningError::Validation { .. })
    }
}
