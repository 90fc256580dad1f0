use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// First rule a record broke; validation stops there.
    #[error("Validation failed on `{field}`: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },
}

impl ModelError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        ModelError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Offending field for validation failures
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ModelError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
