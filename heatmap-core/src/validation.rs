//! Structural checks producers run before a record enters the pipeline.
//!
//! Every check is fail-fast: the first broken rule is returned and the rest
//! are not evaluated. The codec never validates on its own.

use crate::error::ModelError;
use crate::types::{Symbol, TimestampMS};

pub trait Validate {
    fn validate(&self) -> Result<(), ModelError>;
}

pub(crate) fn require_symbol(symbol: &Symbol) -> Result<(), ModelError> {
    if symbol.is_empty() {
        return Err(ModelError::validation("symbol", "is required"));
    }
    Ok(())
}

pub(crate) fn require_timestamp(timestamp: TimestampMS) -> Result<(), ModelError> {
    if timestamp <= 0 {
        return Err(ModelError::validation(
            "timestamp",
            format!("must be positive epoch milliseconds, got {}", timestamp),
        ));
    }
    Ok(())
}

/// Strictly positive; NaN fails too.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<(), ModelError> {
    if value.is_nan() || value <= 0.0 {
        return Err(ModelError::validation(
            field,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(())
}
