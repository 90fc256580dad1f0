use heatmap_core::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Flat fields could not populate the requested record type
    #[error("Decode error: {0}")]
    DecodeShape(String),

    #[error("Stream name must not be empty")]
    EmptyStreamName,

    #[error("Invalid record: {0}")]
    Validation(#[from] ModelError),

    #[error("Sink error: {0}")]
    Sink(String),
}
