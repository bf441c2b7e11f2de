/// Errors returned by the metric functions.
#[derive(thiserror::Error, Debug)]
pub enum RmseError {
    #[error("length mismatch: {observed} observed values vs {predicted} predicted values")]
    LengthMismatch { observed: usize, predicted: usize },

    #[error("cannot compute an error metric over empty sequences")]
    EmptyInput,

    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience result type.
pub type RmseResult<T> = Result<T, RmseError>;
