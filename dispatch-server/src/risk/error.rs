//! Delay model error types.

/// Errors from training, saving, or loading a delay model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// No labeled examples to fit on
    #[error("cannot train on an empty dataset")]
    EmptyDataset,

    /// Model or history file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Model file is not valid JSON for a trained model
    #[error("model JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// History CSV is malformed
    #[error("history CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Stored weights do not match the expected input width
    #[error("model expects {expected} inputs but file has {found}")]
    FeatureWidth { expected: usize, found: usize },
}
