//! Timetable error types.

/// Errors from loading a timetable file.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// File could not be opened
    #[error("cannot open timetable {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be decoded
    #[error("timetable CSV error: {0}")]
    Csv(#[from] csv::Error),
}
