//! Summarize Selection Error Types
//!
//! Model failures never reach the host as errors: they are rendered into
//! document text through [`SummarizeError::user_message`]. Host failures
//! (bad offsets, file I/O) propagate normally.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Central error type for the summarizer
#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("Configuration is missing.")]
    ConfigMissing,

    #[error("Ollama executable not found at: {}", .0.display())]
    ExecutableNotFound(PathBuf),

    #[error("Ollama returned an error:\n{stderr}")]
    Process { status: Option<i32>, stderr: String },

    #[error("Ollama produced no output.")]
    EmptyOutput,

    #[error("Ollama timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Document error: {0}")]
    Document(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for summarizer operations
pub type SummarizeResult<T> = Result<T, SummarizeError>;

impl SummarizeError {
    /// Text written into the document in place of a summary.
    pub fn user_message(&self) -> String {
        match self {
            SummarizeError::ConfigMissing
            | SummarizeError::ExecutableNotFound(_)
            | SummarizeError::Process { .. }
            | SummarizeError::EmptyOutput
            | SummarizeError::Timeout(_) => format!("[ERROR] {}", self),
            other => format!("[ERROR] An unexpected error occurred: {}", other),
        }
    }
}
