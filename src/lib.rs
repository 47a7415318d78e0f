//! Summarize Selection Library
//!
//! Summarizes the selected text of a document with a local Ollama model and
//! writes the summary back into the document, right after the selection.

pub mod config;
pub mod document;
pub mod error;
pub mod model;
pub mod summarizer;

pub use config::{Config, ModelConfig};
pub use document::{FileDocument, HostDocument, Selection, Span, TextDocument};
pub use error::{SummarizeError, SummarizeResult};
pub use model::{ModelRunner, OllamaCli, SummaryResult};
pub use summarizer::{Outcome, Summarizer};
