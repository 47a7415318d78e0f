//! Model Invocation Module
//!
//! One blocking prompt-in, text-out call per summary.

use crate::config::ModelConfig;
use crate::error::SummarizeResult;
use tracing::{info, warn};

pub mod ollama;

pub use ollama::OllamaCli;

/// Directive placed in front of the selected text
pub const SUMMARY_DIRECTIVE: &str = "Summarize the following text clearly:";

/// Trait for text generation backends
pub trait ModelRunner: std::fmt::Debug {
    /// Run the model once on `prompt` and return its text output
    fn generate(&self, config: &ModelConfig, prompt: &str) -> SummarizeResult<String>;

    /// Get the backend name
    fn name(&self) -> &str;
}

impl<R: ModelRunner + ?Sized> ModelRunner for Box<R> {
    fn generate(&self, config: &ModelConfig, prompt: &str) -> SummarizeResult<String> {
        (**self).generate(config, prompt)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Text destined for the document, tagged by how it was produced
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryResult {
    Summary(String),
    Error(String),
}

impl SummaryResult {
    pub fn text(&self) -> &str {
        match self {
            SummaryResult::Summary(text) | SummaryResult::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SummaryResult::Error(_))
    }
}

pub fn build_prompt(input_text: &str) -> String {
    format!("{SUMMARY_DIRECTIVE}\n\n{input_text}")
}

/// Summarize `input_text` with exactly one model run.
///
/// Failures come back as rendered `[ERROR] ...` text, never as `Err`.
pub fn summarize<R: ModelRunner + ?Sized>(
    runner: &R,
    config: &ModelConfig,
    input_text: &str,
) -> SummaryResult {
    let prompt = build_prompt(input_text);
    info!(
        "🧠 Asking {} ({}) to summarize {} chars",
        runner.name(),
        config.model,
        input_text.chars().count()
    );

    match runner.generate(config, &prompt) {
        Ok(summary) => {
            info!("✅ Summary ready ({} chars)", summary.chars().count());
            SummaryResult::Summary(summary)
        }
        Err(e) => {
            warn!("❌ Model invocation failed: {}", e);
            SummaryResult::Error(e.user_message())
        }
    }
}
