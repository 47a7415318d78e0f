//! Summarize Selection
//!
//! Reads the selection, drops a progress marker after it, runs the model
//! once and replaces the marker with the summary block. Every model failure
//! ends up as document text; only host edits can fail the call.

use crate::config::ModelConfig;
use crate::document::{HostDocument, Span};
use crate::error::SummarizeResult;
use crate::model::{self, ModelRunner, SummaryResult};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Placeholder shown while the model runs
pub const PROGRESS_MARKER: &str = "\n\n[AI is summarizing… please wait]\n";

/// Header in front of every inserted result
pub const SUMMARY_HEADER: &str = "\n\n--- Summary (AI) ---\n";

/// Appended at the end of the document when no usable config exists
pub const CONFIG_MISSING_NOTICE: &str = "\n\n[ERROR] Configuration is missing.";

/// Pause after inserting the marker so the host can repaint
pub const RENDER_DELAY: Duration = Duration::from_millis(200);

/// What a single run did to the document
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// No document, no selection, or a blank selection; nothing changed
    NoSelection,
    /// Config notice appended; no marker inserted
    ConfigMissing,
    /// Summary block written over the marker
    Summarized { span: Span },
    /// Error message written over the marker
    Failed { span: Span, message: String },
}

/// Full block that replaces the progress marker
pub fn format_summary_block(result: &str) -> String {
    format!("{SUMMARY_HEADER}{result}\n")
}

#[derive(Debug)]
pub struct Summarizer<R: ModelRunner> {
    runner: R,
    render_delay: Duration,
}

impl<R: ModelRunner> Summarizer<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            render_delay: RENDER_DELAY,
        }
    }

    pub fn with_render_delay(mut self, delay: Duration) -> Self {
        self.render_delay = delay;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Summarize the current selection of `doc` in place.
    ///
    /// `config` is `None` when the configuration file is absent or
    /// incomplete.
    pub fn run<D: HostDocument + ?Sized>(
        &self,
        doc: &mut D,
        config: Option<&ModelConfig>,
    ) -> SummarizeResult<Outcome> {
        let Some(selection) = doc.selection() else {
            debug!("No active selection, nothing to do");
            return Ok(Outcome::NoSelection);
        };
        if selection.is_blank() {
            debug!("Selection is blank, nothing to do");
            return Ok(Outcome::NoSelection);
        }

        let Some(config) = config else {
            warn!("⚠️ Configuration is missing, appending notice");
            doc.append(CONFIG_MISSING_NOTICE)?;
            return Ok(Outcome::ConfigMissing);
        };

        let marker = self.show_progress(doc, selection.end())?;

        let result = model::summarize(&self.runner, config, selection.input_text());
        let span = doc.replace_range(marker, &format_summary_block(result.text()))?;

        match result {
            SummaryResult::Summary(_) => {
                info!("📝 Summary written at {}..{}", span.start, span.end);
                Ok(Outcome::Summarized { span })
            }
            SummaryResult::Error(message) => Ok(Outcome::Failed { span, message }),
        }
    }

    fn show_progress<D: HostDocument + ?Sized>(
        &self,
        doc: &mut D,
        at: usize,
    ) -> SummarizeResult<Span> {
        let marker = doc.insert_at(at, PROGRESS_MARKER)?;
        doc.flush()?;
        if !self.render_delay.is_zero() {
            std::thread::sleep(self.render_delay);
        }
        Ok(marker)
    }
}
