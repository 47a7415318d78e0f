//! Mock Model Runner for Testing
//!
//! Records every prompt and returns a queued reply.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use summarize_selection::{ModelConfig, ModelRunner, SummarizeError, SummarizeResult};

/// Mock runner that records prompts and replays canned replies
#[derive(Debug, Clone)]
pub struct MockModel {
    /// All prompts received, in order
    pub prompts: Arc<Mutex<Vec<String>>>,
    /// Replies handed out front to back
    replies: Arc<Mutex<Vec<SummarizeResult<String>>>>,
}

impl MockModel {
    pub fn new(replies: Vec<SummarizeResult<String>>) -> Self {
        Self {
            prompts: Arc::new(Mutex::new(Vec::new())),
            replies: Arc::new(Mutex::new(replies)),
        }
    }

    /// Create a mock that answers once with `text`
    pub fn answering(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    /// Create a mock that fails once with `err`
    pub fn failing(err: SummarizeError) -> Self {
        Self::new(vec![Err(err)])
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl ModelRunner for MockModel {
    fn generate(&self, _config: &ModelConfig, prompt: &str) -> SummarizeResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(SummarizeError::EmptyOutput);
        }
        replies.remove(0)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
