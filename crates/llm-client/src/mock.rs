//! Mock language model for tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use crate::client::{CompletionRequest, LanguageModel};
use crate::error::LlmError;

/// Scripted model for unit and router tests.
///
/// Responses are consumed in order; once the script is exhausted the last
/// configured response repeats. Every received request is recorded so tests
/// can assert on the prompts that were sent.
pub struct MockModel {
    id: String,
    script: Mutex<VecDeque<String>>,
    fallback: String,
    calls: AtomicU32,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockModel {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            script: Mutex::new(VecDeque::new()),
            fallback: "{}".to_string(),
            calls: AtomicU32::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a response; also becomes the fallback once the script runs out.
    pub fn with_response(mut self, content: impl Into<String>) -> Self {
        let content = content.into();
        self.fallback = content.clone();
        self.script.get_mut().unwrap().push_back(content);
        self
    }

    /// Number of completions served.
    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for MockModel {
    fn id(&self) -> &str {
        &self.id
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);

        let next = self.script.lock().unwrap().pop_front();
        Ok(next.unwrap_or_else(|| self.fallback.clone()))
    }
}
