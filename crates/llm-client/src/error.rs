use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Model endpoint unreachable: {0}")]
    Unreachable(String),

    #[error("Model request failed: HTTP {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Model returned malformed response: {message} (excerpt: {excerpt})")]
    MalformedResponse { message: String, excerpt: String },
}

impl LlmError {
    /// Build a malformed-response error carrying a short excerpt of the
    /// offending model output for diagnostics.
    pub fn malformed(message: impl Into<String>, raw: &str) -> Self {
        let mut excerpt: String = raw.chars().take(200).collect();
        if raw.chars().count() > 200 {
            excerpt.push_str("...");
        }
        Self::MalformedResponse {
            message: message.into(),
            excerpt,
        }
    }
}
