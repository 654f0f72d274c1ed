use thiserror::Error;

#[derive(Error, Debug)]
pub enum RedlineError {
    #[error("Failed to parse document: {0}")]
    DocumentFormat(String),

    #[error("Failed to write document: {0}")]
    WriteError(String),
}
