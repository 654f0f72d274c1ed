//! API request/response models

use llm_client::{ClauseAnalysis, ValidationResult};
use serde::{Deserialize, Serialize};

/// Response to a successful upload; echoes the extracted text back so the
/// client can display what will be analyzed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub document_id: String,
    pub message: String,
    pub text: String,
}

/// Response to an analysis run: both parsed model outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub document_id: String,
    pub analysis: ClauseAnalysis,
    pub validation: ValidationResult,
}

/// Free-text feedback on a previous analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    pub feedback: String,
}

/// Response to a feedback round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub document_id: String,
    pub new_analysis: ClauseAnalysis,
}

/// Query parameters for download.
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadParams {
    #[serde(default)]
    pub clean: bool,
}
