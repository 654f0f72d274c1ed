//! HTTP handlers for the redline API

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::analysis;
use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;
use crate::store::{DocumentStatus, Variant};

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Upload an NDA document for analysis
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    // The file is not necessarily the first form field
    let field = loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::InvalidRequest(format!("Invalid multipart body: {}", e)))?
            .ok_or_else(|| ApiError::InvalidRequest("Missing file field".into()))?;

        if field.file_name().is_some() || field.name() == Some("file") {
            break field;
        }
    };

    let filename = field
        .file_name()
        .ok_or_else(|| ApiError::InvalidRequest("Missing filename".into()))?
        .to_string();

    if !filename.ends_with(".docx") {
        return Err(ApiError::UnsupportedFileType(
            "Only .docx files are supported".into(),
        ));
    }

    let bytes = field
        .bytes()
        .await
        .map_err(|e| ApiError::InvalidRequest(format!("Failed to read upload: {}", e)))?;

    // Extract before saving so a broken docx is rejected up front
    let text = redline_core::extract_paragraphs(&bytes)?.join("\n");

    let document_id = state.store.save_original(&filename, &bytes).await?;

    Ok(Json(UploadResponse {
        document_id,
        message: "Document uploaded successfully".to_string(),
        text,
    }))
}

/// Analyze the uploaded NDA document
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Path(document_id): Path<String>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    Ok(Json(analysis::analyze(&state, &document_id).await?))
}

/// Submit feedback for the analyzed document
pub async fn feedback(
    State(state): State<Arc<AppState>>,
    Path(document_id): Path<String>,
    Json(req): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    Ok(Json(
        analysis::incorporate_feedback(&state, &document_id, &req.feedback).await?,
    ))
}

/// Download the processed document (redline or clean version)
pub async fn download(
    State(state): State<Arc<AppState>>,
    Path(document_id): Path<String>,
    Query(params): Query<DownloadParams>,
) -> Result<(StatusCode, [(String, String); 2], Vec<u8>), ApiError> {
    let (variant, bytes) = if params.clean {
        (Variant::Clean, clean_artifact(&state, &document_id).await?)
    } else {
        (
            Variant::Redline,
            state
                .store
                .read_artifact(&document_id, Variant::Redline)
                .await?,
        )
    };

    let metadata = state.store.metadata(&document_id).await?;
    let stem = metadata
        .original_filename
        .strip_suffix(".docx")
        .unwrap_or(&metadata.original_filename);

    Ok((
        StatusCode::OK,
        [
            ("Content-Type".to_string(), DOCX_CONTENT_TYPE.to_string()),
            (
                "Content-Disposition".to_string(),
                format!("attachment; filename=\"{}_{}.docx\"", stem, variant),
            ),
        ],
        bytes,
    ))
}

/// Fetch the clean artifact, deriving it from the redline on first request.
async fn clean_artifact(state: &AppState, document_id: &str) -> Result<Vec<u8>, ApiError> {
    match state.store.read_artifact(document_id, Variant::Clean).await {
        Ok(bytes) => Ok(bytes),
        Err(crate::store::StoreError::NotFound(_)) => {
            let redline = state
                .store
                .read_artifact(document_id, Variant::Redline)
                .await?;
            let clean = redline_core::strip_markup(&redline)?;
            state
                .store
                .write_artifact(document_id, Variant::Clean, &clean)
                .await?;
            state
                .store
                .set_status(document_id, DocumentStatus::Cleaned)
                .await?;
            tracing::info!(document_id, "Clean artifact derived from redline");
            Ok(clean)
        }
        Err(e) => Err(e.into()),
    }
}
