//! Filesystem-backed document store.
//!
//! Each uploaded document gets a fresh UUID; artifacts are addressed by
//! (document id, variant) and partitioned on disk by that id, so requests
//! for different documents never touch the same files.
//!
//! Layout:
//! - `{upload_dir}/{id}.docx`            original
//! - `{upload_dir}/{id}_metadata.json`   metadata record
//! - `{upload_dir}/{id}_analysis.json`   last parsed analysis
//! - `{processed_dir}/{id}_redline.docx` redline artifact
//! - `{processed_dir}/{id}_clean.docx`   clean artifact

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

use llm_client::ClauseAnalysis;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Metadata error: {0}")]
    Metadata(#[from] serde_json::Error),
}

/// Artifact variants tracked per document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Original,
    Redline,
    Clean,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Original => write!(f, "original"),
            Variant::Redline => write!(f, "redline"),
            Variant::Clean => write!(f, "clean"),
        }
    }
}

/// Document lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Uploaded,
    Analyzed,
    Redlined,
    Cleaned,
}

/// Metadata record persisted next to the original artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub original_filename: String,
    pub document_id: String,
    pub status: DocumentStatus,
    pub uploaded_at: DateTime<Utc>,
}

pub struct DocumentStore {
    upload_dir: PathBuf,
    processed_dir: PathBuf,
}

impl DocumentStore {
    pub fn new(
        upload_dir: impl Into<PathBuf>,
        processed_dir: impl Into<PathBuf>,
    ) -> std::io::Result<Self> {
        let upload_dir = upload_dir.into();
        let processed_dir = processed_dir.into();
        std::fs::create_dir_all(&upload_dir)?;
        std::fs::create_dir_all(&processed_dir)?;
        Ok(Self {
            upload_dir,
            processed_dir,
        })
    }

    /// Store an uploaded original and issue a fresh document id.
    pub async fn save_original(
        &self,
        original_filename: &str,
        bytes: &[u8],
    ) -> Result<String, StoreError> {
        let document_id = Uuid::new_v4().to_string();

        tokio::fs::write(self.artifact_path(&document_id, Variant::Original), bytes).await?;

        let metadata = DocumentMetadata {
            original_filename: original_filename.to_string(),
            document_id: document_id.clone(),
            status: DocumentStatus::Uploaded,
            uploaded_at: Utc::now(),
        };
        self.write_metadata(&metadata).await?;

        tracing::info!(document_id = %document_id, filename = %original_filename, "Stored original document");
        Ok(document_id)
    }

    /// Resolve the on-disk path of an artifact.
    ///
    /// Fails with `NotFound` for an unknown id or a variant that has not
    /// been produced yet; a returned path always exists at resolution time.
    pub async fn locate(&self, document_id: &str, variant: Variant) -> Result<PathBuf, StoreError> {
        let id = Self::validate_id(document_id)?;
        let path = self.artifact_path(&id, variant);
        if !tokio::fs::try_exists(&path).await? {
            return Err(StoreError::NotFound(format!(
                "{} artifact for document {}",
                variant, document_id
            )));
        }
        Ok(path)
    }

    pub async fn read_artifact(
        &self,
        document_id: &str,
        variant: Variant,
    ) -> Result<Vec<u8>, StoreError> {
        let path = self.locate(document_id, variant).await?;
        Ok(tokio::fs::read(path).await?)
    }

    pub async fn write_artifact(
        &self,
        document_id: &str,
        variant: Variant,
        bytes: &[u8],
    ) -> Result<(), StoreError> {
        let id = Self::validate_id(document_id)?;
        tokio::fs::write(self.artifact_path(&id, variant), bytes).await?;
        Ok(())
    }

    pub async fn metadata(&self, document_id: &str) -> Result<DocumentMetadata, StoreError> {
        let id = Self::validate_id(document_id)?;
        let path = self.metadata_path(&id);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(format!("document {}", document_id)));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    pub async fn set_status(
        &self,
        document_id: &str,
        status: DocumentStatus,
    ) -> Result<(), StoreError> {
        let mut metadata = self.metadata(document_id).await?;
        metadata.status = status;
        self.write_metadata(&metadata).await
    }

    /// Persist the parsed analysis so the feedback path can revisit it.
    pub async fn save_analysis(
        &self,
        document_id: &str,
        analysis: &ClauseAnalysis,
    ) -> Result<(), StoreError> {
        let id = Self::validate_id(document_id)?;
        let json = serde_json::to_string(analysis)?;
        tokio::fs::write(self.analysis_path(&id), json).await?;
        Ok(())
    }

    pub async fn load_analysis(&self, document_id: &str) -> Result<ClauseAnalysis, StoreError> {
        let id = Self::validate_id(document_id)?;
        let raw = match tokio::fs::read_to_string(self.analysis_path(&id)).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(format!(
                    "analysis for document {}",
                    document_id
                )));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    async fn write_metadata(&self, metadata: &DocumentMetadata) -> Result<(), StoreError> {
        let json = serde_json::to_string(metadata)?;
        tokio::fs::write(self.metadata_path(&metadata.document_id), json).await?;
        Ok(())
    }

    /// Ids are caller-supplied path segments; only well-formed UUIDs ever
    /// become file names.
    fn validate_id(document_id: &str) -> Result<String, StoreError> {
        Uuid::parse_str(document_id)
            .map(|u| u.to_string())
            .map_err(|_| StoreError::NotFound(format!("document {}", document_id)))
    }

    fn artifact_path(&self, id: &str, variant: Variant) -> PathBuf {
        match variant {
            Variant::Original => self.upload_dir.join(format!("{}.docx", id)),
            Variant::Redline => self.processed_dir.join(format!("{}_redline.docx", id)),
            Variant::Clean => self.processed_dir.join(format!("{}_clean.docx", id)),
        }
    }

    fn metadata_path(&self, id: &str) -> PathBuf {
        self.upload_dir.join(format!("{}_metadata.json", id))
    }

    fn analysis_path(&self, id: &str) -> PathBuf {
        self.upload_dir.join(format!("{}_analysis.json", id))
    }
}
