//! Application state for the redline API

use anyhow::Result;
use std::sync::Arc;

use crate::store::DocumentStore;
use llm_client::{LanguageModel, OpenAiCompatibleClient};

/// Shared, reentrant service state built once at startup.
///
/// The model handles and the store are stateless across requests; everything
/// mutable lives on disk, partitioned by document id.
pub struct AppState {
    pub store: DocumentStore,
    pub primary: Arc<dyn LanguageModel>,
    pub validator: Arc<dyn LanguageModel>,
}

impl AppState {
    pub fn from_env() -> Result<Self> {
        let ollama_host =
            std::env::var("OLLAMA_HOST").unwrap_or_else(|_| "http://ollama:11434".to_string());
        let primary_model =
            std::env::var("PRIMARY_MODEL").unwrap_or_else(|_| "mistral".to_string());
        let validation_model =
            std::env::var("VALIDATION_MODEL").unwrap_or_else(|_| "llama2".to_string());
        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
        let processed_dir =
            std::env::var("PROCESSED_DIR").unwrap_or_else(|_| "processed".to_string());

        tracing::info!(
            host = %ollama_host,
            primary = %primary_model,
            validator = %validation_model,
            "Configuring model clients"
        );

        let primary = OpenAiCompatibleClient::ollama(&ollama_host, &primary_model)?;
        let validator = OpenAiCompatibleClient::ollama(&ollama_host, &validation_model)?;

        Ok(Self {
            store: DocumentStore::new(upload_dir, processed_dir)?,
            primary: Arc::new(primary),
            validator: Arc::new(validator),
        })
    }

    /// Assemble state from parts; used by tests to inject mock models.
    pub fn with_models(
        store: DocumentStore,
        primary: Arc<dyn LanguageModel>,
        validator: Arc<dyn LanguageModel>,
    ) -> Self {
        Self {
            store,
            primary,
            validator,
        }
    }
}
