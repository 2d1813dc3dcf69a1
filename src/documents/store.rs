//! Local Document Store
//!
//! In-memory fallback that encodes each document into a data URI.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::{DocumentRecord, DocumentStore, DocumentUpload};
use crate::error::{OrchestratorError, Result};

/// Keeps records in insertion order, which is also upload order.
#[derive(Debug, Default)]
pub struct LocalDocumentStore {
    records: RwLock<Vec<DocumentRecord>>,
}

impl LocalDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// `data:<mime>;base64,<payload>`
pub fn data_uri(mime_type: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(data))
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn put(&self, owner_id: &str, upload: DocumentUpload) -> Result<DocumentRecord> {
        if owner_id.trim().is_empty() {
            return Err(OrchestratorError::InvalidRequest(
                "Owner id cannot be empty".to_string(),
            ));
        }

        let record = DocumentRecord {
            id: Uuid::new_v4(),
            owner_id: owner_id.to_string(),
            url: data_uri(&upload.mime_type, &upload.data),
            size_bytes: upload.data.len(),
            file_name: upload.file_name,
            mime_type: upload.mime_type,
            uploaded_at: Utc::now(),
        };

        self.records.write().await.push(record.clone());
        info!(owner_id, document_id = %record.id, bytes = record.size_bytes, "Document stored locally");
        Ok(record)
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<DocumentRecord>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut records = self.records.write().await;
        match records.iter().position(|r| r.id == id) {
            Some(index) => {
                records.remove(index);
                Ok(())
            }
            None => Err(OrchestratorError::NotFound(format!("document {}", id))),
        }
    }
}
