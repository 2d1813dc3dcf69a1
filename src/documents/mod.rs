//! Documents Module
//!
//! Owner-scoped document storage. The cloud backend is an external
//! collaborator; [`LocalDocumentStore`] is the local-only fallback that
//! serves each document back as a data URI.

mod store;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::Result;

pub use store::LocalDocumentStore;

/// A file handed to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentUpload {
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Metadata of a stored document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRecord {
    pub id: Uuid,
    pub owner_id: String,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: usize,
    /// Where the content can be fetched
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Document storage keyed by owner. No transactions; the last write wins.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Stores `upload` for `owner_id` and returns its record.
    async fn put(&self, owner_id: &str, upload: DocumentUpload) -> Result<DocumentRecord>;

    /// All records of `owner_id`, oldest first.
    async fn list(&self, owner_id: &str) -> Result<Vec<DocumentRecord>>;

    /// Removes a document. `NotFound` if it does not exist.
    async fn delete(&self, id: Uuid) -> Result<()>;
}
