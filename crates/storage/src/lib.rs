//! Object-storage adapter for uploaded media.
//!
//! Exposes the [`ObjectStore`] trait -- the uniform file-persistence contract
//! the API layer depends on -- and [`BucketClient`], an implementation backed
//! by a Supabase-style storage HTTP service. The adapter is injected
//! explicitly (`Arc<dyn ObjectStore>`) rather than read from process-global
//! state.

use async_trait::async_trait;
use bytes::Bytes;

pub mod bucket;

pub use bucket::{BucketClient, StorageConfig};

/// Errors surfaced by storage operations. Each remote failure is tied to the
/// operation that was attempted.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage service is configured; save/open/delete cannot proceed.
    #[error("Storage client not configured")]
    NotConfigured,

    #[error("Failed to upload '{name}': {reason}")]
    UploadFailed { name: String, reason: String },

    #[error("Failed to download '{name}': {reason}")]
    DownloadFailed { name: String, reason: String },

    #[error("Failed to delete '{name}': {reason}")]
    DeleteFailed { name: String, reason: String },

    /// The object does not exist on the remote service.
    #[error("Object not found: {0}")]
    NotFound(String),
}

/// Uniform file-persistence contract.
///
/// `save`, `open`, and `delete` surface remote failures as errors. `exists`
/// and `size` are best-effort lookups: any failure degrades to `false` / `0`
/// rather than propagating. `url` always yields a usable string -- the public
/// object URL when configured, the bare name otherwise.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Persist `content` under `name`, returning the stored name.
    async fn save(
        &self,
        name: &str,
        content: Bytes,
        content_type: &str,
    ) -> Result<String, StorageError>;

    /// Retrieve the content stored under `name`.
    async fn open(&self, name: &str) -> Result<Bytes, StorageError>;

    /// Remove the object stored under `name`.
    async fn delete(&self, name: &str) -> Result<(), StorageError>;

    /// Whether an object named `name` exists. Best-effort: `false` on any
    /// lookup failure.
    async fn exists(&self, name: &str) -> bool;

    /// Public URL for the object, or the bare name when unconfigured.
    fn url(&self, name: &str) -> String;

    /// Size in bytes of the object. Best-effort: `0` on any lookup failure.
    async fn size(&self, name: &str) -> u64;
}
