//! HTTP client for a Supabase-style storage bucket.
//!
//! Speaks the storage service's REST surface:
//!
//! ```text
//! POST   {service_url}/storage/v1/object/{bucket}/{name}      upload
//! GET    {service_url}/storage/v1/object/{bucket}/{name}      download
//! DELETE {service_url}/storage/v1/object/{bucket}/{name}      delete
//! POST   {service_url}/storage/v1/object/list/{bucket}        list (for exists/size)
//!        {service_url}/storage/v1/object/public/{bucket}/{name}  public URL
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use serde::Deserialize;

use crate::{ObjectStore, StorageError};

/// Storage service configuration, loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct StorageConfig {
    /// Base URL of the storage service (e.g. `https://xyz.supabase.co`).
    pub service_url: Option<String>,
    /// Service API key sent as a Bearer token.
    pub service_key: Option<String>,
    /// Bucket name (default: `atelier-media`).
    pub bucket_name: String,
}

/// Default bucket for uploaded media.
const DEFAULT_BUCKET: &str = "atelier-media";

impl StorageConfig {
    /// Load storage configuration from environment variables.
    ///
    /// | Env Var               | Required | Default         |
    /// |-----------------------|----------|-----------------|
    /// | `STORAGE_SERVICE_URL` | no       | --              |
    /// | `STORAGE_SERVICE_KEY` | no       | --              |
    /// | `STORAGE_BUCKET`      | no       | `atelier-media` |
    ///
    /// When the URL or key is absent the client stays unconfigured and every
    /// write degrades per the [`ObjectStore`] contract.
    pub fn from_env() -> Self {
        Self {
            service_url: std::env::var("STORAGE_SERVICE_URL").ok().filter(|s| !s.is_empty()),
            service_key: std::env::var("STORAGE_SERVICE_KEY").ok().filter(|s| !s.is_empty()),
            bucket_name: std::env::var("STORAGE_BUCKET")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
        }
    }
}

/// Connected remote endpoint. Only constructed when both URL and key are set.
#[derive(Debug, Clone)]
struct Remote {
    http: reqwest::Client,
    service_url: String,
    service_key: String,
}

/// Object-store implementation backed by the remote bucket service.
#[derive(Debug, Clone)]
pub struct BucketClient {
    remote: Option<Remote>,
    bucket: String,
}

/// One entry in the bucket listing response.
#[derive(Debug, Deserialize)]
struct ListEntry {
    name: String,
    #[serde(default)]
    metadata: Option<ListMetadata>,
}

#[derive(Debug, Deserialize)]
struct ListMetadata {
    #[serde(default)]
    size: u64,
}

impl BucketClient {
    /// Build a client from configuration. An incomplete configuration yields
    /// an unconfigured client rather than an error, so the server can run
    /// without live storage.
    pub fn new(config: StorageConfig) -> Self {
        let remote = match (config.service_url, config.service_key) {
            (Some(service_url), Some(service_key)) => Some(Remote {
                http: reqwest::Client::new(),
                service_url: service_url.trim_end_matches('/').to_string(),
                service_key,
            }),
            _ => None,
        };
        if remote.is_none() {
            tracing::warn!("Storage service not configured; uploads will be rejected");
        }
        Self {
            remote,
            bucket: config.bucket_name,
        }
    }

    /// Whether a remote service is configured.
    pub fn is_configured(&self) -> bool {
        self.remote.is_some()
    }

    fn object_url(&self, remote: &Remote, name: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            remote.service_url, self.bucket, name
        )
    }

    /// Fetch the bucket listing and find `name`. Used by `exists` and `size`;
    /// errors bubble up so the callers can degrade.
    async fn lookup(&self, name: &str) -> Result<Option<ListEntry>, StorageError> {
        let remote = self.remote.as_ref().ok_or(StorageError::NotConfigured)?;
        let list_url = format!(
            "{}/storage/v1/object/list/{}",
            remote.service_url, self.bucket
        );
        let response = remote
            .http
            .post(&list_url)
            .bearer_auth(&remote.service_key)
            .json(&serde_json::json!({ "prefix": "", "limit": 10_000 }))
            .send()
            .await
            .map_err(|e| StorageError::DownloadFailed {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(StorageError::DownloadFailed {
                name: name.to_string(),
                reason: format!("listing returned {}", response.status()),
            });
        }

        let entries: Vec<ListEntry> =
            response
                .json()
                .await
                .map_err(|e| StorageError::DownloadFailed {
                    name: name.to_string(),
                    reason: e.to_string(),
                })?;
        Ok(entries.into_iter().find(|e| e.name == name))
    }
}

#[async_trait]
impl ObjectStore for BucketClient {
    async fn save(
        &self,
        name: &str,
        content: Bytes,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let remote = self.remote.as_ref().ok_or(StorageError::NotConfigured)?;

        let response = remote
            .http
            .post(self.object_url(remote, name))
            .bearer_auth(&remote.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(content)
            .send()
            .await
            .map_err(|e| StorageError::UploadFailed {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        if response.status().is_success() {
            tracing::debug!(object = name, "Uploaded object");
            Ok(name.to_string())
        } else {
            Err(StorageError::UploadFailed {
                name: name.to_string(),
                reason: format!("service returned {}", response.status()),
            })
        }
    }

    async fn open(&self, name: &str) -> Result<Bytes, StorageError> {
        let remote = self.remote.as_ref().ok_or(StorageError::NotConfigured)?;

        let response = remote
            .http
            .get(self.object_url(remote, name))
            .bearer_auth(&remote.service_key)
            .send()
            .await
            .map_err(|e| StorageError::DownloadFailed {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound(name.to_string()));
        }
        if !response.status().is_success() {
            return Err(StorageError::DownloadFailed {
                name: name.to_string(),
                reason: format!("service returned {}", response.status()),
            });
        }

        response
            .bytes()
            .await
            .map_err(|e| StorageError::DownloadFailed {
                name: name.to_string(),
                reason: e.to_string(),
            })
    }

    async fn delete(&self, name: &str) -> Result<(), StorageError> {
        let remote = self.remote.as_ref().ok_or(StorageError::NotConfigured)?;

        let response = remote
            .http
            .delete(self.object_url(remote, name))
            .bearer_auth(&remote.service_key)
            .send()
            .await
            .map_err(|e| StorageError::DeleteFailed {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        if response.status().is_success() {
            tracing::debug!(object = name, "Deleted object");
            Ok(())
        } else {
            Err(StorageError::DeleteFailed {
                name: name.to_string(),
                reason: format!("service returned {}", response.status()),
            })
        }
    }

    async fn exists(&self, name: &str) -> bool {
        match self.lookup(name).await {
            Ok(entry) => entry.is_some(),
            Err(_) => false,
        }
    }

    fn url(&self, name: &str) -> String {
        match &self.remote {
            Some(remote) => format!(
                "{}/storage/v1/object/public/{}/{}",
                remote.service_url, self.bucket, name
            ),
            None => name.to_string(),
        }
    }

    async fn size(&self, name: &str) -> u64 {
        match self.lookup(name).await {
            Ok(Some(entry)) => entry.metadata.map(|m| m.size).unwrap_or(0),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured() -> BucketClient {
        BucketClient::new(StorageConfig {
            service_url: None,
            service_key: None,
            bucket_name: DEFAULT_BUCKET.to_string(),
        })
    }

    fn configured_unreachable() -> BucketClient {
        // Points at a port nothing listens on; every remote call fails.
        BucketClient::new(StorageConfig {
            service_url: Some("http://127.0.0.1:1".to_string()),
            service_key: Some("test-key".to_string()),
            bucket_name: "test-bucket".to_string(),
        })
    }

    #[test]
    fn partial_config_is_unconfigured() {
        let client = BucketClient::new(StorageConfig {
            service_url: Some("http://localhost".to_string()),
            service_key: None,
            bucket_name: DEFAULT_BUCKET.to_string(),
        });
        assert!(!client.is_configured());
    }

    #[tokio::test]
    async fn save_without_config_is_rejected() {
        let client = unconfigured();
        let result = client
            .save("a.png", Bytes::from_static(b"data"), "image/png")
            .await;
        assert!(matches!(result, Err(StorageError::NotConfigured)));
    }

    #[tokio::test]
    async fn open_without_config_is_rejected() {
        let client = unconfigured();
        assert!(matches!(
            client.open("a.png").await,
            Err(StorageError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn delete_without_config_is_rejected() {
        let client = unconfigured();
        assert!(matches!(
            client.delete("a.png").await,
            Err(StorageError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn exists_degrades_to_false() {
        // Unconfigured: no error, just false.
        assert!(!unconfigured().exists("a.png").await);
        // Configured but unreachable: the failed listing degrades to false.
        assert!(!configured_unreachable().exists("a.png").await);
    }

    #[tokio::test]
    async fn size_degrades_to_zero() {
        assert_eq!(unconfigured().size("a.png").await, 0);
        assert_eq!(configured_unreachable().size("a.png").await, 0);
    }

    #[test]
    fn url_falls_back_to_bare_name() {
        assert_eq!(unconfigured().url("hero/a.png"), "hero/a.png");
    }

    #[test]
    fn url_builds_public_path_when_configured() {
        let client = configured_unreachable();
        assert_eq!(
            client.url("hero/a.png"),
            "http://127.0.0.1:1/storage/v1/object/public/test-bucket/hero/a.png"
        );
    }

    #[tokio::test]
    async fn save_to_unreachable_service_is_operation_scoped() {
        let client = configured_unreachable();
        let result = client
            .save("a.png", Bytes::from_static(b"data"), "image/png")
            .await;
        assert!(matches!(result, Err(StorageError::UploadFailed { .. })));
    }
}
