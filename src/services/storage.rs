use crate::config::StorageSettings;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to object storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("storage returned error: {0}")]
    ApiError(String),

    #[error("failed to read upload: {0}")]
    Io(#[from] std::io::Error),
}

/// Object storage client for profile images
///
/// Speaks plain HTTP to an S3-compatible endpoint: a single authenticated
/// PUT per upload, public URLs derived from bucket and region. The
/// contract is put(bytes, key) -> url; listing, deletion and multipart
/// uploads are out of scope.
pub struct StorageClient {
    endpoint: String,
    bucket: String,
    region: String,
    access_token: String,
    public_base_url: Option<String>,
    client: Client,
}

impl StorageClient {
    /// Create a new storage client from settings
    pub fn new(settings: &StorageSettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs.unwrap_or(30)))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: settings.endpoint.clone(),
            bucket: settings.bucket.clone(),
            region: settings.region.clone(),
            access_token: settings.access_token.clone(),
            public_base_url: settings.public_base_url.clone(),
            client,
        }
    }

    /// Upload bytes under `key`, returning the public URL on success
    pub async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let url = format!(
            "{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.bucket,
            urlencoding::encode(key)
        );

        tracing::debug!("Uploading {} bytes to {}", bytes.len(), url);

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.access_token)
            .header("Content-Type", content_type)
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StorageError::ApiError(format!(
                "upload of {} returned {}",
                key,
                response.status()
            )));
        }

        Ok(self.public_url(key))
    }

    /// Public URL for an object key
    ///
    /// Derived S3-style from bucket and region unless a base override is
    /// configured.
    pub fn public_url(&self, key: &str) -> String {
        let encoded = urlencoding::encode(key);
        match &self.public_base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), encoded),
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket, self.region, encoded
            ),
        }
    }
}
