use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DashboardError, Result};

/// Where the raw CSV bytes come from
#[async_trait]
pub trait CollisionSource: Send + Sync {
    /// Human-readable origin, used in log messages
    fn describe(&self) -> String;

    /// Fetch the raw CSV body holding at most `max_rows` data rows.
    /// Sources that cannot bound the fetch may return more; the reader
    /// applies the limit again.
    async fn fetch(&self, max_rows: usize) -> Result<Vec<u8>>;
}

/// Socrata CSV endpoint, bounded with the `$limit` query parameter
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.to_owned(),
        })
    }

    pub fn request_url(&self, max_rows: usize) -> String {
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}$limit={}", self.url, separator, max_rows)
    }
}

#[async_trait]
impl CollisionSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self, max_rows: usize) -> Result<Vec<u8>> {
        let url = self.request_url(max_rows);
        info!("Fetching collision data from {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let bytes = response.bytes().await?;
        debug!("Downloaded {} bytes from {}", bytes.len(), url);

        Ok(bytes.to_vec())
    }
}

/// Local CSV export, for offline use
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CollisionSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self, _max_rows: usize) -> Result<Vec<u8>> {
        info!("Reading collision data from {}", self.path.display());
        let bytes = tokio::fs::read(&self.path).await?;
        debug!("Read {} bytes from {}", bytes.len(), self.path.display());
        Ok(bytes)
    }
}
