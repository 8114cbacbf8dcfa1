use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::client::ApiClient;
use crate::error::LookupError;

/// Where a JSON document is read from.
#[derive(Debug, Clone)]
pub enum Source {
    /// A path under the client's API root.
    Remote(ApiClient),
    /// A previously downloaded copy of the document.
    File(PathBuf),
}

impl Source {
    /// Read the document body. `api_path` is only used by `Remote`.
    pub async fn read_text(&self, api_path: &str) -> Result<String, LookupError> {
        match self {
            Source::Remote(client) => client.fetch_text(api_path).await,
            Source::File(path) => {
                tracing::info!(path = %path.display(), "Reading local file");
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| LookupError::Io {
                        path: path.display().to_string(),
                        source,
                    })
            }
        }
    }

    pub async fn read_json<T: DeserializeOwned>(&self, api_path: &str) -> Result<T, LookupError> {
        let body = self.read_text(api_path).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
