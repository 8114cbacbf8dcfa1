use crate::error::LookupError;

/// Root of the public helloao Bible API.
pub const DEFAULT_BASE_URL: &str = "https://bible.helloao.org/api";

/// Path of the translation catalog, relative to the API root.
pub const CATALOG_PATH: &str = "available_translations.json";

/// Thin wrapper over a `reqwest::Client` bound to one API root.
///
/// No timeout and no retries: a request either completes or fails once.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("msb-lookup/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path under the API root.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET a path and return the body as text. Non-2xx statuses are errors.
    pub async fn fetch_text(&self, path: &str) -> Result<String, LookupError> {
        let url = self.url(path);
        tracing::info!(url = %url, "Fetching");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status { status, url });
        }

        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), "Received body");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve_once;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("https://bible.helloao.org/api/").unwrap();
        assert_eq!(client.base_url(), "https://bible.helloao.org/api");
        assert_eq!(
            client.url(CATALOG_PATH),
            "https://bible.helloao.org/api/available_translations.json"
        );
        assert_eq!(
            client.url("/eng_msb/Exodus/2.json"),
            "https://bible.helloao.org/api/eng_msb/Exodus/2.json"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Nothing listens on port 1; the connection is refused.
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();
        let err = client.fetch_text(CATALOG_PATH).await.unwrap_err();
        assert_eq!(err.kind(), "network");
    }

    #[tokio::test]
    async fn test_not_found_status_is_error() {
        let base = serve_once("404 Not Found", r#"{"error":"missing"}"#).await;
        let client = ApiClient::new(&base).unwrap();
        let err = client.fetch_text(CATALOG_PATH).await.unwrap_err();
        assert_eq!(err.kind(), "status");
        assert_eq!(
            err.to_string(),
            format!("HTTP 404 Not Found for {base}/available_translations.json")
        );
    }

    #[tokio::test]
    async fn test_success_returns_body() {
        let base = serve_once("200 OK", r#"{"translations":[]}"#).await;
        let client = ApiClient::new(&base).unwrap();
        let body = client.fetch_text(CATALOG_PATH).await.unwrap();
        assert_eq!(body, r#"{"translations":[]}"#);
    }
}
