use serde_json::error::Category;
use thiserror::Error;

/// Everything that can end a lookup early.
///
/// Each variant renders as the text after `Error: ` in the report line.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request could not be sent, or the body could not be read.
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The body is not valid JSON.
    #[error("invalid JSON: {0}")]
    Decode(serde_json::Error),

    /// The body is JSON, but not the document we expected.
    #[error("unexpected response shape: {0}")]
    Shape(serde_json::Error),

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => LookupError::Shape(err),
            Category::Syntax | Category::Eof | Category::Io => LookupError::Decode(err),
        }
    }
}

impl LookupError {
    /// Short name of the error class, for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::Network(_) => "network",
            LookupError::Status { .. } => "status",
            LookupError::Decode(_) => "decode",
            LookupError::Shape(_) => "shape",
            LookupError::Io { .. } => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helloao_model::CatalogResponse;

    fn decode(body: &str) -> LookupError {
        serde_json::from_str::<CatalogResponse>(body).unwrap_err().into()
    }

    #[test]
    fn test_syntax_error_is_decode() {
        let err = decode("not json");
        assert_eq!(err.kind(), "decode");
        assert!(err.to_string().starts_with("invalid JSON: expected"));
    }

    #[test]
    fn test_truncated_body_is_decode() {
        assert_eq!(decode(r#"{"translations":["#).kind(), "decode");
    }

    #[test]
    fn test_missing_translations_is_shape() {
        let err = decode(r#"{"books":[]}"#);
        assert_eq!(err.kind(), "shape");
        assert!(err.to_string().contains("missing field `translations`"));
    }

    #[test]
    fn test_missing_record_field_is_shape() {
        let err = decode(r#"{"translations":[{"id":"MSB","englishName":"x"}]}"#);
        assert_eq!(err.kind(), "shape");
        assert!(err.to_string().contains("missing field `name`"));
    }

    #[test]
    fn test_status_message() {
        let err = LookupError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            url: "https://example.invalid/x.json".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 Not Found for https://example.invalid/x.json");
        assert_eq!(err.kind(), "status");
    }
}
