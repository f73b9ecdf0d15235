use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Transport error: {message}")]
    Transport {
        status: Option<u16>,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unknown action: '{action}'")]
    UnknownAction { action: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DispatchError {
    /// Non-2xx answer from the backend.
    pub fn http_status(status: u16) -> Self {
        DispatchError::Transport {
            status: Some(status),
            message: format!("HTTP error! status: {}", status),
            source: None,
        }
    }

    /// The exchange could not complete (DNS, connect, body read).
    pub fn network(source: reqwest::Error) -> Self {
        DispatchError::Transport {
            status: source.status().map(|s| s.as_u16()),
            message: "request could not complete".to_string(),
            source: Some(source),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            DispatchError::Transport { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, DispatchError::Transport { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, DispatchError::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_carries_code() {
        let err = DispatchError::http_status(503);
        assert!(err.is_transport());
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "Transport error: HTTP error! status: 503");
    }

    #[test]
    fn decode_error_has_no_status() {
        let json_err = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let err = DispatchError::from(json_err);
        assert!(err.is_decode());
        assert!(!err.is_transport());
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn network_error_keeps_detail_in_source_only() {
        let source = reqwest::Client::new()
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .unwrap_err();
        let detail = source.to_string();
        let err = DispatchError::network(source);

        assert_eq!(err.to_string(), "Transport error: request could not complete");
        let chained = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(chained, Some(detail));
    }
}
