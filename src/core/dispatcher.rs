use crate::config::DispatcherConfig;
use crate::core::form::{encode_form_body, FORM_CONTENT_TYPE};
use crate::domain::action::Action;
use crate::domain::model::{ApiResponse, Fields};
use crate::domain::ports::SheetsApi;
use crate::utils::error::{DispatchError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// Sends each action as one form-encoded POST to the configured endpoint.
///
/// Holds no per-call state; concurrent dispatches are independent and are
/// neither ordered, deduplicated nor retried.
#[derive(Debug, Clone)]
pub struct RequestDispatcher {
    config: DispatcherConfig,
    client: Client,
}

impl RequestDispatcher {
    pub fn new(config: DispatcherConfig) -> Result<Self> {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: DispatcherConfig, client: Client) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, client })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn send(&self, action: Action, fields: &Fields) -> Result<ApiResponse> {
        let body = encode_form_body(action, fields);

        tracing::debug!(
            "POST {} action={} ({} fields)",
            self.config.base_url,
            action,
            fields.len()
        );
        let response = self
            .client
            .post(&self.config.base_url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(DispatchError::network)?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(DispatchError::http_status(status.as_u16()));
        }

        let text = response.text().await.map_err(DispatchError::network)?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        Ok(ApiResponse::new(value))
    }
}

#[async_trait]
impl SheetsApi for RequestDispatcher {
    async fn dispatch(&self, action: Action, fields: Fields) -> Result<ApiResponse> {
        match self.send(action, &fields).await {
            Ok(response) => Ok(response),
            Err(e) => {
                tracing::error!(action = %action, "API request failed: {}", e);
                Err(e)
            }
        }
    }
}
