//! Google Generative Language API provider implementation

use async_trait::async_trait;
use playground_config::ProviderConfig;
use reqwest::Client;
use secrecy::ExposeSecret;

use super::{GenerateContent, Provider};
use crate::convert::google::describe_error;
use crate::error::LlmError;
use crate::protocol::google::{GoogleRequest, GoogleResponse};

/// Default Google Generative Language API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Header carrying the caller's API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Generative Language API provider
pub struct GoogleProvider {
    client: Client,
    base_url: String,
}

impl GoogleProvider {
    /// Create from provider configuration
    pub fn new(config: &ProviderConfig) -> Self {
        let base_url = config
            .base_url
            .as_ref()
            .map_or(DEFAULT_BASE_URL, url::Url::as_str)
            .trim_end_matches('/')
            .to_owned();

        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Build the `generateContent` endpoint URL for a model
    fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.base_url)
    }
}

#[async_trait]
impl Provider for GoogleProvider {
    fn name(&self) -> &str {
        "google"
    }

    async fn generate_content(&self, request: &GenerateContent<'_>) -> Result<String, LlmError> {
        let wire_request: GoogleRequest = request.into();
        let url = self.generate_url(request.model.as_ref());

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, request.api_key.expose_secret())
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(model = %request.model, error = %e, "upstream request failed");
                LlmError::from(e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                model = %request.model,
                status = %status,
                "upstream returned error"
            );
            return Err(LlmError::ProviderCallFailed(describe_error(status, &body)));
        }

        let wire_response: GoogleResponse = response
            .json()
            .await
            .map_err(|e| LlmError::ProviderCallFailed(format!("failed to parse response: {e}")))?;

        if let Some(usage) = &wire_response.usage_metadata {
            tracing::debug!(
                model = %request.model,
                prompt_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                "generation usage"
            );
        }

        wire_response.into_text()
    }
}
