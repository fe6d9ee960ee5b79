//! AI Service Gateway
//!
//! The nine travel capabilities, each following the same shape: validate
//! required inputs (failing before any external call), build a prompt and a
//! declared output shape or media payload, invoke the API through the retry
//! wrapper, then shape the response into its typed result, degrading to a
//! defined best-effort fallback where one exists.
//!
//! ## Capabilities
//!
//! - `planner`: structured trip itineraries
//! - `culture`: destination history, festivals, cuisine, local stories
//! - `packing`: transport-aware checklists with the emergency-toolkit repair
//! - `places`: grounded search, place details, route guidance
//! - `studio`: image generation/editing and long-running video jobs

mod culture;
mod packing;
mod places;
mod planner;
mod schemas;
mod studio;

use serde_json::Value;

use crate::ai::client::GeminiClient;
use crate::ai::client::wire::{GenerateContentRequest, GenerateContentResponse};
use crate::ai::poll::PollConfig;
use crate::ai::retry::{RetryPolicy, with_retry};
use crate::ai::validation::parse_lenient;
use crate::config::{Config, ModelConfig};
use crate::types::{Result, TravelError};

/// Typed front door to the generative API.
///
/// Construction takes the full configuration, credential included,
/// explicitly; nothing here reads ambient process state.
#[derive(Debug)]
pub struct Gateway {
    client: GeminiClient,
    retry: RetryPolicy,
    poll: PollConfig,
    models: ModelConfig,
}

impl Gateway {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let client = GeminiClient::new(&config)?;

        Ok(Self {
            retry: RetryPolicy::from(&config.retry),
            poll: PollConfig::from(&config),
            models: config.models.clone(),
            client,
        })
    }

    /// Load configuration through the standard resolution chain and build
    pub fn from_env() -> Result<Self> {
        Self::new(crate::config::ConfigLoader::load()?)
    }

    // =========================================================================
    // Shared Call Paths
    // =========================================================================

    /// One retried call against the text model
    pub(crate) async fn call_text_model(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.call_model(&self.models.text, request).await
    }

    /// One retried call against an arbitrary model
    pub(crate) async fn call_model(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        with_retry(&self.retry, || {
            self.client.generate_content(model, &request)
        })
        .await
    }

    /// Retried call with a declared JSON schema, parsed leniently into a value
    pub(crate) async fn generate_structured(
        &self,
        prompt: String,
        schema: Value,
    ) -> Result<Value> {
        let request = GenerateContentRequest::with_json_schema(prompt, schema);
        let response = self.call_text_model(request).await?;

        let text = response.text().ok_or_else(|| {
            TravelError::ResponseShapeInvalid("response carried no text".to_string())
        })?;

        parse_lenient(&text)
    }

    pub(crate) fn client(&self) -> &GeminiClient {
        &self.client
    }

    pub(crate) fn retry(&self) -> &RetryPolicy {
        &self.retry
    }

    pub(crate) fn poll(&self) -> &PollConfig {
        &self.poll
    }

    pub(crate) fn models(&self) -> &ModelConfig {
        &self.models
    }
}

/// Reject an absent hard-required text input before any external call
pub(crate) fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TravelError::MissingInput(field.to_string()));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Gateway pointed at an arbitrary base URL (mock server in tests)
    pub fn gateway_at(base: &str) -> Gateway {
        let mut config = Config::with_api_key("test-key");
        config.api.base = base.to_string();
        Gateway::new(config).unwrap()
    }

    /// Gateway that must never be reached over the network
    pub fn offline_gateway() -> Gateway {
        gateway_at("http://127.0.0.1:9/unreachable")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_requires_credential() {
        assert!(matches!(
            Gateway::new(Config::default()),
            Err(TravelError::Config(_))
        ));
    }

    #[test]
    fn test_gateway_rejects_invalid_config() {
        let mut config = Config::with_api_key("k");
        config.video.poll_interval_ms = 0;
        assert!(Gateway::new(config).is_err());
    }

    #[test]
    fn test_require_rejects_blank_input() {
        assert!(require("destination", "  ").is_err());
        assert!(require("destination", "Kyoto").is_ok());
    }
}
