//! Gemini REST Client
//!
//! Thin HTTP layer over the generative API: structured content generation,
//! long-running video job submission and status lookup, and raw media
//! retrieval. The credential is held as a `SecretString` and exposed only
//! while a request is being built; HTTP 429 maps to the rate-limit error so
//! the retry wrapper can classify it, every other failure keeps its status
//! and body.

pub mod wire;

use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::types::{Result, TravelError};
use wire::{GenerateContentRequest, GenerateContentResponse, VideoGenerationRequest, VideoOperation};

/// Raw bytes fetched from a media locator
#[derive(Debug, Clone)]
pub struct MediaPayload {
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

pub struct GeminiClient {
    /// API credential - never exposed in logs or debug output
    api_key: SecretString,
    api_base: String,
    client: Client,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.api.key.clone().ok_or_else(|| {
            TravelError::Config(
                "API key not found. Set YATRA_API_KEY env var or api.key in yatrasaarthi.toml"
                    .to_string(),
            )
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .connect_timeout(Duration::from_secs(config.api.connect_timeout_secs))
            .build()
            .map_err(|e| TravelError::external(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: SecretString::from(api_key),
            api_base: config.api.base.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// One `generateContent` call against the given model
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!("{}/models/{}:generateContent", self.api_base, model);
        debug!(model, "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| TravelError::external(format!("generateContent request failed: {}", e)))?;

        Self::read_json(response).await
    }

    /// Submit a long-running video generation job; returns its handle
    pub async fn submit_video_job(
        &self,
        model: &str,
        request: &VideoGenerationRequest,
    ) -> Result<VideoOperation> {
        let url = format!("{}/models/{}:predictLongRunning", self.api_base, model);
        debug!(model, "Submitting video generation job");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| TravelError::external(format!("video submission failed: {}", e)))?;

        Self::read_json(response).await
    }

    /// Refresh the handle of a running video job
    pub async fn video_operation(&self, name: &str) -> Result<VideoOperation> {
        let url = format!("{}/{}", self.api_base, name.trim_start_matches('/'));

        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| TravelError::external(format!("status check failed: {}", e)))?;

        Self::read_json(response).await
    }

    /// Fetch binary media from a result locator, appending the credential as
    /// a query parameter as the file endpoint requires.
    pub async fn fetch_media(&self, uri: &str) -> Result<MediaPayload> {
        let mut url = Url::parse(uri)
            .map_err(|e| TravelError::ResponseShapeInvalid(format!("bad media URI: {}", e)))?;
        url.query_pairs_mut()
            .append_pair("key", self.api_key.expose_secret());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TravelError::external(format!("media fetch failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TravelError::from_http_status(status.as_u16(), body));
        }

        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TravelError::external(format!("media read failed: {}", e)))?;

        Ok(MediaPayload {
            mime_type,
            bytes: bytes.to_vec(),
        })
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TravelError::from_http_status(status.as_u16(), body));
        }

        response.json::<T>().await.map_err(|e| {
            TravelError::ResponseShapeInvalid(format!("failed to decode response body: {}", e))
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_client(base: &str) -> GeminiClient {
        let mut config = Config::with_api_key("test-key");
        config.api.base = base.to_string();
        GeminiClient::new(&config).unwrap()
    }

    #[test]
    fn test_missing_key_is_a_config_error() {
        let config = Config::default();
        assert!(matches!(
            GeminiClient::new(&config),
            Err(TravelError::Config(_))
        ));
    }

    #[test]
    fn test_debug_never_prints_credential() {
        let client = test_client("https://example.invalid/v1beta");
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("test-key"));
    }

    #[tokio::test]
    async fn test_generate_content_round_trip() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .match_header("x-goog-api-key", "test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "candidates": [{"content": {"parts": [{"text": "namaste"}]}}]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = test_client(&server.url());
        let request = GenerateContentRequest::from_prompt("greet me");
        let response = client
            .generate_content("gemini-2.5-flash", &request)
            .await
            .unwrap();

        assert_eq!(response.text().unwrap(), "namaste");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_http_429_maps_to_rate_limited() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .with_status(429)
            .with_body("resource exhausted")
            .create_async()
            .await;

        let client = test_client(&server.url());
        let request = GenerateContentRequest::from_prompt("greet me");
        let err = client
            .generate_content("gemini-2.5-flash", &request)
            .await
            .unwrap_err();

        assert!(err.is_rate_limit());
        assert!(matches!(err, TravelError::RateLimited { .. }));
    }

    #[tokio::test]
    async fn test_server_error_keeps_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .with_status(503)
            .with_body("overloaded")
            .create_async()
            .await;

        let client = test_client(&server.url());
        let request = GenerateContentRequest::from_prompt("greet me");
        let err = client
            .generate_content("gemini-2.5-flash", &request)
            .await
            .unwrap_err();

        match err {
            TravelError::ExternalCallFailed {
                status: Some(503),
                message,
            } => assert_eq!(message, "overloaded"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_media_appends_credential() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/files/video.mp4")
            .match_query(mockito::Matcher::UrlEncoded(
                "key".into(),
                "test-key".into(),
            ))
            .with_status(200)
            .with_header("content-type", "video/mp4")
            .with_body([0u8, 1, 2, 3])
            .create_async()
            .await;

        let client = test_client(&server.url());
        let payload = client
            .fetch_media(&format!("{}/files/video.mp4", server.url()))
            .await
            .unwrap();

        assert_eq!(payload.mime_type.as_deref(), Some("video/mp4"));
        assert_eq!(payload.bytes, vec![0, 1, 2, 3]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_video_operation_lookup() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/models/veo/operations/abc")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"name": "models/veo/operations/abc", "done": false}).to_string())
            .create_async()
            .await;

        let client = test_client(&server.url());
        let operation = client
            .video_operation("models/veo/operations/abc")
            .await
            .unwrap();

        assert_eq!(operation.name, "models/veo/operations/abc");
        assert!(!operation.done);
    }
}
