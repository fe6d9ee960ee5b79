//! Travel Studio: Image & Video Generation
//!
//! Image generation and editing return inline payloads directly; video
//! generation submits a long-running job, drives it through the polling
//! loop, then fetches the finished media with the credential appended to
//! the result locator.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::info;

use super::{Gateway, require};
use crate::ai::client::wire::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
    InlineData, Part, VideoGenerationRequest, VideoInstance, VideoParameters, VideoSeedImage,
};
use crate::ai::poll::await_completion;
use crate::ai::retry::with_retry;
use crate::constants;
use crate::types::{
    AspectRatio, GeneratedImage, GeneratedVideo, ImageSize, Result, TravelError,
};

impl Gateway {
    /// Generate travel imagery from a text prompt
    pub async fn generate_image(
        &self,
        prompt: &str,
        size: ImageSize,
        aspect_ratio: AspectRatio,
    ) -> Result<Vec<GeneratedImage>> {
        require("prompt", prompt)?;

        let request = GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
            generation_config: Some(GenerationConfig {
                response_mime_type: None,
                response_schema: None,
                image_config: Some(ImageConfig {
                    aspect_ratio: aspect_ratio.as_str().to_string(),
                    image_size: size.as_str().to_string(),
                }),
            }),
            tools: None,
            tool_config: None,
        };

        info!(size = size.as_str(), aspect_ratio = aspect_ratio.as_str(), "Generating image");

        let model = self.models().image.clone();
        let response = self.call_model(&model, request).await?;
        decode_images(&response)
    }

    /// Edit an existing image according to a text instruction
    pub async fn edit_image(
        &self,
        image: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> Result<Vec<GeneratedImage>> {
        require("prompt", prompt)?;
        if image.is_empty() {
            return Err(TravelError::MissingInput("image".to_string()));
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.to_string(),
                            data: BASE64.encode(image),
                        },
                    },
                    Part::Text {
                        text: prompt.to_string(),
                    },
                ],
                role: None,
            }],
            generation_config: None,
            tools: None,
            tool_config: None,
        };

        info!("Editing image");

        let model = self.models().image_edit.clone();
        let response = self.call_model(&model, request).await?;
        decode_images(&response)
    }

    /// Animate a travel scene into a short video.
    ///
    /// The submission is retried like any other call; the returned job
    /// handle is then polled (each status check itself retried) until the
    /// remote job completes, and the finished media is fetched from its
    /// result locator.
    pub async fn generate_video(
        &self,
        image: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> Result<GeneratedVideo> {
        if image.is_empty() {
            return Err(TravelError::MissingInput("image".to_string()));
        }

        let effective_prompt = if prompt.trim().is_empty() {
            constants::video::DEFAULT_PROMPT
        } else {
            prompt
        };

        let request = VideoGenerationRequest {
            instances: vec![VideoInstance {
                prompt: effective_prompt.to_string(),
                image: Some(VideoSeedImage {
                    bytes_base64_encoded: BASE64.encode(image),
                    mime_type: mime_type.to_string(),
                }),
            }],
            parameters: VideoParameters::default(),
        };

        info!("Submitting video generation job");

        let model = self.models().video.clone();
        let submitted = with_retry(self.retry(), || {
            self.client().submit_video_job(&model, &request)
        })
        .await?;

        let completed = await_completion(submitted, self.poll(), |name| async move {
            self.client().video_operation(&name).await
        })
        .await?;

        let uri = completed
            .result_uri()
            .ok_or(TravelError::JobFailedNoResult)?;

        info!("Video job complete, fetching media");

        let payload = self.client().fetch_media(uri).await?;
        Ok(GeneratedVideo {
            mime_type: payload
                .mime_type
                .unwrap_or_else(|| constants::video::FALLBACK_MIME_TYPE.to_string()),
            bytes: payload.bytes,
        })
    }
}

/// Decode every inline payload of the first candidate into image bytes
fn decode_images(response: &GenerateContentResponse) -> Result<Vec<GeneratedImage>> {
    response
        .inline_data()
        .into_iter()
        .map(|inline| {
            let bytes = BASE64.decode(&inline.data).map_err(|e| {
                TravelError::ResponseShapeInvalid(format!("inline image payload: {}", e))
            })?;
            Ok(GeneratedImage {
                mime_type: inline.mime_type.clone(),
                bytes,
            })
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::test_support::{gateway_at, offline_gateway};
    use serde_json::json;

    #[test]
    fn test_decode_images_from_inline_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"parts": [
                    {"text": "your poster"},
                    {"inlineData": {"mimeType": "image/png", "data": "QUJD"}}
                ]}
            }]
        }))
        .unwrap();

        let images = decode_images(&response).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].mime_type, "image/png");
        assert_eq!(images[0].bytes, b"ABC");
    }

    #[test]
    fn test_decode_images_rejects_bad_base64() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"parts": [
                    {"inlineData": {"mimeType": "image/png", "data": "not base64!!!"}}
                ]}
            }]
        }))
        .unwrap();

        assert!(matches!(
            decode_images(&response),
            Err(TravelError::ResponseShapeInvalid(_))
        ));
    }

    #[tokio::test]
    async fn test_generate_image_requires_prompt() {
        let gateway = offline_gateway();
        let result = gateway
            .generate_image("", ImageSize::OneK, AspectRatio::Landscape)
            .await;
        assert!(matches!(result, Err(TravelError::MissingInput(_))));
    }

    #[tokio::test]
    async fn test_edit_image_requires_image_bytes() {
        let gateway = offline_gateway();
        let result = gateway.edit_image(&[], "image/jpeg", "make it rain").await;
        assert!(matches!(result, Err(TravelError::MissingInput(_))));
    }

    #[tokio::test]
    async fn test_generate_video_requires_seed_image() {
        let gateway = offline_gateway();
        let result = gateway.generate_video(&[], "image/jpeg", "animate").await;
        assert!(matches!(result, Err(TravelError::MissingInput(_))));
    }

    #[tokio::test]
    async fn test_generate_video_end_to_end_against_mock() {
        let mut server = mockito::Server::new_async().await;

        let media_uri = format!("{}/files/clip.mp4", server.url());
        server
            .mock(
                "POST",
                "/models/veo-3.1-fast-generate-preview:predictLongRunning",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "name": "models/veo/operations/op-1",
                    "done": true,
                    "response": {
                        "generateVideoResponse": {
                            "generatedSamples": [{"video": {"uri": media_uri}}]
                        }
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        server
            .mock("GET", "/files/clip.mp4")
            .match_query(mockito::Matcher::UrlEncoded(
                "key".into(),
                "test-key".into(),
            ))
            .with_status(200)
            .with_header("content-type", "video/mp4")
            .with_body([9u8, 9, 9])
            .create_async()
            .await;

        let gateway = gateway_at(&server.url());
        let video = gateway
            .generate_video(b"seed", "image/jpeg", "")
            .await
            .unwrap();

        assert_eq!(video.mime_type, "video/mp4");
        assert_eq!(video.bytes, vec![9, 9, 9]);
    }

    #[tokio::test]
    async fn test_generate_video_without_result_locator_fails() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock(
                "POST",
                "/models/veo-3.1-fast-generate-preview:predictLongRunning",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"name": "models/veo/operations/op-2", "done": true}).to_string())
            .create_async()
            .await;

        let gateway = gateway_at(&server.url());
        let result = gateway.generate_video(b"seed", "image/jpeg", "animate").await;

        assert!(matches!(result, Err(TravelError::JobFailedNoResult)));
    }
}
