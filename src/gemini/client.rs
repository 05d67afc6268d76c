//! Thin HTTP client for the Gemini REST endpoints.
//!
//! - `submit_video_job` posts a prompt to the Veo `:predictLongRunning` action.
//! - `poll_video_job` refreshes an operation by name under `/v1beta/{name}`.
//! - `generate_image` posts a single synchronous `:generateContent` call.
//!
//! The client checks statuses and captures error bodies; interpreting a
//! failure (billing, quota, ...) is the generator's job.
use reqwest::Client;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::gemini::types::{GenerateContentResponse, VideoOperation};

pub const VIDEO_MODEL: &str = "veo-2.0-generate-001";
pub const IMAGE_MODEL: &str = "gemini-2.0-flash-preview-image-generation";

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(base_url: String) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        GeminiClient { client: Client::new(), base_url: base }
    }

    /// Start a long-running video generation job.
    ///
    /// Submits the prompt with the fixed generation parameters and returns
    /// the initial operation envelope (handle plus `done` flag).
    pub async fn submit_video_job(&self, prompt: &str, api_key: &str) -> AppResult<VideoOperation> {
        let url = format!("{}/v1beta/models/{}:predictLongRunning", self.base_url, VIDEO_MODEL);
        tracing::info!("Submitting video generation job to {}", url);

        let body = json!({
            "instances": [{ "prompt": prompt }],
            "parameters": {
                "aspectRatio": "16:9",
                "personGeneration": "dont_allow"
            }
        });

        let response = self.client.post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if response.status().is_success() {
            let op: VideoOperation = response.json().await.map_err(AppError::HttpClient)?;
            tracing::info!(operation = %op.name, done = op.done, "Video job accepted");
            Ok(op)
        } else {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Unable to read error body".to_string());
            let error_message = format!("Failed to submit video job. Status: {}, Body: {}", status, error_body);
            tracing::error!("{}", error_message);
            Err(AppError::Gemini(error_message))
        }
    }

    /// Refresh a long-running operation by its upstream-assigned name.
    pub async fn poll_video_job(&self, operation_name: &str, api_key: &str) -> AppResult<VideoOperation> {
        let url = format!("{}/v1beta/{}", self.base_url, operation_name.trim_start_matches('/'));
        let response = self.client.get(&url)
            .header("x-goog-api-key", api_key)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if response.status().is_success() {
            response.json().await.map_err(AppError::HttpClient)
        } else {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Unable to read error body".to_string());
            Err(AppError::Gemini(format!(
                "Failed to poll operation '{}'. Status: {}, Body: {}",
                operation_name, status, error_body
            )))
        }
    }

    /// Single synchronous image generation call.
    pub async fn generate_image(&self, prompt: &str, api_key: &str) -> AppResult<GenerateContentResponse> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, IMAGE_MODEL);
        tracing::info!("Requesting image generation from {}", url);

        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "responseModalities": ["IMAGE"]
            }
        });

        let response = self.client.post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if response.status().is_success() {
            response.json().await.map_err(AppError::HttpClient)
        } else {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Unable to read error body".to_string());
            let error_message = format!("Failed to generate image. Status: {}, Body: {}", status, error_body);
            tracing::error!("{}", error_message);
            Err(AppError::Gemini(error_message))
        }
    }
}
