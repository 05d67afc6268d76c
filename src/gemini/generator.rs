//! Generation adapter over the Gemini client.
//!
//! Owns the full lifecycle of a media request: credential resolution, job
//! submission, the bounded poll loop for long-running video operations, and
//! the degrade-to-mock policy. Upstream failures never escape this module as
//! errors; they are classified into [`UpstreamFailure`] and turned into mock
//! results so callers always receive a usable response shape. Only local
//! input validation (handled at the HTTP layer) can fail a request outright.
use std::fmt;
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

use crate::error::{AppError, AppResult};
use crate::gemini::client::GeminiClient;

/// Placeholder video returned when real generation is unavailable.
pub const MOCK_VIDEO_URL: &str =
    "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4";
/// Placeholder image returned when real generation is unavailable.
pub const MOCK_IMAGE_URL: &str = "https://picsum.photos/seed/suplimax/512";

const POLL_INTERVAL: Duration = Duration::from_secs(5);
const POLL_TIMEOUT: Duration = Duration::from_secs(600);

/// Longest unclassified upstream message carried into a mock reason.
const MAX_REASON_LEN: usize = 100;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
    pub video_url: String,
    pub message: String,
    pub is_mock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
    pub image_url: String,
    pub message: String,
    pub is_mock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock_reason: Option<String>,
}

impl VideoResult {
    fn mock_no_credential() -> Self {
        VideoResult {
            video_url: MOCK_VIDEO_URL.to_string(),
            message: "Mock video generated successfully (no API key configured)".to_string(),
            is_mock: true,
            mock_reason: Some("no API key configured".to_string()),
        }
    }

    fn mock_fallback(failure: &UpstreamFailure) -> Self {
        VideoResult {
            video_url: MOCK_VIDEO_URL.to_string(),
            message: format!("Mock video generated ({})", failure),
            is_mock: true,
            mock_reason: Some(failure.to_string()),
        }
    }
}

impl ImageResult {
    fn mock_no_credential() -> Self {
        ImageResult {
            image_url: MOCK_IMAGE_URL.to_string(),
            message: "Mock image generated successfully (no API key configured)".to_string(),
            is_mock: true,
            mock_reason: Some("no API key configured".to_string()),
        }
    }

    fn mock_fallback(failure: &UpstreamFailure) -> Self {
        ImageResult {
            image_url: MOCK_IMAGE_URL.to_string(),
            message: format!("Mock image generated ({})", failure),
            is_mock: true,
            mock_reason: Some(failure.to_string()),
        }
    }
}

/// Closed set of upstream failure categories.
///
/// Classification is by message signature, matching what the upstream
/// actually emits for each condition. Anything unrecognized keeps a bounded
/// prefix of the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamFailure {
    BillingDisabled,
    QuotaExceeded,
    Network,
    TimedOut,
    EmptyResult,
    Unrecognized(String),
}

impl UpstreamFailure {
    pub fn classify(err: &AppError) -> Self {
        match err {
            AppError::HttpClient(_) => UpstreamFailure::Network,
            AppError::PollTimeout(_) => UpstreamFailure::TimedOut,
            AppError::EmptyResult(_) => UpstreamFailure::EmptyResult,
            AppError::Gemini(msg) => {
                let lower = msg.to_lowercase();
                if lower.contains("billing") || msg.contains("FAILED_PRECONDITION") {
                    UpstreamFailure::BillingDisabled
                } else if lower.contains("quota") || msg.contains("RESOURCE_EXHAUSTED") {
                    UpstreamFailure::QuotaExceeded
                } else {
                    UpstreamFailure::Unrecognized(truncate(msg, MAX_REASON_LEN))
                }
            }
        }
    }
}

impl fmt::Display for UpstreamFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamFailure::BillingDisabled => write!(f, "billing not enabled on the upstream account"),
            UpstreamFailure::QuotaExceeded => write!(f, "upstream quota exhausted"),
            UpstreamFailure::Network => write!(f, "network error reaching the upstream service"),
            UpstreamFailure::TimedOut => write!(f, "generation timed out before the job completed"),
            UpstreamFailure::EmptyResult => write!(f, "upstream completed without returning a result"),
            UpstreamFailure::Unrecognized(msg) => write!(f, "unrecognized upstream error: {}", msg),
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

/// Append the credential the upstream requires for authenticated playback.
fn append_key(uri: &str, api_key: &str) -> String {
    let joiner = if uri.contains('?') { '&' } else { '?' };
    format!("{uri}{joiner}key={api_key}")
}

/// Drives video and image generation against the Gemini API.
///
/// Holds only a read-only default credential; per-request overrides are
/// passed into each call, so concurrent requests share no mutable state.
#[derive(Clone)]
pub struct MediaGenerator {
    client: GeminiClient,
    default_key: Option<String>,
    poll_interval: Duration,
    poll_timeout: Duration,
}

impl MediaGenerator {
    pub fn new(client: GeminiClient, default_key: Option<String>) -> Self {
        Self::with_poll_timing(client, default_key, POLL_INTERVAL, POLL_TIMEOUT)
    }

    /// Same generator with explicit poll timing. The service always runs the
    /// defaults; tests drive the identical loop at millisecond scale.
    pub fn with_poll_timing(
        client: GeminiClient,
        default_key: Option<String>,
        poll_interval: Duration,
        poll_timeout: Duration,
    ) -> Self {
        MediaGenerator {
            client,
            default_key: default_key
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            poll_interval,
            poll_timeout,
        }
    }

    /// Per-request override wins over the process-wide default; blank values
    /// count as absent.
    fn resolve_credential(&self, override_key: Option<&str>) -> Option<String> {
        override_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from)
            .or_else(|| self.default_key.clone())
    }

    /// Submit a video job and wait for it to complete.
    ///
    /// Without a resolvable credential this returns the mock placeholder
    /// immediately and makes no network call. Upstream failures of any kind
    /// degrade to the mock fallback with a classified reason.
    pub async fn generate_video(&self, prompt: &str, override_key: Option<&str>) -> VideoResult {
        let Some(api_key) = self.resolve_credential(override_key) else {
            tracing::info!("No API key resolved; returning mock video");
            return VideoResult::mock_no_credential();
        };

        match self.run_video_job(prompt, &api_key).await {
            Ok(uri) => VideoResult {
                video_url: append_key(&uri, &api_key),
                message: "Video generated successfully".to_string(),
                is_mock: false,
                mock_reason: None,
            },
            Err(err) => {
                let failure = UpstreamFailure::classify(&err);
                tracing::warn!(%failure, "Video generation failed; returning mock video");
                VideoResult::mock_fallback(&failure)
            }
        }
    }

    async fn run_video_job(&self, prompt: &str, api_key: &str) -> AppResult<String> {
        let mut operation = self.client.submit_video_job(prompt, api_key).await?;

        let deadline = Instant::now() + self.poll_timeout;
        while !operation.done {
            if Instant::now() >= deadline {
                return Err(AppError::PollTimeout(self.poll_timeout));
            }
            tokio::time::sleep(self.poll_interval).await;
            operation = self.client.poll_video_job(&operation.name, api_key).await?;
        }

        if let Some(op_err) = operation.error {
            return Err(AppError::Gemini(format!(
                "Operation failed with code {}: {}",
                op_err.code, op_err.message
            )));
        }
        match operation.result_uri() {
            Some(uri) => Ok(uri.to_string()),
            None => Err(AppError::EmptyResult(
                "operation completed without a video URI".to_string(),
            )),
        }
    }

    /// Single synchronous image generation call with the same credential and
    /// fallback policy as video generation.
    pub async fn generate_image(&self, prompt: &str, override_key: Option<&str>) -> ImageResult {
        let Some(api_key) = self.resolve_credential(override_key) else {
            tracing::info!("No API key resolved; returning mock image");
            return ImageResult::mock_no_credential();
        };

        match self.run_image_call(prompt, &api_key).await {
            Ok(data_url) => ImageResult {
                image_url: data_url,
                message: "Image generated successfully".to_string(),
                is_mock: false,
                mock_reason: None,
            },
            Err(err) => {
                let failure = UpstreamFailure::classify(&err);
                tracing::warn!(%failure, "Image generation failed; returning mock image");
                ImageResult::mock_fallback(&failure)
            }
        }
    }

    async fn run_image_call(&self, prompt: &str, api_key: &str) -> AppResult<String> {
        let response = self.client.generate_image(prompt, api_key).await?;
        let inline = response.first_inline_image().ok_or_else(|| {
            AppError::EmptyResult("no inline image in any candidate".to_string())
        })?;
        let mime = inline.mime_type.as_deref().unwrap_or("image/png");
        Ok(format!("data:{};base64,{}", mime, inline.data))
    }
}
