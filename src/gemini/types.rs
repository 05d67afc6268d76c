//! Wire types for the Gemini REST API.
//!
//! Deserialize-only shapes for the two surfaces we touch: the long-running
//! operation envelope returned by `:predictLongRunning` (and refreshed by
//! polling `/v1beta/{name}`), and the candidate list returned by
//! `:generateContent` for image generation.
use serde::Deserialize;

/// A long-running video generation operation.
///
/// `name` is the opaque handle assigned by the upstream; polling the same
/// name refreshes `done`, `response`, and `error`.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoOperation {
    pub name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub response: Option<OperationResponse>,
    #[serde(default)]
    pub error: Option<OperationError>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResponse {
    #[serde(default)]
    pub generate_video_response: Option<GenerateVideoResponse>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoResponse {
    #[serde(default)]
    pub generated_samples: Vec<GeneratedSample>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedSample {
    #[serde(default)]
    pub video: Option<VideoRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoRef {
    #[serde(default)]
    pub uri: Option<String>,
}

/// Operation-level failure reported by the upstream once `done`.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl VideoOperation {
    /// URI of the first generated video, if the operation produced one.
    pub fn result_uri(&self) -> Option<&str> {
        self.response
            .as_ref()?
            .generate_video_response
            .as_ref()?
            .generated_samples
            .first()?
            .video
            .as_ref()?
            .uri
            .as_deref()
            .filter(|u| !u.is_empty())
    }
}

/// Response from `:generateContent` when asked for an image modality.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default)]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default)]
    pub mime_type: Option<String>,
    pub data: String,
}

impl GenerateContentResponse {
    /// Base64 payload of the first inline image across all candidates.
    pub fn first_inline_image(&self) -> Option<&InlineData> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|c| c.parts.iter())
            .find_map(|p| p.inline_data.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_parses_pending_shape() {
        let op: VideoOperation = serde_json::from_str(
            r#"{"name": "models/veo-2.0-generate-001/operations/abc123"}"#,
        )
        .unwrap();
        assert!(!op.done);
        assert!(op.result_uri().is_none());
        assert!(op.error.is_none());
    }

    #[test]
    fn operation_parses_completed_shape() {
        let op: VideoOperation = serde_json::from_str(
            r#"{
                "name": "models/veo-2.0-generate-001/operations/abc123",
                "done": true,
                "response": {
                    "generateVideoResponse": {
                        "generatedSamples": [
                            {"video": {"uri": "https://example.com/v.mp4?alt=media"}}
                        ]
                    }
                }
            }"#,
        )
        .unwrap();
        assert!(op.done);
        assert_eq!(op.result_uri(), Some("https://example.com/v.mp4?alt=media"));
    }

    #[test]
    fn done_without_samples_has_no_uri() {
        let op: VideoOperation = serde_json::from_str(
            r#"{"name": "op", "done": true, "response": {"generateVideoResponse": {"generatedSamples": []}}}"#,
        )
        .unwrap();
        assert!(op.done);
        assert!(op.result_uri().is_none());
    }

    #[test]
    fn first_inline_image_skips_text_parts() {
        let resp: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {
                        "parts": [
                            {"text": "here is your image"},
                            {"inlineData": {"mimeType": "image/png", "data": "aGVsbG8="}}
                        ]
                    }
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(resp.first_inline_image().unwrap().data, "aGVsbG8=");
    }
}
