//! Request/response payloads and the HTTP-facing error type.
//!
//! Field names follow the client's JSON (camelCase). Required fields are
//! modeled as `Option` so presence can be validated with a structured 400
//! body instead of the extractor's default rejection.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::gemini::generator::VideoResult;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingRequest {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub features: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateRequest {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<String>,
    #[serde(default)]
    pub bathrooms: Option<String>,
    #[serde(default)]
    pub square_footage: Option<String>,
    #[serde(default)]
    pub features: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingResponse {
    #[serde(flatten)]
    pub video: VideoResult,
    pub image_url: String,
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateResponse {
    #[serde(flatten)]
    pub video: VideoResult,
    pub prompt: String,
}

/// Failures surfaced to the HTTP caller.
///
/// Upstream provisioning problems never reach this type; the generator
/// absorbs them into mock results. What remains is caller input validation
/// and genuinely unexpected handler-level failures.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{context}: {details}")]
    Internal { context: String, details: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::Internal { context, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": context, "details": details })),
            )
                .into_response(),
        }
    }
}
