//! Axum request handlers for the HTTP API.
//!
//! Each route validates required fields first and answers 400 before any
//! prompt is built or any upstream call is made. The optional `X-API-Key`
//! header overrides the process-wide credential for that request only.
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::routes::AppState;
use crate::api::types::{
    ApiError, MarketingRequest, MarketingResponse, RealEstateRequest, RealEstateResponse,
};
use crate::prompt::builder;

pub async fn root() -> &'static str {
    "Gemini Media Proxy"
}

pub async fn ping() -> &'static str {
    "pong"
}

fn present(field: Option<&String>) -> Option<&str> {
    field.map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn override_key(headers: &HeaderMap) -> Option<&str> {
    headers.get("x-api-key").and_then(|v| v.to_str().ok())
}

pub async fn generate_marketing_assets(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<MarketingRequest>,
) -> Result<Json<MarketingResponse>, ApiError> {
    let (Some(product_name), Some(features)) = (
        present(payload.product_name.as_ref()),
        present(payload.features.as_ref()),
    ) else {
        return Err(ApiError::Validation(
            "Missing required fields: productName and features are required".to_string(),
        ));
    };

    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, product = product_name, "Generating marketing assets");
    let api_key = override_key(&headers);

    let image_prompt = builder::marketing_image_prompt(product_name);
    let image = state.generator.generate_image(&image_prompt, api_key).await;

    let video_prompt = builder::marketing_video_prompt(
        product_name,
        features,
        payload.tone.as_deref(),
        payload.audience.as_deref(),
        payload.style.as_deref(),
    );
    let video = state.generator.generate_video(&video_prompt, api_key).await;

    tracing::info!(%request_id, is_mock = video.is_mock, "Marketing assets ready");
    Ok(Json(MarketingResponse {
        video,
        image_url: image.image_url,
        prompt: video_prompt,
    }))
}

pub async fn generate_real_estate_tour(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<RealEstateRequest>,
) -> Result<Json<RealEstateResponse>, ApiError> {
    let (Some(address), Some(price)) = (
        present(payload.address.as_ref()),
        present(payload.price.as_ref()),
    ) else {
        return Err(ApiError::Validation(
            "Missing required fields: address and price are required".to_string(),
        ));
    };

    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, address, "Generating real estate tour");
    let api_key = override_key(&headers);

    let prompt = builder::real_estate_video_prompt(
        address,
        price,
        payload.bedrooms.as_deref(),
        payload.bathrooms.as_deref(),
        payload.square_footage.as_deref(),
        payload.features.as_deref(),
        payload.style.as_deref(),
    );
    let video = state.generator.generate_video(&prompt, api_key).await;

    tracing::info!(%request_id, is_mock = video.is_mock, "Real estate tour ready");
    Ok(Json(RealEstateResponse { video, prompt }))
}
