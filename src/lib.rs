//! Gemini Media Proxy library
//!
//! Modules:
//! - `api`: Axum HTTP handlers, payload types, and router setup used by the binary.
//! - `gemini`: Thin client for Gemini REST endpoints plus the generation
//!   adapter that drives long-running video jobs and the mock fallback policy.
//! - `prompt`: Prompt template rendering for the marketing and real-estate flows.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `GeminiClient`, and
//! `MediaGenerator`.
pub mod api;
pub mod gemini;
pub mod prompt;
pub mod config;
pub mod error;

pub use config::Config;
pub use gemini::client::GeminiClient;
pub use gemini::generator::MediaGenerator;
