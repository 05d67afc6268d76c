//! Env-driven configuration for the service and library.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binary. Defaults are provided for convenience during development.
//! The API key is optional: when neither it nor a per-request override is
//! present the service answers with mock media URLs.
use std::env;
use dotenv;

pub struct Config {
    pub api_host: String,
    pub port: String,
    pub gemini_base_url: String,
    /// Process-wide default credential. `None` when unset or blank.
    pub gemini_api_key: Option<String>,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> Result<Self, env::VarError> {
        Ok(Config {
            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "4000".to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            gemini_api_key: env::var("GOOGLE_GEMINI_API_KEY")
                .ok()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
        })
    }

    pub fn print_env_vars() {
        println!("API_HOST: {}", env::var("API_HOST").unwrap_or_else(|_| "<unset>".to_string()));
        println!("PORT: {}", env::var("PORT").unwrap_or_else(|_| "<unset>".to_string()));
        println!("GEMINI_BASE_URL: {}", env::var("GEMINI_BASE_URL").unwrap_or_else(|_| "<unset>".to_string()));
        // The key itself is a capability token and must never be echoed.
        println!(
            "GOOGLE_GEMINI_API_KEY: {}",
            if env::var("GOOGLE_GEMINI_API_KEY").map(|k| !k.trim().is_empty()).unwrap_or(false) {
                "<set>"
            } else {
                "<unset>"
            }
        );
    }
}
