use gemini_media_proxy::prompt::builder;
use gemini_media_proxy::{Config, GeminiClient, MediaGenerator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load env (if .env present)
    Config::dotenv_load();
    let cfg = Config::new().expect("Failed to load config");

    let prompt = builder::real_estate_video_prompt(
        "1 Main St, Springfield",
        "$500,000",
        None,
        None,
        None,
        Some("wraparound porch, renovated kitchen"),
        None,
    );

    // Without GOOGLE_GEMINI_API_KEY set this returns the mock placeholder.
    let generator = MediaGenerator::new(
        GeminiClient::new(cfg.gemini_base_url.clone()),
        cfg.gemini_api_key.clone(),
    );
    println!("Generating tour against {}", cfg.gemini_base_url);
    let result = generator.generate_video(&prompt, None).await;
    println!("Result: {}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
