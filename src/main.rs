use std::net::SocketAddr;
use std::sync::Arc;

use gemini_media_proxy::{api, config, gemini};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    config::Config::dotenv_load();
    let config = config::Config::new().expect("Failed to load configuration");
    config::Config::print_env_vars();

    // Create Gemini client and the generation adapter
    let gemini_client = gemini::client::GeminiClient::new(config.gemini_base_url.clone());
    if config.gemini_api_key.is_none() {
        tracing::warn!(
            "GOOGLE_GEMINI_API_KEY not set; requests without an X-API-Key header get mock media URLs"
        );
    }
    let generator =
        gemini::generator::MediaGenerator::new(gemini_client, config.gemini_api_key.clone());

    let state = Arc::new(api::routes::AppState { generator });

    // Build our application with a route
    let app = api::routes::router(state);

    // Run our application with safe parsing
    let host_str = config.api_host.clone();
    let port_str = config.port.clone();
    let ip: std::net::IpAddr = host_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_HOST '{}', falling back to 0.0.0.0", host_str);
        std::net::IpAddr::from([0, 0, 0, 0])
    });
    let port: u16 = port_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid PORT '{}', falling back to 4000", port_str);
        4000
    });
    let socket_address = SocketAddr::new(ip, port);
    tracing::info!("listening on {}", socket_address);
    axum::Server::bind(&socket_address)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
