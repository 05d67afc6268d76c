use clap::{Parser, Subcommand};
use gemini_media_proxy::prompt::builder;
use gemini_media_proxy::{Config, GeminiClient, MediaGenerator};
use serde_json::json;

#[derive(Parser, Debug)]
#[command(name = "genctl", about = "CLI for Gemini Media Proxy", version)]
struct Cli {
    /// Override GOOGLE_GEMINI_API_KEY for this invocation
    #[arg(global = true, long)]
    api_key: Option<String>,

    /// Override GEMINI_BASE_URL
    #[arg(global = true, long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a product marketing spot (still image plus video)
    Marketing {
        /// Product name printed on the label
        #[arg(long)]
        product_name: String,
        /// Features to highlight in the spot
        #[arg(long)]
        features: String,
        /// Tone of the spot (defaults to "professional")
        #[arg(long)]
        tone: Option<String>,
        /// Target audience (defaults to "general")
        #[arg(long)]
        audience: Option<String>,
        /// Visual style (defaults to "modern")
        #[arg(long)]
        style: Option<String>,
        /// Skip the still image and only generate the video
        #[arg(long)]
        video_only: bool,
    },
    /// Generate a property tour video for a listing
    RealEstate {
        /// Street address of the listing
        #[arg(long)]
        address: String,
        /// Asking price, formatted as it should appear
        #[arg(long)]
        price: String,
        #[arg(long)]
        bedrooms: Option<String>,
        #[arg(long)]
        bathrooms: Option<String>,
        /// Interior size in square feet
        #[arg(long, alias = "sqft")]
        square_footage: Option<String>,
        /// Listing features to highlight
        #[arg(long)]
        features: Option<String>,
        /// Tour style (defaults to "modern")
        #[arg(long)]
        style: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Load env (if .env present)
    Config::dotenv_load();
    let cfg = Config::new().expect("Failed to load config");
    let cli = Cli::parse();

    let base_url = cli.base_url.clone().unwrap_or_else(|| cfg.gemini_base_url.clone());
    let generator = MediaGenerator::new(GeminiClient::new(base_url), cfg.gemini_api_key.clone());
    let api_key = cli.api_key.as_deref();

    match cli.command {
        Commands::Marketing {
            product_name,
            features,
            tone,
            audience,
            style,
            video_only,
        } => {
            let image_url = if video_only {
                None
            } else {
                let image_prompt = builder::marketing_image_prompt(&product_name);
                let image = generator.generate_image(&image_prompt, api_key).await;
                Some(image.image_url)
            };

            let prompt = builder::marketing_video_prompt(
                &product_name,
                &features,
                tone.as_deref(),
                audience.as_deref(),
                style.as_deref(),
            );
            eprintln!("Prompt: {}", prompt);
            let video = generator.generate_video(&prompt, api_key).await;

            let mut out = serde_json::to_value(&video).expect("serialize result");
            if let (Some(obj), Some(image_url)) = (out.as_object_mut(), image_url) {
                obj.insert("imageUrl".to_string(), json!(image_url));
            }
            println!("{}", serde_json::to_string_pretty(&out).expect("print result"));
        }
        Commands::RealEstate {
            address,
            price,
            bedrooms,
            bathrooms,
            square_footage,
            features,
            style,
        } => {
            let prompt = builder::real_estate_video_prompt(
                &address,
                &price,
                bedrooms.as_deref(),
                bathrooms.as_deref(),
                square_footage.as_deref(),
                features.as_deref(),
                style.as_deref(),
            );
            eprintln!("Prompt: {}", prompt);
            let video = generator.generate_video(&prompt, api_key).await;
            println!(
                "{}",
                serde_json::to_string_pretty(&video).expect("print result")
            );
        }
    }
}
