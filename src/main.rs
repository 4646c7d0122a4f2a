use anyhow::Result;
use dotenv::dotenv;
use std::sync::Arc;

use nutritionist_ai::config::AppConfig;
use nutritionist_ai::handlers::AdviceHandler;
use nutritionist_ai::server::create_router;
use nutritionist_ai::services::{GeminiClient, GenerativeModel};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Load environment variables
    dotenv().ok();

    log::info!("🚀 Starting Nutritionist AI...");

    let config = AppConfig::from_env()?;

    let model = Arc::new(GeminiClient::new(
        config.google_api_key.clone(),
        config.model_name.clone(),
    )) as Arc<dyn GenerativeModel>;
    log::info!("✅ Gemini client initialized with model: {}", config.model_name);

    let advice_handler = Arc::new(AdviceHandler::new(model));
    log::info!("✅ Advice handler initialized");

    let app = create_router(advice_handler);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("🌐 Server listening on {}", addr);

    println!("\n🥗 Nutritionist AI is running!");
    println!("🌐 Open http://localhost:{}/ in your browser", config.port);
    println!("\n📋 How it works:");
    println!("   1. Upload a food photo (.jpg, .jpeg or .png)");
    println!("   2. Pick a scenario or write your own query");
    println!("   3. Press 'Generate Nutrition Advice'");
    println!("\n🛑 Press Ctrl+C to stop\n");

    axum::serve(listener, app).await?;

    Ok(())
}
