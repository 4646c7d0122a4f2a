use anyhow::{Context, Result};
use std::env;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_PORT: u16 = 8080;

/// Process configuration, read once at startup and reused for every request.
#[derive(Clone)]
pub struct AppConfig {
    pub google_api_key: String,
    pub model_name: String,
    pub port: u16,
}

impl AppConfig {
    /// Fails fast when the API key is missing; everything else has defaults.
    pub fn from_env() -> Result<Self> {
        let google_api_key = env::var("GOOGLE_API_KEY")
            .context("GOOGLE_API_KEY must be set in the environment or .env file")?;
        if google_api_key.is_empty() {
            anyhow::bail!("GOOGLE_API_KEY is set but empty");
        }

        let model_name =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let port = match env::var("PORT") {
            Ok(value) => value.parse().context("PORT must be a port number")?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            google_api_key,
            model_name,
            port,
        })
    }
}
