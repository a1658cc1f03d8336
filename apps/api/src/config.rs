use anyhow::{Context, Result};
use reqwest::Url;

const DEFAULT_CLASSIFIER_URL: &str = "http://localhost:5000";

/// Gateway configuration, resolved once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the classification service (`/analyze` and `/ping` hang off it).
    pub classifier_url: Url,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw_url = lookup("CLASSIFIER_URL").unwrap_or_else(|| DEFAULT_CLASSIFIER_URL.into());
        let classifier_url = Url::parse(&raw_url)
            .with_context(|| format!("CLASSIFIER_URL '{raw_url}' is not a valid URL"))?;

        Ok(Config {
            classifier_url,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
