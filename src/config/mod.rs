use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct ChatbotConfig {
    pub server: ServerConfig,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
}

fn default_port() -> u16 {
    8000
}

impl ChatbotConfig {
    /// Load configuration from an optional `configuration` file plus the
    /// environment. Missing `GEMINI_API_KEY` fails the load; the service
    /// refuses to start without provider credentials.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let server: ServerConfig = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()?;

        Ok(ChatbotConfig {
            server,
            gemini: GeminiSettings {
                api_key: get_env("GEMINI_API_KEY", None)?,
                model: get_env("GEMINI_MODEL", Some("gemini-2.0-flash"))?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => match default {
            Some(def) => Ok(def.to_string()),
            None => Err(AppError::ConfigError(anyhow::anyhow!(
                "{} is required but not set",
                key
            ))),
        },
    }
}
