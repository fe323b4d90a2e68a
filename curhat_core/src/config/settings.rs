use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GENAI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Plain environment variables checked for the API key when the layered
/// config leaves it empty.
const API_KEY_FALLBACK_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub genai: GenAiConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenAiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_GENAI_BASE_URL.to_string(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:5173".to_string(),
            ],
        }
    }
}

impl GenAiConfig {
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false)
    }
}

impl AppConfig {
    /// Defaults, then `config.toml` if present, then `APP_*` variables
    /// (`APP_GENAI__API_KEY`, `APP_SERVER__PORT`, comma-separated
    /// `APP_CORS__ALLOWED_ORIGINS`).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&AppConfig::default())?);

        if path.exists() {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true),
        );

        let mut app_config: AppConfig = builder.build()?.try_deserialize()?;

        if !app_config.genai.has_api_key() {
            app_config.genai.api_key = API_KEY_FALLBACK_VARS
                .iter()
                .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()));
        }

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.genai.model.trim().is_empty() {
            return Err(ConfigError::Message(
                "Generation model cannot be empty".to_string(),
            ));
        }

        if reqwest::Url::parse(&self.genai.base_url).is_err() {
            return Err(ConfigError::Message(format!(
                "Invalid generation base URL: {}",
                self.genai.base_url
            )));
        }

        if !self.genai.has_api_key() {
            tracing::warn!("No generation API key configured - every curhat will get the fallback reply");
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
