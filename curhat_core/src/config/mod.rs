pub mod settings;

pub use settings::{AppConfig, CorsConfig, GenAiConfig, ServerConfig};
