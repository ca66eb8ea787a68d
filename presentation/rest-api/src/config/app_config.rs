use super::{cors_config, server_config::ServerConfig, suggestion_config::SuggestionConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub suggestions: SuggestionConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            suggestions: SuggestionConfig::from_env(),
        }
    }
}
