use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Prefijo de todas las rutas HTTP. Vacío = mismo origen que la página.
    pub backend_url: String,
    /// Clave de localStorage donde vive el bearer token
    pub token_storage_key: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            token_storage_key: "accessToken".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            token_storage_key: option_env!("TOKEN_STORAGE_KEY")
                .filter(|key| !key.is_empty())
                .map(|key| key.to_string())
                .unwrap_or(defaults.token_storage_key),
            enable_logging: option_env!("ENABLE_LOGGING")
                .map(|flag| flag.parse().unwrap_or(true))
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// URL absoluta (o relativa al origen) para una ruta del backend
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }

    /// Nivel de log según configuración
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
