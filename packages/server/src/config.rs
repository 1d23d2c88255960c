use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::stage;

/// Connection URL used when no store is configured; a local file-backed
/// SQLite database so the portal runs standalone.
pub const LOCAL_FALLBACK_URL: &str = "sqlite://portal.db?mode=rwc";

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: Option<String>,
}

impl DatabaseConfig {
    /// Connection URL with the legacy scheme normalized, falling back to the
    /// local SQLite file when nothing is configured.
    pub fn connect_url(&self) -> String {
        match &self.url {
            Some(url) => normalize_db_url(url),
            None => LOCAL_FALLBACK_URL.to_string(),
        }
    }
}

/// Some hosting platforms still hand out URLs with the historical
/// `postgres://` scheme; rewrite it to the accepted `postgresql://` form.
pub fn normalize_db_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{rest}"),
        None => url.to_string(),
    }
}

/// Which image storage backend to use for uploaded photos.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// Bytes stored inline with the photo row.
    Inline,
    /// Bytes written under `media_dir`, the row holds a path reference.
    Filesystem,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub mode: StorageMode,
    pub media_dir: PathBuf,
    pub max_image_bytes: u64,
}

/// One entry of the stage vocabulary.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StageConfig {
    pub name: String,
    pub progress: i32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    /// Stage vocabulary for this deployment; the Inquiry→Delivered defaults
    /// apply when absent.
    #[serde(default)]
    pub stages: Vec<StageConfig>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 3600)?
            .set_default("storage.mode", "inline")?
            .set_default("storage.media_dir", "./media")?
            .set_default("storage.max_image_bytes", 25 * 1024 * 1024)?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., PORTAL__SERVER__PORT)
            .add_source(Environment::with_prefix("PORTAL").separator("__"))
            .build()?;

        let mut cfg: AppConfig = s.try_deserialize()?;

        // Deployment platforms provide the store URL as a bare DATABASE_URL.
        if let Ok(url) = std::env::var("DATABASE_URL") {
            cfg.database.url = Some(url);
        }
        if cfg.stages.is_empty() {
            cfg.stages = stage::default_stages();
        }

        Ok(cfg)
    }
}
