//! Application configuration loaded from environment variables.
//!
//! The storage backend is named explicitly via `STORAGE_BACKEND`; it is never
//! inferred from the runtime environment.

use std::env;
use std::path::PathBuf;

use arena_infra::storage::StorageConfig;

/// Where uploaded media lands and how it is addressed publicly.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub dir: PathBuf,
    pub base_url: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
    pub media: MediaConfig,
    pub admin_password: String,
    pub editor_password: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            storage: Self::storage_from_env(),
            media: MediaConfig {
                dir: env::var("MEDIA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("./media")),
                base_url: env::var("MEDIA_BASE_URL").unwrap_or_else(|_| "/media".to_string()),
            },
            admin_password: env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "arenabulls2025".to_string()),
            editor_password: env::var("EDITOR_PASSWORD")
                .unwrap_or_else(|_| "editor2025".to_string()),
        }
    }

    fn storage_from_env() -> StorageConfig {
        let backend = env::var("STORAGE_BACKEND").unwrap_or_else(|_| "memory".to_string());

        match backend.as_str() {
            "memory" => StorageConfig::Memory,
            "file" => StorageConfig::File {
                data_dir: env::var("DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("./data")),
            },
            "postgres" => {
                // POSTGRES_URL is accepted as a legacy alias.
                let url = env::var("DATABASE_URL").or_else(|_| env::var("POSTGRES_URL"));
                match url {
                    Ok(url) => StorageConfig::Postgres {
                        url,
                        max_connections: env::var("DB_MAX_CONNECTIONS")
                            .ok()
                            .and_then(|s| s.parse().ok())
                            .unwrap_or(100),
                        min_connections: env::var("DB_MIN_CONNECTIONS")
                            .ok()
                            .and_then(|s| s.parse().ok())
                            .unwrap_or(10),
                    },
                    Err(_) => {
                        tracing::warn!(
                            "STORAGE_BACKEND=postgres but DATABASE_URL is not set. \
                             Falling back to memory storage."
                        );
                        StorageConfig::Memory
                    }
                }
            }
            other => {
                tracing::warn!(
                    backend = other,
                    "Unknown STORAGE_BACKEND, falling back to memory storage"
                );
                StorageConfig::Memory
            }
        }
    }
}
