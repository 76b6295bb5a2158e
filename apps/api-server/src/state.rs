//! Application state - shared across all handlers.

use std::sync::Arc;

use arena_core::ports::{BlogRepository, MatchRepository, NewsRepository};
use arena_infra::auth::UserDirectory;
use arena_infra::storage::{
    LocalBlogRepository, LocalMatchRepository, LocalNewsRepository, StorageConfig,
};

use crate::config::{AppConfig, MediaConfig};
use crate::importer::BlogImporter;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub news: Arc<dyn NewsRepository>,
    pub blogs: Arc<dyn BlogRepository>,
    pub matches: Arc<dyn MatchRepository>,
    pub users: Arc<UserDirectory>,
    pub importer: BlogImporter,
    pub media: MediaConfig,
}

type Repositories = (
    Arc<dyn NewsRepository>,
    Arc<dyn BlogRepository>,
    Arc<dyn MatchRepository>,
);

fn memory_repositories() -> Repositories {
    (
        Arc::new(LocalNewsRepository::in_memory()),
        Arc::new(LocalBlogRepository::in_memory()),
        Arc::new(LocalMatchRepository::in_memory()),
    )
}

impl AppState {
    /// Build the application state with the configured storage backend.
    pub async fn new(config: &AppConfig, users: UserDirectory) -> Self {
        let (news, blogs, matches) = Self::build_repositories(&config.storage).await;

        tracing::info!("Application state initialized");

        Self {
            news,
            blogs,
            matches,
            users: Arc::new(users),
            importer: BlogImporter::new(),
            media: config.media.clone(),
        }
    }

    async fn build_repositories(storage: &StorageConfig) -> Repositories {
        match storage {
            StorageConfig::Memory => {
                tracing::info!("Using in-memory storage");
                memory_repositories()
            }
            StorageConfig::File { data_dir } => {
                tracing::info!(data_dir = %data_dir.display(), "Using file storage");
                (
                    Arc::new(LocalNewsRepository::file_backed(data_dir)),
                    Arc::new(LocalBlogRepository::file_backed(data_dir)),
                    Arc::new(LocalMatchRepository::file_backed(data_dir)),
                )
            }
            #[cfg(feature = "postgres")]
            StorageConfig::Postgres {
                url,
                max_connections,
                min_connections,
            } => {
                use arena_infra::storage::{
                    DatabaseConfig, PostgresBlogRepository, PostgresMatchRepository,
                    PostgresNewsRepository, connect,
                };

                let db_config = DatabaseConfig {
                    url: url.clone(),
                    max_connections: *max_connections,
                    min_connections: *min_connections,
                };
                match connect(&db_config).await {
                    Ok(db) => (
                        Arc::new(PostgresNewsRepository::new(db.clone())),
                        Arc::new(PostgresBlogRepository::new(db.clone())),
                        Arc::new(PostgresMatchRepository::new(db)),
                    ),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        memory_repositories()
                    }
                }
            }
            #[cfg(not(feature = "postgres"))]
            StorageConfig::Postgres { .. } => {
                tracing::warn!(
                    "Postgres storage configured but the postgres feature is disabled. \
                     Using in-memory fallback."
                );
                memory_repositories()
            }
        }
    }
}
