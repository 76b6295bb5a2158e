//! Storage backends for the content collections.
//!
//! The backend is chosen by explicit configuration, never inferred from the
//! runtime environment: `memory` keeps seeded collections in process memory,
//! `file` persists them as JSON documents under a data directory, and
//! `postgres` talks to a real database via SeaORM.

mod local;
mod local_repo;
pub mod seed;

#[cfg(feature = "postgres")]
mod connection;
#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres_repo;

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;

use std::path::PathBuf;

pub use local_repo::{LocalBlogRepository, LocalMatchRepository, LocalNewsRepository};

#[cfg(feature = "postgres")]
pub use connection::{DatabaseConfig, connect};
#[cfg(feature = "postgres")]
pub use postgres_repo::{PostgresBlogRepository, PostgresMatchRepository, PostgresNewsRepository};

/// Which physical backend holds the content collections.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// Seeded, transient in-process storage.
    Memory,
    /// Durable JSON documents under `data_dir`, seeded on first run.
    File { data_dir: PathBuf },
    /// PostgreSQL. Requires the `postgres` feature.
    Postgres {
        url: String,
        max_connections: u32,
        min_connections: u32,
    },
}
