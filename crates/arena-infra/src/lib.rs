//! # Arena Infrastructure
//!
//! Concrete implementations of the ports defined in `arena-core`.
//! This crate contains the storage backends and authentication services.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - Local (in-memory / JSON file) storage only
//! - `postgres` - PostgreSQL storage via SeaORM
//! - `auth` - JWT + Argon2 authentication

pub mod storage;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - Local storage
pub use storage::{
    LocalBlogRepository, LocalMatchRepository, LocalNewsRepository, StorageConfig,
};

#[cfg(feature = "postgres")]
pub use storage::{
    DatabaseConfig, PostgresBlogRepository, PostgresMatchRepository, PostgresNewsRepository,
};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtTokenService, UserDirectory};
