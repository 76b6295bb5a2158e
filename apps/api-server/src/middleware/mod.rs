//! HTTP middleware and extractors.

pub mod auth;
pub mod error;

pub use auth::Identity;
pub use error::{AppError, AppResult};
