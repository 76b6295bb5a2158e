//! # Arena Core
//!
//! The domain layer of the Arena Bulls content service.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod import;
pub mod ports;
pub mod slug;

pub use error::DomainError;
