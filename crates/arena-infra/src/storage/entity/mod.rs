//! SeaORM entities for the content tables.

pub mod blog;
pub mod matches;
pub mod news;
