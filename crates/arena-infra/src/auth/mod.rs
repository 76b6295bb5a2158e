//! Authentication implementations.

mod directory;
mod jwt;
mod password;

pub use directory::UserDirectory;
pub use jwt::{JwtConfig, JwtTokenService};
pub use password::Argon2PasswordService;
