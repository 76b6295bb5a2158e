//! Argon2 password hashing.
//!
//! The only stored hashes are the two admin-surface accounts seeded at
//! startup, so there is no cost-tuning knob here; the crate defaults
//! (Argon2id) are used as-is.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use arena_core::ports::{AuthError, PasswordService};

/// Stateless Argon2id password service.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2PasswordService;

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        // Hashes are minted in-process at startup; a malformed one is a bug,
        // not a bad login, so it surfaces as an error rather than `false`.
        let parsed =
            PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let service = Argon2PasswordService::new();

        let hash = service.hash("arenabulls2025").unwrap();
        assert!(service.verify("arenabulls2025", &hash).unwrap());
        assert!(!service.verify("editor2025", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted_per_call() {
        let service = Argon2PasswordService::new();

        let first = service.hash("arenabulls2025").unwrap();
        let second = service.hash("arenabulls2025").unwrap();
        assert_ne!(first, second);
        assert!(service.verify("arenabulls2025", &second).unwrap());
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        let service = Argon2PasswordService::new();
        assert!(matches!(
            service.verify("arenabulls2025", "not-a-phc-string"),
            Err(AuthError::HashingError(_))
        ));
    }
}
