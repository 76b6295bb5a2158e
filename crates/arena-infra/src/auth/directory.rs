//! Fixed user directory for the admin surface.
//!
//! Accounts are configured at startup (passwords come from the environment,
//! not from a database) and hashed before they are held in memory.

use uuid::Uuid;

use arena_core::domain::{Role, User};
use arena_core::ports::{AuthError, PasswordService};

/// The seeded set of admin-surface accounts.
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Build the standard directory: one admin and one editor account.
    pub fn seeded(
        admin_password: &str,
        editor_password: &str,
        passwords: &dyn PasswordService,
    ) -> Result<Self, AuthError> {
        let users = vec![
            User::new(
                "admin".to_string(),
                "admin@arenabulls.gg".to_string(),
                passwords.hash(admin_password)?,
                Role::Admin,
            ),
            User::new(
                "editor".to_string(),
                "editor@arenabulls.gg".to_string(),
                passwords.hash(editor_password)?,
                Role::Editor,
            ),
        ];
        Ok(Self { users })
    }

    /// Verify a username/password pair.
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
        passwords: &dyn PasswordService,
    ) -> Result<User, AuthError> {
        let Some(user) = self.users.iter().find(|u| u.username == username) else {
            return Err(AuthError::InvalidCredentials);
        };

        if passwords.verify(password, &user.password_hash)? {
            Ok(user.clone())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    pub fn find(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Argon2PasswordService;

    #[test]
    fn authenticates_seeded_accounts() {
        let passwords = Argon2PasswordService::new();
        let directory = UserDirectory::seeded("arenabulls2025", "editor2025", &passwords).unwrap();

        let admin = directory
            .authenticate("admin", "arenabulls2025", &passwords)
            .unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert!(directory.find(admin.id).is_some());

        assert!(matches!(
            directory.authenticate("admin", "wrong", &passwords),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            directory.authenticate("ghost", "arenabulls2025", &passwords),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
