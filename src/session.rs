//! Session gate - a single shared password and an authenticated flag.
//!
//! This is a gate, not an authentication system: the secret is stored and
//! compared as plaintext and there is no lockout.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::store::{KeyValueStore, StoreError};

/// Store key of the shared secret.
pub const SECRET_KEY: &str = "maj_app_password";
/// Store key of the authenticated flag.
pub const AUTH_KEY: &str = "maj_auth";
/// Passwords accepted while no secret has been stored.
pub const FALLBACK_SECRETS: [&str; 2] = ["admin123", "jamaica2025"];
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("invalid password")]
    InvalidPassword,

    #[error("current password is incorrect")]
    IncorrectCurrentPassword,

    #[error("new password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("new passwords do not match")]
    PasswordMismatch,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct SessionGate<S> {
    store: S,
}

impl<S: KeyValueStore> SessionGate<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Check `password` and mark the session authenticated.
    ///
    /// With no stored secret, either fallback password is accepted and then
    /// stored as the secret.
    pub fn login(&self, password: &str) -> Result<(), SessionError> {
        match self.store.get(SECRET_KEY)? {
            Some(secret) if secret == password => {}
            Some(_) => {
                warn!("login rejected");
                return Err(SessionError::InvalidPassword);
            }
            None if FALLBACK_SECRETS.contains(&password) => {
                self.store.set(SECRET_KEY, password)?;
                debug!("fallback password stored as session secret");
            }
            None => {
                warn!("login rejected");
                return Err(SessionError::InvalidPassword);
            }
        }

        self.store.set(AUTH_KEY, "true")?;
        info!("session authenticated");
        Ok(())
    }

    pub fn logout(&self) -> Result<(), SessionError> {
        self.store.remove(AUTH_KEY)?;
        info!("session closed");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.store.get(AUTH_KEY), Ok(Some(flag)) if flag == "true")
    }

    /// Replace the secret. `current` is checked against the stored secret, or
    /// against the first fallback when none is stored.
    pub fn change_password(
        &self,
        current: &str,
        new: &str,
        confirm: &str,
    ) -> Result<(), SessionError> {
        let stored = self.store.get(SECRET_KEY)?;
        let expected = stored.as_deref().unwrap_or(FALLBACK_SECRETS[0]);
        if current != expected {
            return Err(SessionError::IncorrectCurrentPassword);
        }
        if new.chars().count() < MIN_PASSWORD_LEN {
            return Err(SessionError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        if new != confirm {
            return Err(SessionError::PasswordMismatch);
        }

        self.store.set(SECRET_KEY, new)?;
        info!("session password changed");
        Ok(())
    }
}
