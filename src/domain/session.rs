//! Session and user profile types.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::foundation::ValidationError;

/// User profile cached locally and refreshed from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
}

/// An authenticated session: the bearer token plus the profile it belongs to.
///
/// The token is opaque to the client; it is stored, attached to requests, and
/// discarded on logout or when the backend rejects it.
#[derive(Clone)]
pub struct Session {
    pub token: SecretString,
    pub user: UserProfile,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: SecretString::new(token.into()),
            user,
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Token is redacted by SecretString's own Debug.
        f.debug_struct("Session")
            .field("token", &self.token)
            .field("user", &self.user)
            .finish()
    }
}

/// Validates an Indian mobile number: exactly ten digits.
pub fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("phone_number"));
    }
    if trimmed.len() != 10 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::invalid_format(
            "phone_number",
            "expected 10 digits",
        ));
    }
    Ok(())
}

/// Errors surfaced by the authentication and session handlers.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend rejected the credentials or the request itself.
    #[error("{message}")]
    Auth { message: String },

    /// Timeout or no network; the caller may retry.
    #[error("{message}")]
    Connectivity { message: String },

    /// The local session store failed on a write that must not be lost.
    #[error("Failed to persist session: {0}")]
    Store(String),
}

impl SessionError {
    pub fn auth(message: impl Into<String>) -> Self {
        SessionError::Auth {
            message: message.into(),
        }
    }

    pub fn connectivity(message: impl Into<String>) -> Self {
        SessionError::Connectivity {
            message: message.into(),
        }
    }
}

/// Exposes the token for request building. Kept as a free function so call
/// sites that only display a session never touch the secret.
pub fn bearer_value(token: &SecretString) -> String {
    format!("Bearer {}", token.expose_secret())
}
