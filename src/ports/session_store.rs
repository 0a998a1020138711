//! Session store port - local persistence for token, profile, and flags.
//!
//! Read failures degrade to absent values so a corrupt store never blocks
//! startup; writes return errors, but only token writes are treated as fatal
//! by callers (the rest are fire-and-forget).

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::session::UserProfile;

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Failed to serialize session data: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session data: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for the small keyed on-device store holding
/// `{has_seen_welcome, user_token, user_profile}`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist the auth token. Failures propagate: losing the token means
    /// the user silently logs out on next launch.
    async fn save_token(&self, token: &SecretString) -> Result<(), SessionStoreError>;

    /// The stored token, if any. Read failures return `None`.
    async fn token(&self) -> Option<SecretString>;

    /// Remove the auth token. Failures propagate.
    async fn remove_token(&self) -> Result<(), SessionStoreError>;

    /// Cache the user profile. Callers treat failures as non-fatal.
    async fn save_profile(&self, profile: &UserProfile) -> Result<(), SessionStoreError>;

    /// The cached profile, if any. Read failures return `None`.
    async fn profile(&self) -> Option<UserProfile>;

    /// Drop the cached profile.
    async fn remove_profile(&self) -> Result<(), SessionStoreError>;

    /// Record that the onboarding screen has been shown.
    async fn mark_welcome_seen(&self) -> Result<(), SessionStoreError>;

    /// Whether onboarding has been shown. Read failures return `false`.
    async fn has_seen_welcome(&self) -> bool;

    /// Reset the onboarding flag.
    async fn reset_welcome(&self) -> Result<(), SessionStoreError>;

    /// Wipe everything. Diagnostic and test use.
    async fn clear_all(&self) -> Result<(), SessionStoreError>;
}
