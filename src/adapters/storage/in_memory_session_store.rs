//! In-memory session store for tests and previews.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Mutex;

use crate::domain::session::UserProfile;
use crate::ports::{SessionStore, SessionStoreError};

#[derive(Debug, Default)]
struct State {
    has_seen_welcome: bool,
    user_token: Option<String>,
    user_profile: Option<UserProfile>,
}

/// Session store backed by process memory. Same observable behavior as the
/// file store, without the disk.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    state: Mutex<State>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save_token(&self, token: &SecretString) -> Result<(), SessionStoreError> {
        self.state.lock().unwrap().user_token = Some(token.expose_secret().to_string());
        Ok(())
    }

    async fn token(&self) -> Option<SecretString> {
        self.state
            .lock()
            .unwrap()
            .user_token
            .clone()
            .map(SecretString::new)
    }

    async fn remove_token(&self) -> Result<(), SessionStoreError> {
        self.state.lock().unwrap().user_token = None;
        Ok(())
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<(), SessionStoreError> {
        self.state.lock().unwrap().user_profile = Some(profile.clone());
        Ok(())
    }

    async fn profile(&self) -> Option<UserProfile> {
        self.state.lock().unwrap().user_profile.clone()
    }

    async fn remove_profile(&self) -> Result<(), SessionStoreError> {
        self.state.lock().unwrap().user_profile = None;
        Ok(())
    }

    async fn mark_welcome_seen(&self) -> Result<(), SessionStoreError> {
        self.state.lock().unwrap().has_seen_welcome = true;
        Ok(())
    }

    async fn has_seen_welcome(&self) -> bool {
        self.state.lock().unwrap().has_seen_welcome
    }

    async fn reset_welcome(&self) -> Result<(), SessionStoreError> {
        self.state.lock().unwrap().has_seen_welcome = false;
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), SessionStoreError> {
        *self.state.lock().unwrap() = State::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn token_round_trip() {
        let store = InMemorySessionStore::new();
        store
            .save_token(&SecretString::new("tok_abc".to_string()))
            .await
            .unwrap();
        assert_eq!(store.token().await.unwrap().expose_secret(), "tok_abc");

        store.remove_token().await.unwrap();
        assert!(store.token().await.is_none());
    }

    #[tokio::test]
    async fn clear_all_wipes_everything() {
        let store = InMemorySessionStore::new();
        store
            .save_token(&SecretString::new("tok_abc".to_string()))
            .await
            .unwrap();
        store.mark_welcome_seen().await.unwrap();

        store.clear_all().await.unwrap();

        assert!(store.token().await.is_none());
        assert!(!store.has_seen_welcome().await);
    }
}
