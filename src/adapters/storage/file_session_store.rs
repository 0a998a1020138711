//! File-based Session Store Adapter
//!
//! Persists the session document as a single YAML file on disk. This is the
//! on-device equivalent of the mobile app's keyed local storage.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::session::UserProfile;
use crate::ports::{SessionStore, SessionStoreError};

/// On-disk shape of the session document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionDocument {
    #[serde(default)]
    has_seen_welcome: bool,

    #[serde(default)]
    user_token: Option<String>,

    #[serde(default)]
    user_profile: Option<UserProfile>,
}

/// File-backed store for `{has_seen_welcome, user_token, user_profile}`.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    base_path: PathBuf,
}

impl FileSessionStore {
    /// Create a store rooted at the given directory. The directory is
    /// created lazily on first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn session_file(&self) -> PathBuf {
        self.base_path.join("session.yaml")
    }

    /// Load the document; a missing or unreadable file degrades to the
    /// default so a corrupt store never blocks startup.
    async fn load(&self) -> SessionDocument {
        let path = self.session_file();
        match fs::read_to_string(&path).await {
            Ok(raw) => serde_yaml::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, path = %path.display(), "Corrupt session document, starting fresh");
                SessionDocument::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => SessionDocument::default(),
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "Failed to read session document");
                SessionDocument::default()
            }
        }
    }

    async fn store(&self, document: &SessionDocument) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;

        let yaml = serde_yaml::to_string(document)
            .map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))?;

        fs::write(self.session_file(), yaml)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save_token(&self, token: &SecretString) -> Result<(), SessionStoreError> {
        let mut document = self.load().await;
        document.user_token = Some(token.expose_secret().to_string());
        self.store(&document).await
    }

    async fn token(&self) -> Option<SecretString> {
        self.load().await.user_token.map(SecretString::new)
    }

    async fn remove_token(&self) -> Result<(), SessionStoreError> {
        let mut document = self.load().await;
        document.user_token = None;
        self.store(&document).await
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<(), SessionStoreError> {
        let mut document = self.load().await;
        document.user_profile = Some(profile.clone());
        self.store(&document).await
    }

    async fn profile(&self) -> Option<UserProfile> {
        self.load().await.user_profile
    }

    async fn remove_profile(&self) -> Result<(), SessionStoreError> {
        let mut document = self.load().await;
        document.user_profile = None;
        self.store(&document).await
    }

    async fn mark_welcome_seen(&self) -> Result<(), SessionStoreError> {
        let mut document = self.load().await;
        document.has_seen_welcome = true;
        self.store(&document).await
    }

    async fn has_seen_welcome(&self) -> bool {
        self.load().await.has_seen_welcome
    }

    async fn reset_welcome(&self) -> Result<(), SessionStoreError> {
        let mut document = self.load().await;
        document.has_seen_welcome = false;
        self.store(&document).await
    }

    async fn clear_all(&self) -> Result<(), SessionStoreError> {
        let path = self.session_file();
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::IoError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_profile() -> UserProfile {
        UserProfile {
            full_name: "Asha Rao".to_string(),
            phone_number: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn save_and_read_token() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());

        store
            .save_token(&SecretString::new("tok_123".to_string()))
            .await
            .unwrap();

        let token = store.token().await.unwrap();
        assert_eq!(token.expose_secret(), "tok_123");
    }

    #[tokio::test]
    async fn token_is_absent_before_first_save() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());
        assert!(store.token().await.is_none());
    }

    #[tokio::test]
    async fn remove_token_keeps_other_fields() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());

        store
            .save_token(&SecretString::new("tok_123".to_string()))
            .await
            .unwrap();
        store.save_profile(&test_profile()).await.unwrap();
        store.mark_welcome_seen().await.unwrap();

        store.remove_token().await.unwrap();

        assert!(store.token().await.is_none());
        assert_eq!(store.profile().await, Some(test_profile()));
        assert!(store.has_seen_welcome().await);
    }

    #[tokio::test]
    async fn welcome_flag_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());

        assert!(!store.has_seen_welcome().await);
        store.mark_welcome_seen().await.unwrap();
        assert!(store.has_seen_welcome().await);
        store.reset_welcome().await.unwrap();
        assert!(!store.has_seen_welcome().await);
    }

    #[tokio::test]
    async fn corrupt_document_degrades_to_empty_reads() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());

        tokio::fs::write(store.session_file(), "{{{ not yaml")
            .await
            .unwrap();

        assert!(store.token().await.is_none());
        assert!(store.profile().await.is_none());
        assert!(!store.has_seen_welcome().await);
    }

    #[tokio::test]
    async fn save_token_fails_when_directory_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocked");
        tokio::fs::write(&blocker, "not a directory").await.unwrap();

        let store = FileSessionStore::new(&blocker);
        let result = store
            .save_token(&SecretString::new("tok_123".to_string()))
            .await;
        assert!(matches!(result, Err(SessionStoreError::IoError(_))));
    }

    #[tokio::test]
    async fn clear_all_removes_the_document() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());

        store
            .save_token(&SecretString::new("tok_123".to_string()))
            .await
            .unwrap();
        store.mark_welcome_seen().await.unwrap();

        store.clear_all().await.unwrap();

        assert!(store.token().await.is_none());
        assert!(!store.has_seen_welcome().await);
    }

    #[tokio::test]
    async fn clear_all_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());
        store.clear_all().await.unwrap();
        store.clear_all().await.unwrap();
    }
}
