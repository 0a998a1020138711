//! VerifySessionHandler - startup token verification.

use std::sync::Arc;

use crate::domain::session::{Session, SessionError};
use crate::ports::{BookingApi, SessionStore};

use super::map_api_error;

/// Handler for the app-launch check: is the stored token still good?
///
/// An invalid token is not an error the user should see. The session is torn
/// down quietly and the app starts unauthenticated. Connectivity problems,
/// by contrast, are surfaced so the caller can keep the cached session.
pub struct VerifySessionHandler {
    api: Arc<dyn BookingApi>,
    store: Arc<dyn SessionStore>,
}

impl VerifySessionHandler {
    pub fn new(api: Arc<dyn BookingApi>, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    /// Returns the live session, or `None` when there is no usable token.
    pub async fn handle(&self) -> Result<Option<Session>, SessionError> {
        // 1. No stored token means nothing to verify
        let Some(token) = self.store.token().await else {
            return Ok(None);
        };

        // 2. Ask the backend who the token belongs to
        match self.api.me().await {
            Ok(profile) => {
                if let Err(e) = self.store.save_profile(&profile).await {
                    tracing::warn!(error = %e, "Failed to refresh cached profile");
                }
                Ok(Some(Session {
                    token,
                    user: profile,
                }))
            }
            Err(e) if e.is_unauthorized() => {
                // 3. Stale token: tear the session down instead of surfacing
                tracing::info!("Stored token rejected; clearing session");
                self.store
                    .remove_token()
                    .await
                    .map_err(|e| SessionError::Store(e.to_string()))?;
                if let Err(e) = self.store.remove_profile().await {
                    tracing::warn!(error = %e, "Failed to drop cached profile");
                }
                Ok(None)
            }
            Err(e) => Err(map_api_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::application::handlers::test_support::MockBookingApi;
    use crate::domain::session::UserProfile;
    use crate::ports::{ApiError, Operation, SessionStore};
    use secrecy::SecretString;

    fn test_profile() -> UserProfile {
        UserProfile {
            full_name: "Asha Rao".to_string(),
            phone_number: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
        }
    }

    async fn store_with_token() -> Arc<InMemorySessionStore> {
        let store = Arc::new(InMemorySessionStore::new());
        store
            .save_token(&SecretString::new("tok_stored".to_string()))
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn valid_token_yields_a_session_without_logout() {
        let api = Arc::new(MockBookingApi::new().with_me(Ok(test_profile())));
        let store = store_with_token().await;
        let handler = VerifySessionHandler::new(api, store.clone());

        let session = handler.handle().await.unwrap();

        assert!(session.is_some());
        assert_eq!(session.unwrap().user.phone_number, "9876543210");
        // No teardown happened.
        assert!(store.token().await.is_some());
        assert_eq!(store.profile().await, Some(test_profile()));
    }

    #[tokio::test]
    async fn missing_token_short_circuits_without_a_network_call() {
        let api = Arc::new(MockBookingApi::new());
        let store = Arc::new(InMemorySessionStore::new());
        let handler = VerifySessionHandler::new(api.clone(), store);

        let session = handler.handle().await.unwrap();

        assert!(session.is_none());
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn rejected_token_clears_the_session_silently() {
        let api = Arc::new(MockBookingApi::new().with_me(Err(ApiError::unauthorized(
            Operation::FetchProfile,
            Some("Token expired".to_string()),
        ))));
        let store = store_with_token().await;
        store.save_profile(&test_profile()).await.unwrap();
        let handler = VerifySessionHandler::new(api, store.clone());

        let session = handler.handle().await.unwrap();

        // No error surfaced, session gone.
        assert!(session.is_none());
        assert!(store.token().await.is_none());
        assert!(store.profile().await.is_none());
    }

    #[tokio::test]
    async fn connectivity_failure_keeps_the_stored_session() {
        let api = Arc::new(
            MockBookingApi::new().with_me(Err(ApiError::timeout(Operation::FetchProfile))),
        );
        let store = store_with_token().await;
        let handler = VerifySessionHandler::new(api, store.clone());

        let result = handler.handle().await;

        assert!(matches!(result, Err(SessionError::Connectivity { .. })));
        assert!(store.token().await.is_some());
    }
}
