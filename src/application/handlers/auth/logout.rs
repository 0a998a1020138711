//! LogoutHandler - local session teardown.

use std::sync::Arc;

use crate::domain::session::SessionError;
use crate::ports::SessionStore;

/// Handler for logout. Purely local: the backend keeps no session state
/// worth revoking, so logout is token and profile removal.
pub struct LogoutHandler {
    store: Arc<dyn SessionStore>,
}

impl LogoutHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<(), SessionError> {
        self.store
            .remove_token()
            .await
            .map_err(|e| SessionError::Store(e.to_string()))?;

        if let Err(e) = self.store.remove_profile().await {
            tracing::warn!(error = %e, "Failed to drop cached profile on logout");
        }

        tracing::info!("Logged out");
        Ok(())
    }
}
