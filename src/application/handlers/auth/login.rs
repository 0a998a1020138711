//! LoginHandler - Command handler for phone/password login.

use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::session::{validate_phone_number, Session, SessionError};
use crate::ports::{BookingApi, LoginRequest, SessionStore};

use super::map_api_error;

/// Command to log in with phone number and password.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub phone_number: String,
    pub password: String,
}

/// Handler for login.
///
/// On success the token is persisted (fatally, so the session survives a
/// restart) and the profile is cached best-effort.
pub struct LoginHandler {
    api: Arc<dyn BookingApi>,
    store: Arc<dyn SessionStore>,
}

impl LoginHandler {
    pub fn new(api: Arc<dyn BookingApi>, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<Session, SessionError> {
        // 1. Local validation; nothing leaves the device on failure
        validate_phone_number(&cmd.phone_number)?;
        if cmd.password.is_empty() {
            return Err(ValidationError::empty_field("password").into());
        }

        // 2. Authenticate
        let session = self
            .api
            .login(LoginRequest {
                phone_number: cmd.phone_number.trim().to_string(),
                password: cmd.password,
            })
            .await
            .map_err(map_api_error)?;

        // 3. Persist the token; losing it silently logs the user out
        self.store
            .save_token(&session.token)
            .await
            .map_err(|e| SessionError::Store(e.to_string()))?;

        // 4. Cache the profile best-effort
        if let Err(e) = self.store.save_profile(&session.user).await {
            tracing::warn!(error = %e, "Failed to cache user profile after login");
        }

        tracing::info!(phone = %session.user.phone_number, "Login succeeded");

        Ok(session)
    }
}
