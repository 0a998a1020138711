//! RegisterHandler - Command handler for account creation.

use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::session::{validate_phone_number, Session, SessionError};
use crate::ports::{BookingApi, RegisterRequest, SessionStore};

use super::map_api_error;

/// Command to register a new account.
#[derive(Debug, Clone)]
pub struct RegisterCommand {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub password: String,
}

/// Handler for registration. Mirrors login: the returned session is
/// persisted immediately so the new user lands signed in.
pub struct RegisterHandler {
    api: Arc<dyn BookingApi>,
    store: Arc<dyn SessionStore>,
}

impl RegisterHandler {
    pub fn new(api: Arc<dyn BookingApi>, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    pub async fn handle(&self, cmd: RegisterCommand) -> Result<Session, SessionError> {
        // 1. Local validation
        if cmd.full_name.trim().is_empty() {
            return Err(ValidationError::empty_field("full_name").into());
        }
        validate_phone_number(&cmd.phone_number)?;
        if !cmd.email.contains('@') {
            return Err(
                ValidationError::invalid_format("email", "expected an email address").into(),
            );
        }
        if cmd.password.len() < 6 {
            return Err(ValidationError::invalid_format(
                "password",
                "must be at least 6 characters",
            )
            .into());
        }

        // 2. Create the account
        let session = self
            .api
            .register(RegisterRequest {
                full_name: cmd.full_name.trim().to_string(),
                phone_number: cmd.phone_number.trim().to_string(),
                email: cmd.email.trim().to_string(),
                password: cmd.password,
            })
            .await
            .map_err(map_api_error)?;

        // 3. Persist the session
        self.store
            .save_token(&session.token)
            .await
            .map_err(|e| SessionError::Store(e.to_string()))?;

        if let Err(e) = self.store.save_profile(&session.user).await {
            tracing::warn!(error = %e, "Failed to cache user profile after registration");
        }

        tracing::info!(phone = %session.user.phone_number, "Registration succeeded");

        Ok(session)
    }
}
