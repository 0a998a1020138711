//! UpdateProfileHandler - partial profile updates.

use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::session::{SessionError, UserProfile};
use crate::ports::{BookingApi, SessionStore, UpdateProfileRequest};

use super::map_api_error;

/// Command to update profile fields; unset fields stay as they are.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileCommand {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

pub struct UpdateProfileHandler {
    api: Arc<dyn BookingApi>,
    store: Arc<dyn SessionStore>,
}

impl UpdateProfileHandler {
    pub fn new(api: Arc<dyn BookingApi>, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    pub async fn handle(&self, cmd: UpdateProfileCommand) -> Result<UserProfile, SessionError> {
        if let Some(name) = &cmd.full_name {
            if name.trim().is_empty() {
                return Err(ValidationError::empty_field("full_name").into());
            }
        }
        if let Some(email) = &cmd.email {
            if !email.contains('@') {
                return Err(
                    ValidationError::invalid_format("email", "expected an email address").into(),
                );
            }
        }
        if cmd.full_name.is_none() && cmd.email.is_none() {
            return Err(ValidationError::missing_required("profile_changes").into());
        }

        let profile = self
            .api
            .update_profile(UpdateProfileRequest {
                full_name: cmd.full_name,
                email: cmd.email,
            })
            .await
            .map_err(map_api_error)?;

        if let Err(e) = self.store.save_profile(&profile).await {
            tracing::warn!(error = %e, "Failed to refresh cached profile after update");
        }

        Ok(profile)
    }
}
