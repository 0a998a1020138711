//! Authentication and session handlers.

mod login;
mod logout;
mod register;
mod update_profile;
mod verify_session;

pub use login::{LoginCommand, LoginHandler};
pub use logout::LogoutHandler;
pub use register::{RegisterCommand, RegisterHandler};
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler};
pub use verify_session::VerifySessionHandler;

use crate::domain::session::SessionError;
use crate::ports::ApiError;

/// Collapse a backend failure into the session error taxonomy: transport
/// failures are retryable connectivity errors, everything else is an auth
/// rejection carrying the resolved message.
pub(super) fn map_api_error(error: ApiError) -> SessionError {
    if error.is_retryable() {
        SessionError::connectivity(error.user_message())
    } else {
        SessionError::auth(error.user_message())
    }
}
