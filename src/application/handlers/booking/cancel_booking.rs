//! CancelBookingHandler - cancellation with an idempotence guard.

use std::sync::Arc;

use crate::domain::booking::Booking;
use crate::domain::foundation::BookingId;
use crate::ports::{ApiError, BookingApi};

/// Result of a cancellation request.
#[derive(Debug, Clone)]
pub enum CancelOutcome {
    /// The backend cancelled the booking and returned its final record.
    Cancelled(Booking),

    /// The booking was already cancelled; treated as success so a repeated
    /// tap or a replayed request cannot corrupt the flow.
    AlreadyCancelled,
}

pub struct CancelBookingHandler {
    api: Arc<dyn BookingApi>,
}

impl CancelBookingHandler {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, id: &BookingId) -> Result<CancelOutcome, ApiError> {
        match self.api.cancel_booking(id).await {
            Ok(booking) => Ok(CancelOutcome::Cancelled(booking)),
            Err(e) if is_already_cancelled(&e) => {
                tracing::info!(booking_id = %id, "Cancel repeated on a cancelled booking");
                Ok(CancelOutcome::AlreadyCancelled)
            }
            Err(e) => Err(e),
        }
    }
}

fn is_already_cancelled(error: &ApiError) -> bool {
    !error.is_retryable()
        && error
            .server_message
            .as_deref()
            .map(|m| m.to_lowercase().contains("already cancelled"))
            .unwrap_or(false)
}
