//! CheckAvailabilityHandler - the gate before order creation.

use std::sync::Arc;

use crate::domain::booking::BookingFlowError;
use crate::domain::catalog::PackageCategory;
use crate::domain::dates::BookingDate;
use crate::domain::foundation::{PackageId, ValidationError};
use crate::ports::{AvailabilityRequest, BookingApi};

/// Availability query as entered on the booking form.
#[derive(Debug, Clone)]
pub struct CheckAvailabilityCommand {
    pub package_id: PackageId,
    pub category: PackageCategory,
    pub check_in: BookingDate,
    pub check_out: BookingDate,
    pub room_quantity: Option<u32>,
}

/// Handler for check-availability. An unavailable verdict is an error here
/// on purpose: it must block navigation to the next booking step.
pub struct CheckAvailabilityHandler {
    api: Arc<dyn BookingApi>,
}

impl CheckAvailabilityHandler {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, cmd: CheckAvailabilityCommand) -> Result<(), BookingFlowError> {
        // 1. Same local rules as the booking form; nothing leaves on failure
        if cmd.check_in.nights_until(&cmd.check_out) < 1 {
            return Err(ValidationError::invalid_format(
                "check_out",
                "check-out must be after check-in",
            )
            .into());
        }
        if cmd.category.requires_room_quantity() {
            match cmd.room_quantity {
                None => return Err(ValidationError::missing_required("room_quantity").into()),
                Some(qty) if qty < 1 => {
                    return Err(ValidationError::below_minimum("room_quantity", 1, qty).into())
                }
                Some(_) => {}
            }
        }

        // 2. Ask the backend
        let availability = self
            .api
            .check_availability(AvailabilityRequest {
                package_id: cmd.package_id,
                check_in: cmd.check_in,
                check_out: cmd.check_out,
                room_quantity: cmd.room_quantity,
            })
            .await
            .map_err(|e| {
                if e.is_retryable() {
                    BookingFlowError::connectivity(e.user_message())
                } else {
                    BookingFlowError::backend(e.user_message())
                }
            })?;

        // 3. Unavailable blocks progression
        if !availability.available {
            let message = availability
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| {
                    "The selected dates are not available for this package.".to_string()
                });
            return Err(BookingFlowError::not_available(message));
        }

        Ok(())
    }
}
