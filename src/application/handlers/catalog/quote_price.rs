//! QuotePriceHandler - server-side price calculation.

use std::sync::Arc;

use crate::domain::catalog::{PackageCategory, PriceQuote};
use crate::domain::dates::BookingDate;
use crate::domain::foundation::{PackageId, ValidationError};
use crate::ports::{BookingApi, PriceRequest};

use super::CatalogError;

/// Command for a price quote. Mirrors the booking form, so the same local
/// rules apply before the server is asked.
#[derive(Debug, Clone)]
pub struct QuotePriceCommand {
    pub package_id: PackageId,
    pub category: PackageCategory,
    pub check_in: BookingDate,
    pub check_out: BookingDate,
    pub room_quantity: Option<u32>,
    pub guest_count: Option<u32>,
}

pub struct QuotePriceHandler {
    api: Arc<dyn BookingApi>,
}

impl QuotePriceHandler {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, cmd: QuotePriceCommand) -> Result<PriceQuote, CatalogError> {
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

        let quote = self
            .api
            .calculate_price(
                &cmd.package_id,
                PriceRequest {
                    check_in: cmd.check_in,
                    check_out: cmd.check_out,
                    room_quantity: cmd.room_quantity,
                    guest_count: cmd.guest_count,
                },
            )
            .await?;

        Ok(quote)
    }
}
