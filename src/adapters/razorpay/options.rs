//! Checkout invocation construction.

use crate::domain::booking::{BookingOrder, GuestDetails};
use crate::ports::{CheckoutOptions, CheckoutPrefill};

/// Merchant display name shown in the checkout header.
pub const MERCHANT_NAME: &str = "Bhavan Booking";

/// Build the checkout invocation for a held order, prefilled with the guest
/// details from the booking form. Amount, currency, and key come from the
/// order itself so a retry always reopens checkout with identical values.
pub fn options_for_order(order: &BookingOrder, guest: &GuestDetails) -> CheckoutOptions {
    CheckoutOptions {
        key: order.payment.key_id.clone(),
        amount: order.payment.amount,
        currency: order.payment.currency.clone(),
        order_id: order.payment.order_id.clone(),
        name: MERCHANT_NAME.to_string(),
        description: Some(format!("Booking {}", order.booking_id)),
        prefill: CheckoutPrefill {
            name: Some(guest.name.clone()),
            email: Some(guest.email.clone()),
            contact: Some(guest.phone_number.clone()),
        },
    }
}
