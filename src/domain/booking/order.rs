//! Draft booking orders pending payment.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BookingId, OrderId, ReceiptId};

/// Payment-order reference returned by create-order. Everything the checkout
/// widget needs to collect the payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOrder {
    /// Razorpay order id. The widget's success callback echoes it back.
    pub order_id: OrderId,

    /// Amount due in minor currency units.
    pub amount: i64,

    pub currency: String,

    /// Gateway key id the checkout must be opened with.
    pub key_id: String,
}

/// A draft booking plus its payment order, held for idempotent retry.
///
/// While one of these is held, create-order must not be called again: a
/// failed or dismissed payment re-opens checkout against the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingOrder {
    pub booking_id: BookingId,
    pub payment: PaymentOrder,
    pub receipt: ReceiptId,
}
