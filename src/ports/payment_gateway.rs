//! Payment gateway port.
//!
//! The checkout widget itself is third-party UI; this port is the channel to
//! it. An implementation presents checkout for a prepared order and resolves
//! to the single [`PaymentEvent`] the widget reports.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::OrderId;
use crate::domain::payment::PaymentEvent;

/// Prefill values forwarded to the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutPrefill {
    pub name: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
}

/// Everything the widget needs to collect a payment for a held order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutOptions {
    /// Gateway key id the checkout is opened with.
    pub key: String,

    /// Amount due in minor currency units.
    pub amount: i64,

    pub currency: String,

    /// The held Razorpay order; the success callback echoes it back.
    pub order_id: OrderId,

    /// Merchant display name shown in the checkout header.
    pub name: String,

    pub description: Option<String>,

    pub prefill: CheckoutPrefill,
}

/// Errors raised by the channel itself, not by the payment attempt.
/// A declined or abandoned payment is a [`PaymentEvent`], not an error.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Failed to present checkout: {0}")]
    Unavailable(String),

    #[error("Unrecognized message from checkout: {0}")]
    InvalidMessage(String),
}

/// Port for the embedded checkout widget.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Presents checkout for the given options and waits for the widget's
    /// outcome message.
    async fn checkout(&self, options: CheckoutOptions) -> Result<PaymentEvent, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn PaymentGateway) {}
    }

    #[test]
    fn checkout_options_serialize_for_the_widget() {
        let options = CheckoutOptions {
            key: "rzp_test_abc".to_string(),
            amount: 450_000,
            currency: "INR".to_string(),
            order_id: OrderId::new("order_N5XJbQ3fU0").unwrap(),
            name: "Bhavan Booking".to_string(),
            description: Some("Deluxe rooms, 2 nights".to_string()),
            prefill: CheckoutPrefill {
                name: Some("Asha Rao".to_string()),
                email: Some("asha@example.com".to_string()),
                contact: Some("9876543210".to_string()),
            },
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["key"], "rzp_test_abc");
        assert_eq!(json["order_id"], "order_N5XJbQ3fU0");
        assert_eq!(json["prefill"]["contact"], "9876543210");
    }
}
