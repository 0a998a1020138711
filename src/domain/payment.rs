//! Payment gateway events and failure-message translation.
//!
//! The checkout widget reports exactly three outcomes: success with the
//! signed payment triple, a structured error, or a dismissal. Gateway error
//! reasons are opaque codes; a few are remapped to more actionable text
//! before they reach the user.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::foundation::{OrderId, PaymentId};

/// Fallback shown for gateway failures with no better translation.
pub const GENERIC_PAYMENT_FAILURE: &str = "Payment failed. Please try again.";

/// Guidance shown when the gateway refuses an international card. Test cards
/// issued for the Indian gateway sandbox avoid the restriction.
pub const INTERNATIONAL_CARD_GUIDANCE: &str =
    "International cards are not accepted. Please retry with an Indian card \
     (in test mode, use the test card 4111 1111 1111 1111).";

/// Gateway failure reasons that get a dedicated message instead of the
/// generic fallback.
static REMAPPED_FAILURE_REASONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([(
        "international_transaction_not_allowed",
        INTERNATIONAL_CARD_GUIDANCE,
    )])
});

/// The signed triple the widget reports on success. All three values plus the
/// booking id go to the backend for signature verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub order_id: OrderId,
    pub payment_id: PaymentId,
    pub signature: String,
}

/// Structured failure payload from the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayFailure {
    pub code: Option<String>,
    pub reason: Option<String>,
    pub description: Option<String>,
}

impl GatewayFailure {
    /// Human-readable message for this failure: a remapped text when the
    /// reason is recognized, else the gateway description, else the generic
    /// fallback.
    pub fn user_message(&self) -> String {
        if let Some(reason) = self.reason.as_deref() {
            if let Some(remapped) = REMAPPED_FAILURE_REASONS.get(reason) {
                return (*remapped).to_string();
            }
        }
        self.description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| GENERIC_PAYMENT_FAILURE.to_string())
    }
}

/// Outcome reported by the payment widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentEvent {
    Success(PaymentConfirmation),
    Failed(GatewayFailure),
    Dismissed,
}
