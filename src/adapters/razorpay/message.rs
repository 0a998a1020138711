//! Checkout widget callback messages.
//!
//! The embedded widget posts a single JSON message when it finishes:
//! `type` is `success`, `error`, or `dismissed`, with the corresponding
//! payload fields. This module parses that channel into [`PaymentEvent`].

use serde::Deserialize;

use crate::domain::foundation::{OrderId, PaymentId};
use crate::domain::payment::{GatewayFailure, PaymentConfirmation, PaymentEvent};
use crate::ports::GatewayError;

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum WidgetMessage {
    Success {
        razorpay_order_id: String,
        razorpay_payment_id: String,
        razorpay_signature: String,
    },
    Error {
        error: WidgetError,
    },
    Dismissed,
}

#[derive(Debug, Default, Deserialize)]
struct WidgetError {
    code: Option<String>,
    reason: Option<String>,
    description: Option<String>,
}

/// Parse the JSON message posted by the checkout widget.
pub fn parse_widget_message(raw: &str) -> Result<PaymentEvent, GatewayError> {
    let message: WidgetMessage =
        serde_json::from_str(raw).map_err(|e| GatewayError::InvalidMessage(e.to_string()))?;

    match message {
        WidgetMessage::Success {
            razorpay_order_id,
            razorpay_payment_id,
            razorpay_signature,
        } => {
            let order_id = OrderId::new(razorpay_order_id)
                .map_err(|e| GatewayError::InvalidMessage(e.to_string()))?;
            let payment_id = PaymentId::new(razorpay_payment_id)
                .map_err(|e| GatewayError::InvalidMessage(e.to_string()))?;
            if razorpay_signature.trim().is_empty() {
                return Err(GatewayError::InvalidMessage(
                    "success message without signature".to_string(),
                ));
            }
            Ok(PaymentEvent::Success(PaymentConfirmation {
                order_id,
                payment_id,
                signature: razorpay_signature,
            }))
        }
        WidgetMessage::Error { error } => Ok(PaymentEvent::Failed(GatewayFailure {
            code: error.code,
            reason: error.reason,
            description: error.description,
        })),
        WidgetMessage::Dismissed => Ok(PaymentEvent::Dismissed),
    }
}
