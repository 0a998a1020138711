//! Strongly-typed identifier value objects.
//!
//! Server-assigned identifiers (packages, bookings, resources, Razorpay
//! orders and payments) are opaque strings on the wire; the newtypes below
//! keep them from being mixed up. Receipt ids are generated client-side.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident, $field:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier, rejecting empty values.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(value))
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id!(
    /// Unique identifier for a venue package.
    PackageId,
    "package_id"
);

string_id!(
    /// Unique identifier for a venue resource (room, hall).
    ResourceId,
    "resource_id"
);

string_id!(
    /// Unique identifier for a booking (draft or confirmed).
    BookingId,
    "booking_id"
);

string_id!(
    /// Razorpay order identifier returned by create-order.
    OrderId,
    "order_id"
);

string_id!(
    /// Razorpay payment identifier reported by the checkout widget.
    PaymentId,
    "payment_id"
);

/// Client-generated receipt identifier attached to create-order requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Creates a new random ReceiptId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rcpt_{}", self.0.simple())
    }
}
