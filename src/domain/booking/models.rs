//! Booking records and their lifecycle.

use serde::{Deserialize, Serialize};

use crate::domain::dates::BookingDate;
use crate::domain::foundation::{BookingId, OrderId, PackageId, PaymentId, StateMachine};

/// Lifecycle of a reservation as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Draft created by create-order; payment not verified yet.
    Pending,

    /// Payment verified; the stay is reserved.
    Confirmed,

    /// Guest has arrived.
    CheckedIn,

    /// Stay completed.
    CheckedOut,

    /// Cancelled before or after confirmation.
    Cancelled,
}

impl BookingStatus {
    /// Whether the booking still occupies inventory.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            BookingStatus::Pending | BookingStatus::Confirmed | BookingStatus::CheckedIn
        )
    }

    /// Whether the user may still request cancellation.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

impl StateMachine for BookingStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use BookingStatus::*;
        matches!(
            (self, target),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, CheckedIn)
                | (Confirmed, Cancelled)
                | (CheckedIn, CheckedOut)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use BookingStatus::*;
        match self {
            Pending => vec![Confirmed, Cancelled],
            Confirmed => vec![CheckedIn, Cancelled],
            CheckedIn => vec![CheckedOut],
            CheckedOut => vec![],
            Cancelled => vec![],
        }
    }
}

/// Payment state attached to a booking record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

/// Guest contact details captured on the booking form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDetails {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub guest_count: Option<u32>,
}

/// Server-computed price breakdown stored with the booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    pub base_amount: i64,
    pub gst_amount: i64,
    pub total_amount: i64,
    pub currency: String,
}

/// Payment references attached to a booking record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub status: PaymentStatus,
    pub order_id: Option<OrderId>,
    pub payment_id: Option<PaymentId>,
}

/// A reservation record, draft or finalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub package_id: PackageId,
    pub status: BookingStatus,
    pub guest: GuestDetails,
    pub check_in: BookingDate,
    pub check_out: BookingDate,
    pub room_quantity: Option<u32>,
    pub pricing: PricingBreakdown,
    pub payment: PaymentSummary,
}
