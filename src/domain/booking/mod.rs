//! Booking domain: records, drafts, payment orders, and the checkout flow.

mod draft;
mod flow;
mod models;
mod order;

pub use draft::BookingDraft;
pub use flow::{
    order_failure_message, BookingFlow, BookingFlowError, FlowState, INVENTORY_GONE_MESSAGE,
};
pub use models::{
    Booking, BookingStatus, GuestDetails, PaymentStatus, PaymentSummary, PricingBreakdown,
};
pub use order::{BookingOrder, PaymentOrder};
