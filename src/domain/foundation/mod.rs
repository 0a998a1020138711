//! Foundation types shared by every domain module.

mod errors;
mod ids;
mod state_machine;

pub use errors::ValidationError;
pub use ids::{BookingId, OrderId, PackageId, PaymentId, ReceiptId, ResourceId};
pub use state_machine::StateMachine;
