//! Razorpay checkout channel: invocation building, callback parsing,
//! signature tooling, and a scriptable test double.

mod message;
mod mock_gateway;
mod options;
pub mod signature;

pub use message::parse_widget_message;
pub use mock_gateway::{MockRazorpayGateway, ScriptedOutcome};
pub use options::{options_for_order, MERCHANT_NAME};
