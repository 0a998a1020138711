//! Booking handlers: availability gate, the payment flow driver, listings,
//! and cancellation.

mod booking_flow;
mod cancel_booking;
mod check_availability;
mod my_bookings;

pub use booking_flow::BookingFlowHandler;
pub use cancel_booking::{CancelBookingHandler, CancelOutcome};
pub use check_availability::{CheckAvailabilityCommand, CheckAvailabilityHandler};
pub use my_bookings::MyBookingsHandler;
