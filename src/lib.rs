//! Bhavan Booking - client core for the venue booking application.
//!
//! Implements the non-UI heart of the app: the authenticated API client,
//! the local session store, and the booking/payment orchestration flow.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
