//! Command handlers orchestrating ports into the app's use cases.

pub mod auth;
pub mod booking;
pub mod catalog;
