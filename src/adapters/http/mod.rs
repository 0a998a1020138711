//! HTTP adapter: the reqwest client for the booking backend.

mod client;
mod dto;

pub use client::HttpBookingApi;
