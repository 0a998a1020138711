//! MyBookingsHandler - booking history and detail.

use std::sync::Arc;

use crate::domain::booking::Booking;
use crate::domain::foundation::BookingId;
use crate::ports::{ApiError, BookingApi};

pub struct MyBookingsHandler {
    api: Arc<dyn BookingApi>,
}

impl MyBookingsHandler {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Booking>, ApiError> {
        self.api.my_bookings().await
    }

    pub async fn detail(&self, id: &BookingId) -> Result<Booking, ApiError> {
        self.api.booking(id).await
    }
}
