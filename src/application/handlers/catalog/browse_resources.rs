//! BrowseResourcesHandler - venue resource listings.

use std::sync::Arc;

use crate::domain::foundation::ResourceId;
use crate::domain::resource::Resource;
use crate::ports::{ApiError, BookingApi};

pub struct BrowseResourcesHandler {
    api: Arc<dyn BookingApi>,
}

impl BrowseResourcesHandler {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Resource>, ApiError> {
        self.api.resources().await
    }

    pub async fn guest_rooms(&self) -> Result<Vec<Resource>, ApiError> {
        self.api.guest_rooms().await
    }

    pub async fn detail(&self, id: &ResourceId) -> Result<Resource, ApiError> {
        self.api.resource(id).await
    }
}
