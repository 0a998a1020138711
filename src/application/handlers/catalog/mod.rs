//! Package and resource browsing handlers.

mod browse_packages;
mod browse_resources;
mod quote_price;

pub use browse_packages::{BrowsePackagesHandler, HomeCatalog};
pub use browse_resources::BrowseResourcesHandler;
pub use quote_price::{QuotePriceCommand, QuotePriceHandler};

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::ApiError;

/// Errors from catalog handlers: local validation or a normalized API error.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}
