//! BrowsePackagesHandler - package listing and detail.

use std::sync::Arc;

use futures::try_join;

use crate::domain::catalog::Package;
use crate::domain::foundation::PackageId;
use crate::ports::{ApiError, BookingApi};

/// Data for the home view: full listing plus the popular strip.
#[derive(Debug, Clone)]
pub struct HomeCatalog {
    pub packages: Vec<Package>,
    pub popular: Vec<Package>,
}

pub struct BrowsePackagesHandler {
    api: Arc<dyn BookingApi>,
}

impl BrowsePackagesHandler {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self { api }
    }

    /// Fetch the full listing and the popular strip concurrently; both are
    /// read-only so there is nothing to coordinate beyond the join.
    pub async fn home(&self) -> Result<HomeCatalog, ApiError> {
        let (packages, popular) = try_join!(self.api.packages(), self.api.popular_packages())?;
        Ok(HomeCatalog { packages, popular })
    }

    pub async fn package(&self, id: &PackageId) -> Result<Package, ApiError> {
        self.api.package(id).await
    }
}
