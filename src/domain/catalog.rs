//! Venue packages and pricing.

use serde::{Deserialize, Serialize};

use super::foundation::{PackageId, ResourceId};

/// Category tag attached to a package. Drives client-side validation:
/// rooms-only packages require a room quantity before booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageCategory {
    RoomsOnly,
    FullVenue,
    #[serde(other)]
    Other,
}

impl PackageCategory {
    /// Whether a booking for this category must carry a room quantity.
    pub fn requires_room_quantity(&self) -> bool {
        matches!(self, PackageCategory::RoomsOnly)
    }
}

/// Pricing rules advertised with a package. The authoritative breakdown is
/// always computed server-side via calculate-price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRules {
    /// Base price in minor currency units (paise).
    pub base_price: i64,

    /// GST percentage applied on top of the base price.
    pub gst_percent: f64,
}

/// A bookable venue offering. Read-only to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: PackageId,
    pub name: String,
    pub description: Option<String>,
    pub category: PackageCategory,
    pub pricing: PricingRules,
    pub included_resources: Vec<ResourceId>,
}

/// Server-computed price breakdown for a package, date range, and quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Base amount in minor units.
    pub base_amount: i64,

    /// GST amount in minor units.
    pub gst_amount: i64,

    /// Total payable in minor units.
    pub total_amount: i64,

    pub currency: String,
}
