//! Venue resources: guest rooms, halls, and other bookable spaces.

use serde::{Deserialize, Serialize};

use super::foundation::ResourceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    GuestRoom,
    Hall,
    #[serde(other)]
    Other,
}

/// A physical resource included in packages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    pub kind: ResourceKind,
    pub capacity: Option<u32>,
    pub description: Option<String>,
}

impl Resource {
    pub fn is_guest_room(&self) -> bool {
        matches!(self.kind, ResourceKind::GuestRoom)
    }
}
