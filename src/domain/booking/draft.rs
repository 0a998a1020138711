//! Booking form input and its local validation.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::PackageCategory;
use crate::domain::dates::BookingDate;
use crate::domain::foundation::{PackageId, ValidationError};

use super::models::GuestDetails;

/// Everything the user fills in before a booking order is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub package_id: PackageId,
    pub check_in: BookingDate,
    pub check_out: BookingDate,
    pub guest: GuestDetails,
    pub room_quantity: Option<u32>,
}

impl BookingDraft {
    /// Validates the draft against the package category.
    ///
    /// Rooms-only packages require an explicit room quantity of at least one;
    /// a draft that fails here never reaches the network.
    pub fn validate(&self, category: PackageCategory) -> Result<(), ValidationError> {
        if self.guest.name.trim().is_empty() {
            return Err(ValidationError::empty_field("guest_name"));
        }
        if self.check_in.nights_until(&self.check_out) < 1 {
            return Err(ValidationError::invalid_format(
                "check_out",
                "check-out must be after check-in",
            ));
        }
        if category.requires_room_quantity() {
            match self.room_quantity {
                None => return Err(ValidationError::missing_required("room_quantity")),
                Some(qty) if qty < 1 => {
                    return Err(ValidationError::below_minimum("room_quantity", 1, qty))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_guest() -> GuestDetails {
        GuestDetails {
            name: "Asha Rao".to_string(),
            phone_number: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
            guest_count: Some(2),
        }
    }

    fn test_draft(room_quantity: Option<u32>) -> BookingDraft {
        BookingDraft {
            package_id: PackageId::new("pkg_rooms").unwrap(),
            check_in: BookingDate::parse("10-03-2026").unwrap(),
            check_out: BookingDate::parse("12-03-2026").unwrap(),
            guest: test_guest(),
            room_quantity,
        }
    }

    #[test]
    fn rooms_only_rejects_missing_quantity() {
        let draft = test_draft(None);
        assert!(matches!(
            draft.validate(PackageCategory::RoomsOnly),
            Err(ValidationError::MissingRequired { .. })
        ));
    }

    #[test]
    fn rooms_only_rejects_zero_quantity() {
        let draft = test_draft(Some(0));
        assert!(matches!(
            draft.validate(PackageCategory::RoomsOnly),
            Err(ValidationError::BelowMinimum { .. })
        ));
    }

    #[test]
    fn rooms_only_accepts_positive_quantity() {
        let draft = test_draft(Some(2));
        assert!(draft.validate(PackageCategory::RoomsOnly).is_ok());
    }

    #[test]
    fn full_venue_does_not_need_quantity() {
        let draft = test_draft(None);
        assert!(draft.validate(PackageCategory::FullVenue).is_ok());
    }

    #[test]
    fn rejects_checkout_on_or_before_checkin() {
        let mut draft = test_draft(Some(1));
        draft.check_out = draft.check_in;
        assert!(draft.validate(PackageCategory::RoomsOnly).is_err());
    }

    #[test]
    fn rejects_blank_guest_name() {
        let mut draft = test_draft(Some(1));
        draft.guest.name = "  ".to_string();
        assert!(matches!(
            draft.validate(PackageCategory::RoomsOnly),
            Err(ValidationError::EmptyField { .. })
        ));
    }
}
