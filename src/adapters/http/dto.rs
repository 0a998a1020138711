//! Wire DTOs for the booking backend.
//!
//! The backend speaks camelCase JSON and wraps payloads in a
//! `{ data, message }` envelope; error bodies carry `message` only. Dates
//! cross the wire in day-month-year form via [`BookingDate`]'s serde impl.

use serde::{Deserialize, Serialize};

use crate::domain::booking::{
    Booking, BookingDraft, BookingOrder, BookingStatus, GuestDetails, PaymentOrder,
    PaymentStatus, PaymentSummary, PricingBreakdown,
};
use crate::domain::catalog::{Package, PackageCategory, PriceQuote, PricingRules};
use crate::domain::dates::BookingDate;
use crate::domain::foundation::{
    BookingId, OrderId, PackageId, PaymentId, ReceiptId, ResourceId,
};
use crate::domain::resource::{Resource, ResourceKind};
use crate::domain::session::{Session, UserProfile};

/// Standard success envelope.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: Option<T>,
    #[allow(dead_code)]
    pub message: Option<String>,
}

/// Error body; only `message` matters.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

// ---- Auth ----

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
}

impl From<UserProfileDto> for UserProfile {
    fn from(dto: UserProfileDto) -> Self {
        UserProfile {
            full_name: dto.full_name,
            phone_number: dto.phone_number,
            email: dto.email,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AuthResponseDto {
    pub token: String,
    pub user: UserProfileDto,
}

impl From<AuthResponseDto> for Session {
    fn from(dto: AuthResponseDto) -> Self {
        Session::new(dto.token, dto.user.into())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginBody<'a> {
    pub phone_number: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBody<'a> {
    pub full_name: &'a str,
    pub phone_number: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
}

// ---- Catalog ----

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRulesDto {
    pub base_price: i64,
    pub gst_percent: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDto {
    pub id: PackageId,
    pub name: String,
    pub description: Option<String>,
    pub category: PackageCategory,
    pub pricing: PricingRulesDto,
    #[serde(default)]
    pub included_resources: Vec<ResourceId>,
}

impl From<PackageDto> for Package {
    fn from(dto: PackageDto) -> Self {
        Package {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            category: dto.category,
            pricing: PricingRules {
                base_price: dto.pricing.base_price,
                gst_percent: dto.pricing.gst_percent,
            },
            included_resources: dto.included_resources,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuoteDto {
    pub base_amount: i64,
    pub gst_amount: i64,
    pub total_amount: i64,
    pub currency: String,
}

impl From<PriceQuoteDto> for PriceQuote {
    fn from(dto: PriceQuoteDto) -> Self {
        PriceQuote {
            base_amount: dto.base_amount,
            gst_amount: dto.gst_amount,
            total_amount: dto.total_amount,
            currency: dto.currency,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBody {
    pub check_in: BookingDate,
    pub check_out: BookingDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<u32>,
}

// ---- Resources ----

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDto {
    pub id: ResourceId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub capacity: Option<u32>,
    pub description: Option<String>,
}

impl From<ResourceDto> for Resource {
    fn from(dto: ResourceDto) -> Self {
        Resource {
            id: dto.id,
            name: dto.name,
            kind: dto.kind,
            capacity: dto.capacity,
            description: dto.description,
        }
    }
}

// ---- Bookings ----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityBody<'a> {
    pub package_id: &'a PackageId,
    pub check_in: BookingDate,
    pub check_out: BookingDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_quantity: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestDetailsBody<'a> {
    pub name: &'a str,
    pub phone_number: &'a str,
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderBody<'a> {
    pub package_id: &'a PackageId,
    pub check_in: BookingDate,
    pub check_out: BookingDate,
    pub guest_details: GuestDetailsBody<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_quantity: Option<u32>,
    pub receipt: ReceiptId,
}

impl<'a> CreateOrderBody<'a> {
    pub fn from_draft(draft: &'a BookingDraft, receipt: ReceiptId) -> Self {
        Self {
            package_id: &draft.package_id,
            check_in: draft.check_in,
            check_out: draft.check_out,
            guest_details: GuestDetailsBody {
                name: &draft.guest.name,
                phone_number: &draft.guest.phone_number,
                email: &draft.guest.email,
                guest_count: draft.guest.guest_count,
            },
            room_quantity: draft.room_quantity,
            receipt,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RazorpayOrderDto {
    pub id: OrderId,
    pub amount: i64,
    pub currency: String,
    pub key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponseDto {
    pub booking_id: BookingId,
    pub order: RazorpayOrderDto,
}

impl CreateOrderResponseDto {
    pub fn into_booking_order(self, receipt: ReceiptId) -> BookingOrder {
        BookingOrder {
            booking_id: self.booking_id,
            payment: PaymentOrder {
                order_id: self.order.id,
                amount: self.order.amount,
                currency: self.order.currency,
                key_id: self.order.key,
            },
            receipt,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentBody<'a> {
    pub booking_id: &'a BookingId,
    pub razorpay_order_id: &'a OrderId,
    pub razorpay_payment_id: &'a PaymentId,
    pub razorpay_signature: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestDetailsDto {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub guest_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdownDto {
    pub base_amount: i64,
    pub gst_amount: i64,
    pub total_amount: i64,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummaryDto {
    pub status: PaymentStatus,
    pub order_id: Option<OrderId>,
    pub payment_id: Option<PaymentId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: BookingId,
    pub package_id: PackageId,
    pub status: BookingStatus,
    pub guest: GuestDetailsDto,
    pub check_in: BookingDate,
    pub check_out: BookingDate,
    pub room_quantity: Option<u32>,
    pub pricing: PricingBreakdownDto,
    pub payment: PaymentSummaryDto,
}

impl From<BookingDto> for Booking {
    fn from(dto: BookingDto) -> Self {
        Booking {
            id: dto.id,
            package_id: dto.package_id,
            status: dto.status,
            guest: GuestDetails {
                name: dto.guest.name,
                phone_number: dto.guest.phone_number,
                email: dto.guest.email,
                guest_count: dto.guest.guest_count,
            },
            check_in: dto.check_in,
            check_out: dto.check_out,
            room_quantity: dto.room_quantity,
            pricing: PricingBreakdown {
                base_amount: dto.pricing.base_amount,
                gst_amount: dto.pricing.gst_amount,
                total_amount: dto.pricing.total_amount,
                currency: dto.pricing.currency,
            },
            payment: PaymentSummary {
                status: dto.payment.status,
                order_id: dto.payment.order_id,
                payment_id: dto.payment.payment_id,
            },
        }
    }
}
