//! Booking backend port.
//!
//! Defines the contract for the remote REST API the app talks to, plus the
//! normalized error every call resolves to. Implementations attach the bearer
//! token, enforce the request timeout, and collapse transport failures into
//! [`ApiError`] so the rest of the crate never sees raw HTTP errors.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::booking::{Booking, BookingDraft, BookingOrder};
use crate::domain::catalog::{Package, PriceQuote};
use crate::domain::dates::BookingDate;
use crate::domain::foundation::{BookingId, OrderId, PackageId, PaymentId, ReceiptId, ResourceId};
use crate::domain::resource::Resource;
use crate::domain::session::{Session, UserProfile};

/// Message shown when the device cannot reach the backend at all.
pub const CONNECTIVITY_MESSAGE: &str =
    "Unable to reach the server. Please check your internet connection and try again.";

/// Every backend operation this client performs. Carried inside [`ApiError`]
/// so each failure can fall back to a message naming what actually failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    Register,
    FetchProfile,
    UpdateProfile,
    FetchPackages,
    FetchPackage,
    FetchPopularPackages,
    CalculatePrice,
    FetchResources,
    FetchGuestRooms,
    FetchResource,
    CheckAvailability,
    CreateOrder,
    VerifyPayment,
    FetchBookings,
    FetchBooking,
    CancelBooking,
}

impl Operation {
    /// Fallback message used when the server did not provide one.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Operation::Login => "Login failed. Please try again.",
            Operation::Register => "Registration failed. Please try again.",
            Operation::FetchProfile => "Failed to fetch your profile.",
            Operation::UpdateProfile => "Failed to update your profile.",
            Operation::FetchPackages => "Failed to fetch packages.",
            Operation::FetchPackage => "Failed to fetch package details.",
            Operation::FetchPopularPackages => "Failed to fetch popular packages.",
            Operation::CalculatePrice => "Failed to calculate the price.",
            Operation::FetchResources => "Failed to fetch resources.",
            Operation::FetchGuestRooms => "Failed to fetch guest rooms.",
            Operation::FetchResource => "Failed to fetch resource details.",
            Operation::CheckAvailability => "Failed to check availability.",
            Operation::CreateOrder => "Failed to create booking order.",
            Operation::VerifyPayment => "Failed to verify the payment.",
            Operation::FetchBookings => "Failed to fetch bookings.",
            Operation::FetchBooking => "Failed to fetch booking details.",
            Operation::CancelBooking => "Failed to cancel the booking.",
        }
    }
}

/// Failure classes every backend call collapses into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request exceeded the configured timeout.
    Timeout,

    /// No response at all: DNS, connection refused, offline.
    Network,

    /// The server answered with an error payload.
    Server,

    /// The token was missing, expired, or revoked.
    Unauthorized,

    /// The response body did not match the expected shape.
    Decode,
}

/// Normalized error for a backend call.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub operation: Operation,

    /// HTTP status, when a response was received.
    pub status: Option<u16>,

    /// Error message from the response body, shown verbatim when present.
    pub server_message: Option<String>,

    /// Internal detail for logs (decode failures); never shown to the user.
    pub detail: Option<String>,
}

impl ApiError {
    pub fn timeout(operation: Operation) -> Self {
        Self {
            kind: ApiErrorKind::Timeout,
            operation,
            status: None,
            server_message: None,
            detail: None,
        }
    }

    pub fn network(operation: Operation) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            operation,
            status: None,
            server_message: None,
            detail: None,
        }
    }

    pub fn server(operation: Operation, status: u16, message: Option<String>) -> Self {
        Self {
            kind: ApiErrorKind::Server,
            operation,
            status: Some(status),
            server_message: message,
            detail: None,
        }
    }

    pub fn unauthorized(operation: Operation, message: Option<String>) -> Self {
        Self {
            kind: ApiErrorKind::Unauthorized,
            operation,
            status: Some(401),
            server_message: message,
            detail: None,
        }
    }

    pub fn decode(operation: Operation, detail: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            operation,
            status: None,
            server_message: None,
            detail: Some(detail.into()),
        }
    }

    /// The single message the UI displays: connectivity text for transport
    /// failures, the server's message verbatim when present, else the
    /// operation fallback.
    pub fn user_message(&self) -> String {
        match self.kind {
            ApiErrorKind::Timeout | ApiErrorKind::Network => CONNECTIVITY_MESSAGE.to_string(),
            _ => self
                .server_message
                .clone()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| self.operation.fallback_message().to_string()),
        }
    }

    /// Authorization failures trigger session teardown instead of display.
    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized || self.status == Some(403)
    }

    /// Transport failures may be retried as-is.
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind, ApiErrorKind::Timeout | ApiErrorKind::Network)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ApiError {}

/// Credentials for login.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub phone_number: String,
    pub password: String,
}

/// New-account details for registration.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub password: String,
}

/// Partial profile update; unset fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

/// Input for server-side price calculation.
#[derive(Debug, Clone, Serialize)]
pub struct PriceRequest {
    pub check_in: BookingDate,
    pub check_out: BookingDate,
    pub room_quantity: Option<u32>,
    pub guest_count: Option<u32>,
}

/// Availability query for a package and date range.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityRequest {
    pub package_id: PackageId,
    pub check_in: BookingDate,
    pub check_out: BookingDate,
    pub room_quantity: Option<u32>,
}

/// Availability verdict from the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct Availability {
    pub available: bool,
    pub message: Option<String>,
}

/// Input for create-order: the validated draft plus a client receipt id.
#[derive(Debug, Clone)]
pub struct CreateOrderRequest {
    pub draft: BookingDraft,
    pub receipt: ReceiptId,
}

/// Input for verify-payment: the signed triple plus the draft booking id.
#[derive(Debug, Clone)]
pub struct VerifyPaymentRequest {
    pub booking_id: BookingId,
    pub order_id: OrderId,
    pub payment_id: PaymentId,
    pub signature: String,
}

/// Port for the booking backend.
///
/// One method per REST endpoint. Authenticated calls read the bearer token
/// from the session store; callers never pass tokens explicitly.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn login(&self, request: LoginRequest) -> Result<Session, ApiError>;

    async fn register(&self, request: RegisterRequest) -> Result<Session, ApiError>;

    /// `GET /auth/me`; doubles as token verification.
    async fn me(&self) -> Result<UserProfile, ApiError>;

    async fn update_profile(&self, request: UpdateProfileRequest) -> Result<UserProfile, ApiError>;

    async fn packages(&self) -> Result<Vec<Package>, ApiError>;

    async fn package(&self, id: &PackageId) -> Result<Package, ApiError>;

    async fn popular_packages(&self) -> Result<Vec<Package>, ApiError>;

    async fn calculate_price(
        &self,
        id: &PackageId,
        request: PriceRequest,
    ) -> Result<PriceQuote, ApiError>;

    async fn resources(&self) -> Result<Vec<Resource>, ApiError>;

    async fn guest_rooms(&self) -> Result<Vec<Resource>, ApiError>;

    async fn resource(&self, id: &ResourceId) -> Result<Resource, ApiError>;

    async fn check_availability(
        &self,
        request: AvailabilityRequest,
    ) -> Result<Availability, ApiError>;

    /// Creates the draft booking and its payment order. Callers must reuse
    /// the returned order on payment retries instead of calling this again.
    async fn create_order(&self, request: CreateOrderRequest) -> Result<BookingOrder, ApiError>;

    async fn verify_payment(&self, request: VerifyPaymentRequest) -> Result<Booking, ApiError>;

    async fn my_bookings(&self) -> Result<Vec<Booking>, ApiError>;

    async fn booking(&self, id: &BookingId) -> Result<Booking, ApiError>;

    async fn cancel_booking(&self, id: &BookingId) -> Result<Booking, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_api_is_object_safe() {
        fn _accepts_dyn(_api: &dyn BookingApi) {}
    }

    #[test]
    fn transport_failures_resolve_to_connectivity_message() {
        let err = ApiError::timeout(Operation::FetchBookings);
        assert_eq!(err.user_message(), CONNECTIVITY_MESSAGE);

        let err = ApiError::network(Operation::Login);
        assert_eq!(err.user_message(), CONNECTIVITY_MESSAGE);
    }

    #[test]
    fn server_message_is_shown_verbatim() {
        let err = ApiError::server(
            Operation::Login,
            400,
            Some("Invalid phone number or password".to_string()),
        );
        assert_eq!(err.user_message(), "Invalid phone number or password");
    }

    #[test]
    fn missing_server_message_falls_back_to_operation_text() {
        let err = ApiError::server(Operation::FetchBookings, 500, None);
        assert_eq!(err.user_message(), "Failed to fetch bookings.");

        let err = ApiError::server(Operation::FetchBookings, 500, Some("  ".to_string()));
        assert_eq!(err.user_message(), "Failed to fetch bookings.");
    }

    #[test]
    fn decode_detail_is_not_shown_to_the_user() {
        let err = ApiError::decode(Operation::FetchPackage, "missing field `pricing`");
        assert_eq!(err.user_message(), "Failed to fetch package details.");
        assert!(err.detail.as_deref().unwrap().contains("pricing"));
    }

    #[test]
    fn unauthorized_and_forbidden_are_detected() {
        let err = ApiError::unauthorized(Operation::FetchProfile, None);
        assert!(err.is_unauthorized());

        let forbidden = ApiError::server(Operation::FetchProfile, 403, None);
        assert!(forbidden.is_unauthorized());
    }

    #[test]
    fn only_transport_failures_are_retryable() {
        assert!(ApiError::timeout(Operation::CreateOrder).is_retryable());
        assert!(ApiError::network(Operation::CreateOrder).is_retryable());
        assert!(!ApiError::server(Operation::CreateOrder, 500, None).is_retryable());
    }
}
