//! HTTP implementation of the booking backend port.
//!
//! A thin reqwest client: JSON in and out, bearer token attached from the
//! session store, one timeout for every call, and the three transport
//! failure classes collapsed into [`ApiError`] in a single place.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::domain::booking::{Booking, BookingOrder};
use crate::domain::catalog::{Package, PriceQuote};
use crate::domain::foundation::{BookingId, PackageId, ResourceId};
use crate::domain::resource::Resource;
use crate::domain::session::{bearer_value, Session, UserProfile};
use crate::ports::{
    ApiError, Availability, AvailabilityRequest, BookingApi, CreateOrderRequest, LoginRequest,
    Operation, PriceRequest, RegisterRequest, SessionStore, UpdateProfileRequest,
    VerifyPaymentRequest,
};

use super::dto::{
    ApiEnvelope, AuthResponseDto, AvailabilityBody, BookingDto, CreateOrderBody,
    CreateOrderResponseDto, ErrorBody, LoginBody, PackageDto, PriceBody, PriceQuoteDto,
    RegisterBody, ResourceDto, UpdateProfileBody, VerifyPaymentBody,
};

/// reqwest-backed [`BookingApi`].
pub struct HttpBookingApi {
    base_url: String,
    http: reqwest::Client,
    store: Arc<dyn SessionStore>,
}

impl HttpBookingApi {
    /// Build the client from configuration. The timeout applies to every
    /// request, connection setup included.
    pub fn new(config: &ApiConfig, store: Arc<dyn SessionStore>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.trimmed_base_url().to_string(),
            http,
            store,
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Execute a call and normalize its outcome.
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        operation: Operation,
    ) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.url_for(path);
        tracing::debug!(method = %method, %url, "API request");

        let mut builder = self.http.request(method, &url);

        // The token rides along automatically whenever one is stored.
        if let Some(token) = self.store.token().await {
            builder = builder.header(reqwest::header::AUTHORIZATION, bearer_value(&token));
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                tracing::warn!(%url, "API request timed out");
                ApiError::timeout(operation)
            } else {
                tracing::warn!(%url, error = %e, "API request failed without a response");
                ApiError::network(operation)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .ok()
                .and_then(|raw| serde_json::from_str::<ErrorBody>(&raw).ok())
                .and_then(|body| body.message);

            tracing::warn!(%url, status = status.as_u16(), ?message, "API error response");

            return Err(if status == StatusCode::UNAUTHORIZED {
                ApiError::unauthorized(operation, message)
            } else {
                ApiError::server(operation, status.as_u16(), message)
            });
        }

        let raw = response
            .text()
            .await
            .map_err(|e| ApiError::decode(operation, e.to_string()))?;

        let envelope: ApiEnvelope<T> = serde_json::from_str(&raw)
            .map_err(|e| ApiError::decode(operation, e.to_string()))?;

        envelope
            .data
            .ok_or_else(|| ApiError::decode(operation, "response envelope missing `data`"))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, op: Operation) -> Result<T, ApiError> {
        self.request::<(), T>(Method::GET, path, None, op).await
    }

    async fn post<B, T>(&self, path: &str, body: &B, op: Operation) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body), op).await
    }

    async fn put<B, T>(&self, path: &str, body: &B, op: Operation) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, path, Some(body), op).await
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn login(&self, request: LoginRequest) -> Result<Session, ApiError> {
        let body = LoginBody {
            phone_number: &request.phone_number,
            password: &request.password,
        };
        let auth: AuthResponseDto = self.post("/auth/login", &body, Operation::Login).await?;
        Ok(auth.into())
    }

    async fn register(&self, request: RegisterRequest) -> Result<Session, ApiError> {
        let body = RegisterBody {
            full_name: &request.full_name,
            phone_number: &request.phone_number,
            email: &request.email,
            password: &request.password,
        };
        let auth: AuthResponseDto = self
            .post("/auth/register", &body, Operation::Register)
            .await?;
        Ok(auth.into())
    }

    async fn me(&self) -> Result<UserProfile, ApiError> {
        let profile: super::dto::UserProfileDto =
            self.get("/auth/me", Operation::FetchProfile).await?;
        Ok(profile.into())
    }

    async fn update_profile(&self, request: UpdateProfileRequest) -> Result<UserProfile, ApiError> {
        let body = UpdateProfileBody {
            full_name: request.full_name.as_deref(),
            email: request.email.as_deref(),
        };
        let profile: super::dto::UserProfileDto = self
            .put("/auth/update-profile", &body, Operation::UpdateProfile)
            .await?;
        Ok(profile.into())
    }

    async fn packages(&self) -> Result<Vec<Package>, ApiError> {
        let packages: Vec<PackageDto> = self.get("/packages", Operation::FetchPackages).await?;
        Ok(packages.into_iter().map(Into::into).collect())
    }

    async fn package(&self, id: &PackageId) -> Result<Package, ApiError> {
        let package: PackageDto = self
            .get(&format!("/packages/{}", id), Operation::FetchPackage)
            .await?;
        Ok(package.into())
    }

    async fn popular_packages(&self) -> Result<Vec<Package>, ApiError> {
        let packages: Vec<PackageDto> = self
            .get("/packages/popular/list", Operation::FetchPopularPackages)
            .await?;
        Ok(packages.into_iter().map(Into::into).collect())
    }

    async fn calculate_price(
        &self,
        id: &PackageId,
        request: PriceRequest,
    ) -> Result<PriceQuote, ApiError> {
        let body = PriceBody {
            check_in: request.check_in,
            check_out: request.check_out,
            room_quantity: request.room_quantity,
            guest_count: request.guest_count,
        };
        let quote: PriceQuoteDto = self
            .post(
                &format!("/packages/{}/calculate-price", id),
                &body,
                Operation::CalculatePrice,
            )
            .await?;
        Ok(quote.into())
    }

    async fn resources(&self) -> Result<Vec<Resource>, ApiError> {
        let resources: Vec<ResourceDto> =
            self.get("/resources", Operation::FetchResources).await?;
        Ok(resources.into_iter().map(Into::into).collect())
    }

    async fn guest_rooms(&self) -> Result<Vec<Resource>, ApiError> {
        let resources: Vec<ResourceDto> = self
            .get("/resources/guest-rooms", Operation::FetchGuestRooms)
            .await?;
        Ok(resources.into_iter().map(Into::into).collect())
    }

    async fn resource(&self, id: &ResourceId) -> Result<Resource, ApiError> {
        let resource: ResourceDto = self
            .get(&format!("/resources/{}", id), Operation::FetchResource)
            .await?;
        Ok(resource.into())
    }

    async fn check_availability(
        &self,
        request: AvailabilityRequest,
    ) -> Result<Availability, ApiError> {
        let body = AvailabilityBody {
            package_id: &request.package_id,
            check_in: request.check_in,
            check_out: request.check_out,
            room_quantity: request.room_quantity,
        };
        self.post(
            "/bookings/check-availability",
            &body,
            Operation::CheckAvailability,
        )
        .await
    }

    async fn create_order(&self, request: CreateOrderRequest) -> Result<BookingOrder, ApiError> {
        let body = CreateOrderBody::from_draft(&request.draft, request.receipt);
        let response: CreateOrderResponseDto = self
            .post("/bookings/create-order", &body, Operation::CreateOrder)
            .await?;
        Ok(response.into_booking_order(request.receipt))
    }

    async fn verify_payment(&self, request: VerifyPaymentRequest) -> Result<Booking, ApiError> {
        let body = VerifyPaymentBody {
            booking_id: &request.booking_id,
            razorpay_order_id: &request.order_id,
            razorpay_payment_id: &request.payment_id,
            razorpay_signature: &request.signature,
        };
        let booking: BookingDto = self
            .post("/bookings/verify-payment", &body, Operation::VerifyPayment)
            .await?;
        Ok(booking.into())
    }

    async fn my_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        let bookings: Vec<BookingDto> = self
            .get("/bookings/my-bookings", Operation::FetchBookings)
            .await?;
        Ok(bookings.into_iter().map(Into::into).collect())
    }

    async fn booking(&self, id: &BookingId) -> Result<Booking, ApiError> {
        let booking: BookingDto = self
            .get(&format!("/bookings/{}", id), Operation::FetchBooking)
            .await?;
        Ok(booking.into())
    }

    async fn cancel_booking(&self, id: &BookingId) -> Result<Booking, ApiError> {
        let booking: BookingDto = self
            .post(
                &format!("/bookings/{}/cancel", id),
                &serde_json::json!({}),
                Operation::CancelBooking,
            )
            .await?;
        Ok(booking.into())
    }
}
