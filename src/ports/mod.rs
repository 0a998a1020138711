//! Ports: contracts between the application core and the outside world.

mod booking_api;
mod payment_gateway;
mod session_store;

pub use booking_api::{
    ApiError, ApiErrorKind, Availability, AvailabilityRequest, BookingApi, CreateOrderRequest,
    LoginRequest, Operation, PriceRequest, RegisterRequest, UpdateProfileRequest,
    VerifyPaymentRequest, CONNECTIVITY_MESSAGE,
};
pub use payment_gateway::{CheckoutOptions, CheckoutPrefill, GatewayError, PaymentGateway};
pub use session_store::{SessionStore, SessionStoreError};
