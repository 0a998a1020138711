//! Booking-and-payment orchestration state.
//!
//! The checkout sequence is create-order, pay, verify, confirm. This module
//! holds the state machine that keeps the sequence honest: a held payment
//! order is reused on every retry, and stale completions from an abandoned
//! attempt are discarded by generation.

use thiserror::Error;

use crate::domain::catalog::PackageCategory;
use crate::domain::foundation::{StateMachine, ValidationError};

use super::draft::BookingDraft;
use super::order::BookingOrder;

/// Message shown when create-order fails because the inventory was taken
/// between the availability check and the order.
pub const INVENTORY_GONE_MESSAGE: &str =
    "The selected dates were just booked by someone else. Please pick different \
     dates and try again.";

/// Where the flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Nothing submitted yet, or an order-creation failure rolled us back.
    Idle,

    /// create-order is in flight.
    OrderCreating,

    /// An order is held; checkout can be opened (or re-opened).
    AwaitingPayment,

    /// verify-payment is in flight.
    Verifying,

    /// The backend confirmed the booking.
    Confirmed,
}

impl StateMachine for FlowState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use FlowState::*;
        matches!(
            (self, target),
            (Idle, OrderCreating)
                | (OrderCreating, AwaitingPayment)
                | (OrderCreating, Idle)
                | (AwaitingPayment, Verifying)
                | (AwaitingPayment, AwaitingPayment)
                | (Verifying, Confirmed)
                | (Verifying, AwaitingPayment)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use FlowState::*;
        match self {
            Idle => vec![OrderCreating],
            OrderCreating => vec![AwaitingPayment, Idle],
            AwaitingPayment => vec![Verifying, AwaitingPayment],
            Verifying => vec![Confirmed, AwaitingPayment],
            Confirmed => vec![],
        }
    }
}

/// Errors surfaced by the booking flow.
#[derive(Debug, Error)]
pub enum BookingFlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A payment order is already held; it must be reused, not recreated")]
    OrderAlreadyHeld,

    #[error("No payment order is held")]
    NoOrderHeld,

    #[error("Booking flow cannot {action} from {state:?}")]
    InvalidStep {
        action: &'static str,
        state: FlowState,
    },

    /// The package/date range cannot be booked; blocks progression.
    #[error("{message}")]
    NotAvailable { message: String },

    /// create-order was rejected; the flow is back at [`FlowState::Idle`].
    #[error("{message}")]
    OrderCreation { message: String },

    /// The gateway reported a failure; the held order stays reusable.
    #[error("{message}")]
    Payment { message: String },

    /// The user closed checkout; the held order stays reusable.
    #[error("Payment was cancelled before completion")]
    PaymentDismissed,

    /// verify-payment failed; the flow returns to awaiting payment.
    #[error("{message}")]
    Verification { message: String },

    /// Timeout or no network; the same step may be retried.
    #[error("{message}")]
    Connectivity { message: String },

    /// Any other backend rejection around the flow (availability, pricing).
    #[error("{message}")]
    Backend { message: String },
}

impl BookingFlowError {
    pub fn not_available(message: impl Into<String>) -> Self {
        BookingFlowError::NotAvailable {
            message: message.into(),
        }
    }

    pub fn order_creation(message: impl Into<String>) -> Self {
        BookingFlowError::OrderCreation {
            message: message.into(),
        }
    }

    pub fn payment(message: impl Into<String>) -> Self {
        BookingFlowError::Payment {
            message: message.into(),
        }
    }

    pub fn verification(message: impl Into<String>) -> Self {
        BookingFlowError::Verification {
            message: message.into(),
        }
    }

    pub fn connectivity(message: impl Into<String>) -> Self {
        BookingFlowError::Connectivity {
            message: message.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        BookingFlowError::Backend {
            message: message.into(),
        }
    }

    /// Whether the user can retry without losing flow progress.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            BookingFlowError::Payment { .. }
                | BookingFlowError::PaymentDismissed
                | BookingFlowError::Verification { .. }
                | BookingFlowError::Connectivity { .. }
        )
    }
}

/// Picks the message for a failed create-order call: inventory-gone failures
/// get the dedicated text, anything else shows the server message when
/// present, else the step fallback.
pub fn order_failure_message(server_message: Option<&str>, fallback: &str) -> String {
    match server_message {
        Some(msg) => {
            let lowered = msg.to_lowercase();
            if lowered.contains("not available")
                || lowered.contains("no longer available")
                || lowered.contains("sold out")
            {
                INVENTORY_GONE_MESSAGE.to_string()
            } else {
                msg.to_string()
            }
        }
        None => fallback.to_string(),
    }
}

/// One booking attempt from form submission to confirmation.
///
/// All mutations go through transition-checked methods; illegal sequences
/// (double create-order, verifying without an order) are unrepresentable at
/// the call site.
#[derive(Debug)]
pub struct BookingFlow {
    draft: BookingDraft,
    category: PackageCategory,
    state: FlowState,
    order: Option<BookingOrder>,
    generation: u64,
}

impl BookingFlow {
    /// Starts a flow for a validated draft. Validation failures are local and
    /// happen before any network call.
    pub fn new(draft: BookingDraft, category: PackageCategory) -> Result<Self, BookingFlowError> {
        draft.validate(category)?;
        Ok(Self {
            draft,
            category,
            state: FlowState::Idle,
            order: None,
            generation: 0,
        })
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn category(&self) -> PackageCategory {
        self.category
    }

    /// The held order, if create-order already succeeded this attempt.
    pub fn order(&self) -> Option<&BookingOrder> {
        self.order.as_ref()
    }

    /// Current generation; completions tagged with an older generation are
    /// discarded by [`BookingFlow::is_current`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a completion tagged with `generation` may still be applied.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    fn step(&mut self, action: &'static str, target: FlowState) -> Result<(), BookingFlowError> {
        self.state = self
            .state
            .transition_to(target)
            .map_err(|_| BookingFlowError::InvalidStep {
                action,
                state: self.state,
            })?;
        Ok(())
    }

    /// Enters [`FlowState::OrderCreating`]. Refused while an order is held:
    /// a held order must be reused, never recreated.
    pub fn begin_order_creation(&mut self) -> Result<(), BookingFlowError> {
        if self.order.is_some() {
            return Err(BookingFlowError::OrderAlreadyHeld);
        }
        self.step("create an order", FlowState::OrderCreating)
    }

    /// Stores the created order and moves to awaiting payment.
    pub fn order_created(&mut self, order: BookingOrder) -> Result<(), BookingFlowError> {
        self.step("accept an order", FlowState::AwaitingPayment)?;
        self.order = Some(order);
        Ok(())
    }

    /// Rolls back to idle after a create-order failure.
    pub fn order_failed(&mut self) -> Result<(), BookingFlowError> {
        self.step("abandon order creation", FlowState::Idle)
    }

    /// Re-arms checkout against the held order after a failed or dismissed
    /// payment attempt.
    pub fn reopen_payment(&mut self) -> Result<&BookingOrder, BookingFlowError> {
        if self.order.is_none() {
            return Err(BookingFlowError::NoOrderHeld);
        }
        self.step("reopen checkout", FlowState::AwaitingPayment)?;
        Ok(self.order.as_ref().expect("order checked above"))
    }

    /// Enters [`FlowState::Verifying`] once the widget reports success.
    pub fn begin_verification(&mut self) -> Result<(), BookingFlowError> {
        if self.order.is_none() {
            return Err(BookingFlowError::NoOrderHeld);
        }
        self.step("verify a payment", FlowState::Verifying)
    }

    /// Marks the flow confirmed after server-side verification.
    pub fn confirmed(&mut self) -> Result<(), BookingFlowError> {
        self.step("confirm the booking", FlowState::Confirmed)
    }

    /// Returns to awaiting payment after a verification failure; the held
    /// order remains reusable.
    pub fn verification_failed(&mut self) -> Result<(), BookingFlowError> {
        self.step("retry after verification failure", FlowState::AwaitingPayment)
    }

    /// Abandons the attempt: state back to idle, order dropped, generation
    /// bumped so in-flight completions from the old attempt are ignored.
    pub fn reset(&mut self) {
        self.state = FlowState::Idle;
        self.order = None;
        self.generation += 1;
    }
}
