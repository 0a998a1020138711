//! BookingFlowHandler - drives a flow through create-order, checkout, and
//! verification.
//!
//! The handler owns the I/O; [`BookingFlow`] owns the state. Between them the
//! two hard rules of the payment sequence hold:
//!
//! - a held order is reused on every retry; create-order runs at most once
//!   per flow attempt,
//! - a completion from an abandoned attempt (stale generation) is discarded
//!   instead of being applied.

use std::sync::Arc;

use crate::adapters::razorpay::options_for_order;
use crate::domain::booking::{
    order_failure_message, Booking, BookingFlow, BookingFlowError, FlowState,
};
use crate::domain::payment::PaymentEvent;
use crate::domain::foundation::ReceiptId;
use crate::ports::{
    BookingApi, CreateOrderRequest, Operation, PaymentGateway, VerifyPaymentRequest,
};

pub struct BookingFlowHandler {
    api: Arc<dyn BookingApi>,
    gateway: Arc<dyn PaymentGateway>,
}

impl BookingFlowHandler {
    pub fn new(api: Arc<dyn BookingApi>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { api, gateway }
    }

    /// Ensure the flow holds a payment order, creating one if this is the
    /// first attempt. A flow that already holds an order is re-armed for
    /// checkout without touching create-order.
    pub async fn start(&self, flow: &mut BookingFlow) -> Result<(), BookingFlowError> {
        match flow.state() {
            FlowState::AwaitingPayment => {
                flow.reopen_payment()?;
                tracing::debug!("Reusing held payment order");
                Ok(())
            }
            FlowState::Idle => {
                flow.begin_order_creation()?;

                let receipt = ReceiptId::new();
                let request = CreateOrderRequest {
                    draft: flow.draft().clone(),
                    receipt,
                };

                match self.api.create_order(request).await {
                    Ok(order) => {
                        tracing::info!(
                            booking_id = %order.booking_id,
                            order_id = %order.payment.order_id,
                            "Booking order created"
                        );
                        flow.order_created(order)
                    }
                    Err(e) if e.is_retryable() => {
                        flow.order_failed()?;
                        Err(BookingFlowError::connectivity(e.user_message()))
                    }
                    Err(e) => {
                        flow.order_failed()?;
                        Err(BookingFlowError::order_creation(order_failure_message(
                            e.server_message.as_deref(),
                            Operation::CreateOrder.fallback_message(),
                        )))
                    }
                }
            }
            state => Err(BookingFlowError::InvalidStep {
                action: "start",
                state,
            }),
        }
    }

    /// Open checkout for the held order and resolve the attempt. Payment
    /// failures and dismissals leave the flow awaiting payment with the same
    /// order, ready for [`BookingFlowHandler::run`] to be called again.
    pub async fn take_payment(&self, flow: &mut BookingFlow) -> Result<Booking, BookingFlowError> {
        let order = match flow.state() {
            FlowState::AwaitingPayment => {
                flow.order().ok_or(BookingFlowError::NoOrderHeld)?.clone()
            }
            state => {
                return Err(BookingFlowError::InvalidStep {
                    action: "open checkout",
                    state,
                })
            }
        };

        let options = options_for_order(&order, &flow.draft().guest);
        let event = self
            .gateway
            .checkout(options)
            .await
            .map_err(|e| BookingFlowError::payment(e.to_string()))?;

        self.complete_payment(flow, event).await
    }

    /// One full attempt: ensure an order, collect the payment, verify.
    pub async fn run(&self, flow: &mut BookingFlow) -> Result<Booking, BookingFlowError> {
        self.start(flow).await?;
        self.take_payment(flow).await
    }

    /// Apply a widget outcome delivered out-of-band. Outcomes from an
    /// abandoned attempt are discarded: `Ok(None)` means the event was stale
    /// and nothing changed.
    pub async fn apply_payment_event(
        &self,
        flow: &mut BookingFlow,
        generation: u64,
        event: PaymentEvent,
    ) -> Result<Option<Booking>, BookingFlowError> {
        if !flow.is_current(generation) {
            tracing::info!("Discarding payment event from a stale flow attempt");
            return Ok(None);
        }
        self.complete_payment(flow, event).await.map(Some)
    }

    async fn complete_payment(
        &self,
        flow: &mut BookingFlow,
        event: PaymentEvent,
    ) -> Result<Booking, BookingFlowError> {
        match event {
            PaymentEvent::Success(confirmation) => {
                let order = flow.order().ok_or(BookingFlowError::NoOrderHeld)?.clone();

                // The widget must be reporting the order we opened it with.
                if confirmation.order_id != order.payment.order_id {
                    flow.reopen_payment()?;
                    return Err(BookingFlowError::verification(
                        "Payment does not match the current order. Please try again.",
                    ));
                }

                flow.begin_verification()?;

                let request = VerifyPaymentRequest {
                    booking_id: order.booking_id.clone(),
                    order_id: confirmation.order_id,
                    payment_id: confirmation.payment_id,
                    signature: confirmation.signature,
                };

                match self.api.verify_payment(request).await {
                    Ok(booking) => {
                        flow.confirmed()?;
                        tracing::info!(booking_id = %booking.id, "Booking confirmed");
                        Ok(booking)
                    }
                    Err(e) if e.is_retryable() => {
                        flow.verification_failed()?;
                        Err(BookingFlowError::connectivity(e.user_message()))
                    }
                    Err(e) => {
                        flow.verification_failed()?;
                        Err(BookingFlowError::verification(e.user_message()))
                    }
                }
            }
            PaymentEvent::Failed(failure) => {
                tracing::warn!(
                    reason = failure.reason.as_deref().unwrap_or("unknown"),
                    "Payment attempt failed"
                );
                flow.reopen_payment()?;
                Err(BookingFlowError::payment(failure.user_message()))
            }
            PaymentEvent::Dismissed => {
                tracing::debug!("Checkout dismissed by the user");
                flow.reopen_payment()?;
                Err(BookingFlowError::PaymentDismissed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::razorpay::{MockRazorpayGateway, ScriptedOutcome};
    use crate::application::handlers::test_support::MockBookingApi;
    use crate::domain::booking::{
        BookingDraft, BookingOrder, BookingStatus, GuestDetails, PaymentOrder, PaymentStatus,
        PaymentSummary, PricingBreakdown, INVENTORY_GONE_MESSAGE,
    };
    use crate::domain::catalog::PackageCategory;
    use crate::domain::dates::BookingDate;
    use crate::domain::foundation::{BookingId, OrderId, PackageId, PaymentId};
    use crate::domain::payment::{GatewayFailure, INTERNATIONAL_CARD_GUIDANCE};
    use crate::ports::ApiError;

    fn test_draft() -> BookingDraft {
        BookingDraft {
            package_id: PackageId::new("pkg_rooms").unwrap(),
            check_in: BookingDate::parse("10-03-2026").unwrap(),
            check_out: BookingDate::parse("12-03-2026").unwrap(),
            guest: GuestDetails {
                name: "Asha Rao".to_string(),
                phone_number: "9876543210".to_string(),
                email: "asha@example.com".to_string(),
                guest_count: Some(2),
            },
            room_quantity: Some(2),
        }
    }

    fn test_order() -> BookingOrder {
        BookingOrder {
            booking_id: BookingId::new("bk_1001").unwrap(),
            payment: PaymentOrder {
                order_id: OrderId::new("order_N5XJbQ3fU0").unwrap(),
                amount: 450_000,
                currency: "INR".to_string(),
                key_id: "rzp_test_abc".to_string(),
            },
            receipt: crate::domain::foundation::ReceiptId::new(),
        }
    }

    fn confirmed_booking() -> Booking {
        Booking {
            id: BookingId::new("bk_1001").unwrap(),
            package_id: PackageId::new("pkg_rooms").unwrap(),
            status: BookingStatus::Confirmed,
            guest: test_draft().guest,
            check_in: BookingDate::parse("10-03-2026").unwrap(),
            check_out: BookingDate::parse("12-03-2026").unwrap(),
            room_quantity: Some(2),
            pricing: PricingBreakdown {
                base_amount: 400_000,
                gst_amount: 50_000,
                total_amount: 450_000,
                currency: "INR".to_string(),
            },
            payment: PaymentSummary {
                status: PaymentStatus::Paid,
                order_id: Some(OrderId::new("order_N5XJbQ3fU0").unwrap()),
                payment_id: Some(PaymentId::new("pay_1").unwrap()),
            },
        }
    }

    fn new_flow() -> BookingFlow {
        BookingFlow::new(test_draft(), PackageCategory::RoomsOnly).unwrap()
    }

    #[tokio::test]
    async fn happy_path_confirms_the_booking() {
        let api = Arc::new(
            MockBookingApi::new()
                .with_order(test_order())
                .with_verify_booking(confirmed_booking()),
        );
        let gateway = Arc::new(MockRazorpayGateway::new());
        gateway.enqueue(ScriptedOutcome::Succeed);

        let handler = BookingFlowHandler::new(api.clone(), gateway.clone());
        let mut flow = new_flow();

        let booking = handler.run(&mut flow).await.unwrap();

        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(flow.state(), FlowState::Confirmed);
        assert_eq!(api.calls_for(Operation::CreateOrder), 1);
        assert_eq!(api.calls_for(Operation::VerifyPayment), 1);
    }

    #[tokio::test]
    async fn retry_after_dismissal_reuses_the_order() {
        let api = Arc::new(
            MockBookingApi::new()
                .with_order(test_order())
                .with_verify_booking(confirmed_booking()),
        );
        let gateway = Arc::new(MockRazorpayGateway::new());
        gateway.enqueue(ScriptedOutcome::Dismiss);
        gateway.enqueue(ScriptedOutcome::Succeed);

        let handler = BookingFlowHandler::new(api.clone(), gateway.clone());
        let mut flow = new_flow();

        // First attempt: user closes checkout.
        let first = handler.run(&mut flow).await;
        assert!(matches!(first, Err(BookingFlowError::PaymentDismissed)));
        assert_eq!(flow.state(), FlowState::AwaitingPayment);

        // Second attempt succeeds against the same order.
        let booking = handler.run(&mut flow).await.unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);

        // create-order ran exactly once; checkout opened twice with the
        // same order id.
        assert_eq!(api.calls_for(Operation::CreateOrder), 1);
        let invocations = gateway.invocations();
        assert_eq!(invocations.len(), 2);
        assert_eq!(invocations[0].order_id, invocations[1].order_id);
    }

    #[tokio::test]
    async fn retry_after_gateway_failure_reuses_the_order() {
        let api = Arc::new(
            MockBookingApi::new()
                .with_order(test_order())
                .with_verify_booking(confirmed_booking()),
        );
        let gateway = Arc::new(MockRazorpayGateway::new());
        gateway.enqueue(ScriptedOutcome::Fail(GatewayFailure {
            code: Some("BAD_REQUEST_ERROR".to_string()),
            reason: Some("payment_declined".to_string()),
            description: Some("Card declined".to_string()),
        }));
        gateway.enqueue(ScriptedOutcome::Succeed);

        let handler = BookingFlowHandler::new(api.clone(), gateway.clone());
        let mut flow = new_flow();

        let first = handler.run(&mut flow).await;
        match first {
            Err(BookingFlowError::Payment { message }) => assert_eq!(message, "Card declined"),
            other => panic!("expected payment failure, got {:?}", other),
        }

        handler.run(&mut flow).await.unwrap();
        assert_eq!(api.calls_for(Operation::CreateOrder), 1);
    }

    #[tokio::test]
    async fn international_card_failure_shows_test_card_guidance() {
        let api = Arc::new(MockBookingApi::new().with_order(test_order()));
        let gateway = Arc::new(MockRazorpayGateway::new());
        gateway.enqueue(ScriptedOutcome::Fail(GatewayFailure {
            code: Some("BAD_REQUEST_ERROR".to_string()),
            reason: Some("international_transaction_not_allowed".to_string()),
            description: Some("International cards are not supported".to_string()),
        }));

        let handler = BookingFlowHandler::new(api, gateway);
        let mut flow = new_flow();

        let result = handler.run(&mut flow).await;
        match result {
            Err(BookingFlowError::Payment { message }) => {
                assert_eq!(message, INTERNATIONAL_CARD_GUIDANCE);
            }
            other => panic!("expected payment failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn inventory_gone_failure_is_remapped() {
        let api = Arc::new(MockBookingApi::new().failing_with(ApiError::server(
            Operation::CreateOrder,
            409,
            Some("Package no longer available for the selected dates".to_string()),
        )));
        let gateway = Arc::new(MockRazorpayGateway::new());

        let handler = BookingFlowHandler::new(api, gateway.clone());
        let mut flow = new_flow();

        let result = handler.run(&mut flow).await;
        match result {
            Err(BookingFlowError::OrderCreation { message }) => {
                assert_eq!(message, INVENTORY_GONE_MESSAGE);
            }
            other => panic!("expected order-creation failure, got {:?}", other),
        }
        assert_eq!(flow.state(), FlowState::Idle);
        assert_eq!(gateway.invocation_count(), 0);
    }

    #[tokio::test]
    async fn order_creation_timeout_is_retryable_from_idle() {
        let api = Arc::new(
            MockBookingApi::new().failing_with(ApiError::timeout(Operation::CreateOrder)),
        );
        let gateway = Arc::new(MockRazorpayGateway::new());

        let handler = BookingFlowHandler::new(api, gateway);
        let mut flow = new_flow();

        let result = handler.run(&mut flow).await;
        assert!(matches!(result, Err(BookingFlowError::Connectivity { .. })));
        assert_eq!(flow.state(), FlowState::Idle);
    }

    #[tokio::test]
    async fn verification_failure_keeps_the_order_for_retry() {
        let api = Arc::new(MockBookingApi::new().with_order(test_order()).failing_with(
            ApiError::server(
                Operation::VerifyPayment,
                400,
                Some("Signature mismatch".to_string()),
            ),
        ));
        // failing_with applies to all calls, so hand the flow its order first.
        let mut flow = new_flow();
        flow.begin_order_creation().unwrap();
        flow.order_created(test_order()).unwrap();

        let gateway = Arc::new(MockRazorpayGateway::new());
        gateway.enqueue(ScriptedOutcome::Succeed);

        let handler = BookingFlowHandler::new(api, gateway);
        let result = handler.take_payment(&mut flow).await;

        match result {
            Err(BookingFlowError::Verification { message }) => {
                assert_eq!(message, "Signature mismatch");
            }
            other => panic!("expected verification failure, got {:?}", other),
        }
        assert_eq!(flow.state(), FlowState::AwaitingPayment);
        assert!(flow.order().is_some());
    }

    #[tokio::test]
    async fn stale_payment_event_is_discarded_after_reset() {
        let api = Arc::new(
            MockBookingApi::new()
                .with_order(test_order())
                .with_verify_booking(confirmed_booking()),
        );
        let gateway = Arc::new(MockRazorpayGateway::new());

        let handler = BookingFlowHandler::new(api.clone(), gateway);
        let mut flow = new_flow();

        handler.start(&mut flow).await.unwrap();
        let stale_generation = flow.generation();

        // User abandons the attempt while the widget is still open.
        flow.reset();

        let event = PaymentEvent::Success(crate::domain::payment::PaymentConfirmation {
            order_id: OrderId::new("order_N5XJbQ3fU0").unwrap(),
            payment_id: PaymentId::new("pay_1").unwrap(),
            signature: "sig".to_string(),
        });

        let applied = handler
            .apply_payment_event(&mut flow, stale_generation, event)
            .await
            .unwrap();

        assert!(applied.is_none());
        assert_eq!(flow.state(), FlowState::Idle);
        assert_eq!(api.calls_for(Operation::VerifyPayment), 0);
    }

    #[tokio::test]
    async fn mismatched_order_in_success_event_is_rejected() {
        let api = Arc::new(MockBookingApi::new().with_order(test_order()));
        let gateway = Arc::new(MockRazorpayGateway::new());

        let handler = BookingFlowHandler::new(api.clone(), gateway);
        let mut flow = new_flow();
        handler.start(&mut flow).await.unwrap();

        let event = PaymentEvent::Success(crate::domain::payment::PaymentConfirmation {
            order_id: OrderId::new("order_SOMETHING_ELSE").unwrap(),
            payment_id: PaymentId::new("pay_1").unwrap(),
            signature: "sig".to_string(),
        });

        let generation = flow.generation();
        let result = handler.apply_payment_event(&mut flow, generation, event).await;

        assert!(matches!(
            result,
            Err(BookingFlowError::Verification { .. })
        ));
        assert_eq!(flow.state(), FlowState::AwaitingPayment);
        assert_eq!(api.calls_for(Operation::VerifyPayment), 0);
    }

    #[tokio::test]
    async fn signature_reaches_the_backend_unchanged() {
        let api = Arc::new(
            MockBookingApi::new()
                .with_order(test_order())
                .with_verify_booking(confirmed_booking()),
        );
        let gateway = Arc::new(MockRazorpayGateway::new().with_key_secret("test_secret"));
        gateway.enqueue(ScriptedOutcome::Succeed);

        let handler = BookingFlowHandler::new(api.clone(), gateway);
        let mut flow = new_flow();

        handler.run(&mut flow).await.unwrap();

        let requests = api.verify_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].booking_id.as_str(), "bk_1001");
        assert_eq!(requests[0].order_id.as_str(), "order_N5XJbQ3fU0");
        // 64 hex chars: the mock signed with a real HMAC.
        assert_eq!(requests[0].signature.len(), 64);
    }
}
