//! Scriptable payment gateway for tests.

use async_trait::async_trait;
use secrecy::SecretString;
use std::collections::VecDeque;
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::payment::{GatewayFailure, PaymentConfirmation, PaymentEvent};
use crate::ports::{CheckoutOptions, GatewayError, PaymentGateway};

use super::signature;

/// What the next checkout invocation should report.
#[derive(Debug, Clone)]
pub enum ScriptedOutcome {
    /// Success with a generated payment id and a real signature when a key
    /// secret is configured.
    Succeed,

    Fail(GatewayFailure),

    Dismiss,

    /// The widget itself could not be presented.
    Unavailable(String),
}

/// Gateway double that replays a scripted sequence of outcomes and records
/// every invocation, so tests can assert on order reuse.
#[derive(Default)]
pub struct MockRazorpayGateway {
    script: Mutex<VecDeque<ScriptedOutcome>>,
    invocations: Mutex<Vec<CheckoutOptions>>,
    key_secret: Option<SecretString>,
}

impl MockRazorpayGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign generated success events with a real HMAC instead of a stub.
    pub fn with_key_secret(mut self, key_secret: impl Into<String>) -> Self {
        self.key_secret = Some(SecretString::new(key_secret.into()));
        self
    }

    /// Append an outcome to the script. Outcomes are consumed in order; an
    /// exhausted script reports dismissal.
    pub fn enqueue(&self, outcome: ScriptedOutcome) {
        self.script.lock().unwrap().push_back(outcome);
    }

    /// Every options object checkout was opened with, in order.
    pub fn invocations(&self) -> Vec<CheckoutOptions> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

#[async_trait]
impl PaymentGateway for MockRazorpayGateway {
    async fn checkout(&self, options: CheckoutOptions) -> Result<PaymentEvent, GatewayError> {
        self.invocations.lock().unwrap().push(options.clone());

        let outcome = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(ScriptedOutcome::Dismiss);

        match outcome {
            ScriptedOutcome::Succeed => {
                let payment_id = crate::domain::foundation::PaymentId::new(format!(
                    "pay_{}",
                    Uuid::new_v4().simple()
                ))
                .expect("generated payment id is non-empty");

                let signature = match &self.key_secret {
                    Some(secret) => signature::sign(secret, &options.order_id, &payment_id),
                    None => "sig_mock".to_string(),
                };

                Ok(PaymentEvent::Success(PaymentConfirmation {
                    order_id: options.order_id,
                    payment_id,
                    signature,
                }))
            }
            ScriptedOutcome::Fail(failure) => Ok(PaymentEvent::Failed(failure)),
            ScriptedOutcome::Dismiss => Ok(PaymentEvent::Dismissed),
            ScriptedOutcome::Unavailable(reason) => Err(GatewayError::Unavailable(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::OrderId;

    fn test_options() -> CheckoutOptions {
        CheckoutOptions {
            key: "rzp_test_abc".to_string(),
            amount: 1000,
            currency: "INR".to_string(),
            order_id: OrderId::new("order_1").unwrap(),
            name: "Bhavan Booking".to_string(),
            description: None,
            prefill: Default::default(),
        }
    }

    #[tokio::test]
    async fn scripted_outcomes_replay_in_order() {
        let gateway = MockRazorpayGateway::new();
        gateway.enqueue(ScriptedOutcome::Dismiss);
        gateway.enqueue(ScriptedOutcome::Succeed);

        assert_eq!(
            gateway.checkout(test_options()).await.unwrap(),
            PaymentEvent::Dismissed
        );
        assert!(matches!(
            gateway.checkout(test_options()).await.unwrap(),
            PaymentEvent::Success(_)
        ));
        assert_eq!(gateway.invocation_count(), 2);
    }

    #[tokio::test]
    async fn success_echoes_the_order_id() {
        let gateway = MockRazorpayGateway::new();
        gateway.enqueue(ScriptedOutcome::Succeed);

        match gateway.checkout(test_options()).await.unwrap() {
            PaymentEvent::Success(confirmation) => {
                assert_eq!(confirmation.order_id.as_str(), "order_1");
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn signed_success_verifies_against_the_secret() {
        let gateway = MockRazorpayGateway::new().with_key_secret("test_secret");
        gateway.enqueue(ScriptedOutcome::Succeed);

        match gateway.checkout(test_options()).await.unwrap() {
            PaymentEvent::Success(confirmation) => {
                let secret = SecretString::new("test_secret".to_string());
                assert!(signature::verify(
                    &secret,
                    &confirmation.order_id,
                    &confirmation.payment_id,
                    &confirmation.signature,
                ));
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn exhausted_script_reports_dismissal() {
        let gateway = MockRazorpayGateway::new();
        assert_eq!(
            gateway.checkout(test_options()).await.unwrap(),
            PaymentEvent::Dismissed
        );
    }
}
