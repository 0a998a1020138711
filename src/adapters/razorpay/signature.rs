//! Razorpay payment signature utility.
//!
//! Razorpay signs a successful checkout as
//! `HMAC-SHA256(key_secret, "{order_id}|{payment_id}")`, hex-encoded. The
//! booking flow submits signatures to the backend for authoritative
//! verification; this module exists for signature-aware tooling and the mock
//! gateway used in tests.
//!
//! # Security
//!
//! Verification uses constant-time comparison.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::domain::foundation::{OrderId, PaymentId};

type HmacSha256 = Hmac<Sha256>;

/// Hex-encode a byte slice (lowercase).
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Compute the signature for an order/payment pair.
pub fn sign(key_secret: &SecretString, order_id: &OrderId, payment_id: &PaymentId) -> String {
    let mut mac = HmacSha256::new_from_slice(key_secret.expose_secret().as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(format!("{}|{}", order_id, payment_id).as_bytes());
    hex_encode(&mac.finalize().into_bytes())
}

/// Check a reported signature against the expected one in constant time.
pub fn verify(
    key_secret: &SecretString,
    order_id: &OrderId,
    payment_id: &PaymentId,
    signature: &str,
) -> bool {
    let expected = sign(key_secret, order_id, payment_id);
    expected.as_bytes().ct_eq(signature.as_bytes()).unwrap_u8() == 1
}
