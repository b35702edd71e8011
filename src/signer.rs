//! Generic signing adapter for authenticated API writes.
//!
//! Every write to the guild API carries a `signature` (and usually an
//! `address`) alongside the payload.  [`Signer`] wraps an arbitrary
//! `message -> signature` capability — typically a connected wallet's
//! message signing — so the rest of the client never deals with wallet
//! specifics.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde_json::Value;

use crate::errors::{ClientError, Result};

type SignFn = dyn Fn(String) -> BoxFuture<'static, std::result::Result<String, String>>
    + Send
    + Sync;

/// A signing capability bound to an optional identity address.
#[derive(Clone)]
pub struct Signer {
    sign_fn: Arc<SignFn>,
    address: Option<String>,
}

impl Signer {
    /// Build a signer from any async `message -> signature` function and an
    /// optional address identifying who signs.
    pub fn custom<F, Fut, E>(sign_fn: F, address: Option<String>) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<String, E>> + Send + 'static,
        E: fmt::Display + Send + 'static,
    {
        Signer {
            sign_fn: Arc::new(move |message| {
                sign_fn(message)
                    .map(|res| res.map_err(|e| e.to_string()))
                    .boxed()
            }),
            address,
        }
    }

    /// The identity this signer signs as, if one was supplied.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Sign a JSON object payload.
    ///
    /// Serializes the payload, passes that exact string to the capability,
    /// and returns a new object with every input key unchanged plus
    /// `signature` (and `address` when one is bound).  The input is never
    /// mutated.  A rejected capability (user declined, no wallet) surfaces
    /// as [`ClientError::Signing`] without any request being made.
    pub async fn sign(&self, payload: &Value) -> Result<Value> {
        let obj = payload
            .as_object()
            .ok_or_else(|| ClientError::Payload("expected a JSON object".to_string()))?;

        let message = serde_json::to_string(payload)?;
        let signature = (self.sign_fn)(message)
            .await
            .map_err(ClientError::Signing)?;

        let mut signed = obj.clone();
        signed.insert("signature".to_string(), Value::String(signature));
        if let Some(addr) = &self.address {
            signed.insert("address".to_string(), Value::String(addr.clone()));
        }
        Ok(Value::Object(signed))
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_signer(counter: Arc<AtomicUsize>, address: Option<&str>) -> Signer {
        Signer::custom(
            move |_message: String| {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, String>("0xsigned".to_string())
                }
            },
            address.map(String::from),
        )
    }

    #[tokio::test]
    async fn sign_adds_signature_and_address() {
        let calls = Arc::new(AtomicUsize::new(0));
        let signer = counting_signer(calls.clone(), Some("0xabc"));

        let payload = json!({ "name": "Raffle", "nested": { "a": 1 } });
        let signed = signer.sign(&payload).await.unwrap();

        assert_eq!(signed["name"], "Raffle");
        assert_eq!(signed["nested"]["a"], 1);
        assert_eq!(signed["signature"], "0xsigned");
        assert_eq!(signed["address"], "0xabc");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn sign_omits_address_when_absent() {
        let calls = Arc::new(AtomicUsize::new(0));
        let signer = counting_signer(calls, None);

        let signed = signer.sign(&json!({ "x": true })).await.unwrap();
        assert!(signed.get("address").is_none());
        assert_eq!(signed["signature"], "0xsigned");
    }

    #[tokio::test]
    async fn sign_does_not_mutate_input() {
        let calls = Arc::new(AtomicUsize::new(0));
        let signer = counting_signer(calls, Some("0xabc"));

        let payload = json!({ "name": "Raffle" });
        let before = payload.clone();
        let _ = signer.sign(&payload).await.unwrap();
        assert_eq!(payload, before);
        assert!(payload.get("signature").is_none());
    }

    #[tokio::test]
    async fn capability_receives_exact_serialization() {
        let seen = Arc::new(std::sync::Mutex::new(None::<String>));
        let seen_in = seen.clone();
        let signer = Signer::custom(
            move |message: String| {
                let seen = seen_in.clone();
                async move {
                    *seen.lock().unwrap() = Some(message);
                    Ok::<_, String>("sig".to_string())
                }
            },
            None,
        );

        let payload = json!({ "b": 2, "a": 1 });
        let _ = signer.sign(&payload).await.unwrap();

        let message = seen.lock().unwrap().take().unwrap();
        let parsed: Value = serde_json::from_str(&message).unwrap();
        assert_eq!(parsed, payload);
    }

    #[tokio::test]
    async fn capability_rejection_propagates() {
        let signer = Signer::custom(
            |_message: String| async { Err::<String, _>("user rejected in wallet") },
            Some("0xabc".to_string()),
        );

        let err = signer.sign(&json!({ "x": 1 })).await.unwrap_err();
        match err {
            ClientError::Signing(msg) => assert!(msg.contains("user rejected")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn non_object_payload_is_rejected_before_signing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let signer = counting_signer(calls.clone(), None);

        let err = signer.sign(&json!([1, 2, 3])).await.unwrap_err();
        assert!(matches!(err, ClientError::Payload(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
