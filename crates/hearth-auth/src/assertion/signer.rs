//! Assertion signing and verification with a shared HMAC secret.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use hearth_core::config::auth::AuthConfig;
use hearth_core::error::AppError;
use hearth_core::result::AppResult;

use super::payload::AssertionPayload;

type HmacSha256 = Hmac<Sha256>;

/// Issues and verifies session assertions.
///
/// Token format: `base64url(JSON payload) + "." + base64url(HMAC-SHA256)`.
/// The HMAC is computed over the raw JSON bytes.
#[derive(Clone)]
pub struct AssertionSigner {
    /// Shared HMAC secret.
    secret: Vec<u8>,
    /// Default assertion TTL in seconds.
    ttl_seconds: u64,
}

impl std::fmt::Debug for AssertionSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssertionSigner")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl AssertionSigner {
    /// Creates a signer from a shared secret and default TTL.
    ///
    /// An empty secret is a deployment defect: every assertion would be
    /// either trivially forgeable or trivially rejected. It is refused
    /// here so the process fails at startup instead of at first request.
    pub fn new(secret: impl Into<Vec<u8>>, ttl_seconds: u64) -> AppResult<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(AppError::configuration(
                "Assertion secret is not configured",
            ));
        }
        Ok(Self {
            secret,
            ttl_seconds,
        })
    }

    /// Creates a signer from auth configuration.
    pub fn from_config(config: &AuthConfig) -> AppResult<Self> {
        Self::new(
            config.assertion_secret.as_bytes().to_vec(),
            config.assertion_ttl_seconds,
        )
    }

    /// Returns the default TTL in seconds.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Issues an assertion for the given user with the default TTL.
    pub fn issue(&self, user_id: Uuid) -> AppResult<String> {
        self.issue_with_ttl(user_id, self.ttl_seconds)
    }

    /// Issues an assertion expiring `ttl_seconds` from now.
    pub fn issue_with_ttl(&self, user_id: Uuid, ttl_seconds: u64) -> AppResult<String> {
        self.issue_at(user_id, ttl_seconds, Utc::now().timestamp())
    }

    /// Verifies a token, returning its payload only when the signature
    /// matches and the expiry is strictly in the future.
    ///
    /// Every failure mode (malformed token, signature mismatch, expiry)
    /// returns `None`; callers treat the credential as absent and move on.
    pub fn verify(&self, token: &str) -> Option<AssertionPayload> {
        self.verify_at(token, Utc::now().timestamp())
    }

    fn issue_at(&self, user_id: Uuid, ttl_seconds: u64, now_ts: i64) -> AppResult<String> {
        let payload = AssertionPayload {
            user_id,
            expires_at: now_ts + ttl_seconds as i64,
        };
        let bytes = serde_json::to_vec(&payload)?;
        let signature = self.sign(&bytes);
        Ok(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&bytes),
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    fn verify_at(&self, token: &str, now_ts: i64) -> Option<AssertionPayload> {
        let (payload_b64, signature_b64) = token.split_once('.')?;
        let payload_bytes = URL_SAFE_NO_PAD.decode(payload_b64).ok()?;
        let signature = URL_SAFE_NO_PAD.decode(signature_b64).ok()?;

        // verify_slice is constant-time.
        let mut mac = HmacSha256::new_from_slice(&self.secret).ok()?;
        mac.update(&payload_bytes);
        mac.verify_slice(&signature).ok()?;

        let payload: AssertionPayload = serde_json::from_slice(&payload_bytes).ok()?;
        if payload.expires_at > now_ts {
            Some(payload)
        } else {
            None
        }
    }

    fn sign(&self, bytes: &[u8]) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC accepts keys of any non-zero size");
        mac.update(bytes);
        mac.finalize().into_bytes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> AssertionSigner {
        AssertionSigner::new(b"test-assertion-secret".to_vec(), 1800).unwrap()
    }

    #[test]
    fn empty_secret_is_a_configuration_error() {
        let err = AssertionSigner::new(Vec::new(), 1800).unwrap_err();
        assert_eq!(err.kind, hearth_core::error::ErrorKind::Configuration);
    }

    #[test]
    fn round_trip_returns_bound_user_and_expiry() {
        let signer = signer();
        let user_id = Uuid::new_v4();
        let now = Utc::now().timestamp();

        let token = signer.issue(user_id).unwrap();
        let payload = signer.verify(&token).unwrap();

        assert_eq!(payload.user_id, user_id);
        assert!(payload.expires_at > now);
        assert!(payload.expires_at <= now + 1801);
    }

    #[test]
    fn rejects_exactly_at_expiry() {
        let signer = signer();
        let user_id = Uuid::new_v4();
        let now = 1_700_000_000;

        let token = signer.issue_at(user_id, 60, now).unwrap();

        // Strictly-greater-than semantics: one second before expiry is
        // still valid, the expiry instant itself is not.
        assert!(signer.verify_at(&token, now + 59).is_some());
        assert!(signer.verify_at(&token, now + 60).is_none());
        assert!(signer.verify_at(&token, now + 61).is_none());
    }

    #[test]
    fn rejects_tampered_signature() {
        let signer = signer();
        let token = signer.issue(Uuid::new_v4()).unwrap();
        let (payload_b64, signature_b64) = token.split_once('.').unwrap();

        let mut sig_bytes = URL_SAFE_NO_PAD.decode(signature_b64).unwrap();
        for i in 0..sig_bytes.len() {
            sig_bytes[i] ^= 0x01;
            let tampered = format!("{payload_b64}.{}", URL_SAFE_NO_PAD.encode(&sig_bytes));
            assert!(signer.verify(&tampered).is_none(), "byte {i} accepted");
            sig_bytes[i] ^= 0x01;
        }
    }

    #[test]
    fn rejects_tampered_payload() {
        let signer = signer();
        let token = signer.issue(Uuid::new_v4()).unwrap();
        let (payload_b64, signature_b64) = token.split_once('.').unwrap();

        let mut payload_bytes = URL_SAFE_NO_PAD.decode(payload_b64).unwrap();
        for i in 0..payload_bytes.len() {
            payload_bytes[i] ^= 0x01;
            let tampered = format!(
                "{}.{signature_b64}",
                URL_SAFE_NO_PAD.encode(&payload_bytes)
            );
            assert!(signer.verify(&tampered).is_none(), "byte {i} accepted");
            payload_bytes[i] ^= 0x01;
        }
    }

    #[test]
    fn rejects_token_signed_with_different_secret() {
        let signer_a = signer();
        let signer_b = AssertionSigner::new(b"another-secret".to_vec(), 1800).unwrap();
        let token = signer_b.issue(Uuid::new_v4()).unwrap();
        assert!(signer_a.verify(&token).is_none());
    }

    #[test]
    fn rejects_garbage_tokens() {
        let signer = signer();
        assert!(signer.verify("").is_none());
        assert!(signer.verify("no-separator").is_none());
        assert!(signer.verify("a.b.c").is_none());
        assert!(signer.verify("!!!.???").is_none());
    }
}
