//! Request signing for the GGe4 API.
//!
//! The gateway recomputes the SHA-1 digest of the body it receives and the
//! HMAC over the signing string, so every byte here has to match what goes on
//! the wire.

use crate::domain::credentials::Credentials;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, SecondsFormat, Utc};
use ring::{digest, hmac};

pub const HEADER_CONTENT_SHA1: &str = "X-GGe4-Content-SHA1";
pub const HEADER_DATE: &str = "X-GGe4-Date";
pub const AUTHORIZATION_SCHEME: &str = "GGE4_API";

/// Hex-encoded SHA-1 of the request body.
pub fn content_digest(body: &[u8]) -> String {
    hex::encode(digest::digest(&digest::SHA1_FOR_LEGACY_USE_ONLY, body))
}

/// `2026-10-19T14:03:07+00:00`
pub fn gge4_date(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, false)
}

pub fn signing_string(
    method: &str,
    content_type: &str,
    content_digest: &str,
    gge4_date: &str,
    api_path: &str,
) -> String {
    format!("{method}\n{content_type}\n{content_digest}\n{gge4_date}\n{api_path}")
}

/// Base64 HMAC-SHA1 of the signing string.
pub fn sign(hmac_key: &str, signing_string: &str) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, hmac_key.as_bytes());
    BASE64.encode(hmac::sign(&key, signing_string.as_bytes()).as_ref())
}

pub fn authorization_header(key_id: &str, signature: &str) -> String {
    format!("{AUTHORIZATION_SCHEME} {key_id}:{signature}")
}

/// A fully signed request, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub method: &'static str,
    pub url: String,
    pub content_type: String,
    pub content_digest: String,
    pub gge4_date: String,
    pub authorization: String,
    pub body: String,
}

impl SignedRequest {
    /// Digests and signs `body` exactly as it will be sent.
    pub fn new(
        credentials: &Credentials,
        url: impl Into<String>,
        api_path: &str,
        content_type: &str,
        body: String,
        now: DateTime<Utc>,
    ) -> Self {
        let method = "POST";
        let content_digest = content_digest(body.as_bytes());
        let gge4_date = gge4_date(now);
        let to_sign = signing_string(method, content_type, &content_digest, &gge4_date, api_path);
        let signature = sign(credentials.hmac_key(), &to_sign);

        Self {
            method,
            url: url.into(),
            content_type: content_type.to_string(),
            content_digest,
            gge4_date,
            authorization: authorization_header(credentials.key_id(), &signature),
            body,
        }
    }

    /// The header set sent with the request, in sending order.
    pub fn headers(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Content-Type", self.content_type.as_str()),
            ("Accept", "application/json"),
            (HEADER_CONTENT_SHA1, self.content_digest.as_str()),
            (HEADER_DATE, self.gge4_date.as_str()),
            ("Authorization", self.authorization.as_str()),
        ]
    }
}
