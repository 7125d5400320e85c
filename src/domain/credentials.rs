use std::fmt;

/// API credentials issued for a gateway terminal.
///
/// All four values are opaque strings. They are fixed for the lifetime of a
/// client; build a new client to switch terminals.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    gateway_id: String,
    password: String,
    hmac_key: String,
    key_id: String,
}

impl Credentials {
    pub fn new(
        gateway_id: impl Into<String>,
        password: impl Into<String>,
        hmac_key: impl Into<String>,
        key_id: impl Into<String>,
    ) -> Self {
        Self {
            gateway_id: gateway_id.into(),
            password: password.into(),
            hmac_key: hmac_key.into(),
            key_id: key_id.into(),
        }
    }

    pub fn gateway_id(&self) -> &str {
        &self.gateway_id
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn hmac_key(&self) -> &str {
        &self.hmac_key
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("gateway_id", &self.gateway_id)
            .field("password", &"<redacted>")
            .field("hmac_key", &"<redacted>")
            .field("key_id", &self.key_id)
            .finish()
    }
}
