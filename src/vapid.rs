//! VAPID key material for Web Push (RFC 8292).
//!
//! The private key is stored as the raw 32-byte P-256 scalar (base64url) and
//! the public key as the 65-byte uncompressed SEC1 point, because that is the
//! exact format `web_push::VapidSignatureBuilder::from_base64` consumes and
//! browsers accept as `applicationServerKey`.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64URL, Engine};
use p256::ecdsa::SigningKey;
use p256::elliptic_curve::rand_core::OsRng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A VAPID keypair authenticating the sender to push services.
///
/// Immutable once constructed; passed by value into [`crate::create_sender`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VapidKeys {
    /// Uncompressed SEC1 public point, base64url (65 bytes decoded).
    public_key: String,
    /// Raw P-256 private scalar, base64url (32 bytes decoded).
    private_key: String,
}

impl VapidKeys {
    /// Generate a fresh VAPID keypair from OS randomness.
    pub fn generate() -> Result<Self> {
        let signing_key = SigningKey::random(&mut OsRng);
        let verifying_key = signing_key.verifying_key();

        // 0x04 || x || y
        let public_point = verifying_key.to_encoded_point(false);

        Ok(Self {
            public_key: BASE64URL.encode(public_point.as_bytes()),
            private_key: BASE64URL.encode(signing_key.to_bytes().as_slice()),
        })
    }

    /// Construct from caller-supplied base64url strings, validating both key
    /// formats without performing any I/O.
    pub fn from_base64url(public_key: &str, private_key: &str) -> Result<Self> {
        let public_bytes = BASE64URL
            .decode(public_key)
            .map_err(|e| Error::invalid_key_with_source("public key is not valid base64url", e))?;
        if public_bytes.len() != 65 || public_bytes[0] != 0x04 {
            return Err(Error::invalid_key(
                "public key must be a 65-byte uncompressed P-256 point",
            ));
        }

        let private_bytes = BASE64URL
            .decode(private_key)
            .map_err(|e| Error::invalid_key_with_source("private key is not valid base64url", e))?;
        if private_bytes.len() != 32 {
            return Err(Error::invalid_key(format!(
                "private key must be a 32-byte P-256 scalar, got {} bytes",
                private_bytes.len()
            )));
        }
        SigningKey::from_bytes(private_bytes.as_slice().into())
            .map_err(|e| Error::invalid_key_with_source("private key is not a valid P-256 scalar", e))?;

        Ok(Self {
            public_key: public_key.to_string(),
            private_key: private_key.to_string(),
        })
    }

    /// Base64url-encoded public key. Browsers use this as the
    /// `applicationServerKey` when subscribing.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Base64url-encoded raw private key scalar.
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// Decoded uncompressed public key bytes (65 bytes).
    pub fn public_key_bytes(&self) -> Result<Vec<u8>> {
        BASE64URL
            .decode(&self.public_key)
            .map_err(|e| Error::invalid_key_with_source("failed to decode public key", e))
    }
}
