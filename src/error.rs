//! Error types for push sending.
//!
//! Transport and push-service failures propagate unmodified: reqwest errors
//! convert directly, wrapped-library failures are carried as sources, and a
//! non-2xx answer from the push service surfaces with the service's own
//! status and body. No retry or recovery happens at this layer.

use thiserror::Error;

/// All failure modes of the sender.
#[derive(Error, Debug)]
pub enum Error {
    /// VAPID key material failed validation at construction time.
    #[error("Invalid VAPID key material: {message}")]
    InvalidKey {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The contact email is not a syntactically valid address.
    #[error("Invalid contact email: {email}")]
    InvalidContact { email: String },

    /// The wrapped library could not sign the VAPID claims for this
    /// subscription (bad private key scalar, unparsable endpoint origin).
    #[error("Failed to sign VAPID claims")]
    Vapid(#[source] web_push::WebPushError),

    /// The wrapped library could not encrypt or assemble the push message
    /// (malformed subscription keys, oversized payload).
    #[error("Failed to build push message")]
    Message(#[source] web_push::WebPushError),

    /// The notification payload could not be serialized to JSON.
    #[error("Failed to serialize notification payload")]
    Payload(#[from] serde_json::Error),

    /// The HTTP request to the push service failed (connect, TLS, timeout).
    #[error("Push request failed")]
    Transport(#[from] reqwest::Error),

    /// The push service answered with a non-success status. A 404 or 410
    /// means the subscription is gone; distinguishing permanent from
    /// transient failures is left to the caller.
    #[error("Push service rejected the request: HTTP {status}")]
    Response { status: u16, body: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an `InvalidKey` error without an underlying source.
    pub fn invalid_key(message: impl Into<String>) -> Self {
        Self::InvalidKey {
            message: message.into(),
            source: None,
        }
    }

    /// Create an `InvalidKey` error wrapping a lower-level failure.
    pub fn invalid_key_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InvalidKey {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
