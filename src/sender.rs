//! The credential-bound sender.
//!
//! Construction binds a VAPID keypair and a `mailto:` contact; every send
//! signs with those credentials. The wrapped library does the protocol work
//! (payload encryption, VAPID JWT, crypto headers) and the resulting request
//! goes out through one pooled reqwest client, so concurrent sends on a
//! shared sender are free.

use std::collections::HashMap;

use tracing::{debug, warn};
use url::Url;
use web_push::{
    ContentEncoding, VapidSignature, VapidSignatureBuilder, WebPushMessage, WebPushMessageBuilder,
};

use crate::error::{Error, Result};
use crate::notification::{payload_bytes, PushConfig};
use crate::subscription::PushSubscription;
use crate::vapid::VapidKeys;

/// Outcome of a delivery attempt, straight from the push service.
///
/// Returned, never stored. A `status_code` of 201 is the usual acceptance.
#[derive(Clone, Debug)]
pub struct SendResult {
    /// HTTP status the push service answered with.
    pub status_code: u16,
    /// Response body, usually empty on acceptance.
    pub body: String,
    /// Response headers (non-UTF-8 values are dropped).
    pub headers: HashMap<String, String>,
}

/// A Web Push sender bound to one set of VAPID credentials.
#[derive(Clone, Debug)]
pub struct Sender {
    keys: VapidKeys,
    subject: String,
    http: reqwest::Client,
}

/// Create a sender bound to the given keys and contact email.
///
/// The email becomes the `mailto:` subject claim of every VAPID JWT this
/// sender signs. No I/O happens here.
pub fn create_sender(keys: VapidKeys, email: &str) -> Result<Sender> {
    Sender::new(keys, email)
}

impl Sender {
    /// See [`create_sender`].
    pub fn new(keys: VapidKeys, email: &str) -> Result<Self> {
        let subject = format!("mailto:{email}");
        if email.trim().is_empty()
            || !email.contains('@')
            || email.chars().any(char::is_whitespace)
            || Url::parse(&subject).is_err()
        {
            return Err(Error::InvalidContact {
                email: email.to_string(),
            });
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("push-kit/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            keys,
            subject,
            http,
        })
    }

    /// The public key browsers need as `applicationServerKey` to subscribe.
    pub fn public_key(&self) -> &str {
        self.keys.public_key()
    }

    /// Send a notification to one subscription.
    ///
    /// Builds a flat JSON payload (the title merged with `config`), lets the
    /// wrapped library encrypt and sign it, then performs a single HTTP POST
    /// to the subscription endpoint. No retries, no batching; errors from the
    /// transport or the push service propagate unmodified.
    pub async fn send(
        &self,
        subscription: &PushSubscription,
        title: &str,
        config: Option<PushConfig>,
    ) -> Result<SendResult> {
        let payload = payload_bytes(title, config.as_ref())?;
        let info = subscription.subscription_info();

        let signature = self.sign(&info)?;

        let mut builder = WebPushMessageBuilder::new(&info);
        builder.set_payload(ContentEncoding::Aes128Gcm, &payload);
        builder.set_vapid_signature(signature);
        let message = builder.build().map_err(Error::Message)?;

        self.deliver(message).await
    }

    /// A VAPID signature for `subscription`, signed with this sender's bound
    /// credentials. Escape hatch for building raw [`web_push`] messages.
    pub fn vapid_signature(&self, subscription: &PushSubscription) -> Result<VapidSignature> {
        self.sign(&subscription.subscription_info())
    }

    /// Deliver a caller-built [`WebPushMessage`] through this sender's HTTP
    /// client. [`Sender::send`] funnels through here; advanced callers can
    /// use it with the re-exported `web_push` crate for anything `send` does
    /// not cover (TTL, urgency, topic, raw payloads).
    pub async fn deliver(&self, message: WebPushMessage) -> Result<SendResult> {
        let endpoint = message.endpoint.to_string();
        debug!(endpoint = %endpoint, ttl = message.ttl, "sending web push");

        let mut request = self
            .http
            .post(&endpoint)
            .header("TTL", message.ttl.to_string());

        if let Some(urgency) = message.urgency {
            request = request.header("Urgency", urgency.to_string());
        }
        if let Some(topic) = message.topic {
            request = request.header("Topic", topic);
        }

        if let Some(payload) = message.payload {
            request = request
                .header("Content-Encoding", payload.content_encoding.to_str())
                .header("Content-Type", "application/octet-stream");
            for (key, value) in &payload.crypto_headers {
                request = request.header(*key, value.as_str());
            }
            request = request.body(payload.content);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await.unwrap_or_default();

        if !(200..300).contains(&status) {
            warn!(endpoint = %endpoint, status, "push service rejected the request");
            return Err(Error::Response { status, body });
        }

        debug!(endpoint = %endpoint, status, "push accepted");
        Ok(SendResult {
            status_code: status,
            body,
            headers,
        })
    }

    fn sign(&self, info: &web_push::SubscriptionInfo) -> Result<VapidSignature> {
        let mut builder =
            VapidSignatureBuilder::from_base64(self.keys.private_key(), info).map_err(Error::Vapid)?;
        builder.add_claim("sub", self.subject.as_str());
        builder.build().map_err(Error::Vapid)
    }
}
