//! Browser push subscriptions.

use serde::{Deserialize, Serialize};
use web_push::SubscriptionInfo;

/// A browser's push subscription: where to deliver and how to encrypt.
///
/// Shaped exactly like the JSON that `PushSubscription.toJSON()` produces in
/// the browser, so the value a frontend posts deserializes directly. Supplied
/// per send; the sender never retains it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PushSubscription {
    /// Push service endpoint URL for this recipient.
    pub endpoint: String,
    /// Encryption keys issued by the browser alongside the endpoint.
    pub keys: SubscriptionKeys,
}

/// The encryption key material of a subscription.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubscriptionKeys {
    /// Browser's P-256 ECDH public key (base64url).
    pub p256dh: String,
    /// Shared authentication secret (base64url).
    pub auth: String,
}

impl PushSubscription {
    pub fn new(
        endpoint: impl Into<String>,
        p256dh: impl Into<String>,
        auth: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            keys: SubscriptionKeys {
                p256dh: p256dh.into(),
                auth: auth.into(),
            },
        }
    }

    /// The wrapped library's view of this subscription.
    pub(crate) fn subscription_info(&self) -> SubscriptionInfo {
        SubscriptionInfo::new(&self.endpoint, &self.keys.p256dh, &self.keys.auth)
    }
}
