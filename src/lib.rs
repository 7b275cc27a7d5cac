//! Web Push notification sender bound to a set of VAPID credentials.
//!
//! A [`Sender`] wraps the [`web_push`] crate (VAPID JWT signing, RFC 8291
//! payload encryption) and delivers the resulting request over a pooled
//! reqwest client. Construction binds a key pair and a `mailto:` contact;
//! [`Sender::send`] then takes a browser subscription, a title, and an
//! optional presentation config, and performs one outbound request per call.
//!
//! ```no_run
//! use push_kit::{create_sender, PushConfig, PushSubscription, VapidKeys};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let keys = VapidKeys::generate()?;
//!     let subscription: PushSubscription = serde_json::from_str(
//!         r#"{
//!             "endpoint": "https://push.example.com/sub/abc",
//!             "keys": { "p256dh": "...", "auth": "..." }
//!         }"#,
//!     )?;
//!
//!     let sender = create_sender(keys, "admin@example.com")?;
//!     let result = sender
//!         .send(
//!             &subscription,
//!             "Hello",
//!             Some(PushConfig {
//!                 body: Some("You have a new message".into()),
//!                 ..Default::default()
//!             }),
//!         )
//!         .await?;
//!
//!     println!("push service answered HTTP {}", result.status_code);
//!     Ok(())
//! }
//! ```
//!
//! For capabilities `send` does not cover (custom TTL, urgency, topic, raw
//! payloads), the wrapped crate is re-exported as [`web_push`]: build a
//! `WebPushMessage` yourself, sign it with [`Sender::vapid_signature`], and
//! push it through [`Sender::deliver`].

pub mod error;
pub mod notification;
pub mod sender;
pub mod subscription;
pub mod vapid;

// Escape hatch: the wrapped Web Push protocol implementation.
pub use web_push;

pub use error::{Error, Result};
pub use notification::PushConfig;
pub use sender::{create_sender, SendResult, Sender};
pub use subscription::{PushSubscription, SubscriptionKeys};
pub use vapid::VapidKeys;
