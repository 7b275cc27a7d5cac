//! Notification payload construction.
//!
//! The payload a service worker receives is one flat JSON object: the title
//! merged with whatever presentation fields the caller supplied. Field names
//! follow the Web Notification API (camelCase on the wire); absent fields are
//! omitted entirely so the browser applies its own defaults.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Optional presentation attributes for a notification.
///
/// Every field maps to its Web Notification API counterpart. `data` is an
/// opaque, consumer-defined JSON value passed through untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renotify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_interaction: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Epoch milliseconds shown as the notification's timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    /// Vibration pattern in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibrate: Option<Vec<u64>>,
}

/// Merge the title into the config's JSON object.
///
/// With no config the payload is exactly `{"title": ...}`.
pub(crate) fn payload_bytes(title: &str, config: Option<&PushConfig>) -> Result<Vec<u8>> {
    let mut payload = match config {
        Some(config) => serde_json::to_value(config)?,
        None => serde_json::Value::Object(serde_json::Map::new()),
    };
    payload["title"] = serde_json::Value::String(title.to_string());

    Ok(serde_json::to_vec(&payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn payload_value(title: &str, config: Option<&PushConfig>) -> Value {
        let bytes = payload_bytes(title, config).expect("build payload");
        serde_json::from_slice(&bytes).expect("payload is JSON")
    }

    #[test]
    fn title_only_when_config_omitted() {
        let payload = payload_value("Hello", None);
        assert_eq!(payload, json!({ "title": "Hello" }));
    }

    #[test]
    fn defaulted_config_adds_no_fields() {
        let payload = payload_value("Hello", Some(&PushConfig::default()));
        assert_eq!(payload, json!({ "title": "Hello" }));
    }

    #[test]
    fn supplied_fields_appear_verbatim_in_camel_case() {
        let config = PushConfig {
            body: Some("the body".into()),
            data: Some(json!({ "conversation": 42 })),
            badge: Some("https://cdn.example.com/badge.png".into()),
            icon: Some("https://cdn.example.com/icon.png".into()),
            image: Some("https://cdn.example.com/image.png".into()),
            lang: Some("en-US".into()),
            renotify: Some(true),
            require_interaction: Some(true),
            silent: Some(false),
            tag: Some("chat".into()),
            timestamp: Some(1_700_000_000_000),
            vibrate: Some(vec![200, 100, 200]),
        };

        let payload = payload_value("Hello", Some(&config));
        assert_eq!(
            payload,
            json!({
                "title": "Hello",
                "body": "the body",
                "data": { "conversation": 42 },
                "badge": "https://cdn.example.com/badge.png",
                "icon": "https://cdn.example.com/icon.png",
                "image": "https://cdn.example.com/image.png",
                "lang": "en-US",
                "renotify": true,
                "requireInteraction": true,
                "silent": false,
                "tag": "chat",
                "timestamp": 1_700_000_000_000u64,
                "vibrate": [200, 100, 200],
            })
        );
    }

    #[test]
    fn partial_config_omits_absent_fields() {
        let config = PushConfig {
            body: Some("short".into()),
            tag: Some("alerts".into()),
            ..Default::default()
        };

        let payload = payload_value("Ping", Some(&config));
        assert_eq!(
            payload,
            json!({ "title": "Ping", "body": "short", "tag": "alerts" })
        );
    }

    #[test]
    fn data_is_an_opaque_passthrough() {
        let config = PushConfig {
            data: Some(json!([1, "two", { "three": [3] }, null])),
            ..Default::default()
        };

        let payload = payload_value("Ping", Some(&config));
        assert_eq!(payload["data"], json!([1, "two", { "three": [3] }, null]));
    }
}
