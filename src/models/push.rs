//! Web Push subscription payloads.

use serde::{Deserialize, Serialize};

/// A push subscription in the shape produced by `PushManager.subscribe()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushSubscription {
    pub endpoint: String,
    #[serde(rename = "expirationTime", skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<PushKeys>,
}

/// Client key material the push service needs for payload encryption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushKeys {
    pub p256dh: String,
    pub auth: String,
}
