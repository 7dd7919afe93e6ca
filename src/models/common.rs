//! Shared wire types.

use serde::{Deserialize, Serialize};

/// Minimal acknowledgement envelope the webhook endpoints answer with when
/// there is no entity to return. Both fields are optional; some endpoints
/// reply with an empty object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_accepts_an_empty_object() {
        let ack: Ack = serde_json::from_str("{}").unwrap();
        assert_eq!(ack.success, None);
        assert_eq!(ack.message, None);
    }

    #[test]
    fn ack_carries_the_server_fields() {
        let ack: Ack = serde_json::from_str(r#"{"success":true,"message":"removed"}"#).unwrap();
        assert_eq!(ack.success, Some(true));
        assert_eq!(ack.message.as_deref(), Some("removed"));
    }
}
