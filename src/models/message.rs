//! Conversations and messages.

use serde::{Deserialize, Serialize};

/// A conversation summary: one row per contact with message history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(rename = "contactId")]
    pub contact_id: Option<String>,
    #[serde(rename = "contactName")]
    pub contact_name: Option<String>,
    #[serde(rename = "lastMessage")]
    pub last_message: Option<String>,
    #[serde(rename = "lastMessageAt")]
    pub last_message_at: Option<String>,
    #[serde(rename = "unreadCount")]
    pub unread_count: Option<i64>,
}

/// A single message in a conversation. `direction` is `inbound` or
/// `outbound` as the backend reports it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Message {
    pub id: Option<String>,
    #[serde(rename = "contactId")]
    pub contact_id: Option<String>,
    pub direction: Option<String>,
    pub body: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "sentAt")]
    pub sent_at: Option<String>,
}

/// Wire shape of a send-message request.
#[derive(Debug, Clone, Serialize)]
pub struct OutgoingMessage {
    #[serde(rename = "contactId")]
    pub contact_id: String,
    pub body: String,
}
