//! Dashboard counters and the activity feed.

use serde::{Deserialize, Serialize};

/// Aggregate counters for the dashboard header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "totalContacts")]
    pub total_contacts: Option<i64>,
    #[serde(rename = "messagesToday")]
    pub messages_today: Option<i64>,
    #[serde(rename = "callsToday")]
    pub calls_today: Option<i64>,
    #[serde(rename = "openTasks")]
    pub open_tasks: Option<i64>,
}

/// One entry in the recent-activity feed. `kind` names the source record
/// type (message, call, task, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityEntry {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub timestamp: Option<String>,
    #[serde(rename = "contactId")]
    pub contact_id: Option<String>,
}
