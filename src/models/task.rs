//! Follow-up tasks.

use serde::{Deserialize, Serialize};

/// Status value the backend uses for finished tasks.
pub const STATUS_DONE: &str = "Done";

/// A task as returned by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
    #[serde(rename = "contactId")]
    pub contact_id: Option<String>,
    pub notes: Option<String>,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status.as_deref() == Some(STATUS_DONE)
    }
}

/// Payload for creating a task.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(rename = "contactId", skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Partial task update; only the set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(rename = "contactId", skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TaskUpdate {
    /// An update that only marks the task done.
    pub fn done() -> Self {
        Self {
            status: Some(STATUS_DONE.to_string()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_done_matches_the_backend_status_value() {
        let task: Task = serde_json::from_str(r#"{"id":"t1","status":"Done"}"#).unwrap();
        assert!(task.is_done());

        let open: Task = serde_json::from_str(r#"{"id":"t2","status":"Open"}"#).unwrap();
        assert!(!open.is_done());
        assert!(!Task::default().is_done());
    }

    #[test]
    fn done_update_serializes_to_status_only() {
        assert_eq!(
            serde_json::to_string(&TaskUpdate::done()).unwrap(),
            r#"{"status":"Done"}"#
        );
    }

    #[test]
    fn new_task_omits_unset_fields() {
        let task = NewTask {
            title: "Call back".to_string(),
            contact_id: Some("c1".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&task).unwrap(),
            r#"{"title":"Call back","contactId":"c1"}"#
        );
    }
}
