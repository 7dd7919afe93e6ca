//! Call log records.

use serde::{Deserialize, Serialize};

/// One entry in the call log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallRecord {
    pub id: Option<String>,
    #[serde(rename = "contactId")]
    pub contact_id: Option<String>,
    pub direction: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "durationSeconds")]
    pub duration_seconds: Option<i64>,
    #[serde(rename = "recordingUrl")]
    pub recording_url: Option<String>,
    #[serde(rename = "startedAt")]
    pub started_at: Option<String>,
}

impl CallRecord {
    /// Duration as "M:SS", or "-" when unknown.
    pub fn duration_display(&self) -> String {
        match self.duration_seconds {
            Some(secs) if secs >= 0 => format!("{}:{:02}", secs / 60, secs % 60),
            _ => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_display_formats_minutes_and_seconds() {
        let call = CallRecord {
            duration_seconds: Some(125),
            ..Default::default()
        };
        assert_eq!(call.duration_display(), "2:05");

        let short = CallRecord {
            duration_seconds: Some(9),
            ..Default::default()
        };
        assert_eq!(short.duration_display(), "0:09");

        assert_eq!(CallRecord::default().duration_display(), "-");
    }

    #[test]
    fn call_parses_camel_case_fields() {
        let call: CallRecord = serde_json::from_str(
            r#"{"id":"k1","contactId":"c1","durationSeconds":60,"recordingUrl":"https://r/1"}"#,
        )
        .unwrap();
        assert_eq!(call.contact_id.as_deref(), Some("c1"));
        assert_eq!(call.duration_seconds, Some(60));
        assert_eq!(call.recording_url.as_deref(), Some("https://r/1"));
    }
}
