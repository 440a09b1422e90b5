use super::lenient::i64_from_int_or_string;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Suffix shared by every deletion event type, whatever the model namespace.
pub const DELETION_EVENT_SUFFIX: &str = ".DeletionEvent";

/// A tracked event as exposed by the process event directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub event_type: String,
    #[serde(deserialize_with = "i64_from_int_or_string")]
    pub actual_business_timestamp: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    pub fn new(event_type: impl Into<String>, actual_business_timestamp: i64) -> Self {
        Self {
            id: None,
            event_type: event_type.into(),
            actual_business_timestamp,
            extra: Map::new(),
        }
    }

    pub fn is_deletion(&self) -> bool {
        self.event_type.ends_with(DELETION_EVENT_SUFFIX)
    }
}

/// Directory entry linking a tracked process to one of its events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessEventDirectory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub process_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Event>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_timestamp_accepts_string_and_number() {
        let from_string: Event = serde_json::from_str(
            r#"{"eventType": "ns.PurchaseOrderItem.DeletionEvent", "actualBusinessTimestamp": "1600000000000"}"#,
        )
        .unwrap();
        let from_number: Event = serde_json::from_str(
            r#"{"eventType": "ns.PurchaseOrderItem.DeletionEvent", "actualBusinessTimestamp": 1600000000000}"#,
        )
        .unwrap();
        assert_eq!(from_string.actual_business_timestamp, 1_600_000_000_000);
        assert_eq!(from_number.actual_business_timestamp, 1_600_000_000_000);
    }

    #[test]
    fn test_event_timestamp_rejects_garbage() {
        let result = serde_json::from_str::<Event>(
            r#"{"eventType": "x", "actualBusinessTimestamp": "yesterday"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_is_deletion() {
        assert!(Event::new("ns.PurchaseOrderItem.DeletionEvent", 1).is_deletion());
        assert!(!Event::new("ns.PurchaseOrderItem.UndeletionEvent", 1).is_deletion());
        assert!(!Event::new("DeletionEvent", 1).is_deletion());
        assert!(!Event::new("", 1).is_deletion());
    }

    #[test]
    fn test_directory_entry_without_event() {
        let json = r#"{
            "id": "4c0b5b5e-3bbd-4c5c-9f6b-7a1a2f0f7c11",
            "process_id": "0f1e2d3c-4b5a-6978-8796-a5b4c3d2e1f0",
            "event_id": "11111111-2222-3333-4444-555555555555"
        }"#;
        let entry: ProcessEventDirectory = serde_json::from_str(json).unwrap();
        assert_eq!(
            entry.process_id.to_string(),
            "0f1e2d3c-4b5a-6978-8796-a5b4c3d2e1f0"
        );
        assert!(entry.event.is_none());
    }

    #[test]
    fn test_directory_entry_keeps_snake_case_keys() {
        let json = r#"{
            "process_id": "0f1e2d3c-4b5a-6978-8796-a5b4c3d2e1f0",
            "event_id": "11111111-2222-3333-4444-555555555555"
        }"#;
        let entry: ProcessEventDirectory = serde_json::from_str(json).unwrap();
        assert!(entry.event_id.is_some());
        assert!(entry.extra.is_empty());

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["process_id"], "0f1e2d3c-4b5a-6978-8796-a5b4c3d2e1f0");
        assert_eq!(value["event_id"], "11111111-2222-3333-4444-555555555555");
        assert!(value.get("processId").is_none());
    }
}
