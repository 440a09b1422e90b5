use async_trait::async_trait;
use pof_item_reader::prelude::*;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Requests received by a mock reader, percent-decoded
pub type RequestLog = Arc<Mutex<Vec<String>>>;

/// Mock EntityReader serving purchase order items and their event directory
pub struct MockEntityReader {
    pub items: Vec<Value>,
    pub count: Option<u64>,
    pub next: Option<String>,
    pub directory: Vec<Value>,
    pub should_fail: bool,
    requests: RequestLog,
}

impl MockEntityReader {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            count: None,
            next: None,
            directory: Vec::new(),
            should_fail: false,
            requests: RequestLog::default(),
        }
    }

    pub fn with_item(mut self, item: Value) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_paging(mut self, count: u64, next: &str) -> Self {
        self.count = Some(count);
        self.next = Some(next.to_string());
        self
    }

    /// Adds a directory entry; `event_type` is the short name, e.g. `DeletionEvent`
    pub fn with_event(
        mut self,
        namespace: &str,
        process_id: &str,
        event_type: &str,
        timestamp: i64,
    ) -> Self {
        self.directory.push(json!({
            "process_id": process_id,
            "event": {
                "eventType": format!("{}.PurchaseOrderItem.{}", namespace, event_type),
                "actualBusinessTimestamp": format!("{}", timestamp)
            }
        }));
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    /// Handle to the request log that stays valid after the reader moves
    pub fn request_log(&self) -> RequestLog {
        Arc::clone(&self.requests)
    }

    fn record(&self, uri: &str) -> Result<()> {
        let decoded = urlencoding::decode(uri)?.into_owned();
        self.requests.lock().unwrap().push(decoded);
        if self.should_fail {
            anyhow::bail!("Mock backend failure");
        }
        Ok(())
    }
}

impl Default for MockEntityReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityReader for MockEntityReader {
    async fn read_entity(&self, uri: &str) -> Result<Value> {
        self.record(uri)?;
        let item = self
            .items
            .iter()
            .find(|item| {
                item["id"]
                    .as_str()
                    .is_some_and(|id| uri.contains(&format!("guid'{}'", id)))
            })
            .cloned();
        item.ok_or_else(|| anyhow::anyhow!("Entity not found: {}", uri))
    }

    async fn read_entity_set(&self, uri: &str) -> Result<ODataResultList<Value>> {
        self.record(uri)?;
        Ok(ODataResultList {
            results: self.items.clone(),
            count: self.count,
            next: self.next.clone(),
        })
    }

    async fn read_entity_set_all(&self, uri: &str) -> Result<ODataResultList<Value>> {
        self.record(uri)?;
        let filter = urlencoding::decode(uri)?.into_owned();
        let results = self
            .directory
            .iter()
            .filter(|entry| {
                entry["process_id"]
                    .as_str()
                    .is_some_and(|id| filter.contains(&format!("guid'{}'", id)))
            })
            .cloned()
            .collect();
        Ok(ODataResultList::new(results))
    }
}
