use crate::purchase_order_item::domain::{EntityMap, ODataResultList};
use crate::shared::Result;
use async_trait::async_trait;

/// Request context handed over by the OData framework
#[derive(Debug, Clone)]
pub struct ODataContext {
    /// Request URI as received, absolute or relative
    pub request_uri: String,
    /// Root of the OData service the request was addressed to
    pub service_root: String,
}

impl ODataContext {
    pub fn new(request_uri: impl Into<String>, service_root: impl Into<String>) -> Self {
        Self {
            request_uri: request_uri.into(),
            service_root: service_root.into(),
        }
    }

    /// Request URI relative to the service root, starting with `/`.
    ///
    /// URIs outside the service root are returned unchanged.
    pub fn normalized_uri(&self) -> String {
        let root = self.service_root.trim_end_matches('/');
        let relative = if root.is_empty() {
            Some(self.request_uri.as_str())
        } else {
            self.request_uri.strip_prefix(root)
        };

        match relative {
            Some(rest) if rest.starts_with('/') => rest.to_string(),
            Some(rest) if rest.is_empty() || rest.starts_with('?') => format!("/{}", rest),
            _ => self.request_uri.clone(),
        }
    }
}

/// ODataReadHandler - Inbound port for purchase order item reads
///
/// # Errors
/// Backend and collaborator failures are returned unchanged; the framework
/// turns them into an OData error response.
#[async_trait]
pub trait ODataReadHandler: Send + Sync {
    /// Reads an entity set and returns serialized, enriched entities
    async fn handle_read_entity_set(
        &self,
        context: &ODataContext,
    ) -> Result<ODataResultList<EntityMap>>;

    /// Reads a single entity and returns it serialized and enriched
    async fn handle_read_entity(&self, context: &ODataContext) -> Result<EntityMap>;
}
