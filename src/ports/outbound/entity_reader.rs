use crate::purchase_order_item::domain::ODataResultList;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;

/// EntityReader port for reading entities from the backend core service
///
/// URIs are relative to the backend service root and already encoded.
/// Payloads are plain JSON: one object per entity, expanded collections as
/// arrays. Decoding into typed DTOs happens in the application layer.
///
/// # Errors
/// Implementations report transport, authorization and backend failures as
/// errors; the handler passes them to its caller unchanged.
#[async_trait]
pub trait EntityReader: Send + Sync {
    /// Reads a single entity
    async fn read_entity(&self, uri: &str) -> Result<Value>;

    /// Reads one page of an entity set, as the backend pages it
    async fn read_entity_set(&self, uri: &str) -> Result<ODataResultList<Value>>;

    /// Reads every page of an entity set, following next links
    async fn read_entity_set_all(&self, uri: &str) -> Result<ODataResultList<Value>>;
}
