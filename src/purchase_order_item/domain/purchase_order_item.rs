use super::inbound_delivery_item::InboundDeliveryItem;
use super::location::Location;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Entity set name of purchase order items on the backend.
pub const PURCHASE_ORDER_ITEM_ENTITY: &str = "PurchaseOrderItem";

/// Purchase order item as returned by the backend core service.
///
/// Fields the handler does not touch are carried in `extra` so that the
/// response map contains everything the backend returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderItem {
    /// Absent when the caller's `$select` projects it away
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_order_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_value: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_value: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiving_location_alt_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_location_alt_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiving_location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inbound_delivery_items: Option<Vec<InboundDeliveryItem>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PurchaseOrderItem {
    pub fn new(id: Uuid) -> Self {
        Self {
            id: Some(id),
            purchase_order_no: None,
            item_no: None,
            material_id: None,
            supplier_id: None,
            net_value: None,
            completion_value: None,
            receiving_location_alt_key: None,
            supplier_location_alt_key: None,
            receiving_location: None,
            supplier_location: None,
            inbound_delivery_items: None,
            extra: Map::new(),
        }
    }

    /// Nested inbound delivery items; empty when they were not expanded.
    pub fn inbound_delivery_items(&self) -> &[InboundDeliveryItem] {
        self.inbound_delivery_items.as_deref().unwrap_or_default()
    }

    pub fn inbound_delivery_items_mut(&mut self) -> &mut [InboundDeliveryItem] {
        self.inbound_delivery_items
            .as_deref_mut()
            .unwrap_or_default()
    }

    /// Marks the item as logically deleted: nothing left to deliver or pay.
    pub fn zero_values(&mut self) {
        self.net_value = Some(Decimal::ZERO);
        self.completion_value = Some(Decimal::ZERO);
    }
}
