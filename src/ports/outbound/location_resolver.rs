use crate::purchase_order_item::domain::{InboundDeliveryItem, Location, PurchaseOrderItem};
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Locations keyed by location alt key
pub type LocationMap = HashMap<String, Location>;

/// LocationResolver port for attaching location master data
///
/// Lookups go to the location service; applying a resolved map is local.
/// The map-applying methods have default implementations that match items
/// to locations by alt key.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    /// Resolves and sets the receiving location of one item
    async fn set_receiving_location(&self, item: &mut PurchaseOrderItem) -> Result<()>;

    /// Resolves and sets the supplier location of one item
    async fn set_supplier_location(&self, item: &mut PurchaseOrderItem) -> Result<()>;

    /// Resolves every location referenced by the items and their nested
    /// delivery items in one batch
    async fn locations_for_purchase_order_items(
        &self,
        items: &[PurchaseOrderItem],
    ) -> Result<LocationMap>;

    /// Resolves every location referenced by the delivery items
    async fn locations_for_inbound_delivery_items(
        &self,
        items: &[InboundDeliveryItem],
    ) -> Result<LocationMap>;

    /// Sets receiving and supplier location from a resolved map
    fn set_locations_for_purchase_order_item(
        &self,
        item: &mut PurchaseOrderItem,
        locations: &LocationMap,
    ) {
        item.receiving_location = lookup(locations, item.receiving_location_alt_key.as_deref());
        item.supplier_location = lookup(locations, item.supplier_location_alt_key.as_deref());
    }

    /// Sets plant and supplier location of a delivery item from a resolved map
    fn set_locations_for_inbound_delivery_item(
        &self,
        item: &mut InboundDeliveryItem,
        locations: &LocationMap,
    ) {
        item.plant_location = lookup(locations, item.plant_location_alt_key.as_deref());
        item.supplier_location = lookup(locations, item.supplier_location_alt_key.as_deref());
    }
}

fn lookup(locations: &LocationMap, alt_key: Option<&str>) -> Option<Location> {
    alt_key.and_then(|key| locations.get(key)).cloned()
}
