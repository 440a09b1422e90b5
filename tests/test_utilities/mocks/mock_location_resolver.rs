use async_trait::async_trait;
use pof_item_reader::prelude::*;

/// Mock LocationResolver backed by a fixed location table
pub struct MockLocationResolver {
    pub locations: LocationMap,
}

impl MockLocationResolver {
    pub fn new() -> Self {
        Self {
            locations: LocationMap::new(),
        }
    }

    pub fn with_location(mut self, alt_key: &str, description: &str) -> Self {
        self.locations
            .insert(alt_key.to_string(), Location::new(alt_key, description));
        self
    }

    fn find(&self, alt_key: Option<&str>) -> Option<Location> {
        alt_key.and_then(|key| self.locations.get(key)).cloned()
    }

    fn batch(&self) -> LocationMap {
        self.locations.clone()
    }
}

impl Default for MockLocationResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationResolver for MockLocationResolver {
    async fn set_receiving_location(&self, item: &mut PurchaseOrderItem) -> Result<()> {
        item.receiving_location = self.find(item.receiving_location_alt_key.as_deref());
        Ok(())
    }

    async fn set_supplier_location(&self, item: &mut PurchaseOrderItem) -> Result<()> {
        item.supplier_location = self.find(item.supplier_location_alt_key.as_deref());
        Ok(())
    }

    async fn locations_for_purchase_order_items(
        &self,
        _items: &[PurchaseOrderItem],
    ) -> Result<LocationMap> {
        Ok(self.batch())
    }

    async fn locations_for_inbound_delivery_items(
        &self,
        _items: &[InboundDeliveryItem],
    ) -> Result<LocationMap> {
        Ok(self.batch())
    }
}
