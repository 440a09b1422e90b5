use crate::purchase_order_item::domain::InboundDeliveryItem;
use crate::shared::Result;
use async_trait::async_trait;

/// InboundDeliveryItemEnricher port, served by the inbound delivery item
/// read handler
///
/// Fills the derived fields of delivery items nested under a purchase
/// order item.
#[async_trait]
pub trait InboundDeliveryItemEnricher: Send + Sync {
    /// Attaches planned and estimated arrival times to every item
    async fn update_arrival_times(&self, items: &mut [InboundDeliveryItem]) -> Result<()>;

    /// Sets the description of the last reported location
    async fn update_last_location_description(&self, item: &mut InboundDeliveryItem)
        -> Result<()>;

    /// Sets the planned arrival at the plant
    async fn update_planned_arrival_at(&self, item: &mut InboundDeliveryItem) -> Result<()>;
}
