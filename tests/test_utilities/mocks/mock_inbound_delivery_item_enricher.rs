use async_trait::async_trait;
use pof_item_reader::prelude::*;

/// Mock InboundDeliveryItemEnricher returning canned delivery details
pub struct MockInboundDeliveryItemEnricher {
    pub last_location: String,
    pub planned_arrival_at: i64,
    pub should_fail: bool,
}

impl MockInboundDeliveryItemEnricher {
    pub fn new() -> Self {
        Self {
            last_location: "Port of Hamburg".to_string(),
            planned_arrival_at: 1_600_000_000_000,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }
}

impl Default for MockInboundDeliveryItemEnricher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InboundDeliveryItemEnricher for MockInboundDeliveryItemEnricher {
    async fn update_arrival_times(&self, items: &mut [InboundDeliveryItem]) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("Mock arrival time failure");
        }
        for item in items {
            item.arrival_times = Some(vec![ArrivalTime {
                location_alt_key: item.plant_location_alt_key.clone(),
                planned_arrival_at: Some(self.planned_arrival_at),
                ..ArrivalTime::default()
            }]);
        }
        Ok(())
    }

    async fn update_last_location_description(
        &self,
        item: &mut InboundDeliveryItem,
    ) -> Result<()> {
        item.last_location_description = Some(self.last_location.clone());
        Ok(())
    }

    async fn update_planned_arrival_at(&self, item: &mut InboundDeliveryItem) -> Result<()> {
        item.planned_arrival_at = Some(self.planned_arrival_at);
        Ok(())
    }
}
