/// Mock implementations for testing
mod mock_entity_reader;
mod mock_inbound_delivery_item_enricher;
mod mock_location_resolver;

pub use mock_entity_reader::MockEntityReader;
pub use mock_inbound_delivery_item_enricher::MockInboundDeliveryItemEnricher;
pub use mock_location_resolver::MockLocationResolver;
