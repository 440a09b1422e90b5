/// Outbound ports (Driven ports) - Backend and collaborator interfaces
///
/// These ports define what the handler needs from the outside world: a
/// backend entity-read client and the services that resolve locations and
/// delivery details.
pub mod entity_reader;
pub mod inbound_delivery_item_enricher;
pub mod location_resolver;

pub use entity_reader::EntityReader;
pub use inbound_delivery_item_enricher::InboundDeliveryItemEnricher;
pub use location_resolver::{LocationMap, LocationResolver};
