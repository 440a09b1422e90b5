//! pof-item-reader - Read handler for purchase order items of the
//! purchase order fulfillment tracking service
//!
//! The handler sits between an OData v2 framework and the tracking backend.
//! It rewrites incoming reads so the backend can serve them, then enriches
//! the returned items with locations, arrival times, deletion state and
//! unpadded identifiers.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`purchase_order_item`): Entities, policies and pure services
//! - **Application Layer** (`application`): The read use case
//! - **Ports** (`ports`): Interfaces to the framework and the backend
//! - **Shared** (`shared`): Error types, logging setup and result alias
//!
//! # Example
//!
//! ```no_run
//! use pof_item_reader::prelude::*;
//!
//! # async fn run(reader: impl EntityReader, locations: impl LocationResolver, enricher: impl InboundDeliveryItemEnricher) -> Result<()> {
//! init_tracing("info");
//!
//! let use_case = ReadPurchaseOrderItemsUseCase::new(reader, locations, enricher)
//!     .with_config(HandlerConfig::default());
//!
//! let context = ODataContext::new(
//!     "/odata/v1/PurchaseOrderItem?$expand=receivingLocation",
//!     "/odata/v1",
//! );
//! let items = use_case.handle_read_entity_set(&context).await?;
//! println!("{} items", items.len());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod ports;
pub mod purchase_order_item;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::application::use_cases::ReadPurchaseOrderItemsUseCase;
    pub use crate::config::{discover_config, load_config_from_path, HandlerConfig};
    pub use crate::ports::inbound::{ODataContext, ODataReadHandler};
    pub use crate::ports::outbound::{
        EntityReader, InboundDeliveryItemEnricher, LocationMap, LocationResolver,
    };
    pub use crate::purchase_order_item::domain::{
        ArrivalTime, EntityMap, Event, InboundDeliveryItem, Location, ODataResultList,
        ProcessEventDirectory, PurchaseOrderItem,
    };
    pub use crate::purchase_order_item::policies::CompletionValuePolicy;
    pub use crate::purchase_order_item::services::{
        ExpandRequest, FilterBuilder, IdentifierNormalizer, QueryRewriter,
    };
    pub use crate::shared::error::PofError;
    pub use crate::shared::logging::init_tracing;
    pub use crate::shared::Result;
}
