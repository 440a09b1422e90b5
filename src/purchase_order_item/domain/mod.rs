pub mod event;
pub mod inbound_delivery_item;
pub mod location;
pub mod odata_result_list;
pub mod purchase_order_item;

mod lenient;

pub use event::{Event, ProcessEventDirectory};
pub use inbound_delivery_item::{ArrivalTime, InboundDeliveryItem};
pub use location::Location;
pub use odata_result_list::{EntityMap, ODataResultList};
pub use purchase_order_item::PurchaseOrderItem;
