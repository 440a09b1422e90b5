/// Inbound ports (Driving ports) - Read handler interface
///
/// The hosting OData framework calls these for entity and entity-set reads.
pub mod odata_read_handler;

pub use odata_read_handler::{ODataContext, ODataReadHandler};
