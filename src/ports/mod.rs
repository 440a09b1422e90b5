/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains both inbound ports (driving ports - the read handler
/// the OData framework calls) and outbound ports (driven ports - backend
/// client and enrichment collaborators).
pub mod inbound;
pub mod outbound;
