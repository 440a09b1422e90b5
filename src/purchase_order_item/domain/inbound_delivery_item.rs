use super::lenient::opt_i64_from_int_or_string;
use super::location::Location;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Planned or estimated arrival of a delivery at one stop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_alt_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "opt_i64_from_int_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub planned_arrival_at: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Inbound delivery item nested under a purchase order item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundDeliveryItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inbound_delivery_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant_location_alt_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_location_alt_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant_location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_times: Option<Vec<ArrivalTime>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_location_description: Option<String>,
    #[serde(
        default,
        deserialize_with = "opt_i64_from_int_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub planned_arrival_at: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
