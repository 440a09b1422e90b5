use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Location master data attached to items by the location resolver.
///
/// `location_alt_key` is the key used to correlate items with locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_alt_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type_code: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Location {
    pub fn new(location_alt_key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            location_alt_key: Some(location_alt_key.into()),
            description: Some(description.into()),
            ..Self::default()
        }
    }
}
