use thiserror::Error;

/// Failures raised by the handler itself.
///
/// Errors coming from the backend client or the location/delivery
/// collaborators are not wrapped; they reach the caller as they were raised.
#[derive(Debug, Error)]
pub enum PofError {
    #[error("Failed to decode {entity} from backend response\nDetails: {details}")]
    EntityDecode { entity: String, details: String },

    #[error("Failed to convert {entity} into a response map\nDetails: {details}")]
    EntityEncode { entity: String, details: String },

    #[error("Invalid config: {field}\nReason: {reason}\n\n💡 Hint: Check the handler configuration file")]
    InvalidConfig { field: String, reason: String },
}
