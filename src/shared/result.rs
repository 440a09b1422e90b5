/// Type alias for Result with anyhow::Error as the error type.
/// Backend and collaborator failures travel through it unchanged.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
