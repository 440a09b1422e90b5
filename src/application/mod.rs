/// Application layer - Use cases
///
/// This layer orchestrates domain services and reaches the backend
/// only through ports.
pub mod use_cases;
