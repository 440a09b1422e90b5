/// Purchase order item domain: DTOs read from the backend plus the pure
/// services that rewrite requests and enrich results.
pub mod domain;
pub mod policies;
pub mod services;
