/// Shared utilities used across layers
pub mod error;
pub mod logging;
pub mod result;

pub use result::Result;
