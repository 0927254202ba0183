//! Wire shapes of the ProcessFlow REST API and their conversion into the model.

pub mod conversion;
pub mod types;

pub use conversion::*;
pub use types::*;
