//! Shared API types: error body and request extractors

pub mod error;
pub mod json;
pub mod path;

pub use error::{ApiError, ApiErrorResponse};
pub use json::ValidatedJson;
pub use path::Path;
