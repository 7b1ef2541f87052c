// src/api/mod.rs
// HTTP boundary: routing, request decoding, error responses

pub mod error;
pub mod http;

pub use error::{ApiError, ApiResult};
pub use http::create_router;
