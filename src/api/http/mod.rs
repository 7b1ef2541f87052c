// src/api/http/mod.rs

mod handlers;
mod router;

pub use handlers::{AnalyzeRequest, analyze_handler};
pub use router::create_router;
