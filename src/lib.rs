// src/lib.rs

pub mod analysis;
pub mod api;
pub mod config;
pub mod state;

pub use analysis::{AnalysisResult, Analyzer, Sentiment};
pub use state::AppState;
