// src/state.rs

use std::sync::Arc;

use crate::analysis::Analyzer;

/// Shared application state. Cloned per request; the analyzer is
/// read-only and shared by reference count.
#[derive(Clone, Default)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}
