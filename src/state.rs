use crate::routes::PROBE_PATHS;
use std::collections::HashSet;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub probe_paths: Arc<HashSet<&'static str>>,
}

impl AppState {
    pub fn is_probe_path(&self, target: &str) -> bool {
        self.probe_paths.contains(target)
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            probe_paths: Arc::new(PROBE_PATHS.into_iter().collect()),
        }
    }
}
