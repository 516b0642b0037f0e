use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::store::ResumeStore;
use crate::templates::export::PrintTiming;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Single editing session; mutations are serialized through the lock.
    pub store: Arc<Mutex<ResumeStore>>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: ResumeStore, config: Config) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            config,
        }
    }

    pub fn print_timing(&self) -> PrintTiming {
        PrintTiming {
            settle: std::time::Duration::from_millis(self.config.print_settle_ms),
            close: std::time::Duration::from_millis(self.config.print_close_ms),
        }
    }
}
