//! Application state shared by every handler.

use hackdesk_core::Config;
use hackdesk_storage::PersistenceRouter;

/// Configuration plus the persistence router selected at startup
///
/// Handlers receive it as `State<Arc<AppState>>`.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub persistence: PersistenceRouter,
}

impl AppState {
    pub fn new(config: Config, persistence: PersistenceRouter) -> Self {
        Self {
            config,
            persistence,
        }
    }
}
