use std::sync::Arc;

use crate::config::Config;
use crate::email::Notifier;
use crate::storage::StorageManager;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<StorageManager>,
    /// Outbound email dispatcher behind a trait object; see [`crate::email::Notifier`].
    pub notifier: Arc<dyn Notifier>,
    pub config: Config,
}
