use crate::store::ProjectStore;

use std::sync::Arc;

/// Shared application state. Read-only after startup, cheap to clone
/// per request; no synchronization is needed.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProjectStore>,
}
