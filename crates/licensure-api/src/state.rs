use std::sync::Arc;

use tokio::sync::Mutex;

use licensure_registry::registry::LicenseRegistry;

/// Shared application state, injected into all route handlers via Axum state.
///
/// The registry mutex serializes every mutation, which is what keeps
/// concurrent renewal calls for the same license from racing.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Mutex<LicenseRegistry>>,
}
