use std::sync::Arc;

use settings_core::store::UserSettingsStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Per-user settings persistence.
    pub settings: Arc<dyn UserSettingsStore>,
    /// Server configuration (JWT secret is read by the auth extractor).
    pub config: Arc<ServerConfig>,
}
