//! Route definitions for per-user settings, mounted at `/user-settings`.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::user_settings;
use crate::state::AppState;

/// ```text
/// PATCH /nps-survey  -> update_nps_survey
/// GET   /mcp-config  -> get_mcp_config
/// PATCH /mcp-config  -> update_mcp_config
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/nps-survey", patch(user_settings::update_nps_survey))
        .route(
            "/mcp-config",
            get(user_settings::get_mcp_config).patch(user_settings::update_mcp_config),
        )
}
