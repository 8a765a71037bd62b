pub mod health;
pub mod user_settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /user-settings/nps-survey                        update (PATCH)
/// /user-settings/mcp-config                        get, update (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/user-settings", user_settings::router())
}
