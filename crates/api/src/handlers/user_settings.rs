//! Handlers for per-user settings: NPS survey state and MCP config.
//!
//! Request bodies are validated into core types before anything reaches
//! the settings store, so a rejected request never mutates stored state.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use settings_core::mcp_config::{parse_mcp_user_config, McpUserConfig, INVALID_MCP_CONFIG};
use settings_core::nps_survey::{parse_nps_survey_state, INVALID_NPS_SURVEY_STATE};
use settings_core::settings::{SettingsPatch, UserSettings};

use crate::error::{AppError, AppResult};
use crate::extract::RawJson;
use crate::middleware::auth::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// NPS survey
// ---------------------------------------------------------------------------

/// PATCH /api/v1/user-settings/nps-survey
///
/// Replace the authenticated user's survey state. Responds 200 with an
/// empty body.
pub async fn update_nps_survey(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    RawJson(body): RawJson,
) -> AppResult<StatusCode> {
    let survey = parse_nps_survey_state(&body)
        .ok_or_else(|| AppError::BadRequest(INVALID_NPS_SURVEY_STATE.to_string()))?;
    let kind = survey.kind();

    state
        .settings
        .update_settings(user.user_id, &SettingsPatch::nps_survey(survey))
        .await?;

    tracing::info!(user_id = user.user_id, state = kind, "NPS survey state updated");

    Ok(StatusCode::OK)
}

// ---------------------------------------------------------------------------
// MCP config
// ---------------------------------------------------------------------------

/// GET /api/v1/user-settings/mcp-config
///
/// `jsonConfig` is `null` when nothing has been stored.
pub async fn get_mcp_config(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<McpUserConfig>>> {
    let settings = state.settings.get_settings(user.user_id).await?;

    let json_config = settings
        .as_ref()
        .and_then(UserSettings::mcp_json_config)
        .map(str::to_owned);

    Ok(Json(DataResponse {
        data: McpUserConfig { json_config },
    }))
}

/// PATCH /api/v1/user-settings/mcp-config
///
/// Store (or clear) the user's MCP config and echo the normalized value.
pub async fn update_mcp_config(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    RawJson(body): RawJson,
) -> AppResult<Json<DataResponse<McpUserConfig>>> {
    let config = parse_mcp_user_config(&body)
        .ok_or_else(|| AppError::BadRequest(INVALID_MCP_CONFIG.to_string()))?;

    state
        .settings
        .update_settings(user.user_id, &SettingsPatch::mcp_config(&config))
        .await?;

    tracing::info!(
        user_id = user.user_id,
        cleared = !config.is_set(),
        "MCP config updated",
    );

    Ok(Json(DataResponse { data: config }))
}
