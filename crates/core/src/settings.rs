//! The stored per-user settings record and shallow merge patches.
//!
//! Settings are a free-form JSON object. Only `npsSurvey` and `mcpConfig`
//! are understood here; every other key is carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::mcp_config::{McpUserConfig, KEY_JSON_CONFIG};
use crate::nps_survey::{parse_nps_survey_state, NpsSurveyState};

pub const KEY_NPS_SURVEY: &str = "npsSurvey";
pub const KEY_MCP_CONFIG: &str = "mcpConfig";

// ---------------------------------------------------------------------------
// Stored record
// ---------------------------------------------------------------------------

/// A user's settings object as persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserSettings(Map<String, Value>);

impl UserSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a stored JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(CoreError::Internal(format!(
                "Stored settings must be a JSON object, got: {other}"
            ))),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// `mcpConfig.jsonConfig`, or `None` if unset at any level.
    pub fn mcp_json_config(&self) -> Option<&str> {
        self.0.get(KEY_MCP_CONFIG)?.get(KEY_JSON_CONFIG)?.as_str()
    }

    /// The stored survey state, if present and well formed.
    pub fn nps_survey(&self) -> Option<NpsSurveyState> {
        parse_nps_survey_state(self.0.get(KEY_NPS_SURVEY)?)
    }

    /// Shallow merge: every key in the patch replaces the stored key.
    pub fn apply(&mut self, patch: &SettingsPatch) {
        for (key, value) in patch.to_map() {
            self.0.insert(key, value);
        }
    }
}

// ---------------------------------------------------------------------------
// Patch
// ---------------------------------------------------------------------------

/// A shallow merge patch for [`UserSettings`].
///
/// `None` leaves the stored key alone. For `mcp_config`, `Some(None)`
/// writes an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub nps_survey: Option<NpsSurveyState>,
    pub mcp_config: Option<Option<McpUserConfig>>,
}

impl SettingsPatch {
    pub fn nps_survey(state: NpsSurveyState) -> Self {
        Self {
            nps_survey: Some(state),
            ..Self::default()
        }
    }

    /// An unset config clears the whole `mcpConfig` key to `null` rather
    /// than storing `{ "jsonConfig": null }`.
    pub fn mcp_config(config: &McpUserConfig) -> Self {
        let stored = config.is_set().then(|| config.clone());
        Self {
            mcp_config: Some(stored),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nps_survey.is_none() && self.mcp_config.is_none()
    }

    /// The patch as a JSON object containing only the keys it sets.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        if let Some(state) = &self.nps_survey {
            map.insert(KEY_NPS_SURVEY.into(), state.clone().into());
        }
        if let Some(mcp) = &self.mcp_config {
            let value = mcp.as_ref().map_or(Value::Null, McpUserConfig::to_value);
            map.insert(KEY_MCP_CONFIG.into(), value);
        }
        map
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp_config::parse_mcp_user_config;
    use serde_json::json;

    fn settings(value: Value) -> UserSettings {
        UserSettings::from_value(value).unwrap()
    }

    #[test]
    fn mcp_json_config_defaults_to_none_at_every_level() {
        assert_eq!(UserSettings::new().mcp_json_config(), None);
        assert_eq!(settings(json!({ "mcpConfig": null })).mcp_json_config(), None);
        assert_eq!(settings(json!({ "mcpConfig": {} })).mcp_json_config(), None);
        assert_eq!(
            settings(json!({ "mcpConfig": { "jsonConfig": null } })).mcp_json_config(),
            None
        );
        assert_eq!(
            settings(json!({ "mcpConfig": { "jsonConfig": "{}" } })).mcp_json_config(),
            Some("{}")
        );
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(UserSettings::from_value(json!([])).is_err());
        assert!(UserSettings::from_value(json!(null)).is_err());
    }

    #[test]
    fn nps_patch_shape() {
        let state = parse_nps_survey_state(&json!({ "responded": true, "lastShownAt": 5 })).unwrap();
        assert_eq!(
            SettingsPatch::nps_survey(state).to_value(),
            json!({ "npsSurvey": { "responded": true, "lastShownAt": 5 } })
        );
    }

    #[test]
    fn unset_mcp_config_patches_field_to_null() {
        let patch = SettingsPatch::mcp_config(&McpUserConfig::unset());
        assert_eq!(patch.to_value(), json!({ "mcpConfig": null }));
    }

    #[test]
    fn set_mcp_config_patches_object() {
        let config = parse_mcp_user_config(&json!({ "jsonConfig": "{\"a\":1}" })).unwrap();
        assert_eq!(
            SettingsPatch::mcp_config(&config).to_value(),
            json!({ "mcpConfig": { "jsonConfig": "{\"a\":1}" } })
        );
    }

    #[test]
    fn apply_is_shallow_and_preserves_other_keys() {
        let mut stored = settings(json!({
            "theme": "dark",
            "mcpConfig": { "jsonConfig": "{\"old\":true}" },
            "npsSurvey": { "responded": true, "lastShownAt": 1 },
        }));

        stored.apply(&SettingsPatch::mcp_config(&McpUserConfig::unset()));

        assert_eq!(
            stored.into_value(),
            json!({
                "theme": "dark",
                "mcpConfig": null,
                "npsSurvey": { "responded": true, "lastShownAt": 1 },
            })
        );
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let patch = SettingsPatch::default();
        assert!(patch.is_empty());

        let mut stored = settings(json!({ "a": 1 }));
        stored.apply(&patch);
        assert_eq!(stored.into_value(), json!({ "a": 1 }));
    }

    #[test]
    fn stored_nps_survey_is_readable() {
        let stored = settings(json!({
            "npsSurvey": { "waitingForResponse": true, "ignoredCount": 3, "lastShownAt": 9 }
        }));
        assert_eq!(stored.nps_survey().map(|s| s.kind()), Some("waiting_for_response"));
    }
}
