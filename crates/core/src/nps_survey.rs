//! NPS (net promoter score) survey state tracked per user.
//!
//! The frontend reports the survey state as a loosely shaped JSON object.
//! [`parse_nps_survey_state`] narrows it to one of the two recognised
//! variants; anything else is rejected and never stored.

use serde_json::{Map, Number, Value};

// ---------------------------------------------------------------------------
// Wire keys
// ---------------------------------------------------------------------------

pub const KEY_RESPONDED: &str = "responded";
pub const KEY_WAITING_FOR_RESPONSE: &str = "waitingForResponse";
pub const KEY_IGNORED_COUNT: &str = "ignoredCount";
pub const KEY_LAST_SHOWN_AT: &str = "lastShownAt";

/// Message returned to clients when a survey state is rejected.
pub const INVALID_NPS_SURVEY_STATE: &str = "Invalid nps survey state structure";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// A validated survey state.
///
/// Numbers are kept as [`Number`] so they serialize back exactly as the
/// client sent them (`5` stays `5`, not `5.0`).
#[derive(Debug, Clone, PartialEq)]
pub enum NpsSurveyState {
    /// The user answered the survey.
    Responded { last_shown_at: Number },
    /// The survey was shown but not answered yet.
    WaitingForResponse {
        ignored_count: Number,
        last_shown_at: Number,
    },
}

impl NpsSurveyState {
    /// When the survey was last shown (epoch millis as sent by the client).
    pub fn last_shown_at(&self) -> &Number {
        match self {
            Self::Responded { last_shown_at } | Self::WaitingForResponse { last_shown_at, .. } => {
                last_shown_at
            }
        }
    }

    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Responded { .. } => "responded",
            Self::WaitingForResponse { .. } => "waiting_for_response",
        }
    }
}

/// Narrow an untrusted JSON value into an [`NpsSurveyState`].
///
/// - The value must be an object with a numeric `lastShownAt`.
/// - `responded: true` wins over everything else; extra fields are dropped.
/// - Otherwise `waitingForResponse: true` plus a numeric `ignoredCount`.
///
/// Returns `None` for every other shape.
pub fn parse_nps_survey_state(input: &Value) -> Option<NpsSurveyState> {
    let obj = input.as_object()?;
    let last_shown_at = number_field(obj, KEY_LAST_SHOWN_AT)?;

    if is_true(obj, KEY_RESPONDED) {
        return Some(NpsSurveyState::Responded { last_shown_at });
    }

    if is_true(obj, KEY_WAITING_FOR_RESPONSE) {
        let ignored_count = number_field(obj, KEY_IGNORED_COUNT)?;
        return Some(NpsSurveyState::WaitingForResponse {
            ignored_count,
            last_shown_at,
        });
    }

    None
}

fn number_field(obj: &Map<String, Value>, key: &str) -> Option<Number> {
    match obj.get(key) {
        Some(Value::Number(n)) => Some(n.clone()),
        _ => None,
    }
}

/// Strict `=== true`: truthy values like `1` or `"true"` do not count.
fn is_true(obj: &Map<String, Value>, key: &str) -> bool {
    matches!(obj.get(key), Some(Value::Bool(true)))
}

impl From<NpsSurveyState> for Value {
    fn from(state: NpsSurveyState) -> Self {
        let mut map = Map::new();
        match state {
            NpsSurveyState::Responded { last_shown_at } => {
                map.insert(KEY_RESPONDED.into(), Value::Bool(true));
                map.insert(KEY_LAST_SHOWN_AT.into(), Value::Number(last_shown_at));
            }
            NpsSurveyState::WaitingForResponse {
                ignored_count,
                last_shown_at,
            } => {
                map.insert(KEY_WAITING_FOR_RESPONSE.into(), Value::Bool(true));
                map.insert(KEY_IGNORED_COUNT.into(), Value::Number(ignored_count));
                map.insert(KEY_LAST_SHOWN_AT.into(), Value::Number(last_shown_at));
            }
        }
        Value::Object(map)
    }
}
