//! User-defined MCP configuration blob.
//!
//! The config is stored as an opaque string. Validation only checks that
//! it parses as a JSON object; the trimmed string itself is what gets
//! persisted, never a re-serialized copy.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const KEY_JSON_CONFIG: &str = "jsonConfig";

/// Message returned to clients when a config payload is rejected.
pub const INVALID_MCP_CONFIG: &str = "Invalid MCP configuration structure";

/// A validated MCP config. `None` means "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpUserConfig {
    #[serde(default)]
    pub json_config: Option<String>,
}

impl McpUserConfig {
    pub fn unset() -> Self {
        Self { json_config: None }
    }

    pub fn is_set(&self) -> bool {
        self.json_config.is_some()
    }

    pub fn to_value(&self) -> Value {
        json!({ "jsonConfig": self.json_config })
    }
}

/// Narrow an untrusted JSON value into an [`McpUserConfig`].
///
/// - The value must be an object with a `jsonConfig` key.
/// - `null` and whitespace-only strings both mean "unset".
/// - Any other string must parse as a JSON object once trimmed.
///
/// Trimming uses the ECMAScript whitespace set, so a leading BOM is
/// stripped but U+0085 is not.
pub fn parse_mcp_user_config(input: &Value) -> Option<McpUserConfig> {
    let json_config = input.as_object()?.get(KEY_JSON_CONFIG)?;

    let raw = match json_config {
        Value::Null => return Some(McpUserConfig::unset()),
        Value::String(s) => s,
        _ => return None,
    };

    let trimmed = raw.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return Some(McpUserConfig::unset());
    }

    is_json_object(trimmed).then(|| McpUserConfig {
        json_config: Some(trimmed.to_string()),
    })
}

/// `WhiteSpace` and `LineTerminator` as `String.prototype.trim` sees them.
fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c != '\u{85}' && c.is_whitespace())
}

/// Syntax-only check that `s` is a single well-formed JSON object.
///
/// Nothing is materialized, so out-of-range numbers (`1e400`) and deep
/// nesting are accepted as long as the text is valid JSON. `s` is already
/// trimmed, so its first byte is the first token.
fn is_json_object(s: &str) -> bool {
    if !s.starts_with('{') {
        return false;
    }

    let mut de = serde_json::Deserializer::from_str(s);
    de.disable_recursion_limit();
    IgnoredAny::deserialize(&mut de).is_ok() && de.end().is_ok()
}
