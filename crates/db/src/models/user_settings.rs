//! User settings entity model.

use settings_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `user_settings` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserSettingsRow {
    pub user_id: DbId,
    pub settings: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
