//! Repository for the `user_settings` table.

use sqlx::PgPool;
use settings_core::types::DbId;

use crate::models::user_settings::UserSettingsRow;

/// Column list for `user_settings` queries.
const COLUMNS: &str = "user_id, settings, created_at, updated_at";

/// Provides read and merge operations for user settings records.
pub struct UserSettingsRepo;

impl UserSettingsRepo {
    /// Fetch the settings row for a user, if one exists.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UserSettingsRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_settings WHERE user_id = $1");
        sqlx::query_as::<_, UserSettingsRow>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Shallow-merge `patch` (a JSON object) into the user's settings,
    /// creating the row if it does not exist yet.
    ///
    /// JSONB `||` replaces top-level keys wholesale, so a `null` value in
    /// the patch overwrites the stored key with `null`.
    pub async fn merge_patch(
        pool: &PgPool,
        user_id: DbId,
        patch: &serde_json::Value,
    ) -> Result<UserSettingsRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_settings (user_id, settings) \
             VALUES ($1, $2) \
             ON CONFLICT (user_id) DO UPDATE \
             SET settings = user_settings.settings || EXCLUDED.settings, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSettingsRow>(&query)
            .bind(user_id)
            .bind(patch)
            .fetch_one(pool)
            .await
    }
}
