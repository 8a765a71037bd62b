//! [`UserSettingsStore`] backed by the `user_settings` table.

use async_trait::async_trait;
use settings_core::error::CoreError;
use settings_core::settings::{SettingsPatch, UserSettings};
use settings_core::store::UserSettingsStore;
use settings_core::types::DbId;

use crate::repositories::UserSettingsRepo;
use crate::DbPool;

#[derive(Debug, Clone)]
pub struct PgUserSettingsStore {
    pool: DbPool,
}

impl PgUserSettingsStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn internal(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "User settings query failed");
    CoreError::Internal(err.to_string())
}

#[async_trait]
impl UserSettingsStore for PgUserSettingsStore {
    async fn get_settings(&self, user_id: DbId) -> Result<Option<UserSettings>, CoreError> {
        let row = UserSettingsRepo::find_by_user(&self.pool, user_id)
            .await
            .map_err(internal)?;

        row.map(|r| UserSettings::from_value(r.settings)).transpose()
    }

    async fn update_settings(
        &self,
        user_id: DbId,
        patch: &SettingsPatch,
    ) -> Result<(), CoreError> {
        if patch.is_empty() {
            return Ok(());
        }

        let row = UserSettingsRepo::merge_patch(&self.pool, user_id, &patch.to_value())
            .await
            .map_err(internal)?;

        tracing::debug!(user_id, updated_at = %row.updated_at, "User settings merged");
        Ok(())
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(internal)
    }
}
