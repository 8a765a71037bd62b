//! Settings persistence port.
//!
//! Handlers depend on [`UserSettingsStore`] only; the Postgres
//! implementation lives in the DB crate and [`InMemorySettingsStore`]
//! backs tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::settings::{SettingsPatch, UserSettings};
use crate::types::DbId;

/// Persistence for per-user settings records.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - `update_settings` is a shallow merge, creating the record if missing
#[async_trait]
pub trait UserSettingsStore: Send + Sync {
    /// Load a user's settings. `None` if nothing has been stored yet.
    async fn get_settings(&self, user_id: DbId) -> Result<Option<UserSettings>, CoreError>;

    /// Merge `patch` into the user's stored settings.
    async fn update_settings(&self, user_id: DbId, patch: &SettingsPatch)
        -> Result<(), CoreError>;

    /// Check that the backing storage is reachable.
    async fn health_check(&self) -> Result<(), CoreError>;
}

/// Process-local store with the same merge semantics as the Postgres one.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    records: RwLock<HashMap<DbId, UserSettings>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user's record, replacing anything already stored.
    pub async fn insert(&self, user_id: DbId, settings: UserSettings) {
        self.records.write().await.insert(user_id, settings);
    }
}

#[async_trait]
impl UserSettingsStore for InMemorySettingsStore {
    async fn get_settings(&self, user_id: DbId) -> Result<Option<UserSettings>, CoreError> {
        Ok(self.records.read().await.get(&user_id).cloned())
    }

    async fn update_settings(
        &self,
        user_id: DbId,
        patch: &SettingsPatch,
    ) -> Result<(), CoreError> {
        if patch.is_empty() {
            return Ok(());
        }
        self.records
            .write()
            .await
            .entry(user_id)
            .or_default()
            .apply(patch);
        Ok(())
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
