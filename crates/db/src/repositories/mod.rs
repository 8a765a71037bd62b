pub mod user_settings_repo;

pub use user_settings_repo::UserSettingsRepo;
