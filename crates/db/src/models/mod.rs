pub mod user_settings;
