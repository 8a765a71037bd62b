//! Domain types and validation for per-user settings.
//!
//! Everything here is storage- and transport-agnostic: the API crate
//! validates request bodies with these parsers and the DB crate persists
//! the resulting [`settings::SettingsPatch`] values.

pub mod error;
pub mod mcp_config;
pub mod nps_survey;
pub mod settings;
pub mod store;
pub mod types;
