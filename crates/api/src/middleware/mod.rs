//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`auth::RequireAuth`] -- Requires any authenticated user.

pub mod auth;
