//! JWT identity for the API.
//!
//! Tokens are issued elsewhere; this module only validates them and exposes
//! the acting user to handlers as an [`Auth`] extension.

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, generate_token, validate_token};
pub use middleware::{Auth, auth_middleware};

/// Cookie name for JWT token
pub const AUTH_COOKIE_NAME: &str = "auth_token";
