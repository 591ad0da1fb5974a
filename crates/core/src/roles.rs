//! Role names carried in identity provider tokens.

/// Full access to the admin panel.
pub const ROLE_ADMIN: &str = "admin";
