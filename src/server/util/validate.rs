use std::sync::LazyLock;

use regex::Regex;

use crate::server::error::{catalog::CatalogError, user::UserError};

/// Usernames that collide with API routes or platform-internal names
pub static RESERVED_USERNAMES: &[&str] = &["me", "subscriptions", "admin"];

static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.@+-]+$").unwrap_or_else(|e| panic!("Invalid username regex: {}", e))
});

static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[A-Fa-f0-9]{6}$").unwrap_or_else(|e| panic!("Invalid hex color regex: {}", e))
});

/// Validate a username against the allowed charset and the reserved name list
pub fn validate_username(username: &str) -> Result<(), UserError> {
    if RESERVED_USERNAMES.contains(&username.to_lowercase().as_str()) {
        return Err(UserError::ReservedUsername(username.to_string()));
    }

    if !USERNAME_REGEX.is_match(username) {
        return Err(UserError::InvalidUsername(username.to_string()));
    }

    Ok(())
}

/// Validate a tag color as a 6-digit hex color with a leading `#`
pub fn validate_hex_color(color: &str) -> Result<(), CatalogError> {
    if !HEX_COLOR_REGEX.is_match(color) {
        return Err(CatalogError::InvalidColor(color.to_string()));
    }

    Ok(())
}
