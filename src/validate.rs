//! Field validators for the registration form
//!
//! Pure functions over the current field values: `None` means the value is
//! acceptable, `Some` carries the message shown under the field. Invalid
//! input is a normal return value, never an error.

use regex::Regex;
use std::sync::LazyLock;

/// Letters (including the accented Latin-1 range) and whitespace only.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZÀ-ÿ\s]+$").expect("name pattern compiles"));

/// Address shape: local part, `@`, then dot-separated domain labels.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9-]{0,25})+$",
    )
    .expect("email pattern compiles")
});

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate the full-name field.
///
/// Checks run in order; the first failure wins.
pub fn validate_name(name: &str) -> Option<&'static str> {
    if is_blank(name) {
        Some("Name is required")
    } else if name.chars().count() < 2 {
        Some("Name must be at least 2 characters")
    } else if !NAME_PATTERN.is_match(name) {
        Some("Name can only contain letters and spaces")
    } else {
        None
    }
}

/// Validate the email field.
pub fn validate_email(email: &str) -> Option<&'static str> {
    if is_blank(email) {
        Some("Email is required")
    } else if !EMAIL_PATTERN.is_match(email) {
        Some("Enter a valid email address")
    } else {
        None
    }
}

/// Validate the password field.
///
/// Length is checked before the character-class rules, so a short password
/// reports the length message even when it is also missing a class. There is
/// no special-character rule and no maximum length.
pub fn validate_password(password: &str) -> Option<&'static str> {
    if is_blank(password) {
        Some("Password is required")
    } else if password.chars().count() < 8 {
        Some("Password must be at least 8 characters")
    } else if !password.chars().any(|c| c.is_ascii_uppercase()) {
        Some("Password must contain an uppercase letter")
    } else if !password.chars().any(|c| c.is_ascii_lowercase()) {
        Some("Password must contain a lowercase letter")
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Some("Password must contain a number")
    } else {
        None
    }
}

/// Validate the confirmation field against the password.
///
/// An empty confirmation asks for input rather than reporting a mismatch.
pub fn validate_confirm_password(password: &str, confirm: &str) -> Option<&'static str> {
    if is_blank(confirm) {
        Some("Confirm your password")
    } else if confirm != password {
        Some("Passwords do not match")
    } else {
        None
    }
}
