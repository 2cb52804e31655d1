//! Form input gates applied before submitting to the backend.
//!
//! These mirror what the server will enforce anyway; they exist to fail
//! fast in the frontend and are not a security boundary.

use std::sync::OnceLock;

use regex::Regex;

static EMAIL: OnceLock<Regex> = OnceLock::new();

/// Whether the string is shaped like an email address: a local part of
/// permitted characters, `@`, then dot-separated domain labels.
pub fn is_valid_email(email: &str) -> bool {
    let pattern = EMAIL.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9+._%\-]{1,256}@[A-Za-z0-9][A-Za-z0-9\-]{0,64}(\.[A-Za-z0-9][A-Za-z0-9\-]{0,25})+$",
        )
        .expect("email pattern compiles")
    });
    pattern.is_match(email)
}

/// Registration requires at least 6 characters of password.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 6
}

/// Display names only need to be non-empty.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
}
