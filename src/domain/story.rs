//! Immutable domain records, produced only by translating wire payloads.

/// A published story: photo, caption, author, timestamp.
///
/// Equality is structural; the feed is replaced wholesale on every
/// successful fetch and stories are never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    /// Server-assigned identity, stable and unique.
    pub id: String,
    /// Author display name.
    pub name: String,
    /// Free-text caption.
    pub description: String,
    /// Remote locator of the photo.
    pub photo_url: String,
    /// Server-side creation timestamp, kept as the string the API sends.
    pub created_at: String,
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Login {
    pub user_id: String,
    pub name: String,
    pub token: String,
}

/// Result of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Register {
    pub message: String,
}

/// Server acknowledgment for a newly uploaded story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posted {
    pub message: String,
}
