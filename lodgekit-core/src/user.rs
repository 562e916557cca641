//! Account records owning places and reviews.

use chrono::{DateTime, Utc};

/// A registered user.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    /// Unique identifier.
    pub id: String,
    /// Contact address; uniqueness is the store's concern.
    pub email: String,
    /// Optional given name.
    pub first_name: Option<String>,
    /// Optional family name.
    pub last_name: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Construct a `User` with fresh timestamps and no display name.
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            email: email.into(),
            first_name: None,
            last_name: None,
            created_at: now,
            updated_at: now,
        }
    }
}
