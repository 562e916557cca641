//! Reviews left by users on places.

use chrono::{DateTime, Utc};

/// A review of a place by a user.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Review {
    /// Unique identifier.
    pub id: String,
    /// Identifier of the reviewed [`Place`](crate::Place).
    pub place_id: String,
    /// Identifier of the authoring [`User`](crate::User).
    pub user_id: String,
    /// Free-form review body.
    pub text: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Construct a `Review` with fresh timestamps.
    pub fn new(
        id: impl Into<String>,
        place_id: impl Into<String>,
        user_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            place_id: place_id.into(),
            user_id: user_id.into(),
            text: text.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
