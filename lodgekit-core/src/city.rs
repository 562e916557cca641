//! Cities, the middle tier between states and places.

use chrono::{DateTime, Utc};

/// A city within a state.
///
/// Places are related by back-reference: a place belongs to this city
/// when its `city_id` matches [`City::id`].
///
/// # Examples
/// ```
/// use lodgekit_core::City;
///
/// let city = City::new("c1", "Portland", "s1");
/// assert_eq!(city.state_id, "s1");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Identifier of the owning [`State`](crate::State).
    pub state_id: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl City {
    /// Construct a `City` with fresh timestamps.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        state_id: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            state_id: state_id.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
