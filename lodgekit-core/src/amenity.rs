//! Amenities offered by places.

use chrono::{DateTime, Utc};

/// A feature a place can offer, such as wifi or parking.
///
/// The relation to places is many-to-many: each place carries the list
/// of amenity ids it offers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Amenity {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl Amenity {
    /// Construct an `Amenity` with fresh timestamps.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
