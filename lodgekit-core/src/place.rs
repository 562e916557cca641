//! Places, the bookable unit at the centre of every search.

use chrono::{DateTime, Utc};

/// A bookable place in a city, owned by a user.
///
/// `amenities` holds amenity ids; the records themselves live in the
/// store and are resolved at query time. Detail fields are optional
/// because listings are frequently created with name and location only
/// and fleshed out later.
///
/// # Examples
/// ```
/// use lodgekit_core::Place;
///
/// let place = Place::with_amenities("p1", "c1", "u1", "Rose Loft", ["a1", "a2"]);
/// assert_eq!(place.amenities, vec!["a1".to_owned(), "a2".to_owned()]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    /// Unique identifier.
    pub id: String,
    /// Identifier of the containing [`City`](crate::City).
    pub city_id: String,
    /// Identifier of the owning [`User`](crate::User).
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Number of rooms, when known.
    pub number_rooms: Option<u32>,
    /// Number of bathrooms, when known.
    pub number_bathrooms: Option<u32>,
    /// Maximum number of guests, when known.
    pub max_guest: Option<u32>,
    /// Nightly price in the smallest currency unit, when known.
    pub price_by_night: Option<u32>,
    /// WGS84 latitude in degrees, when known.
    pub latitude: Option<f64>,
    /// WGS84 longitude in degrees, when known.
    pub longitude: Option<f64>,
    /// Ids of the amenities offered here.
    pub amenities: Vec<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl Place {
    /// Construct a `Place` with no amenities and no detail fields.
    pub fn new(
        id: impl Into<String>,
        city_id: impl Into<String>,
        user_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            city_id: city_id.into(),
            user_id: user_id.into(),
            name: name.into(),
            description: None,
            number_rooms: None,
            number_bathrooms: None,
            max_guest: None,
            price_by_night: None,
            latitude: None,
            longitude: None,
            amenities: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Construct a `Place` offering the given amenity ids.
    pub fn with_amenities<I, S>(
        id: impl Into<String>,
        city_id: impl Into<String>,
        user_id: impl Into<String>,
        name: impl Into<String>,
        amenities: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut place = Self::new(id, city_id, user_id, name);
        place.amenities = amenities.into_iter().map(Into::into).collect();
        place
    }

    /// Apply a patch and refresh `updated_at`.
    ///
    /// Only the fields named by [`PlaceUpdate`] can change; identity,
    /// foreign keys, amenity links, and `created_at` are outside the
    /// update surface.
    pub fn apply(&mut self, patch: &PlaceUpdate) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(number_rooms) = patch.number_rooms {
            self.number_rooms = Some(number_rooms);
        }
        if let Some(number_bathrooms) = patch.number_bathrooms {
            self.number_bathrooms = Some(number_bathrooms);
        }
        if let Some(max_guest) = patch.max_guest {
            self.max_guest = Some(max_guest);
        }
        if let Some(price_by_night) = patch.price_by_night {
            self.price_by_night = Some(price_by_night);
        }
        if let Some(latitude) = patch.latitude {
            self.latitude = Some(latitude);
        }
        if let Some(longitude) = patch.longitude {
            self.longitude = Some(longitude);
        }
        self.updated_at = Utc::now();
    }
}

/// A partial update to a [`Place`].
///
/// The struct is the explicit allowlist of mutable fields. Keys outside
/// it (including `id`, `user_id`, `city_id`, and the timestamps) are
/// ignored when deserialising a request body, so a client can never
/// rewrite identity or ownership through an update.
///
/// # Examples
/// ```
/// use lodgekit_core::{Place, PlaceUpdate};
///
/// let mut place = Place::new("p1", "c1", "u1", "Rose Loft");
/// let patch = PlaceUpdate {
///     price_by_night: Some(120),
///     ..PlaceUpdate::default()
/// };
/// place.apply(&patch);
/// assert_eq!(place.price_by_night, Some(120));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlaceUpdate {
    /// Replacement display name.
    pub name: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement room count.
    pub number_rooms: Option<u32>,
    /// Replacement bathroom count.
    pub number_bathrooms: Option<u32>,
    /// Replacement guest limit.
    pub max_guest: Option<u32>,
    /// Replacement nightly price.
    pub price_by_night: Option<u32>,
    /// Replacement latitude.
    pub latitude: Option<f64>,
    /// Replacement longitude.
    pub longitude: Option<f64>,
}
