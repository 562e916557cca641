//! Core domain types for the lodgekit record layer.
//!
//! The crate defines the booking entities (states, cities, amenities,
//! users, places, reviews) and the [`EntityStore`] trait through which
//! every other component reads them. Relationships between entities are
//! foreign keys resolved at query time, never owned collections, so a
//! deleted child can never leave a stale reference behind.
//!
//! # Examples
//!
//! ```
//! use lodgekit_core::{City, EntityStore, MemoryStore, Place, State};
//!
//! let mut store = MemoryStore::default();
//! store.insert_state(State::new("s1", "Oregon"));
//! store.insert_city(City::new("c1", "Portland", "s1"));
//! store.insert_place(Place::new("p1", "c1", "u1", "Rose Loft"));
//!
//! let place = store.place("p1").expect("inserted above");
//! assert_eq!(place.city_id, "c1");
//! assert_eq!(store.places().count(), 1);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod amenity;
mod city;
mod place;
mod review;
mod state;
mod store;
mod user;

pub use amenity::Amenity;
pub use city::City;
pub use place::{Place, PlaceUpdate};
pub use review::Review;
pub use state::State;
pub use store::{EntityKind, EntityStore, MemoryStore, StoreError};
pub use user::User;
