//! Facade crate for the lodgekit record and search layer.
//!
//! This crate re-exports the core entity types, the store seam, and
//! the place search surface so applications can depend on a single
//! crate.
//!
//! # Examples
//!
//! ```
//! use lodgekit::{City, MemoryStore, Place, State, search_json};
//!
//! let mut store = MemoryStore::default();
//! store.insert_state(State::new("s1", "Oregon"));
//! store.insert_city(City::new("c1", "Portland", "s1"));
//! store.insert_place(Place::new("p1", "c1", "u1", "Rose Loft"));
//!
//! let hits = search_json(&store, r#"{"states": ["s1"]}"#).expect("well-formed filter");
//! assert_eq!(hits.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub use lodgekit_core::{
    Amenity, City, EntityKind, EntityStore, MemoryStore, Place, PlaceUpdate, Review, State,
    StoreError, User,
};
pub use lodgekit_search::{
    FilterError, FilterSpec, PlaceSearch, RelationshipResolver, SearchError, project, search_json,
};
