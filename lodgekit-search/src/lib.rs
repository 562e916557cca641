//! Multi-criteria place search over a lodgekit record store.
//!
//! The crate composes three pieces on top of the
//! [`EntityStore`](lodgekit_core::EntityStore) seam:
//! - [`RelationshipResolver`] derives related records through foreign
//!   keys (a state's cities, a city's places, a place's amenities).
//! - [`PlaceSearch`] evaluates a [`FilterSpec`] against the full place
//!   set, composing amenity intersection with hierarchical city/state
//!   narrowing.
//! - [`project`] strips the transient amenity links from matched
//!   places before they are returned to a caller.
//!
//! [`search_json`] ties the three together for callers that speak the
//! JSON filter format.
//!
//! # Examples
//!
//! ```
//! use lodgekit_core::{City, MemoryStore, Place, State};
//! use lodgekit_search::search_json;
//!
//! let mut store = MemoryStore::default();
//! store.insert_state(State::new("s1", "Oregon"));
//! store.insert_city(City::new("c1", "Portland", "s1"));
//! store.insert_place(Place::new("p1", "c1", "u1", "Rose Loft"));
//!
//! let hits = search_json(&store, r#"{"cities": ["c1"]}"#).expect("well-formed filter");
//! assert_eq!(hits.len(), 1);
//! assert!(hits[0].get("amenities").is_none());
//! ```

#![forbid(unsafe_code)]

mod engine;
mod error;
mod filter;
mod project;
mod resolver;

pub use engine::PlaceSearch;
pub use error::{FilterError, SearchError};
pub use filter::FilterSpec;
pub use project::project;
pub use resolver::RelationshipResolver;

use lodgekit_core::EntityStore;

/// Run a search from a JSON filter body and project the results.
///
/// The body follows the shape
/// `{"states": [id...], "cities": [id...], "amenities": [id...]}` with
/// every key optional. `null`, `{}`, and all-empty arrays mean
/// unconstrained: every place in the store is returned.
///
/// # Errors
/// Returns a client-facing [`SearchError`] when the body is not valid
/// JSON, is not a JSON object (or `null`), or holds filter keys that
/// are not arrays of id strings. No partial results accompany an
/// error.
pub fn search_json(
    store: &dyn EntityStore,
    body: &str,
) -> Result<Vec<serde_json::Value>, SearchError> {
    let spec = FilterSpec::from_json(body)?;
    let hits = PlaceSearch::new(store).search(&spec);
    project(&hits)
}
