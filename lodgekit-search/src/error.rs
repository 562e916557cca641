//! Error types raised while parsing filters and projecting results.

use thiserror::Error;

/// Errors raised while turning a request body into a
/// [`FilterSpec`](crate::FilterSpec).
///
/// Every variant is a client-input problem; the search itself is a
/// pure read computation and has no failure modes of its own.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The body was not valid JSON at all.
    #[error("filter body is not valid JSON")]
    Syntax {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The body parsed, but to something other than an object or null.
    #[error("filter body must be a JSON object, got {found}")]
    NotAnObject {
        /// JSON type name of what arrived instead.
        found: &'static str,
    },
    /// A known filter key held something other than an array of id
    /// strings.
    #[error("filter keys must hold arrays of id strings")]
    Shape {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors surfaced by [`search_json`](crate::search_json).
#[derive(Debug, Error)]
pub enum SearchError {
    /// The filter body was malformed.
    #[error(transparent)]
    Filter(#[from] FilterError),
    /// A matched place could not be serialised for projection.
    #[error("failed to serialise place {place_id}")]
    ProjectPlace {
        /// Identifier of the affected place.
        place_id: String,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

impl SearchError {
    /// Whether the error should be reported as a client error
    /// (the HTTP layer's 400) rather than a server fault.
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Filter(_))
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterError, SearchError};

    #[test]
    fn filter_errors_are_client_errors() {
        let err = SearchError::from(FilterError::NotAnObject { found: "array" });
        assert!(err.is_client_error());
        assert_eq!(
            err.to_string(),
            "filter body must be a JSON object, got array"
        );
    }
}
