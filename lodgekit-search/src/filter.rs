//! The caller-supplied search constraints.

use serde::Deserialize;
use serde_json::Value;

use crate::FilterError;

/// Id lists constraining a place search.
///
/// Each dimension is independent and optional: an empty list means "no
/// constraint on this dimension", and a spec with all three empty
/// matches every place. A spec is built per request, used once, and
/// discarded.
///
/// # Examples
/// ```
/// use lodgekit_search::FilterSpec;
///
/// let spec = FilterSpec::from_json(r#"{"states": ["s1"], "rooms": 3}"#).unwrap();
/// assert_eq!(spec.states, vec!["s1".to_owned()]);
/// assert!(spec.cities.is_empty());
/// assert!(!spec.is_unconstrained());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Ids of states whose places should match.
    pub states: Vec<String>,
    /// Ids of cities whose places should match.
    pub cities: Vec<String>,
    /// Ids of amenities every match must offer.
    pub amenities: Vec<String>,
}

impl FilterSpec {
    /// Whether the spec constrains nothing and matches every place.
    pub fn is_unconstrained(&self) -> bool {
        self.states.is_empty() && self.cities.is_empty() && self.amenities.is_empty()
    }

    /// Parse a JSON request body into a spec.
    ///
    /// `null` means unconstrained. Unknown object keys are ignored;
    /// only `states`, `cities`, and `amenities` are read, and each
    /// must be an array of id strings when present.
    ///
    /// # Errors
    /// Returns [`FilterError`] for bodies that are not JSON, not an
    /// object or `null`, or whose filter keys have the wrong shape.
    pub fn from_json(body: &str) -> Result<Self, FilterError> {
        let value: Value =
            serde_json::from_str(body).map_err(|source| FilterError::Syntax { source })?;
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => {
                serde_json::from_value(value).map_err(|source| FilterError::Shape { source })
            }
            other => Err(FilterError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
