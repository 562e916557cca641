//! Shaping matched places for the caller.

use lodgekit_core::Place;
use serde_json::Value;

use crate::SearchError;

/// Serialise matched places, stripping the amenity links.
///
/// The amenity id list is a query-time detail, not part of the search
/// result; every other field, timestamps included, passes through
/// untouched. Input order is preserved.
///
/// # Errors
/// Returns [`SearchError::ProjectPlace`] when a place cannot be
/// serialised to a JSON object.
///
/// # Examples
/// ```
/// use lodgekit_core::Place;
/// use lodgekit_search::project;
///
/// let place = Place::with_amenities("p1", "c1", "u1", "Rose Loft", ["a1"]);
/// let projected = project(&[place]).expect("place serialises");
/// assert!(projected[0].get("amenities").is_none());
/// assert_eq!(projected[0]["name"], "Rose Loft");
/// ```
pub fn project(places: &[Place]) -> Result<Vec<Value>, SearchError> {
    places
        .iter()
        .map(|place| {
            let mut value =
                serde_json::to_value(place).map_err(|source| SearchError::ProjectPlace {
                    place_id: place.id.clone(),
                    source,
                })?;
            if let Value::Object(fields) = &mut value {
                fields.remove("amenities");
            }
            Ok(value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use lodgekit_core::Place;
    use serde_json::Value;

    use super::project;

    #[test]
    fn strips_amenities_and_keeps_everything_else() {
        let mut place = Place::with_amenities("p1", "c1", "u1", "Rose Loft", ["a1", "a2"]);
        place.price_by_night = Some(90);
        let projected = project(&[place.clone()]).unwrap();

        let Value::Object(fields) = &projected[0] else {
            panic!("projection must yield objects");
        };
        assert!(!fields.contains_key("amenities"));
        assert_eq!(fields["id"], "p1");
        assert_eq!(fields["price_by_night"], 90);
        assert_eq!(
            fields["created_at"],
            serde_json::to_value(place.created_at).unwrap()
        );
    }

    #[test]
    fn strips_amenities_even_when_list_is_empty() {
        let projected = project(&[Place::new("p1", "c1", "u1", "Rose Loft")]).unwrap();
        assert!(projected[0].get("amenities").is_none());
    }

    #[test]
    fn preserves_input_order() {
        let places = vec![
            Place::new("p2", "c1", "u1", "Fern House"),
            Place::new("p1", "c1", "u1", "Rose Loft"),
        ];
        let projected = project(&places).unwrap();
        assert_eq!(projected[0]["id"], "p2");
        assert_eq!(projected[1]["id"], "p1");
    }
}
