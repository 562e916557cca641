//! Top level of the geographic hierarchy.

use chrono::{DateTime, Utc};

/// A state grouping one or more cities.
///
/// Cities are related by back-reference: a city belongs to this state
/// when its `state_id` matches [`State::id`]. The state itself never
/// owns a city collection.
///
/// # Examples
/// ```
/// use lodgekit_core::State;
///
/// let state = State::new("s1", "Oregon");
/// assert_eq!(state.id, "s1");
/// assert_eq!(state.name, "Oregon");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl State {
    /// Construct a `State` with fresh timestamps.
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

#[cfg(test)]
mod tests {
    use super::State;

    #[test]
    fn timestamps_start_equal() {
        let state = State::new("s1", "Oregon");
        assert_eq!(state.created_at, state.updated_at);
    }
}
