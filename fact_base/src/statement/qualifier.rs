//! Qualifier sets - metadata narrowing a statement's validity.

use serde::{Deserialize, Serialize};

use super::{PointInTime, PropertyId, Value};

/// The qualifiers attached to a statement, keyed by qualifier property.
///
/// Order is preserved as the backend supplied it and duplicate properties
/// are allowed; lookups return the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Qualifiers(Vec<(PropertyId, Value)>);

impl Qualifiers {
    /// Create an empty qualifier set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a qualifier.
    pub fn push(&mut self, property: PropertyId, value: Value) {
        self.0.push((property, value));
    }

    /// Append a qualifier, builder style.
    pub fn with(mut self, property: PropertyId, value: Value) -> Self {
        self.push(property, value);
        self
    }

    /// The first value recorded for a qualifier property.
    pub fn value_of(&self, property: PropertyId) -> Option<&Value> {
        self.0
            .iter()
            .find(|(candidate, _)| *candidate == property)
            .map(|(_, value)| value)
    }

    /// The first value for a qualifier property, parsed as a date.
    ///
    /// A missing qualifier and a malformed time literal both yield `None`.
    pub fn time_of(&self, property: PropertyId) -> Option<PointInTime> {
        self.value_of(property).and_then(Value::as_time)
    }

    /// Whether any qualifiers are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of qualifiers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over all qualifiers in backend order.
    pub fn iter(&self) -> impl Iterator<Item = &(PropertyId, Value)> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHEN: PropertyId = PropertyId(585);

    #[test]
    fn test_value_of_first_wins() {
        let qualifiers = Qualifiers::new()
            .with(WHEN, Value::time("2015"))
            .with(WHEN, Value::time("2020"));

        assert_eq!(qualifiers.value_of(WHEN), Some(&Value::time("2015")));
        assert_eq!(qualifiers.len(), 2);
    }

    #[test]
    fn test_time_of_parses() {
        let qualifiers = Qualifiers::new().with(WHEN, Value::time("+1990-01-01T00:00:00Z"));
        assert_eq!(qualifiers.time_of(WHEN), Some(PointInTime::new(1990, 1, 1)));
    }

    #[test]
    fn test_time_of_malformed_is_absent() {
        let qualifiers = Qualifiers::new().with(WHEN, Value::time("the nineties"));
        assert_eq!(qualifiers.time_of(WHEN), None);
    }

    #[test]
    fn test_time_of_missing_is_absent() {
        assert_eq!(Qualifiers::new().time_of(WHEN), None);
    }

    #[test]
    fn test_time_of_wrong_kind_is_absent() {
        let qualifiers = Qualifiers::new().with(WHEN, Value::quantity(1990.0));
        assert_eq!(qualifiers.time_of(WHEN), None);
    }
}
