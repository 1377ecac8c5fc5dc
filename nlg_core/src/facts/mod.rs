//! Fact selection - querying the knowledge base for renderable values.

mod rank;

pub use rank::*;

use fact_base::{ItemId, KbError, KnowledgeBase, PropertyId, Qualifiers, Value};

/// A typed view over the knowledge-base contract.
///
/// Each query filters an entity's statements for one property down to the
/// value kind the caller can render, preserving backend order. Statements
/// of the wrong kind are skipped, and an entity without the property
/// yields an empty list.
pub struct FactSelector<'a> {
    base: &'a dyn KnowledgeBase,
}

impl<'a> FactSelector<'a> {
    /// Create a selector over a knowledge base.
    pub fn new(base: &'a dyn KnowledgeBase) -> Self {
        Self { base }
    }

    /// All media locators for a property, with their qualifiers.
    pub fn media(
        &self,
        entity: ItemId,
        property: PropertyId,
    ) -> Result<Vec<(String, Qualifiers)>, KbError> {
        Ok(self
            .base
            .statements_for(entity, property)?
            .into_iter()
            .filter_map(|statement| match statement.value {
                Value::Media(locator) => Some((locator, statement.qualifiers)),
                _ => None,
            })
            .collect())
    }

    /// All item references for a property, with their qualifiers.
    pub fn items(
        &self,
        entity: ItemId,
        property: PropertyId,
    ) -> Result<Vec<(ItemId, Qualifiers)>, KbError> {
        Ok(self
            .base
            .statements_for(entity, property)?
            .into_iter()
            .filter_map(|statement| match statement.value {
                Value::Item(id) => Some((id, statement.qualifiers)),
                _ => None,
            })
            .collect())
    }

    /// All quantities for a property, with their qualifiers.
    pub fn quantities(
        &self,
        entity: ItemId,
        property: PropertyId,
    ) -> Result<Vec<(f64, Qualifiers)>, KbError> {
        Ok(self
            .base
            .statements_for(entity, property)?
            .into_iter()
            .filter_map(|statement| match statement.value {
                Value::Quantity(amount) => Some((amount, statement.qualifiers)),
                _ => None,
            })
            .collect())
    }

    /// The first media locator for a property, if any.
    ///
    /// Strict first-wins: later statements are ignored no matter what
    /// qualifiers they carry.
    pub fn first_media(
        &self,
        entity: ItemId,
        property: PropertyId,
    ) -> Result<Option<String>, KbError> {
        Ok(self
            .media(entity, property)?
            .into_iter()
            .next()
            .map(|(locator, _)| locator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fact_base::{properties, MemoryBase, Statement, Value};

    fn base_with_mixed_statements() -> (MemoryBase, ItemId) {
        let mut base = MemoryBase::new();
        let entity = ItemId(142);
        base.insert(entity, Statement::media(properties::FLAG_IMAGE, "First.svg"));
        base.insert(
            entity,
            Statement::media(properties::FLAG_IMAGE, "Second.svg").with_qualifier(
                properties::POINT_IN_TIME,
                Value::time("2024"),
            ),
        );
        base.insert(entity, Statement::quantity(properties::POPULATION, 67e6));
        (base, entity)
    }

    #[test]
    fn test_media_preserves_order() {
        let (base, entity) = base_with_mixed_statements();
        let selector = FactSelector::new(&base);

        let media = selector.media(entity, properties::FLAG_IMAGE).unwrap();
        assert_eq!(media.len(), 2);
        assert_eq!(media[0].0, "First.svg");
        assert_eq!(media[1].0, "Second.svg");
    }

    #[test]
    fn test_first_media_ignores_better_qualified_later_statements() {
        let (base, entity) = base_with_mixed_statements();
        let selector = FactSelector::new(&base);

        let first = selector
            .first_media(entity, properties::FLAG_IMAGE)
            .unwrap();
        assert_eq!(first.as_deref(), Some("First.svg"));
    }

    #[test]
    fn test_wrong_kind_is_skipped() {
        let (base, entity) = base_with_mixed_statements();
        let selector = FactSelector::new(&base);

        // The population property holds a quantity, not media.
        let media = selector.media(entity, properties::POPULATION).unwrap();
        assert!(media.is_empty());

        let quantities = selector
            .quantities(entity, properties::POPULATION)
            .unwrap();
        assert_eq!(quantities.len(), 1);
    }

    #[test]
    fn test_absent_property_is_empty() {
        let (base, entity) = base_with_mixed_statements();
        let selector = FactSelector::new(&base);

        assert!(selector.items(entity, properties::COUNTRY).unwrap().is_empty());
        assert_eq!(
            selector.first_media(entity, properties::IMAGE).unwrap(),
            None
        );
    }
}
