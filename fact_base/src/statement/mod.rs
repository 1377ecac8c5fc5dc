//! Statement definitions - typed facts attached to knowledge-base entities.

mod qualifier;
mod time;

pub use qualifier::*;
pub use time::*;

use serde::{Deserialize, Serialize};

/// Unique identifier for knowledge-base entities (items).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

/// Unique identifier for properties (the predicate of a statement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PropertyId(pub u32);

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// The grammatical word form naming an entity, suitable for insertion into
/// a sentence as a subject or embedded name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lexeme(pub String);

impl Lexeme {
    /// Create a lexeme from any string-like value.
    pub fn new(form: impl Into<String>) -> Self {
        Self(form.into())
    }

    /// The underlying word form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The value carried by a statement or qualifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A media locator (image file name or URL).
    Media(String),

    /// A numeric quantity.
    Quantity(f64),

    /// A reference to another entity.
    Item(ItemId),

    /// A raw time literal, parsed on demand.
    ///
    /// The literal stays unparsed so that a malformed date degrades to an
    /// absent value at the point of use instead of failing statement
    /// construction.
    Time(String),
}

impl Value {
    /// Create a media value.
    pub fn media(locator: impl Into<String>) -> Self {
        Value::Media(locator.into())
    }

    /// Create a quantity value.
    pub fn quantity(amount: f64) -> Self {
        Value::Quantity(amount)
    }

    /// Create an item-reference value.
    pub fn item(id: ItemId) -> Self {
        Value::Item(id)
    }

    /// Create a time value from a raw literal.
    pub fn time(literal: impl Into<String>) -> Self {
        Value::Time(literal.into())
    }

    /// The media locator, if this is a media value.
    pub fn as_media(&self) -> Option<&str> {
        match self {
            Value::Media(locator) => Some(locator),
            _ => None,
        }
    }

    /// The numeric amount, if this is a quantity value.
    pub fn as_quantity(&self) -> Option<f64> {
        match self {
            Value::Quantity(amount) => Some(*amount),
            _ => None,
        }
    }

    /// The referenced item, if this is an item value.
    pub fn as_item(&self) -> Option<ItemId> {
        match self {
            Value::Item(id) => Some(*id),
            _ => None,
        }
    }

    /// The parsed date, if this is a time value with a well-formed literal.
    pub fn as_time(&self) -> Option<PointInTime> {
        match self {
            Value::Time(literal) => PointInTime::parse(literal),
            _ => None,
        }
    }
}

/// A single fact attached to an entity: property, value, and optional
/// qualifiers narrowing the fact's validity (most commonly a date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub property: PropertyId,
    pub value: Value,
    pub qualifiers: Qualifiers,
}

impl Statement {
    /// Create a statement with no qualifiers.
    pub fn new(property: PropertyId, value: Value) -> Self {
        Self {
            property,
            value,
            qualifiers: Qualifiers::new(),
        }
    }

    /// Create a media statement.
    pub fn media(property: PropertyId, locator: impl Into<String>) -> Self {
        Self::new(property, Value::media(locator))
    }

    /// Create a quantity statement.
    pub fn quantity(property: PropertyId, amount: f64) -> Self {
        Self::new(property, Value::quantity(amount))
    }

    /// Create an item-reference statement.
    pub fn item(property: PropertyId, id: ItemId) -> Self {
        Self::new(property, Value::item(id))
    }

    /// Attach a qualifier to this statement.
    pub fn with_qualifier(mut self, property: PropertyId, value: Value) -> Self {
        self.qualifiers.push(property, value);
        self
    }
}
