//! Knowledge-base access - the backend contract and an in-memory store.

use std::collections::HashMap;

use thiserror::Error;

use crate::statement::{ItemId, Lexeme, PropertyId, Statement};

/// Errors raised by a knowledge-base backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KbError {
    /// The entity is not known to the backend.
    #[error("unknown entity {0}")]
    UnknownEntity(ItemId),

    /// Any other backend fault (connectivity, storage, protocol).
    #[error("knowledge base backend error: {0}")]
    Backend(String),
}

/// The knowledge-base access contract.
///
/// Implementations are read-only and reentrant; statement order is defined
/// by the backend and must be preserved.
pub trait KnowledgeBase {
    /// All statements for an entity with the given property, in backend
    /// order. An entity with no such statements yields an empty list, not
    /// an error.
    fn statements_for(
        &self,
        entity: ItemId,
        property: PropertyId,
    ) -> Result<Vec<Statement>, KbError>;

    /// Resolve an entity to its lexical form for embedding in a phrase.
    fn lexeme_for(&self, entity: ItemId) -> Result<Lexeme, KbError>;
}

/// A simple in-memory knowledge base.
///
/// Statement order per entity is insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryBase {
    statements: HashMap<ItemId, Vec<Statement>>,
    lexemes: HashMap<ItemId, Lexeme>,
}

impl MemoryBase {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement to an entity.
    pub fn insert(&mut self, entity: ItemId, statement: Statement) {
        self.statements.entry(entity).or_default().push(statement);
    }

    /// Register the lexical form of an entity.
    pub fn set_lexeme(&mut self, entity: ItemId, lexeme: Lexeme) {
        self.lexemes.insert(entity, lexeme);
    }

    /// The total number of statements across all entities.
    pub fn statement_count(&self) -> usize {
        self.statements.values().map(Vec::len).sum()
    }
}

impl KnowledgeBase for MemoryBase {
    fn statements_for(
        &self,
        entity: ItemId,
        property: PropertyId,
    ) -> Result<Vec<Statement>, KbError> {
        Ok(self
            .statements
            .get(&entity)
            .map(|statements| {
                statements
                    .iter()
                    .filter(|statement| statement.property == property)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn lexeme_for(&self, entity: ItemId) -> Result<Lexeme, KbError> {
        self.lexemes
            .get(&entity)
            .cloned()
            .ok_or(KbError::UnknownEntity(entity))
    }
}
