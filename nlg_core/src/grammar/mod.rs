//! Grammar variants and the linearization contract.
//!
//! A variant is an opaque handle onto a target language/dialect. The one
//! thing the renderer ever reads from it is the compound-unit-noun
//! capability flag, resolved once when the variant is registered; phrase
//! trees are handed to whatever [`Linearizer`] the embedding application
//! supplies.

mod english;

pub use english::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::phrase::{Noun, PunctuatedPhrase};

/// A target natural-language/dialect configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarVariant {
    name: String,
    compound_unit_nouns: bool,
}

impl GrammarVariant {
    /// Register a variant with its capability flag.
    pub fn new(name: impl Into<String>, compound_unit_nouns: bool) -> Self {
        Self {
            name: name.into(),
            compound_unit_nouns,
        }
    }

    /// The variant identifier, as known to the grammar engine.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether measurement units lexicalize as a single compound noun
    /// rather than an adjective plus noun.
    pub fn uses_compound_unit_nouns(&self) -> bool {
        self.compound_unit_nouns
    }
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default, rename = "variant")]
    variants: Vec<VariantEntry>,
}

#[derive(Debug, Deserialize)]
struct VariantEntry {
    name: String,
    #[serde(default, rename = "compound-unit-nouns")]
    compound_unit_nouns: bool,
}

/// The set of registered grammar variants, looked up by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantRegistry {
    variants: Vec<GrammarVariant>,
}

impl VariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock wordnet parse grammars: English, plus the two grammars
    /// that compound their unit nouns.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(GrammarVariant::new("ParseEng", false));
        registry.register(GrammarVariant::new("ParseSwe", true));
        registry.register(GrammarVariant::new("ParseGer", true));
        registry
    }

    /// Register a variant, replacing any existing one with the same name.
    pub fn register(&mut self, variant: GrammarVariant) {
        if let Some(existing) = self
            .variants
            .iter_mut()
            .find(|candidate| candidate.name == variant.name)
        {
            *existing = variant;
        } else {
            self.variants.push(variant);
        }
    }

    /// Look up a variant by name.
    pub fn get(&self, name: &str) -> Option<&GrammarVariant> {
        self.variants.iter().find(|variant| variant.name == name)
    }

    /// Load a registry from a TOML `[[variant]]` table.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        let file: RegistryFile = toml::from_str(text)?;
        let mut registry = Self::new();
        for entry in file.variants {
            registry.register(GrammarVariant::new(entry.name, entry.compound_unit_nouns));
        }
        Ok(registry)
    }

    /// The number of registered variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Errors raised by a grammar engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinearizeError {
    /// The engine has no grammar for the requested variant.
    #[error("grammar variant `{0}` is not supported")]
    UnsupportedVariant(String),

    /// Any other engine fault.
    #[error("linearization failed: {0}")]
    Engine(String),
}

/// The grammar-linearization contract.
///
/// Implementations turn abstract phrase trees into surface text for a
/// variant. The renderer never inspects an engine beyond these two calls.
pub trait Linearizer {
    /// Linearize a closed phrase tree.
    fn linearize(
        &self,
        phrase: &PunctuatedPhrase,
        variant: &GrammarVariant,
    ) -> Result<String, LinearizeError>;

    /// Linearize a single word, used for image captions.
    fn linearize_word(
        &self,
        word: &Noun,
        variant: &GrammarVariant,
    ) -> Result<String, LinearizeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_compound_grammars() {
        let registry = VariantRegistry::with_defaults();
        assert!(!registry.get("ParseEng").unwrap().uses_compound_unit_nouns());
        assert!(registry.get("ParseSwe").unwrap().uses_compound_unit_nouns());
        assert!(registry.get("ParseGer").unwrap().uses_compound_unit_nouns());
        assert!(registry.get("ParseFin").is_none());
    }

    #[test]
    fn test_register_replaces_by_name() {
        let mut registry = VariantRegistry::new();
        registry.register(GrammarVariant::new("ParseFin", false));
        registry.register(GrammarVariant::new("ParseFin", true));

        assert_eq!(registry.len(), 1);
        assert!(registry.get("ParseFin").unwrap().uses_compound_unit_nouns());
    }

    #[test]
    fn test_from_toml() {
        let registry = VariantRegistry::from_toml_str(
            r#"
            [[variant]]
            name = "ParseSwe"
            compound-unit-nouns = true

            [[variant]]
            name = "ParseEng"
            "#,
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.get("ParseSwe").unwrap().uses_compound_unit_nouns());
        assert!(!registry.get("ParseEng").unwrap().uses_compound_unit_nouns());
    }

    #[test]
    fn test_from_toml_empty() {
        let registry = VariantRegistry::from_toml_str("").unwrap();
        assert!(registry.is_empty());
    }
}
