//! Lexical primitives - the fixed words phrases are built from.

use fact_base::Lexeme;
use serde::{Deserialize, Serialize};

/// A noun lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Noun(pub Lexeme);

impl Noun {
    /// Create a noun from an abstract lexeme id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(Lexeme::new(id))
    }
}

/// An adjective lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjective(pub Lexeme);

impl Adjective {
    /// Create an adjective from an abstract lexeme id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(Lexeme::new(id))
    }
}

/// A preposition lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preposition(pub Lexeme);

impl Preposition {
    /// Create a preposition from an abstract lexeme id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(Lexeme::new(id))
    }
}

/// Determiners usable in a noun phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Determiner {
    /// "a"
    IndefiniteSingular,
    /// "the"
    DefiniteSingular,
}

/// The shared lexical constants the renderers compose sentences from.
///
/// Built once at startup and passed by reference; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    pub city: Noun,
    pub country: Noun,
    pub inhabitant: Noun,
    pub flag: Noun,
    pub coat_of_arms: Noun,
    pub area: Noun,
    pub kilometre: Noun,
    pub square_noun: Noun,
    pub square: Adjective,
    pub in_prep: Preposition,
    pub with_prep: Preposition,
}

impl Lexicon {
    /// The GF-wordnet abstract ids for every fixed word the renderers use.
    pub fn wordnet() -> Self {
        Self {
            city: Noun::new("city_1_N"),
            country: Noun::new("country_1_N"),
            inhabitant: Noun::new("inhabitant_1_N"),
            flag: Noun::new("flag_1_N"),
            coat_of_arms: Noun::new("blazon_N"),
            area: Noun::new("area_6_N"),
            kilometre: Noun::new("kilometre_1_N"),
            square_noun: Noun::new("square_1_N"),
            square: Adjective::new("square_1_A"),
            in_prep: Preposition::new("in_1_Prep"),
            with_prep: Preposition::new("with_Prep"),
        }
    }
}
