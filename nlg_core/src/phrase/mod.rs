//! Grammatical structure trees - the abstract output of phrase composition.
//!
//! Every node kind lists its children as struct fields or enum payloads, so
//! a constructed tree is closed by definition: there is no way to build a
//! punctuated phrase with a missing subject, determiner, or unit noun.

mod lexicon;

pub use lexicon::*;

use fact_base::Lexeme;
use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// An integer digit sequence embedded in a noun phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digits(pub i64);

impl Digits {
    /// Coerce a quantity to its digit sequence by truncation.
    ///
    /// The fractional part is dropped, not rounded: 83871.9 becomes 83871.
    /// A non-finite amount has no digit form and is a hard failure.
    pub fn truncate(amount: f64) -> Result<Self, RenderError> {
        if !amount.is_finite() {
            return Err(RenderError::NumericCoercion(amount));
        }
        Ok(Self(amount.trunc() as i64))
    }
}

impl std::fmt::Display for Digits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A common noun, possibly modified or formed from two lexemes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CommonNoun {
    /// A single noun: "city".
    Bare(Noun),

    /// A noun further modified by an adverbial: "city in Germany".
    Modified {
        head: Box<CommonNoun>,
        modifier: Adverbial,
    },

    /// Two nouns fused into one compound: "square-kilometre" as a unit word.
    Compound { attribute: Noun, head: Noun },

    /// Adjective plus noun: "square kilometre" as two words.
    Attributive { attribute: Adjective, head: Noun },
}

impl CommonNoun {
    /// A single unmodified noun.
    pub fn bare(noun: Noun) -> Self {
        CommonNoun::Bare(noun)
    }

    /// Attach an adverbial modifier to a common noun.
    pub fn modified(head: CommonNoun, modifier: Adverbial) -> Self {
        CommonNoun::Modified {
            head: Box::new(head),
            modifier,
        }
    }

    /// Fuse two nouns into a compound noun.
    pub fn compound(attribute: Noun, head: Noun) -> Self {
        CommonNoun::Compound { attribute, head }
    }

    /// Qualify a noun with an adjective.
    pub fn attributive(attribute: Adjective, head: Noun) -> Self {
        CommonNoun::Attributive { attribute, head }
    }
}

/// A noun phrase - a name, a determined common noun, or a counted one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NounPhrase {
    /// A bare name: "Berlin".
    Name(Lexeme),

    /// Determiner plus common noun: "a city", "the area".
    Determined {
        determiner: Determiner,
        noun: CommonNoun,
    },

    /// Digit sequence plus common noun: "67000000 inhabitants".
    Counted { count: Digits, noun: CommonNoun },
}

impl NounPhrase {
    /// A noun phrase consisting of a bare name.
    pub fn name(lexeme: Lexeme) -> Self {
        NounPhrase::Name(lexeme)
    }

    /// A determined noun phrase.
    pub fn determined(determiner: Determiner, noun: CommonNoun) -> Self {
        NounPhrase::Determined { determiner, noun }
    }

    /// A counted noun phrase.
    pub fn counted(count: Digits, noun: CommonNoun) -> Self {
        NounPhrase::Counted { count, noun }
    }
}

/// A prepositional modifier: "in Germany", "with 67000000 inhabitants".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adverbial {
    pub preposition: Preposition,
    pub object: Box<NounPhrase>,
}

impl Adverbial {
    /// Build an adverbial from a preposition and its object.
    pub fn new(preposition: Preposition, object: NounPhrase) -> Self {
        Self {
            preposition,
            object: Box::new(object),
        }
    }
}

/// A predication: subject noun phrase plus predicate noun phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    pub subject: NounPhrase,
    pub predicate: NounPhrase,
}

impl Clause {
    /// Build a clause from subject and predicate.
    pub fn new(subject: NounPhrase, predicate: NounPhrase) -> Self {
        Self { subject, predicate }
    }
}

/// A declarative sentence wrapping a clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub clause: Clause,
}

impl Sentence {
    /// Wrap a clause as a sentence.
    pub fn new(clause: Clause) -> Self {
        Self { clause }
    }
}

/// An utterance wrapping a sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub sentence: Sentence,
}

impl Utterance {
    /// Wrap a sentence as an utterance.
    pub fn new(sentence: Sentence) -> Self {
        Self { sentence }
    }
}

/// Terminal punctuation marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Punctuation {
    FullStop,
    QuestionMark,
    ExclamationMark,
}

impl Punctuation {
    /// The surface character for this mark.
    pub fn mark(&self) -> char {
        match self {
            Punctuation::FullStop => '.',
            Punctuation::QuestionMark => '?',
            Punctuation::ExclamationMark => '!',
        }
    }
}

/// A closed, linearizable phrase: an utterance plus terminal punctuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunctuatedPhrase {
    pub utterance: Utterance,
    pub punctuation: Punctuation,
}

impl PunctuatedPhrase {
    /// Build a punctuated phrase.
    pub fn new(utterance: Utterance, punctuation: Punctuation) -> Self {
        Self {
            utterance,
            punctuation,
        }
    }

    /// Wrap a clause as a declarative full-stop phrase.
    pub fn declarative(clause: Clause) -> Self {
        Self::new(
            Utterance::new(Sentence::new(clause)),
            Punctuation::FullStop,
        )
    }
}
