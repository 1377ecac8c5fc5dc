//! A plain-English reference linearizer.
//!
//! Realizes phrase trees over the wordnet lexicon with a fixed word table
//! and naive number agreement. It ignores the variant name on purpose: the
//! compound-vs-attributive unit choice is made upstream by the phrase
//! composer, so this engine only ever sees the finished tree. Real grammar
//! engines plug in through the same [`Linearizer`] trait.

use std::collections::HashMap;

use fact_base::Lexeme;

use super::{GrammarVariant, LinearizeError, Linearizer};
use crate::phrase::{
    Adverbial, Clause, CommonNoun, Determiner, Noun, NounPhrase, PunctuatedPhrase,
};

/// Table-driven English surface realizer.
#[derive(Debug, Clone, Default)]
pub struct EnglishLinearizer {
    /// Abstract lexeme id to (singular, plural) surface forms. Lexemes not
    /// in the table (entity names) realize as their raw text.
    words: HashMap<String, (String, String)>,
}

impl EnglishLinearizer {
    /// Build the realizer for the wordnet lexicon.
    pub fn new() -> Self {
        let mut realizer = Self::default();
        realizer.add("city_1_N", "city", "cities");
        realizer.add("country_1_N", "country", "countries");
        realizer.add("inhabitant_1_N", "inhabitant", "inhabitants");
        realizer.add("flag_1_N", "flag", "flags");
        realizer.add("blazon_N", "coat of arms", "coats of arms");
        realizer.add("area_6_N", "area", "areas");
        realizer.add("kilometre_1_N", "kilometre", "kilometres");
        realizer.add("square_1_N", "square", "squares");
        realizer.add("square_1_A", "square", "square");
        realizer.add("in_1_Prep", "in", "in");
        realizer.add("with_Prep", "with", "with");
        realizer
    }

    fn add(&mut self, id: &str, singular: &str, plural: &str) {
        self.words
            .insert(id.to_string(), (singular.to_string(), plural.to_string()));
    }

    fn word(&self, lexeme: &Lexeme, plural: bool) -> String {
        match self.words.get(lexeme.as_str()) {
            Some((singular, plural_form)) => {
                if plural {
                    plural_form.clone()
                } else {
                    singular.clone()
                }
            }
            None => lexeme.as_str().to_string(),
        }
    }

    fn common_noun(&self, noun: &CommonNoun, plural: bool) -> String {
        match noun {
            CommonNoun::Bare(noun) => self.word(&noun.0, plural),
            CommonNoun::Modified { head, modifier } => format!(
                "{} {}",
                self.common_noun(head, plural),
                self.adverbial(modifier)
            ),
            CommonNoun::Compound { attribute, head } => {
                format!("{} {}", self.word(&attribute.0, false), self.word(&head.0, plural))
            }
            CommonNoun::Attributive { attribute, head } => {
                format!("{} {}", self.word(&attribute.0, false), self.word(&head.0, plural))
            }
        }
    }

    fn noun_phrase(&self, phrase: &NounPhrase) -> String {
        match phrase {
            NounPhrase::Name(lexeme) => self.word(lexeme, false),
            NounPhrase::Determined { determiner, noun } => {
                let article = match determiner {
                    Determiner::IndefiniteSingular => "a",
                    Determiner::DefiniteSingular => "the",
                };
                format!("{} {}", article, self.common_noun(noun, false))
            }
            NounPhrase::Counted { count, noun } => {
                format!("{} {}", count, self.common_noun(noun, count.0 != 1))
            }
        }
    }

    fn adverbial(&self, adverbial: &Adverbial) -> String {
        format!(
            "{} {}",
            self.word(&adverbial.preposition.0, false),
            self.noun_phrase(&adverbial.object)
        )
    }

    fn clause(&self, clause: &Clause) -> String {
        format!(
            "{} is {}",
            self.noun_phrase(&clause.subject),
            self.noun_phrase(&clause.predicate)
        )
    }
}

impl Linearizer for EnglishLinearizer {
    fn linearize(
        &self,
        phrase: &PunctuatedPhrase,
        _variant: &GrammarVariant,
    ) -> Result<String, LinearizeError> {
        let clause = &phrase.utterance.sentence.clause;
        Ok(format!("{}{}", self.clause(clause), phrase.punctuation.mark()))
    }

    fn linearize_word(
        &self,
        word: &Noun,
        _variant: &GrammarVariant,
    ) -> Result<String, LinearizeError> {
        Ok(self.word(&word.0, false))
    }
}
