//! Infobox renderers - lazy HTML fragment streams per entity kind.
//!
//! A render is a fixed sequence of stages. Pulling the stream runs one
//! stage at a time (including its knowledge-base and linearizer calls) and
//! hands the resulting fragments out one by one, so large pages can be
//! flushed incrementally. The stream is finite and single-pass; the first
//! error ends it.

mod city;
mod country;
pub mod html;

use std::collections::VecDeque;

use fact_base::{ItemId, KnowledgeBase, Lexeme};
use tracing::debug;

use crate::error::RenderError;
use crate::grammar::{GrammarVariant, Linearizer};
use crate::phrase::Lexicon;

/// The collaborators a render borrows for its lifetime.
#[derive(Clone, Copy)]
pub(crate) struct RenderContext<'a> {
    pub base: &'a dyn KnowledgeBase,
    pub linearizer: &'a dyn Linearizer,
    pub variant: &'a GrammarVariant,
    pub lexicon: &'a Lexicon,
}

/// Entry point for describing place entities.
pub struct Renderer<'a> {
    context: RenderContext<'a>,
}

impl<'a> Renderer<'a> {
    /// Bundle the collaborators for rendering.
    pub fn new(
        base: &'a dyn KnowledgeBase,
        linearizer: &'a dyn Linearizer,
        variant: &'a GrammarVariant,
        lexicon: &'a Lexicon,
    ) -> Self {
        Self {
            context: RenderContext {
                base,
                linearizer,
                variant,
                lexicon,
            },
        }
    }

    /// Describe a city: media block, then one descriptive sentence.
    pub fn city(&self, entity: ItemId, lexeme: Lexeme) -> FragmentStream<'a> {
        debug!(entity = %entity, variant = self.context.variant.name(), "rendering city");
        FragmentStream::new(
            self.context,
            entity,
            lexeme,
            vec![Stage::CityMedia, Stage::CitySentence],
        )
    }

    /// Describe a country: infobox table, then a paragraph holding the
    /// primary sentence and, when an area fact exists, the area sentence.
    pub fn country(&self, entity: ItemId, lexeme: Lexeme) -> FragmentStream<'a> {
        debug!(entity = %entity, variant = self.context.variant.name(), "rendering country");
        FragmentStream::new(
            self.context,
            entity,
            lexeme,
            vec![
                Stage::CountryInfobox,
                Stage::ParagraphOpen,
                Stage::CountrySentence,
                Stage::CountryArea,
                Stage::ParagraphClose,
            ],
        )
    }
}

/// One lazily-run step of a render.
enum Stage {
    CityMedia,
    CitySentence,
    CountryInfobox,
    ParagraphOpen,
    CountrySentence,
    CountryArea,
    ParagraphClose,
}

/// A finite, single-pass stream of HTML fragments.
///
/// Concatenating the `Ok` fragments yields a well-formed infobox fragment.
/// After yielding an `Err`, the stream is exhausted.
pub struct FragmentStream<'a> {
    context: RenderContext<'a>,
    entity: ItemId,
    lexeme: Lexeme,
    stages: VecDeque<Stage>,
    pending: VecDeque<String>,
    failed: bool,
}

impl<'a> FragmentStream<'a> {
    fn new(
        context: RenderContext<'a>,
        entity: ItemId,
        lexeme: Lexeme,
        stages: Vec<Stage>,
    ) -> Self {
        Self {
            context,
            entity,
            lexeme,
            stages: stages.into(),
            pending: VecDeque::new(),
            failed: false,
        }
    }

    fn run(&self, stage: &Stage) -> Result<Vec<String>, RenderError> {
        match stage {
            Stage::CityMedia => city::media_block(&self.context, self.entity),
            Stage::CitySentence => city::sentence(&self.context, self.entity, &self.lexeme),
            Stage::CountryInfobox => country::infobox_table(&self.context, self.entity),
            Stage::ParagraphOpen => Ok(vec!["<p>".to_string()]),
            Stage::CountrySentence => {
                country::primary_sentence(&self.context, self.entity, &self.lexeme)
            }
            Stage::CountryArea => country::area_sentence(&self.context, self.entity),
            Stage::ParagraphClose => Ok(vec!["</p>".to_string()]),
        }
    }

    /// Drain the stream into one HTML string.
    pub fn collect_html(self) -> Result<String, RenderError> {
        let mut page = String::new();
        for fragment in self {
            page.push_str(&fragment?);
        }
        Ok(page)
    }
}

impl Iterator for FragmentStream<'_> {
    type Item = Result<String, RenderError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(fragment) = self.pending.pop_front() {
                return Some(Ok(fragment));
            }
            if self.failed {
                return None;
            }
            let stage = self.stages.pop_front()?;
            match self.run(&stage) {
                Ok(fragments) => self.pending.extend(fragments),
                Err(error) => {
                    self.failed = true;
                    self.stages.clear();
                    return Some(Err(error));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fact_base::{properties, KbError, MemoryBase, PropertyId, Statement, Value};
    use crate::grammar::{EnglishLinearizer, LinearizeError};
    use crate::phrase::{Noun, PunctuatedPhrase};

    fn english() -> GrammarVariant {
        GrammarVariant::new("ParseEng", false)
    }

    fn swedish() -> GrammarVariant {
        GrammarVariant::new("ParseSwe", true)
    }

    fn berlin_base() -> (MemoryBase, ItemId) {
        let mut base = MemoryBase::new();
        let berlin = ItemId(64);
        let germany = ItemId(183);
        base.insert(berlin, Statement::item(properties::COUNTRY, germany));
        base.set_lexeme(germany, Lexeme::new("Germany"));
        (base, berlin)
    }

    fn france_base() -> (MemoryBase, ItemId) {
        let mut base = MemoryBase::new();
        let france = ItemId(142);
        let europe = ItemId(46);
        base.insert(france, Statement::media(properties::FLAG_IMAGE, "Flag of France.svg"));
        base.insert(
            france,
            Statement::media(properties::COAT_OF_ARMS_IMAGE, "Arms of France.svg"),
        );
        base.insert(
            france,
            Statement::media(properties::LOCATOR_MAP_IMAGE, "France map.svg"),
        );
        base.insert(france, Statement::item(properties::CONTINENT, europe));
        base.insert(
            france,
            Statement::quantity(properties::POPULATION, 65_000_000.0).with_qualifier(
                properties::POINT_IN_TIME,
                Value::time("+2015-00-00T00:00:00Z"),
            ),
        );
        base.insert(
            france,
            Statement::quantity(properties::POPULATION, 67_000_000.0).with_qualifier(
                properties::POINT_IN_TIME,
                Value::time("+2020-00-00T00:00:00Z"),
            ),
        );
        base.insert(
            france,
            Statement::quantity(properties::AREA, 643_801.0).with_qualifier(
                properties::POINT_IN_TIME,
                Value::time("+2018-00-00T00:00:00Z"),
            ),
        );
        base.set_lexeme(europe, Lexeme::new("Europe"));
        (base, france)
    }

    #[test]
    fn test_city_end_to_end() {
        let (base, berlin) = berlin_base();
        let linearizer = EnglishLinearizer::new();
        let variant = english();
        let lexicon = Lexicon::wordnet();

        let renderer = Renderer::new(&base, &linearizer, &variant, &lexicon);
        let page = renderer
            .city(berlin, Lexeme::new("Berlin"))
            .collect_html()
            .unwrap();

        assert_eq!(
            page,
            "<div class='infobox'></div><p>Berlin is a city in Germany.</p>"
        );
    }

    #[test]
    fn test_city_with_media() {
        let (mut base, berlin) = berlin_base();
        base.insert(berlin, Statement::media(properties::IMAGE, "Berlin <1>.jpg"));
        base.insert(berlin, Statement::media(properties::IMAGE, "Berlin 2.jpg"));
        let linearizer = EnglishLinearizer::new();
        let variant = english();
        let lexicon = Lexicon::wordnet();

        let renderer = Renderer::new(&base, &linearizer, &variant, &lexicon);
        let fragments: Vec<String> = renderer
            .city(berlin, Lexeme::new("Berlin"))
            .collect::<Result<_, _>>()
            .unwrap();

        // First media wins, locator is escaped, later media ignored.
        assert_eq!(fragments[1], "<img src='Berlin &lt;1&gt;.jpg' width=250/>");
        assert!(!fragments.iter().any(|f| f.contains("Berlin 2")));
    }

    #[test]
    fn test_city_without_location() {
        let base = MemoryBase::new();
        let linearizer = EnglishLinearizer::new();
        let variant = english();
        let lexicon = Lexicon::wordnet();

        let renderer = Renderer::new(&base, &linearizer, &variant, &lexicon);
        let page = renderer
            .city(ItemId(1), Lexeme::new("Atlantis"))
            .collect_html()
            .unwrap();

        assert_eq!(page, "<div class='infobox'></div><p>Atlantis is a city.</p>");
    }

    #[test]
    fn test_country_end_to_end() {
        let (base, france) = france_base();
        let linearizer = EnglishLinearizer::new();
        let variant = english();
        let lexicon = Lexicon::wordnet();

        let renderer = Renderer::new(&base, &linearizer, &variant, &lexicon);
        let page = renderer
            .country(france, Lexeme::new("France"))
            .collect_html()
            .unwrap();

        // Most recent population wins; area is truncated and capitalized.
        assert!(page.contains("France is a country in Europe with 67000000 inhabitants."));
        assert!(page.contains(" The area is 643801 square kilometres."));
        assert!(!page.contains("65000000"));

        // Infobox structure with captions under both images.
        assert!(page.starts_with("<table class='infobox' border=1>"));
        assert!(page.contains("<td><img src='Flag of France.svg' width=125 height=78/></td>"));
        assert!(page.contains("<td style='text-align: center'>Flag</td>"));
        assert!(page.contains("<td style='text-align: center'>Coat of arms</td>"));
        assert!(page.contains("<tr><td><img src='France map.svg' width=250></td></tr>"));
        assert!(page.ends_with("</p>"));
    }

    #[test]
    fn test_country_without_media_renders_empty_caption_cells() {
        let mut base = MemoryBase::new();
        let wakanda = ItemId(9999);
        base.insert(
            wakanda,
            Statement::quantity(properties::AREA, 83_871.9),
        );
        let linearizer = EnglishLinearizer::new();
        let variant = english();
        let lexicon = Lexicon::wordnet();

        let renderer = Renderer::new(&base, &linearizer, &variant, &lexicon);
        let page = renderer
            .country(wakanda, Lexeme::new("Wakanda"))
            .collect_html()
            .unwrap();

        assert!(page.contains("<tr><td></td><td></td></tr>"));
        assert!(!page.contains("<img"));
        // Truncation, not rounding.
        assert!(page.contains("The area is 83871 square kilometres."));
        assert!(!page.contains("83872"));
    }

    #[test]
    fn test_country_without_area_omits_area_sentence() {
        let mut base = MemoryBase::new();
        let entity = ItemId(5);
        base.insert(
            entity,
            Statement::quantity(properties::POPULATION, 1000.0),
        );
        let linearizer = EnglishLinearizer::new();
        let variant = english();
        let lexicon = Lexicon::wordnet();

        let renderer = Renderer::new(&base, &linearizer, &variant, &lexicon);
        let page = renderer
            .country(entity, Lexeme::new("Elbonia"))
            .collect_html()
            .unwrap();

        assert!(page.contains("Elbonia is a country with 1000 inhabitants."));
        assert!(!page.contains("area"));
    }

    #[test]
    fn test_area_prefers_any_dated_value_over_undated() {
        let mut base = MemoryBase::new();
        let entity = ItemId(40);
        base.insert(entity, area_statement(100_000.0, None));
        base.insert(entity, area_statement(83_871.9, Some("2011")));
        let linearizer = EnglishLinearizer::new();
        let variant = english();
        let lexicon = Lexicon::wordnet();

        let renderer = Renderer::new(&base, &linearizer, &variant, &lexicon);
        let page = renderer
            .country(entity, Lexeme::new("Austria"))
            .collect_html()
            .unwrap();

        assert!(page.contains("The area is 83871 square kilometres."));
    }

    fn area_statement(amount: f64, dated: Option<&str>) -> Statement {
        let statement = Statement::quantity(properties::AREA, amount);
        match dated {
            Some(literal) => {
                statement.with_qualifier(properties::POINT_IN_TIME, Value::time(literal))
            }
            None => statement,
        }
    }

    #[test]
    fn test_stream_is_lazy_and_single_pass() {
        let (base, france) = france_base();
        let linearizer = EnglishLinearizer::new();
        let variant = english();
        let lexicon = Lexicon::wordnet();

        let renderer = Renderer::new(&base, &linearizer, &variant, &lexicon);
        let mut stream = renderer.country(france, Lexeme::new("France"));

        let first = stream.next().unwrap().unwrap();
        assert_eq!(first, "<table class='infobox' border=1>");

        let rest: Vec<_> = stream.by_ref().collect();
        assert!(!rest.is_empty());
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_collaborator_failure_propagates_and_fuses() {
        struct BrokenBase;
        impl KnowledgeBase for BrokenBase {
            fn statements_for(
                &self,
                _entity: ItemId,
                _property: PropertyId,
            ) -> Result<Vec<Statement>, KbError> {
                Err(KbError::Backend("connection reset".to_string()))
            }
            fn lexeme_for(&self, entity: ItemId) -> Result<Lexeme, KbError> {
                Err(KbError::UnknownEntity(entity))
            }
        }

        let base = BrokenBase;
        let linearizer = EnglishLinearizer::new();
        let variant = english();
        let lexicon = Lexicon::wordnet();

        let renderer = Renderer::new(&base, &linearizer, &variant, &lexicon);
        let mut stream = renderer.city(ItemId(64), Lexeme::new("Berlin"));

        let error = stream.next().unwrap().unwrap_err();
        assert_eq!(
            error,
            RenderError::Knowledge(KbError::Backend("connection reset".to_string()))
        );
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_linearizer_failure_propagates() {
        struct BrokenEngine;
        impl Linearizer for BrokenEngine {
            fn linearize(
                &self,
                _phrase: &PunctuatedPhrase,
                variant: &GrammarVariant,
            ) -> Result<String, LinearizeError> {
                Err(LinearizeError::UnsupportedVariant(variant.name().to_string()))
            }
            fn linearize_word(
                &self,
                _word: &Noun,
                variant: &GrammarVariant,
            ) -> Result<String, LinearizeError> {
                Err(LinearizeError::UnsupportedVariant(variant.name().to_string()))
            }
        }

        let (base, berlin) = berlin_base();
        let linearizer = BrokenEngine;
        let variant = GrammarVariant::new("ParseKlingon", false);
        let lexicon = Lexicon::wordnet();

        let renderer = Renderer::new(&base, &linearizer, &variant, &lexicon);
        let outcome = renderer.city(berlin, Lexeme::new("Berlin")).collect_html();

        assert_eq!(
            outcome,
            Err(RenderError::Linearize(LinearizeError::UnsupportedVariant(
                "ParseKlingon".to_string()
            )))
        );
    }

    #[test]
    fn test_unit_lexicalization_branches_on_variant() {
        let (base, france) = france_base();
        let linearizer = EnglishLinearizer::new();
        let lexicon = Lexicon::wordnet();

        let compound_variant = swedish();
        let renderer = Renderer::new(&base, &linearizer, &compound_variant, &lexicon);
        let compound_page = renderer
            .country(france, Lexeme::new("France"))
            .collect_html()
            .unwrap();

        let plain_variant = english();
        let renderer = Renderer::new(&base, &linearizer, &plain_variant, &lexicon);
        let plain_page = renderer
            .country(france, Lexeme::new("France"))
            .collect_html()
            .unwrap();

        // Same number, both branches realized; the English reference
        // realizer renders both unit shapes with the same surface words,
        // so the tree-shape difference is asserted at the phrase level
        // (see phrase::tests) while this guards that both variants render.
        assert!(compound_page.contains("643801"));
        assert!(plain_page.contains("643801 square kilometres"));
    }
}
