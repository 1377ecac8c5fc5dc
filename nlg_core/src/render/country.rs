//! Country infobox - flag/arms table, locator map, and two sentences.

use fact_base::{properties, ItemId, Lexeme};

use super::html::{capitalize, escape};
use super::RenderContext;
use crate::error::RenderError;
use crate::facts::{latest, FactSelector};
use crate::phrase::{
    Adverbial, Clause, CommonNoun, Determiner, Digits, Noun, NounPhrase, PunctuatedPhrase,
};

/// The infobox table: flag and coat of arms side by side with captions,
/// then the locator map when present.
pub(super) fn infobox_table(
    context: &RenderContext<'_>,
    entity: ItemId,
) -> Result<Vec<String>, RenderError> {
    let selector = FactSelector::new(context.base);

    let mut fragments = vec![
        "<table class='infobox' border=1>".to_string(),
        "<tr><td><table style='border-collapse: collapse'><tr>".to_string(),
    ];

    let flag = selector.first_media(entity, properties::FLAG_IMAGE)?;
    if let Some(media) = &flag {
        fragments.push(format!(
            "<td><img src='{}' width=125 height=78/></td>",
            escape(media)
        ));
    }
    let arms = selector.first_media(entity, properties::COAT_OF_ARMS_IMAGE)?;
    if let Some(media) = &arms {
        fragments.push(format!(
            "<td><img src='{}' width=125 height=78/></td>",
            escape(media)
        ));
    }

    fragments.push("</tr><tr>".to_string());
    fragments.push(caption_cell(context, flag.is_some(), &context.lexicon.flag)?);
    fragments.push(caption_cell(
        context,
        arms.is_some(),
        &context.lexicon.coat_of_arms,
    )?);
    fragments.push("</tr></table></td></tr>".to_string());

    if let Some(media) = selector.first_media(entity, properties::LOCATOR_MAP_IMAGE)? {
        fragments.push(format!(
            "<tr><td><img src='{}' width=250></td></tr>",
            escape(&media)
        ));
    }

    fragments.push("</table>".to_string());
    Ok(fragments)
}

/// A caption cell for an image that may be absent. Absent images still get
/// their (empty) cell so the table stays aligned.
fn caption_cell(
    context: &RenderContext<'_>,
    present: bool,
    word: &Noun,
) -> Result<String, RenderError> {
    if !present {
        return Ok("<td></td>".to_string());
    }
    let text = context.linearizer.linearize_word(word, context.variant)?;
    Ok(format!(
        "<td style='text-align: center'>{}</td>",
        escape(&capitalize(&text))
    ))
}

/// "⟨name⟩ is a country [in ⟨continent⟩] [with ⟨population⟩ inhabitants]."
///
/// The continent modifier is applied before the population modifier, so
/// the population adverbial modifies the already-located noun.
pub(super) fn primary_sentence(
    context: &RenderContext<'_>,
    entity: ItemId,
    lexeme: &Lexeme,
) -> Result<Vec<String>, RenderError> {
    let selector = FactSelector::new(context.base);
    let lexicon = context.lexicon;

    let mut noun = CommonNoun::bare(lexicon.country.clone());

    let continents = selector.items(entity, properties::CONTINENT)?;
    if let Some((continent, _)) = continents.first() {
        let continent_lexeme = context.base.lexeme_for(*continent)?;
        noun = CommonNoun::modified(
            CommonNoun::bare(lexicon.country.clone()),
            Adverbial::new(
                lexicon.in_prep.clone(),
                NounPhrase::name(continent_lexeme),
            ),
        );
    }

    let populations = selector.quantities(entity, properties::POPULATION)?;
    if let Some(population) = latest(populations, properties::POINT_IN_TIME) {
        noun = CommonNoun::modified(
            noun,
            Adverbial::new(
                lexicon.with_prep.clone(),
                NounPhrase::counted(
                    Digits::truncate(population)?,
                    CommonNoun::bare(lexicon.inhabitant.clone()),
                ),
            ),
        );
    }

    let phrase = PunctuatedPhrase::declarative(Clause::new(
        NounPhrase::name(lexeme.clone()),
        NounPhrase::determined(Determiner::IndefiniteSingular, noun),
    ));
    let text = context.linearizer.linearize(&phrase, context.variant)?;

    Ok(vec![escape(&text)])
}

/// "The area is ⟨area⟩ square kilometres.", capitalized and prefixed with
/// a space, when an area fact exists. The unit noun phrase compounds or
/// takes an adjective according to the variant's capability flag.
pub(super) fn area_sentence(
    context: &RenderContext<'_>,
    entity: ItemId,
) -> Result<Vec<String>, RenderError> {
    let selector = FactSelector::new(context.base);
    let lexicon = context.lexicon;

    let areas = selector.quantities(entity, properties::AREA)?;
    let Some(area) = latest(areas, properties::POINT_IN_TIME) else {
        return Ok(Vec::new());
    };

    let unit = if context.variant.uses_compound_unit_nouns() {
        CommonNoun::compound(lexicon.square_noun.clone(), lexicon.kilometre.clone())
    } else {
        CommonNoun::attributive(lexicon.square.clone(), lexicon.kilometre.clone())
    };

    let phrase = PunctuatedPhrase::declarative(Clause::new(
        NounPhrase::determined(
            Determiner::DefiniteSingular,
            CommonNoun::bare(lexicon.area.clone()),
        ),
        NounPhrase::counted(Digits::truncate(area)?, unit),
    ));
    let text = context.linearizer.linearize(&phrase, context.variant)?;

    Ok(vec![format!(" {}", escape(&capitalize(&text)))])
}
