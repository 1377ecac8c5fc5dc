//! City infobox - media block plus one descriptive sentence.

use fact_base::{properties, ItemId, Lexeme};

use super::html::escape;
use super::RenderContext;
use crate::error::RenderError;
use crate::facts::FactSelector;
use crate::phrase::{
    Adverbial, Clause, CommonNoun, Determiner, NounPhrase, PunctuatedPhrase,
};

/// The infobox div, holding the representative image when one exists.
pub(super) fn media_block(
    context: &RenderContext<'_>,
    entity: ItemId,
) -> Result<Vec<String>, RenderError> {
    let selector = FactSelector::new(context.base);

    let mut fragments = vec!["<div class='infobox'>".to_string()];
    if let Some(media) = selector.first_media(entity, properties::IMAGE)? {
        fragments.push(format!("<img src='{}' width=250/>", escape(&media)));
    }
    fragments.push("</div>".to_string());
    Ok(fragments)
}

/// "⟨name⟩ is a city [in ⟨country⟩]." as an escaped paragraph.
pub(super) fn sentence(
    context: &RenderContext<'_>,
    entity: ItemId,
    lexeme: &Lexeme,
) -> Result<Vec<String>, RenderError> {
    let selector = FactSelector::new(context.base);
    let lexicon = context.lexicon;

    let countries = selector.items(entity, properties::COUNTRY)?;
    let noun = match countries.first() {
        Some((country, _)) => {
            let country_lexeme = context.base.lexeme_for(*country)?;
            CommonNoun::modified(
                CommonNoun::bare(lexicon.city.clone()),
                Adverbial::new(
                    lexicon.in_prep.clone(),
                    NounPhrase::name(country_lexeme),
                ),
            )
        }
        None => CommonNoun::bare(lexicon.city.clone()),
    };

    let phrase = PunctuatedPhrase::declarative(Clause::new(
        NounPhrase::name(lexeme.clone()),
        NounPhrase::determined(Determiner::IndefiniteSingular, noun),
    ));
    let text = context.linearizer.linearize(&phrase, context.variant)?;

    Ok(vec![format!("<p>{}</p>", escape(&text))])
}
