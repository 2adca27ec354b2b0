//! Core library for the bilingual card reference.
//!
//! Provides:
//! - Parsers for the English and Polish card sources
//! - Positional alignment of the two sources into bilingual decks
//! - HTML rendering of the merged decks
//! - Shared types (Deck, Card, Category, etc.)

pub mod align;
pub mod error;
pub mod parser;
pub mod render;
pub mod types;

pub use align::align;
pub use error::{AlignError, Error, ParseError, Result};
pub use parser::{parse_en, parse_en_header, parse_pl, parse_pl_header};
pub use render::{render, render_to_string};
pub use types::{Card, Category, Deck, EnCard, EnDeck, Language, PlCard, PlDeck};

/// Parse both sources and merge them into bilingual decks.
pub fn merge_sources(content_en: &str, content_pl: &str) -> Result<Vec<Deck>> {
    let decks_en = parse_en(content_en).map_err(|e| Error::parse(Language::English, e))?;
    let decks_pl = parse_pl(content_pl).map_err(|e| Error::parse(Language::Polish, e))?;
    Ok(align(decks_en, decks_pl)?)
}

/// Run the whole pipeline and return the HTML document.
///
/// Nothing is rendered unless both sources parse and align.
pub fn generate(content_en: &str, content_pl: &str) -> Result<String> {
    let decks = merge_sources(content_en, content_pl)?;
    Ok(render_to_string(&decks))
}
