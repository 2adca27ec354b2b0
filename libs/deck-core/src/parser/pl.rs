//! Polish source parser: no deck names, cards carry text only.

use super::{classify, clean_text, letter_at, split_fields, LineType};
use crate::error::ParseError;
use crate::types::{PlCard, PlDeck};

const HEADER: &str = "POKŁAD";
const LETTER_OFFSET: usize = 7;

/// Parse the Polish card source into decks.
///
/// Card text is capitalized; empty text is an error.
pub fn parse_pl(content: &str) -> Result<Vec<PlDeck>, ParseError> {
    let mut decks: Vec<PlDeck> = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        match classify(line, HEADER) {
            LineType::Skip => {}
            LineType::Header(header) => {
                let letter =
                    parse_pl_header(header).ok_or_else(|| ParseError::MalformedHeader {
                        line: line_num,
                        value: header.to_string(),
                    })?;
                decks.push(PlDeck {
                    letter,
                    cards: Vec::new(),
                });
            }
            LineType::Card(card_line) => {
                let card = parse_card(card_line, line_num)?;
                if let Some(deck) = decks.last_mut() {
                    deck.cards.push(card);
                }
            }
        }
    }

    Ok(decks)
}

/// Extract the deck letter from a `POKŁAD X` header line.
pub fn parse_pl_header(line: &str) -> Option<char> {
    letter_at(line, LETTER_OFFSET)
}

fn parse_card(line: &str, line_num: usize) -> Result<PlCard, ParseError> {
    let [id, text] = split_fields::<2>(line, line_num)?;
    let text = capitalize(&clean_text(text)).ok_or(ParseError::EmptyText { line: line_num })?;

    Ok(PlCard {
        id: id.trim().to_string(),
        text,
    })
}

fn capitalize(text: &str) -> Option<String> {
    let mut chars = text.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}
