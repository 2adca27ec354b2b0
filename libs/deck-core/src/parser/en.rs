//! English source parser: decks carry names, cards carry category data.

use super::{classify, clean_text, letter_at, split_fields, tail_from, LineType};
use crate::error::ParseError;
use crate::types::{Category, EnCard, EnDeck};

const HEADER: &str = "DECK";
const LETTER_OFFSET: usize = 5;
const NAME_OFFSET: usize = 8;
const INTERRUPT_MARKER: &str = "-INT";

/// Parse the English card source into decks.
///
/// Cards that appear before the first deck header are dropped.
pub fn parse_en(content: &str) -> Result<Vec<EnDeck>, ParseError> {
    let mut decks: Vec<EnDeck> = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        match classify(line, HEADER) {
            LineType::Skip => {}
            LineType::Header(header) => {
                let (letter, name) =
                    parse_en_header(header).ok_or_else(|| ParseError::MalformedHeader {
                        line: line_num,
                        value: header.to_string(),
                    })?;
                decks.push(EnDeck {
                    letter,
                    name: name.to_string(),
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

/// Extract `(letter, name)` from a `DECK X - Name` header line.
pub fn parse_en_header(line: &str) -> Option<(char, &str)> {
    let letter = letter_at(line, LETTER_OFFSET)?;
    Some((letter, tail_from(line, NAME_OFFSET).trim_end()))
}

fn parse_card(line: &str, line_num: usize) -> Result<EnCard, ParseError> {
    let [id, text, raw_category] = split_fields::<3>(line, line_num)?;

    Ok(EnCard {
        id: id.trim().to_string(),
        text: clean_text(text),
        category: parse_category(raw_category, line_num)?,
        interrupt: raw_category.contains(INTERRUPT_MARKER),
    })
}

fn parse_category(raw: &str, line_num: usize) -> Result<Category, ParseError> {
    let token = raw.replace(INTERRUPT_MARKER, "");
    let token = token.trim();
    Category::parse(token).ok_or_else(|| ParseError::UnknownCategory {
        line: line_num,
        value: token.to_string(),
    })
}
