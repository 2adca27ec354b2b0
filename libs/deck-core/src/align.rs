//! Positional alignment of the English and Polish decks.
//!
//! Both sources must describe the same decks in the same order, with the same
//! card identifiers in the same order. The first mismatch fails the whole
//! merge.

use crate::error::AlignError;
use crate::types::{Card, Deck, EnDeck, PlDeck};

/// Zip the two deck sequences and merge them into bilingual decks.
pub fn align(decks_en: Vec<EnDeck>, decks_pl: Vec<PlDeck>) -> Result<Vec<Deck>, AlignError> {
    if decks_en.len() != decks_pl.len() {
        return Err(AlignError::DeckCount {
            en: decks_en.len(),
            pl: decks_pl.len(),
        });
    }

    decks_en
        .into_iter()
        .zip(decks_pl)
        .enumerate()
        .map(|(position, (deck_en, deck_pl))| merge_deck(position, deck_en, deck_pl))
        .collect()
}

fn merge_deck(position: usize, deck_en: EnDeck, deck_pl: PlDeck) -> Result<Deck, AlignError> {
    if deck_en.letter != deck_pl.letter {
        return Err(AlignError::DeckLetter {
            position,
            en: deck_en.letter,
            pl: deck_pl.letter,
        });
    }

    let letter = deck_en.letter;
    if deck_en.cards.len() != deck_pl.cards.len() {
        return Err(AlignError::CardCount {
            letter,
            en: deck_en.cards.len(),
            pl: deck_pl.cards.len(),
        });
    }

    let mut cards = Vec::with_capacity(deck_en.cards.len());
    for (position, (card_en, card_pl)) in deck_en.cards.into_iter().zip(deck_pl.cards).enumerate() {
        if card_en.id != card_pl.id {
            return Err(AlignError::CardId {
                letter,
                position,
                en: card_en.id,
                pl: card_pl.id,
            });
        }

        cards.push(Card {
            id: card_en.id,
            text_en: card_en.text,
            text_pl: card_pl.text,
            category: card_en.category,
            interrupt: card_en.interrupt,
        });
    }

    Ok(Deck {
        letter,
        name: deck_en.name,
        cards,
    })
}
