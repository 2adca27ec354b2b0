//! Core types for the bilingual deck model.

use serde::{Deserialize, Serialize};

/// Language of a card source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Polish,
}

impl Language {
    /// Suffix appended to a category label when the card is an interrupt.
    pub fn interrupt_suffix(self) -> &'static str {
        match self {
            Self::English => " - interrupt",
            Self::Polish => " - przerwanie",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Polish => "Polish",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Event,
    Thing,
    Aspect,
    Place,
    Character,
    Ending,
}

impl Category {
    /// Parse the English token used in the card sources. Case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Event" => Some(Self::Event),
            "Thing" => Some(Self::Thing),
            "Aspect" => Some(Self::Aspect),
            "Place" => Some(Self::Place),
            "Character" => Some(Self::Character),
            "Ending" => Some(Self::Ending),
            _ => None,
        }
    }

    /// Display label in the given language.
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Event, Language::English) => "Event",
            (Self::Event, Language::Polish) => "Wydarzenie",
            (Self::Thing, Language::English) => "Thing",
            (Self::Thing, Language::Polish) => "Przedmiot",
            (Self::Aspect, Language::English) => "Aspect",
            (Self::Aspect, Language::Polish) => "Przymiotnik",
            (Self::Place, Language::English) => "Place",
            (Self::Place, Language::Polish) => "Miejsce",
            (Self::Character, Language::English) => "Character",
            (Self::Character, Language::Polish) => "Postać",
            (Self::Ending, Language::English) => "Ending",
            (Self::Ending, Language::Polish) => "Zakończenie",
        }
    }
}

/// Card as read from the English source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnCard {
    pub id: String,
    pub text: String,
    pub category: Category,
    pub interrupt: bool,
}

/// Deck as read from the English source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnDeck {
    pub letter: char,
    pub name: String,
    pub cards: Vec<EnCard>,
}

/// Card as read from the Polish source (text only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlCard {
    pub id: String,
    pub text: String,
}

/// Deck as read from the Polish source. The Polish file carries no deck names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlDeck {
    pub letter: char,
    pub cards: Vec<PlCard>,
}

/// Bilingual card produced by alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub text_en: String,
    pub text_pl: String,
    pub category: Category,
    pub interrupt: bool,
}

/// Bilingual deck produced by alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub letter: char,
    pub name: String,
    pub cards: Vec<Card>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Category; 6] = [
        Category::Event,
        Category::Thing,
        Category::Aspect,
        Category::Place,
        Category::Character,
        Category::Ending,
    ];

    #[test]
    fn category_parse_is_exact() {
        for category in ALL {
            assert_eq!(Category::parse(category.label(Language::English)), Some(category));
        }
        assert_eq!(Category::parse("event"), None);
        assert_eq!(Category::parse(" Event"), None);
        assert_eq!(Category::parse("Mystery"), None);
    }

    #[test]
    fn polish_labels() {
        assert_eq!(Category::Event.label(Language::Polish), "Wydarzenie");
        assert_eq!(Category::Character.label(Language::Polish), "Postać");
        assert_eq!(Category::Ending.label(Language::Polish), "Zakończenie");
    }

    #[test]
    fn interrupt_suffixes() {
        assert_eq!(Language::English.interrupt_suffix(), " - interrupt");
        assert_eq!(Language::Polish.interrupt_suffix(), " - przerwanie");
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::Character).unwrap();
        assert_eq!(json, "\"character\"");
    }
}
