//! Error types for deck-core.

use thiserror::Error;

use crate::types::Language;

/// Result type alias using the crate-level Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a single card source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed deck header at line {line}: {value:?}")]
    MalformedHeader { line: usize, value: String },

    #[error("expected {expected} fields at line {line}, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("card type '{value}' is not supported (line {line})")]
    UnknownCategory { line: usize, value: String },

    #[error("empty card text at line {line}")]
    EmptyText { line: usize },
}

/// Structural mismatches between the English and Polish sources.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlignError {
    #[error("deck count mismatch: en has {en}, pl has {pl}")]
    DeckCount { en: usize, pl: usize },

    #[error("deck letter mismatch at position {position}: en {en}, pl {pl}")]
    DeckLetter { position: usize, en: char, pl: char },

    #[error("card count mismatch in deck {letter}: en has {en}, pl has {pl}")]
    CardCount { letter: char, en: usize, pl: usize },

    #[error("card id mismatch in deck {letter} at position {position}: en {en}, pl {pl}")]
    CardId {
        letter: char,
        position: usize,
        en: String,
        pl: String,
    },
}

/// Any failure of the parse-align-render pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("failed to parse {language} source")]
    Parse {
        language: Language,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Align(#[from] AlignError),
}

impl Error {
    pub fn parse(language: Language, source: ParseError) -> Self {
        Self::Parse { language, source }
    }
}
