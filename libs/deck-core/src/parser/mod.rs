//! Line parsers for the semicolon-delimited card sources.
//!
//! # Format
//! ```text
//! ; comment
//! DECK A - Intro
//! 01; Some *text*; Event
//! 02; Other text; Thing-INT
//! ```
//!
//! The Polish source uses `POKŁAD A` headers and two-field card lines
//! (`01; coś`). Header offsets count characters, not bytes.

mod en;
mod pl;

pub use en::{parse_en, parse_en_header};
pub use pl::{parse_pl, parse_pl_header};

use crate::error::ParseError;

const COMMENT: char = ';';
const SEPARATOR: char = ';';
const TEXT_MARKER: char = '*';

enum LineType<'a> {
    Skip,
    Header(&'a str),
    Card(&'a str),
}

fn classify<'a>(line: &'a str, header_keyword: &str) -> LineType<'a> {
    if line.trim().is_empty() || line.starts_with(COMMENT) {
        LineType::Skip
    } else if line.starts_with(header_keyword) {
        LineType::Header(line)
    } else {
        LineType::Card(line)
    }
}

/// Split a card line into exactly `N` fields.
fn split_fields<const N: usize>(line: &str, line_num: usize) -> Result<[&str; N], ParseError> {
    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    let found = fields.len();
    fields.try_into().map_err(|_| ParseError::FieldCount {
        line: line_num,
        expected: N,
        found,
    })
}

fn clean_text(raw: &str) -> String {
    raw.replace(TEXT_MARKER, "").trim().to_string()
}

/// Deck letter at a fixed character offset. Whitespace is not a letter.
fn letter_at(line: &str, offset: usize) -> Option<char> {
    line.chars().nth(offset).filter(|c| !c.is_whitespace())
}

/// Remainder of the line starting at a character offset; empty if the line is shorter.
fn tail_from(line: &str, offset: usize) -> &str {
    match line.char_indices().nth(offset) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_skips_blank_and_comments() {
        assert!(matches!(classify("", "DECK"), LineType::Skip));
        assert!(matches!(classify("   \t", "DECK"), LineType::Skip));
        assert!(matches!(classify(";; DECK A", "DECK"), LineType::Skip));
        assert!(matches!(classify("DECK A - X", "DECK"), LineType::Header(_)));
        assert!(matches!(classify("01; x; Event", "DECK"), LineType::Card(_)));
    }

    #[test]
    fn split_fields_requires_exact_count() {
        let [a, b] = split_fields::<2>("01; coś", 1).unwrap();
        assert_eq!((a, b), ("01", " coś"));
        assert_eq!(
            split_fields::<3>("01; coś", 7),
            Err(ParseError::FieldCount {
                line: 7,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn clean_text_strips_every_marker() {
        assert_eq!(clean_text(" Some *text* "), "Some text");
    }

    #[test]
    fn offsets_count_characters() {
        assert_eq!(letter_at("POKŁAD B", 7), Some('B'));
        assert_eq!(letter_at("POKŁAD", 7), None);
        assert_eq!(tail_from("DECK A - Intro", 8), "Intro");
        assert_eq!(tail_from("DECK A", 8), "");
    }
}
