//! HTML rendering of the bilingual decks.
//!
//! Each deck becomes a heading and a two-column table. Card texts are written
//! verbatim.

use std::io::{self, Write};

use crate::types::{Card, Deck, Language};

const CARDS_PER_ROW: usize = 2;

/// Write the full HTML document for `decks` to `out`.
pub fn render<W: Write>(decks: &[Deck], out: &mut W) -> io::Result<()> {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "  <head>")?;
    writeln!(out, "    <meta charset=\"utf-8\">")?;
    writeln!(out, "  </head>")?;
    writeln!(out, "  <body>")?;

    for deck in decks {
        render_deck(deck, out)?;
    }

    writeln!(out, "  </body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}

/// Render into an in-memory string.
pub fn render_to_string(decks: &[Deck]) -> String {
    let mut buf = Vec::new();
    render(decks, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("rendered HTML is built from UTF-8 strings")
}

fn render_deck<W: Write>(deck: &Deck, out: &mut W) -> io::Result<()> {
    writeln!(out, "    <h1>Deck {} - {}</h1>", deck.letter, deck.name)?;
    writeln!(out, "    <table style=\"width:100%\" border=\"1\">")?;

    for row in deck.cards.chunks(CARDS_PER_ROW) {
        // A short final row is still closed.
        writeln!(out, "      <tr>")?;
        for card in row {
            render_cell(card, out)?;
        }
        writeln!(out, "      </tr>")?;
    }

    writeln!(out, "    </table>")?;
    Ok(())
}

fn render_cell<W: Write>(card: &Card, out: &mut W) -> io::Result<()> {
    writeln!(out, "        <td>")?;
    writeln!(out, "        <b>({})</b><br>", heading(card, Language::Polish))?;
    writeln!(out, "        {} <br><br>", card.text_pl)?;
    writeln!(out, "        <b>({})</b><br>", heading(card, Language::English))?;
    writeln!(out, "        {}", card.text_en)?;
    writeln!(out, "        </td>")?;
    Ok(())
}

fn heading(card: &Card, language: Language) -> String {
    let suffix = if card.interrupt {
        language.interrupt_suffix()
    } else {
        ""
    };
    format!("{}{}", card.category.label(language), suffix)
}
