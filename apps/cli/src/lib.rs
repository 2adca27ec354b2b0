pub mod config;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use deck_core::{Error, Language};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

pub fn run() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::default();
    let html = build(&config)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(html.as_bytes())
        .and_then(|_| stdout.flush())
        .context("failed to write HTML to stdout")?;

    tracing::info!("Wrote {} bytes of HTML", html.len());
    Ok(())
}

/// Read both sources and produce the HTML document. Nothing is written here,
/// so a failed run leaves stdout empty.
///
/// The English source is read and parsed before the Polish file is opened.
pub fn build(config: &Config) -> anyhow::Result<String> {
    let content_en = read_source(&config.en_path)?;
    let decks_en =
        deck_core::parse_en(&content_en).map_err(|e| Error::parse(Language::English, e))?;
    tracing::info!("Parsed {} English decks", decks_en.len());

    let content_pl = read_source(&config.pl_path)?;
    let decks_pl =
        deck_core::parse_pl(&content_pl).map_err(|e| Error::parse(Language::Polish, e))?;
    tracing::info!("Parsed {} Polish decks", decks_pl.len());

    let decks = deck_core::align(decks_en, decks_pl).map_err(Error::from)?;
    let card_count: usize = decks.iter().map(|deck| deck.cards.len()).sum();
    tracing::info!("Merged {} decks with {} cards", decks.len(), card_count);

    Ok(deck_core::render_to_string(&decks))
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    tracing::info!("Reading {}", path.display());
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
