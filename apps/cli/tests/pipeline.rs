//! Library-level tests for `build`, compared against the binary.

mod common;

use bilingual_decks::build;
use bilingual_decks::config::Config;
use common::TestEnv;
use pretty_assertions::assert_eq;

fn config_for(env: &TestEnv) -> Config {
    Config {
        en_path: env.dir().join("Cards.en.csv"),
        pl_path: env.dir().join("Cards.pl.csv"),
    }
}

#[test]
fn build_matches_binary_output() {
    let env = TestEnv::matched();
    let html = build(&config_for(&env)).unwrap();
    assert_eq!(html, env.run_html());
}

#[test]
fn build_reports_alignment_error() {
    let env = TestEnv::new("DECK A - Intro\n01; x; Event\n", "POKŁAD A\n");
    let err = build(&config_for(&env)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "card count mismatch in deck A: en has 1, pl has 0"
    );
}
