//! Shared fixtures for the end-to-end tests.
//!
//! Each `TestEnv` owns a temporary working directory holding the two card
//! sources the binary reads.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const MATCHED_EN: &str = "\
; English cards
DECK A - Intro
01; Some *text*; Event
02; Other text; Thing-INT
";

pub const MATCHED_PL: &str = "\
; Polskie karty
POKŁAD A
01; coś
02; inne
";

pub struct TestEnv {
    tmp: TempDir,
}

impl TestEnv {
    pub fn new(en: &str, pl: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        fs::write(tmp.path().join("Cards.en.csv"), en).expect("write English source");
        fs::write(tmp.path().join("Cards.pl.csv"), pl).expect("write Polish source");
        Self { tmp }
    }

    pub fn matched() -> Self {
        Self::new(MATCHED_EN, MATCHED_PL)
    }

    pub fn dir(&self) -> &Path {
        self.tmp.path()
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("bilingual-decks");
        cmd.current_dir(self.dir()).env("RUST_LOG", "info");
        cmd
    }

    pub fn run_html(&self) -> String {
        let out = self.cmd().assert().success().get_output().stdout.clone();
        String::from_utf8(out).expect("utf-8 html")
    }
}
