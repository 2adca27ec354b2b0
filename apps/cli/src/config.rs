//! Input locations.

use std::path::PathBuf;

/// English card source, relative to the working directory.
pub const EN_SOURCE: &str = "./Cards.en.csv";
/// Polish card source, relative to the working directory.
pub const PL_SOURCE: &str = "./Cards.pl.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub en_path: PathBuf,
    pub pl_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            en_path: PathBuf::from(EN_SOURCE),
            pl_path: PathBuf::from(PL_SOURCE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_are_fixed() {
        let config = Config::default();
        assert_eq!(config.en_path, PathBuf::from("./Cards.en.csv"));
        assert_eq!(config.pl_path, PathBuf::from("./Cards.pl.csv"));
    }
}
