//! User preferences.
//!
//! Defaults are bundled as YAML and layered under an optional user file.

#![allow(missing_docs)] // most fields are self-explanatory

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate strum;

use std::path::Path;

use eyre::Result;
use serde::{Deserialize, Serialize};

mod animation;

pub use animation::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

/// All user preferences.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub scramble: ScramblePreferences,
    pub solver: SolverPreferences,
}

/// Scramble preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScramblePreferences {
    /// Number of random quarter turns.
    pub length: u32,
    /// Fixed seed, for reproducible scrambles. If `None`, each scramble is
    /// seeded randomly.
    pub seed: Option<u64>,
}
impl Default for ScramblePreferences {
    fn default() -> Self {
        Self {
            length: 20,
            seed: None,
        }
    }
}

/// Solver preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SolverPreferences {
    /// Maximum number of phases to solve before giving up.
    pub max_rounds: usize,
}
impl Default for SolverPreferences {
    fn default() -> Self {
        Self { max_rounds: 1000 }
    }
}

impl Preferences {
    /// Loads the default preferences, overridden by the file at `path` if
    /// there is one. If loading fails, the default preferences are returned.
    pub fn load(path: Option<&Path>) -> Self {
        Self::try_load(path).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e}");
            DEFAULT_PREFS.clone()
        })
    }

    /// Loads the default preferences, overridden by the file at `path` if
    /// there is one.
    pub fn try_load(path: Option<&Path>) -> Result<Self> {
        lazy_static::initialize(&DEFAULT_PREFS);

        let mut config = config::Config::builder().add_source(config::File::from_str(
            DEFAULT_PREFS_STR,
            PREFS_FILE_FORMAT,
        ));
        if let Some(path) = path {
            log::debug!("Loading preferences from {}", path.display());
            config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
        }

        Ok(config.build()?.try_deserialize()?)
    }

    /// Saves the preferences to `path` as YAML, creating parent directories
    /// if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        log::info!("Saved preferences to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_prefs_match_default_impl() {
        assert_eq!(*DEFAULT_PREFS, Preferences::default());
        assert_eq!(Preferences::load(None), Preferences::default());
    }

    #[test]
    fn test_user_prefs_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "scramble:\n  length: 7\n  seed: 42").unwrap();
        writeln!(file, "animation:\n  twist_interpolation: linear").unwrap();

        let prefs = Preferences::try_load(Some(file.path())).unwrap();
        assert_eq!(
            prefs.scramble,
            ScramblePreferences {
                length: 7,
                seed: Some(42),
            },
        );
        assert_eq!(prefs.animation.twist_interpolation, InterpolateFn::Linear);
        assert_eq!(prefs.animation.twist_duration, 0.125);
        assert_eq!(prefs.solver, SolverPreferences::default());
    }

    #[test]
    fn test_bad_prefs_fall_back_to_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "solver:\n  max_rounds: lots").unwrap();

        assert!(Preferences::try_load(Some(file.path())).is_err());
        assert_eq!(Preferences::load(Some(file.path())), *DEFAULT_PREFS);

        let missing = file.path().with_file_name("does_not_exist.yaml");
        assert_eq!(Preferences::load(Some(&missing)), *DEFAULT_PREFS);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.yaml");

        let mut prefs = Preferences::default();
        prefs.animation.dynamic_twist_speed = true;
        prefs.scramble.seed = Some(7);
        prefs.solver.max_rounds = 50;
        prefs.save(&path).unwrap();

        assert_eq!(Preferences::try_load(Some(&path)).unwrap(), prefs);
    }
}
