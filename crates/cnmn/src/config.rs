//! Host configuration loaded from `cnmn.toml`.

use chrono::NaiveDate;
use cnmn_chain::GlyphSet;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CNMN_CONFIG";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "cnmn.toml";

/// Optional overrides for the share-card symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GlyphConfig {
    /// Symbol for a link solved without a miss.
    #[serde(default)]
    clean: Option<String>,
    /// Symbol for a link solved after a miss.
    #[serde(default)]
    missed: Option<String>,
}

/// Configuration for the terminal host.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct CnmnConfig {
    /// Directory holding `<YYYY-MM-DD>.json` feed files.
    puzzles_dir: PathBuf,
    /// Directory for in-progress session snapshots.
    save_dir: PathBuf,
    /// SQLite database for the results history.
    db_path: String,
    /// Share-card symbol overrides.
    glyphs: GlyphConfig,
}

impl Default for CnmnConfig {
    fn default() -> Self {
        Self {
            puzzles_dir: PathBuf::from("puzzles"),
            save_dir: PathBuf::from(".cnmn/saves"),
            db_path: "cnmn.db".to_string(),
            glyphs: GlyphConfig::default(),
        }
    }
}

impl CnmnConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(db_path = %config.db_path, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves configuration: an explicit path must exist; otherwise
    /// [`DEFAULT_CONFIG_FILE`] is read if present, else defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the chosen file cannot be read or parsed.
    #[instrument]
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Resolves configuration, falling back to [`CONFIG_ENV`] when no path
    /// is given.
    ///
    /// # Errors
    ///
    /// See [`CnmnConfig::resolve`].
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::resolve(explicit.or(from_env.as_deref()))
    }

    /// Share glyphs with any configured overrides applied.
    pub fn glyph_set(&self) -> GlyphSet {
        let defaults = GlyphSet::default();
        let clean = self
            .glyphs
            .clean
            .clone()
            .unwrap_or_else(|| defaults.symbol(cnmn_chain::ResultGlyph::Clean).to_string());
        let missed = self
            .glyphs
            .missed
            .clone()
            .unwrap_or_else(|| defaults.symbol(cnmn_chain::ResultGlyph::Missed).to_string());
        GlyphSet::new(clean, missed)
    }

    /// Feed file for a publication date.
    pub fn puzzle_path(&self, date: NaiveDate) -> PathBuf {
        self.puzzles_dir.join(format!("{}.json", date.format("%Y-%m-%d")))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
