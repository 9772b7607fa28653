//! Configuration types for matchlog.
//!
//! [`Config::load`] layers the built-in defaults, an optional TOML file and
//! `MATCHLOG_*` environment variables. [`Config::defaults`] returns the
//! built-in defaults without touching the filesystem (useful in tests).
//!
//! The two identifiers (`document_id`, `spreadsheet_id`) have no default;
//! [`Config::require_ids`] fails with the name of whichever is missing.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{MatchLogError, Result};
use crate::roster::{Roster, RosterEntry};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[source]
dir          = "."
start_marker = "試合ログ"
end_marker   = "（テンプレート）"

[sheet]
dir             = "sheets"
tab             = "試合ログ"
imposter_marker = "★"

[[roster]]
name = "ゆうやみ"

[[roster]]
name    = "Marie"
aliases = ["まりえ"]

[[roster]]
name    = "Marie（こうすけ）"
aliases = ["こうすけ"]

[[roster]]
name = "若丸"

[[roster]]
name    = "ようじょ"
aliases = ["ょぅl〝ょ"]

[[roster]]
name = "源"

[[roster]]
name    = "水金"
aliases = ["かけちよ"]

[[roster]]
name = "あっちゃん"

[[roster]]
name = "透"

[[roster]]
name = "なおえ"

[[roster]]
name = "すっちん"
"#;

const ENV_PREFIX: &str = "MATCHLOG";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Identifier of the meeting-log document (the Markdown export's file stem).
    #[serde(default)]
    pub document_id: Option<String>,
    /// Identifier of the destination spreadsheet.
    #[serde(default)]
    pub spreadsheet_id: Option<String>,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub sheet: SheetConfig,
    #[serde(default)]
    pub roster: Vec<RosterEntry>,
}

/// `[source]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_start_marker")]
    pub start_marker: String,
    #[serde(default = "default_end_marker")]
    pub end_marker: String,
}

fn default_source_dir() -> PathBuf { PathBuf::from(".") }
fn default_start_marker() -> String { "試合ログ".to_string() }
fn default_end_marker() -> String { "（テンプレート）".to_string() }

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: default_source_dir(),
            start_marker: default_start_marker(),
            end_marker: default_end_marker(),
        }
    }
}

/// `[sheet]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetConfig {
    #[serde(default = "default_sheet_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_tab")]
    pub tab: String,
    /// 1-based row of the first record; `None` appends after existing rows.
    #[serde(default)]
    pub start_row: Option<usize>,
    #[serde(default = "default_imposter_marker")]
    pub imposter_marker: String,
}

fn default_sheet_dir() -> PathBuf { PathBuf::from("sheets") }
fn default_tab() -> String { "試合ログ".to_string() }
fn default_imposter_marker() -> String { "★".to_string() }

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            dir: default_sheet_dir(),
            tab: default_tab(),
            start_row: None,
            imposter_marker: default_imposter_marker(),
        }
    }
}

/// The two identifiers a run needs, once checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunIds {
    pub document_id: String,
    pub spreadsheet_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `path` (or `~/.config/matchlog/config.toml` when `None`),
    /// layered on top of the built-in defaults and under `MATCHLOG_*`
    /// environment variables. The default file is created if missing; an
    /// explicit `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (config_path(), false),
        };

        if !required && !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| MatchLogError::io(parent.display(), e))?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())
                .map_err(|e| MatchLogError::io(path.display(), e))?;
            tracing::info!(path = %path.display(), "config: wrote default config");
        }

        let config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(required))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Parse a TOML string on top of the built-in defaults (no file, no env).
    pub fn from_toml(toml: &str) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Both identifiers, or a configuration error naming the first missing one.
    pub fn require_ids(&self) -> Result<RunIds> {
        Ok(RunIds {
            document_id: require(&self.document_id, "document_id")?,
            spreadsheet_id: require(&self.spreadsheet_id, "spreadsheet_id")?,
        })
    }

    pub fn roster(&self) -> Roster {
        Roster::new(self.roster.clone())
    }
}

fn require(value: &Option<String>, key: &str) -> Result<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| MatchLogError::missing_config(key))
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("matchlog")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
