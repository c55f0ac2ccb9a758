//! Reading binding configurations from disk.
//!
//! A configuration is a mapping. The reserved key `labels` maps group names to label entries;
//! every other key names an [`Operator`](crate::Operator) and gives its key sequence:
//!
//! ```toml
//! CursorLeft = "j"
//! ConfirmSentence = 13
//! CancelLabel = ["escape"]
//!
//! [labels]
//! role = [[["p", "r", "o"], "problem"], ["sol", "solution"]]
//! stance = ["sup", "support"]
//! ```
//!
//! A group is a list of entries, or a single entry on its own (an array ending in the label
//! text).
//!
//! Keys are written as follows:
//!
//! - a string is read one character per key (`"jk"` is `j` then `k`)
//! - an integer is a single raw key code
//! - in an array, a one-character string is that character, a longer string names a key
//!   (`"escape"`), and an integer is a raw key code
//!
//! Values of the wrong shape are kept as [`RawEntry::Other`] / [`RawGroup::Other`] and
//! rejected by [`build`](crate::build), which names the offending key.
//!
//! TOML and JSON are both accepted; the format follows the file extension. Document order is
//! kept, and it decides the order in which bindings are reported.
//!
//! # Locating the file
//!
//! [`RawConfig::load_with_overrides`] picks, in order: an explicit path (CLI flag or
//! `KEYTRIE_CONFIG`), a `keytrie.toml` found by [`discover`], then the embedded default.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "keytrie.toml";

/// Key reserved for labeled commands.
pub const LABELS_KEY: &str = "labels";

/// One key as written inside an array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawKey {
    Code(u32),
    Text(String),
}

/// A key sequence, or a single key written as a scalar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawSequence {
    Code(u32),
    Text(String),
    Keys(Vec<RawKey>),
}

/// Value of one label group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawGroup {
    Entries(Vec<Vec<RawSequence>>),
    /// One entry written without the enclosing list: `["pro", "problem"]`.
    Single(Vec<RawSequence>),
    Other(serde_json::Value),
}

/// Value of a top-level key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawEntry {
    Sequence(RawSequence),
    Groups(IndexMap<String, RawGroup>),
    Other(serde_json::Value),
}

/// A parsed but unvalidated configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RawConfig {
    pub entries: IndexMap<String, RawEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// JSON for `.json` files, TOML for anything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Toml,
        }
    }
}

impl RawConfig {
    pub fn parse(source: &str, format: Format) -> Result<Self> {
        match format {
            Format::Toml => toml::from_str(source).context("Invalid TOML configuration"),
            Format::Json => serde_json::from_str(source).context("Invalid JSON configuration"),
        }
    }

    /// Read and deserialize a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::parse(&contents, Format::from_path(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), entries = config.entries.len(), "Loaded config");
        Ok(config)
    }

    /// Load configuration with priority: explicit override > discovered path > embedded.
    pub fn load_with_overrides(
        cli_override: Option<&Path>,
        discovered_path: Option<&Path>,
    ) -> Result<Self> {
        if let Some(path) = cli_override {
            return Self::load(path);
        }
        if let Some(path) = discovered_path {
            return Self::load(path);
        }
        Self::load_embedded()
    }

    pub fn load_embedded() -> Result<Self> {
        let source = include_str!("../default.toml");
        Self::parse(source, Format::Toml).context("Failed to parse embedded default.toml")
    }
}

/// Find a `keytrie.toml` in `start_dir` or its ancestors, falling back to the user config
/// directory.
pub fn discover(start_dir: &Path) -> Option<PathBuf> {
    let found = walk_ancestors(start_dir).or_else(system_config_file);
    match &found {
        Some(path) => tracing::info!("using config file: {}", path.display()),
        None => tracing::debug!("no config file found, using defaults"),
    }
    found
}

fn walk_ancestors(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

fn system_config_file() -> Option<PathBuf> {
    let file = dirs::config_dir()?.join("keytrie").join(CONFIG_FILE_NAME);
    file.is_file().then_some(file)
}
