//! Subcommand handlers. Each writes its output to the given writer so it can be tested.

use anyhow::Result;
use keytrie::Trie;
use keytrie_config::{Key, Op, RawConfig};
use std::path::Path;

pub mod check;
pub mod dump;
pub mod run;

/// Load and build the bindings: explicit path > discovered `keytrie.toml` > built-in defaults.
pub fn load_trie(config: Option<&Path>) -> Result<Trie<Key, Op>> {
    let discovered = match config {
        Some(_) => None,
        None => std::env::current_dir()
            .ok()
            .and_then(|dir| keytrie_config::discover(&dir)),
    };
    let raw = RawConfig::load_with_overrides(config, discovered.as_deref())?;
    Ok(keytrie_config::build(&raw)?)
}
