//! Key binding configuration: keys, actions, and the loader that builds a [`keytrie::Trie`]
//! from a declarative mapping.

mod error;
mod key;
mod loader;
mod notation;
mod op;
mod source;

pub use error::{format_errors, ConfigError, NotationError};
pub use key::{display_keys, Key};
pub use loader::{bindings, build, from_config, AppFsa};
pub use notation::{parse_keys, parser};
pub use op::{Label, Op, Operator};
pub use source::{
    discover, Format, RawConfig, RawEntry, RawGroup, RawKey, RawSequence, CONFIG_FILE_NAME,
    LABELS_KEY,
};
