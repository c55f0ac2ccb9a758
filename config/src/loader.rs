//! Turns a [`RawConfig`] into a [`Trie`] of [`Op`]s.
//!
//! Entries are inserted in document order. Label groups go in one batch per group, with the
//! action built from the group name and each entry's label text. Operators go in one at a
//! time.
//!
//! Any problem aborts the whole build. Callers never see a trie holding half a configuration.

use crate::{
    error::ConfigError,
    key::Key,
    op::{Label, Op, Operator},
    source::{RawConfig, RawEntry, RawGroup, RawKey, RawSequence, LABELS_KEY},
};
use keytrie::{Fsa, InsertError, Trie};
use tracing::info;

/// The single-stream automaton used by hosts of this configuration.
pub type AppFsa = Fsa<Key, Op>;

/// Build the binding trie for `config`.
pub fn build(config: &RawConfig) -> Result<Trie<Key, Op>, ConfigError> {
    let mut trie = Trie::new();
    let mut bindings = 0;

    for (name, entry) in &config.entries {
        if name == LABELS_KEY {
            let RawEntry::Groups(groups) = entry else {
                return Err(ConfigError::LabelsNotGroups);
            };
            for (group, value) in groups {
                let items = match value {
                    RawGroup::Entries(items) => items.as_slice(),
                    RawGroup::Single(item) => std::slice::from_ref(item),
                    RawGroup::Other(_) => {
                        return Err(ConfigError::MalformedLabel {
                            entry: format!("{LABELS_KEY}.{group}"),
                            reason: "label group must be an entry or a list of entries",
                        })
                    },
                };
                let paths = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| label_path(&label_entry_name(group, index), item))
                    .collect::<Result<Vec<_>, _>>()?;

                bindings += trie
                    .insert_paths(paths, |label| Op::Label(Label::new(group.as_str(), label)))
                    .map_err(|InsertError::EmptyPath { index }| ConfigError::EmptySequence {
                        entry: label_entry_name(group, index),
                    })?;
            }
            continue;
        }

        let op: Operator = name.parse()?;
        let RawEntry::Sequence(sequence) = entry else {
            return Err(ConfigError::OperatorNotSequence { name: name.clone() });
        };
        let keys = sequence_keys(sequence, name)?;

        bindings += trie
            .insert_paths([(keys, op)], Op::Operator)
            .map_err(|_| ConfigError::EmptySequence { entry: name.clone() })?;
    }

    info!(bindings, nodes = trie.len(), "Built key bindings");
    Ok(trie)
}

/// Build a ready-to-walk automaton for `config`.
pub fn from_config(config: &RawConfig) -> Result<AppFsa, ConfigError> {
    build(config).map(Fsa::from)
}

/// Every binding in `trie`, in the order a walk would report them.
pub fn bindings(trie: &Trie<Key, Op>) -> Vec<(Vec<Key>, &Op)> {
    trie.paths(trie.root())
}

fn label_entry_name(group: &str, index: usize) -> String {
    format!("{LABELS_KEY}.{group}[{index}]")
}

/// Split a label entry into its key sequence and label text.
///
/// The label is always last. A single element before it is a whole sequence
/// (`[["p", "r", "o"], "problem"]`, `["pro", "problem"]`); several elements are one key each
/// (`["p", "r", "o", "problem"]`).
fn label_path(entry: &str, parts: &[RawSequence]) -> Result<(Vec<Key>, String), ConfigError> {
    let malformed = |reason| ConfigError::MalformedLabel {
        entry: entry.to_string(),
        reason,
    };

    let Some((last, keys)) = parts.split_last() else {
        return Err(malformed("label entry is empty"));
    };
    let RawSequence::Text(label) = last else {
        return Err(malformed("label entry must end with the label text"));
    };

    let keys = match keys {
        [] => return Err(malformed("label entry has no key sequence")),
        [sequence] => sequence_keys(sequence, entry)?,
        many => many
            .iter()
            .map(|part| match part {
                RawSequence::Code(code) => Ok(Key::Code(*code)),
                RawSequence::Text(text) => text_key(text, entry),
                RawSequence::Keys(_) => Err(malformed("nested key sequences are not allowed")),
            })
            .collect::<Result<_, _>>()?,
    };

    Ok((keys, label.clone()))
}

fn sequence_keys(sequence: &RawSequence, entry: &str) -> Result<Vec<Key>, ConfigError> {
    match sequence {
        RawSequence::Code(code) => Ok(vec![Key::Code(*code)]),
        RawSequence::Text(text) => Ok(text.chars().map(Key::Char).collect()),
        RawSequence::Keys(keys) => keys
            .iter()
            .map(|key| match key {
                RawKey::Code(code) => Ok(Key::Code(*code)),
                RawKey::Text(text) => text_key(text, entry),
            })
            .collect(),
    }
}

fn text_key(text: &str, entry: &str) -> Result<Key, ConfigError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(ConfigError::EmptyKey {
            entry: entry.to_string(),
        }),
        (Some(c), None) => Ok(Key::Char(c)),
        _ => Ok(Key::named(text)),
    }
}
