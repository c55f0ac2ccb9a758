//! Incremental prefix matching over key sequences.
//!
//! A [`Trie`] is built once from `(sequence, action)` bindings and then walked one symbol at a
//! time. After every symbol the walker can tell which actions are still reachable and whether
//! exactly one remains, which is the point where a modal host dispatches and starts over.
//!
//! ```
//! use keytrie::{Dispatch, Trie};
//!
//! let mut trie = Trie::new();
//! trie.insert_paths([("gg".chars(), "top"), ("ge".chars(), "end")], |action| action)
//!     .unwrap();
//!
//! let mut walker = trie.walker();
//! assert_eq!(walker.feed('g'), Dispatch::Pending { candidates: 2 });
//! assert_eq!(walker.feed('e'), Dispatch::Resolved(&"end"));
//! assert!(walker.is_at_root());
//! ```
//!
//! The action type is never inspected. Structure is split three ways:
//!
//! - [`Trie`] owns the nodes and is read-only once built.
//! - [`Cursor`] is a copyable position, advanced against a borrowed trie.
//! - [`Walker`] pairs the two for one input stream; [`Fsa`] owns both for hosts with just one.

mod cursor;
mod error;
mod fsa;
mod trie;
mod walker;

pub use cursor::{Cursor, Dispatch};
pub use error::{InsertError, NoMatch};
pub use fsa::Fsa;
pub use trie::{Actions, NodeId, Trie};
pub use walker::Walker;
