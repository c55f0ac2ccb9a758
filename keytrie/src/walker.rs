use crate::{
    cursor::{Cursor, Dispatch},
    error::NoMatch,
    trie::{Actions, NodeId, Trie},
};
use std::hash::Hash;

/// A [`Cursor`] bound to a shared, read-only [`Trie`].
///
/// Each input stream gets its own walker; the trie is borrowed, never mutated, so walkers over
/// the same trie can live on different threads.
pub struct Walker<'t, S, A> {
    trie: &'t Trie<S, A>,
    cursor: Cursor,
}

impl<S, A> Clone for Walker<'_, S, A> {
    fn clone(&self) -> Self {
        Self {
            trie: self.trie,
            cursor: self.cursor,
        }
    }
}

impl<'t, S, A> Walker<'t, S, A> {
    pub fn new(trie: &'t Trie<S, A>) -> Self {
        Self {
            trie,
            cursor: Cursor::new(),
        }
    }

    pub fn node(&self) -> NodeId {
        self.cursor.node()
    }

    pub fn depth(&self) -> usize {
        self.cursor.depth()
    }

    pub fn is_at_root(&self) -> bool {
        self.cursor.is_at_root()
    }

    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    pub fn current_actions(&self) -> Actions<'t, S, A> {
        self.cursor.actions(self.trie)
    }

    pub fn can_terminate(&self) -> bool {
        self.cursor.can_terminate(self.trie)
    }

    pub fn is_accepting(&self) -> bool {
        self.cursor.is_accepting(self.trie)
    }
}

impl<'t, S: Eq + Hash, A> Walker<'t, S, A> {
    /// See [`Cursor::advance`].
    pub fn consume(&mut self, symbol: S) -> Result<(), NoMatch<S>> {
        self.cursor.advance(self.trie, symbol)
    }

    /// See [`Cursor::feed`].
    pub fn feed(&mut self, symbol: S) -> Dispatch<S, &'t A> {
        self.cursor.feed(self.trie, symbol)
    }
}

impl<'t, S: Clone, A> Walker<'t, S, A> {
    /// Remaining symbols and action of every completion from the current position.
    pub fn completions(&self) -> Vec<(Vec<S>, &'t A)> {
        self.trie.paths(self.cursor.node())
    }
}
