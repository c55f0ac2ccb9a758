use crate::{
    cursor::{Cursor, Dispatch},
    error::{InsertError, NoMatch},
    trie::{Actions, Trie},
    walker::Walker,
};
use std::hash::Hash;

/// A trie and a single cursor in one value.
///
/// The simple shape for a host with exactly one input stream. Hosts with more streams should
/// keep one [`Trie`] and hand out a [`Walker`] per stream; [`Fsa::walker`] does that without
/// disturbing this automaton's own cursor.
#[derive(Debug, Clone)]
pub struct Fsa<S, A> {
    trie: Trie<S, A>,
    cursor: Cursor,
}

impl<S, A> Default for Fsa<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> From<Trie<S, A>> for Fsa<S, A> {
    fn from(trie: Trie<S, A>) -> Self {
        Self {
            trie,
            cursor: Cursor::new(),
        }
    }
}

impl<S, A> Fsa<S, A> {
    pub fn new() -> Self {
        Trie::new().into()
    }

    pub fn trie(&self) -> &Trie<S, A> {
        &self.trie
    }

    pub fn depth(&self) -> usize {
        self.cursor.depth()
    }

    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    /// Lazy form of [`Fsa::ops`].
    pub fn actions(&self) -> Actions<'_, S, A> {
        self.cursor.actions(&self.trie)
    }

    /// Every action reachable from the current state.
    pub fn ops(&self) -> Vec<&A> {
        self.actions().collect()
    }

    /// True when the current state leads to exactly one action.
    pub fn can_terminate(&self) -> bool {
        self.cursor.can_terminate(&self.trie)
    }

    pub fn is_accepting(&self) -> bool {
        self.cursor.is_accepting(&self.trie)
    }

    /// An independent cursor over the same trie, starting at the root.
    pub fn walker(&self) -> Walker<'_, S, A> {
        self.trie.walker()
    }
}

impl<S: Eq + Hash, A> Fsa<S, A> {
    /// See [`Trie::insert_paths`]. The cursor returns to the root.
    pub fn insert_paths<I, P, L, F>(
        &mut self,
        entries: I,
        make_action: F,
    ) -> Result<usize, InsertError>
    where
        I: IntoIterator<Item = (P, L)>,
        P: IntoIterator<Item = S>,
        F: FnMut(L) -> A,
    {
        self.cursor.reset();
        self.trie.insert_paths(entries, make_action)
    }

    /// Consume one symbol. See [`Cursor::advance`].
    pub fn take(&mut self, symbol: S) -> Result<(), NoMatch<S>> {
        self.cursor.advance(&self.trie, symbol)
    }

    /// See [`Cursor::feed`].
    pub fn feed(&mut self, symbol: S) -> Dispatch<S, &A> {
        self.cursor.feed(&self.trie, symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_and_reset() {
        let mut fsa = Fsa::new();
        fsa.insert_paths([("ab".chars(), 1), ("ac".chars(), 2)], |n| n * 10)
            .unwrap();

        fsa.take('a').unwrap();
        assert_eq!(fsa.ops(), vec![&10, &20]);
        assert!(!fsa.can_terminate());

        fsa.take('c').unwrap();
        assert_eq!(fsa.ops(), vec![&20]);
        assert!(fsa.can_terminate());

        fsa.reset();
        assert_eq!(fsa.depth(), 0);
        assert_eq!(fsa.ops().len(), 2);
    }

    #[test]
    fn walker_does_not_move_own_cursor() {
        let mut fsa = Fsa::new();
        fsa.insert_paths([("ab".chars(), ())], |_| "ab").unwrap();
        let mut walker = fsa.walker();
        walker.consume('a').unwrap();
        assert_eq!(walker.depth(), 1);
        assert_eq!(fsa.depth(), 0);
    }
}
