//! Position of one input stream inside a [`Trie`].
//!
//! A [`Cursor`] is two integers and is [`Copy`], so any number of them can walk the same trie.
//! The trie is passed in on every call rather than borrowed, which lets the owner of a cursor
//! store it wherever it likes (next to the trie in [`Fsa`](crate::Fsa), behind a reference in
//! [`Walker`](crate::Walker), or in per-session host state).
//!
//! # Transition function
//!
//! For a cursor at node `n` and an input symbol `s`:
//!
//! - if `n` has a child `c` keyed by `s`, move to `c`;
//! - otherwise move to the root and report [`NoMatch`].
//!
//! The reset in the second case is part of the transition, not error recovery. An unmatched
//! symbol never leaves the cursor stuck on a dead branch.

use crate::{
    error::NoMatch,
    trie::{Actions, NodeId, Trie},
};
use std::hash::Hash;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    node: NodeId,
    depth: usize,
}

/// Outcome of [`Cursor::feed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch<S, A> {
    /// The symbol matched but more than one action is still reachable.
    Pending { candidates: usize },
    /// Exactly one action is reachable. The cursor has been reset.
    Resolved(A),
    /// The symbol matched nothing. The cursor has been reset.
    Rejected(NoMatch<S>),
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Symbols consumed since the last reset.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_at_root(&self) -> bool {
        self.node == NodeId::ROOT
    }

    pub fn reset(&mut self) {
        self.node = NodeId::ROOT;
        self.depth = 0;
    }

    /// Actions reachable from the current node, the node itself included.
    pub fn actions<'t, S, A>(&self, trie: &'t Trie<S, A>) -> Actions<'t, S, A> {
        trie.actions(self.node)
    }

    /// True only when exactly one action is reachable.
    ///
    /// A node that is terminal but still leads to other actions is not terminable, and neither
    /// is a node with nothing reachable.
    pub fn can_terminate<S, A>(&self, trie: &Trie<S, A>) -> bool {
        let mut actions = self.actions(trie);
        actions.next().is_some() && actions.next().is_none()
    }

    /// True when the current node carries an action, ambiguous or not.
    pub fn is_accepting<S, A>(&self, trie: &Trie<S, A>) -> bool {
        trie.is_terminal(self.node)
    }

    /// Apply the transition function for `symbol`.
    pub fn advance<S: Eq + Hash, A>(
        &mut self,
        trie: &Trie<S, A>,
        symbol: S,
    ) -> Result<(), NoMatch<S>> {
        match trie.child(self.node, &symbol) {
            Some(next) => {
                trace!(from = ?self.node, to = ?next, depth = self.depth + 1, "Advancing cursor");
                self.node = next;
                self.depth += 1;
                Ok(())
            },
            None => {
                let depth = self.depth;
                debug!(from = ?self.node, depth, "No binding continues, resetting to root");
                self.reset();
                Err(NoMatch { symbol, depth })
            },
        }
    }

    /// Advance by `symbol` and report whether the walk is now resolved.
    ///
    /// This is the loop a host runs per keystroke: keep waiting while several actions remain,
    /// hand out the action and start over once only one does.
    pub fn feed<'t, S: Eq + Hash, A>(
        &mut self,
        trie: &'t Trie<S, A>,
        symbol: S,
    ) -> Dispatch<S, &'t A> {
        if let Err(no_match) = self.advance(trie, symbol) {
            return Dispatch::Rejected(no_match);
        }

        let mut actions = self.actions(trie);
        match (actions.next(), actions.next()) {
            (Some(action), None) => {
                debug!(depth = self.depth, "Sequence resolved");
                self.reset();
                Dispatch::Resolved(action)
            },
            (first, second) => Dispatch::Pending {
                candidates: usize::from(first.is_some())
                    + usize::from(second.is_some())
                    + actions.count(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie() -> Trie<char, &'static str> {
        let mut trie = Trie::new();
        trie.insert("d".chars(), "delete").unwrap();
        trie.insert("dd".chars(), "delete-line").unwrap();
        trie.insert("dw".chars(), "delete-word").unwrap();
        trie.insert("x".chars(), "cut").unwrap();
        trie
    }

    #[test]
    fn cursors_are_independent() {
        let trie = trie();
        let mut a = Cursor::new();
        let mut b = Cursor::new();
        a.advance(&trie, 'd').unwrap();
        assert!(!a.is_at_root());
        assert!(b.is_at_root());
        b.advance(&trie, 'x').unwrap();
        assert!(b.can_terminate(&trie));
        assert!(!a.can_terminate(&trie));
    }

    #[test]
    fn unmatched_symbol_resets() {
        let trie = trie();
        let mut cursor = Cursor::new();
        cursor.advance(&trie, 'd').unwrap();
        let err = cursor.advance(&trie, 'q').unwrap_err();
        assert_eq!(err, NoMatch { symbol: 'q', depth: 1 });
        assert!(cursor.is_at_root());
        assert_eq!(cursor.depth(), 0);
    }

    #[test]
    fn accepting_is_not_terminable_while_ambiguous() {
        let trie = trie();
        let mut cursor = Cursor::new();
        cursor.advance(&trie, 'd').unwrap();
        assert!(cursor.is_accepting(&trie));
        assert!(!cursor.can_terminate(&trie));
        assert_eq!(cursor.actions(&trie).count(), 3);
    }

    #[test]
    fn feed_reports_pending_then_resolved() {
        let trie = trie();
        let mut cursor = Cursor::new();
        assert_eq!(cursor.feed(&trie, 'd'), Dispatch::Pending { candidates: 3 });
        assert_eq!(cursor.feed(&trie, 'w'), Dispatch::Resolved(&"delete-word"));
        assert!(cursor.is_at_root());
    }

    #[test]
    fn feed_rejects_and_recovers() {
        let trie = trie();
        let mut cursor = Cursor::new();
        assert_eq!(
            cursor.feed(&trie, 'z'),
            Dispatch::Rejected(NoMatch { symbol: 'z', depth: 0 })
        );
        assert_eq!(cursor.feed(&trie, 'x'), Dispatch::Resolved(&"cut"));
    }
}
