use thiserror::Error;

/// Errors raised while building a [`Trie`](crate::Trie).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertError {
    /// A path with no symbols would make the root terminal.
    #[error("path {index} is empty; a binding needs at least one symbol")]
    EmptyPath { index: usize },
}

/// The consumed symbol does not extend any live branch.
///
/// By the time this is returned the cursor is already back at the root, so the next symbol
/// starts a fresh sequence. Hosts may log it or ignore it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no binding continues with {symbol:?} after {depth} symbol(s)")]
pub struct NoMatch<S> {
    /// The rejected symbol, handed back to the caller.
    pub symbol: S,
    /// How many symbols had been matched before the rejected one.
    pub depth: usize,
}
