//! Arena backed trie over symbol sequences.
//!
//! Every node lives in a flat [`Vec`] and is addressed by a [`NodeId`]. Child maps are
//! [`IndexMap`]s, so iteration follows the order in which branches were first inserted. That
//! order is what [`Trie::actions`] and [`Trie::paths`] report.
//!
//! The trie only ever grows. Nodes are never removed, which keeps every [`NodeId`] handed out
//! valid for the lifetime of the trie.

use crate::{error::InsertError, walker::Walker};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::hash::Hash;
use tracing::{debug, warn};

/// Handle to a node inside a [`Trie`].
///
/// Only meaningful for the trie that produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The node representing the empty sequence.
    pub const ROOT: NodeId = NodeId(0);
}

#[derive(Debug, Clone)]
struct Node<S, A> {
    children: IndexMap<S, NodeId, FxBuildHasher>,
    action: Option<A>,
}

impl<S, A> Default for Node<S, A> {
    fn default() -> Self {
        Self {
            children: IndexMap::default(),
            action: None,
        }
    }
}

/// Prefix automaton mapping symbol sequences to actions.
///
/// The action type is opaque: the trie stores and returns it, nothing more.
#[derive(Debug, Clone)]
pub struct Trie<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S, A> Default for Trie<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Trie<S, A> {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of nodes, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Action installed directly at `node`, if it is terminal.
    pub fn action(&self, node: NodeId) -> Option<&A> {
        self.node(node).action.as_ref()
    }

    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.node(node).action.is_some()
    }

    pub fn has_children(&self, node: NodeId) -> bool {
        !self.node(node).children.is_empty()
    }

    /// Lazily yields every action in the subtree rooted at `from`, `from` included.
    ///
    /// Traversal is pre-order: a node's own action comes before those of its descendants, and
    /// siblings are visited in insertion order.
    pub fn actions(&self, from: NodeId) -> Actions<'_, S, A> {
        Actions {
            trie: self,
            stack: vec![from],
        }
    }

    /// A fresh cursor positioned at the root.
    pub fn walker(&self) -> Walker<'_, S, A> {
        Walker::new(self)
    }

    fn node(&self, id: NodeId) -> &Node<S, A> {
        &self.nodes[id.0]
    }

    /// Overwrites any previous action at `node`. Later bindings win.
    fn install(&mut self, node: NodeId, action: A) {
        if self.nodes[node.0].action.replace(action).is_some() {
            warn!(node = node.0, "Terminal action overwritten by a later binding");
        }
    }
}

impl<S: Eq + Hash, A> Trie<S, A> {
    /// Child of `from` reached by `symbol`.
    pub fn child(&self, from: NodeId, symbol: &S) -> Option<NodeId> {
        self.node(from).children.get(symbol).copied()
    }

    /// Node reached by walking `path` from the root.
    pub fn lookup<'s, I>(&self, path: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
    {
        path.into_iter()
            .try_fold(NodeId::ROOT, |node, symbol| self.child(node, symbol))
    }

    /// Insert a single path terminating in `action`.
    pub fn insert<P>(&mut self, path: P, action: A) -> Result<NodeId, InsertError>
    where
        P: IntoIterator<Item = S>,
    {
        let path: Vec<S> = path.into_iter().collect();
        if path.is_empty() {
            return Err(InsertError::EmptyPath { index: 0 });
        }
        let node = self.extend(path);
        self.install(node, action);
        Ok(node)
    }

    /// Insert a batch of `(path, label)` entries, building each action with `make_action`.
    ///
    /// The factory receives the entry's label, which lets one call parametrize the action per
    /// leaf. The whole batch is validated before anything is inserted: if any path is empty the
    /// trie is left untouched and the error names the offending entry.
    ///
    /// Returns the number of inserted paths.
    pub fn insert_paths<I, P, L, F>(
        &mut self,
        entries: I,
        mut make_action: F,
    ) -> Result<usize, InsertError>
    where
        I: IntoIterator<Item = (P, L)>,
        P: IntoIterator<Item = S>,
        F: FnMut(L) -> A,
    {
        let entries: Vec<(Vec<S>, L)> = entries
            .into_iter()
            .map(|(path, label)| (path.into_iter().collect(), label))
            .collect();

        if let Some(index) = entries.iter().position(|(path, _)| path.is_empty()) {
            return Err(InsertError::EmptyPath { index });
        }

        let count = entries.len();
        for (path, label) in entries {
            let node = self.extend(path);
            self.install(node, make_action(label));
        }

        debug!(paths = count, nodes = self.nodes.len(), "Inserted paths");
        Ok(count)
    }

    fn extend(&mut self, path: Vec<S>) -> NodeId {
        path.into_iter()
            .fold(NodeId::ROOT, |node, symbol| self.child_or_insert(node, symbol))
    }

    fn child_or_insert(&mut self, parent: NodeId, symbol: S) -> NodeId {
        if let Some(&id) = self.nodes[parent.0].children.get(&symbol) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::default());
        self.nodes[parent.0].children.insert(symbol, id);
        id
    }
}

impl<S: Clone, A> Trie<S, A> {
    /// Every terminal reachable from `from` together with its path relative to `from`.
    ///
    /// Same order as [`Trie::actions`].
    pub fn paths(&self, from: NodeId) -> Vec<(Vec<S>, &A)> {
        let mut out = Vec::new();
        let mut prefix = Vec::new();
        self.collect_paths(from, &mut prefix, &mut out);
        out
    }

    fn collect_paths<'t>(
        &'t self,
        id: NodeId,
        prefix: &mut Vec<S>,
        out: &mut Vec<(Vec<S>, &'t A)>,
    ) {
        let node = self.node(id);
        if let Some(action) = &node.action {
            out.push((prefix.clone(), action));
        }
        for (symbol, &child) in &node.children {
            prefix.push(symbol.clone());
            self.collect_paths(child, prefix, out);
            prefix.pop();
        }
    }
}

/// Iterator returned by [`Trie::actions`].
pub struct Actions<'t, S, A> {
    trie: &'t Trie<S, A>,
    stack: Vec<NodeId>,
}

impl<'t, S, A> Iterator for Actions<'t, S, A> {
    type Item = &'t A;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let node = self.trie.node(id);
            self.stack.extend(node.children.values().rev().copied());
            if let Some(action) = &node.action {
                return Some(action);
            }
        }
        None
    }
}
