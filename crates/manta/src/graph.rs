//! Adjacency-list graph container.
//!
//! A node maps to the ordered sequence of adjacency entries appended to it.
//! Insertion order is observable: `nodes()` and `neighbors()` replay the
//! order in which nodes and edges were added, and every algorithm in
//! [`crate::alg`] inherits that order.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Caller-supplied node identifier.
///
/// Blanket-implemented; any cloneable, hashable, comparable type works
/// (`&str`, `String`, integers, ...). `Debug` is required so absent nodes
/// can be named in errors and log events.
pub trait NodeId: Clone + Eq + Hash + fmt::Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + fmt::Debug {}

/// Directedness of a single `add_edge` / `remove_edge` call.
///
/// An undirected edge is stored as two mirrored entries, added and removed
/// together. Directedness is a property of each call, not of the graph, so
/// mixed graphs are expressible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeKind {
    #[default]
    Undirected,
    Directed,
}

/// One entry in a neighbor list: the target node plus the edge weight.
///
/// The unweighted container uses `W = ()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjacency<I, W = ()> {
    pub to: I,
    pub weight: W,
}

/// Insertion-ordered adjacency-list graph.
///
/// `Graph<I>` is the unweighted container; `Graph<I, W>` carries a weight of
/// type `W` on every adjacency entry. Both share the same mutation contract;
/// no arithmetic is ever performed on weights here.
///
/// Parallel edges are not deduplicated and self-loops are not rejected:
/// repeated `add_edge` calls append repeated entries, exactly as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph<I, W = ()>
where
    I: NodeId,
    W: Clone,
{
    adj: IndexMap<I, Vec<Adjacency<I, W>>>,
}

impl<I, W> Graph<I, W>
where
    I: NodeId,
    W: Clone,
{
    pub fn new() -> Self {
        Self {
            adj: IndexMap::new(),
        }
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adj: IndexMap::with_capacity(nodes),
        }
    }

    /// Adds a node with an empty neighbor list. Idempotent; returns whether
    /// the node was actually inserted.
    pub fn add_node(&mut self, id: I) -> bool {
        if self.adj.contains_key(&id) {
            return false;
        }
        self.adj.insert(id, Vec::new());
        true
    }

    pub fn has_node(&self, id: &I) -> bool {
        self.adj.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Node identifiers in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &I> {
        self.adj.keys()
    }

    /// Number of stored adjacency entries. An undirected edge contributes
    /// two, a directed edge one.
    pub fn edge_count(&self) -> usize {
        self.adj.values().map(Vec::len).sum()
    }

    /// Ordered neighbor entries of `id`, or [`Error::NodeNotFound`] if the
    /// node was never added.
    pub fn neighbors(&self, id: &I) -> Result<&[Adjacency<I, W>]> {
        self.adj
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::node_not_found(id))
    }

    /// Tolerant sibling of [`Graph::neighbors`] for traversal internals:
    /// absent nodes read as having no neighbors.
    pub(crate) fn adjacency(&self, id: &I) -> &[Adjacency<I, W>] {
        self.adj.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Appends an edge from `u` to `v` carrying `weight`, creating both
    /// endpoints as needed. `Undirected` also appends the mirrored entry to
    /// `v`'s list; the two entries share the weight.
    pub fn add_edge_with_weight(&mut self, u: I, v: I, weight: W, kind: EdgeKind) {
        self.add_node(u.clone());
        self.add_node(v.clone());
        match kind {
            EdgeKind::Directed => {
                if let Some(list) = self.adj.get_mut(&u) {
                    list.push(Adjacency { to: v, weight });
                }
            }
            EdgeKind::Undirected => {
                if let Some(list) = self.adj.get_mut(&u) {
                    list.push(Adjacency {
                        to: v.clone(),
                        weight: weight.clone(),
                    });
                }
                if let Some(list) = self.adj.get_mut(&v) {
                    list.push(Adjacency { to: u, weight });
                }
            }
        }
    }

    /// Removes the first entry for `v` in `u`'s list; `Undirected` also
    /// removes the first entry for `u` in `v`'s list. Best-effort: absent
    /// nodes or edges are a no-op, never an error.
    pub fn remove_edge(&mut self, u: &I, v: &I, kind: EdgeKind) {
        Self::remove_first_entry(&mut self.adj, u, v);
        if kind == EdgeKind::Undirected {
            Self::remove_first_entry(&mut self.adj, v, u);
        }
    }

    fn remove_first_entry(adj: &mut IndexMap<I, Vec<Adjacency<I, W>>>, from: &I, to: &I) {
        if let Some(list) = adj.get_mut(from) {
            if let Some(pos) = list.iter().position(|a| a.to == *to) {
                list.remove(pos);
            }
        }
    }

    /// Deletes `id`'s own entry and purges every occurrence of `id` from
    /// every remaining neighbor list, weighted entries included. Returns
    /// whether the node existed; removal of an absent node is a no-op.
    pub fn remove_node(&mut self, id: &I) -> bool {
        if self.adj.shift_remove(id).is_none() {
            return false;
        }
        for list in self.adj.values_mut() {
            list.retain(|a| a.to != *id);
        }
        true
    }

    /// Whether at least one entry `u -> v` is stored.
    pub fn has_edge(&self, u: &I, v: &I) -> bool {
        self.adjacency(u).iter().any(|a| a.to == *v)
    }

    /// Weight of the first stored entry `u -> v`, if any.
    pub fn edge_weight(&self, u: &I, v: &I) -> Option<&W> {
        self.adjacency(u).iter().find(|a| a.to == *v).map(|a| &a.weight)
    }

    pub fn clear(&mut self) {
        self.adj.clear();
    }
}

impl<I> Graph<I>
where
    I: NodeId,
{
    /// Unweighted [`Graph::add_edge_with_weight`].
    pub fn add_edge(&mut self, u: I, v: I, kind: EdgeKind) {
        self.add_edge_with_weight(u, v, (), kind);
    }
}

impl<I, W> Default for Graph<I, W>
where
    I: NodeId,
    W: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
