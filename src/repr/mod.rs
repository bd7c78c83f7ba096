/*!
# Representations

A [`WeightedDigraph`] stores one [`EdgeList`] per vertex: the list at index `u` holds exactly the
edges with tail `u`, ordered most-recently-inserted first. That order is observable since printing
and exporting walk the lists front to back.

## Provided Edge Lists

- [`LinkedEdgeList`]: an owned, singly-linked chain of boxed links.
- [`ArrEdgeList`]: a `Vec<Edge>` that appends and iterates in reverse.

Both provide the same observable behaviour; the linked variant additionally allows moving
already-allocated links in and out of a list.
*/

use crate::*;

mod array;
mod digraph;
mod linked;

pub use array::*;
pub use digraph::*;
pub use linked::*;

/// Trait for the outgoing edges of a single vertex.
///
/// Lists are plain values and usable on their own, without a surrounding graph.
pub trait EdgeList: Default + Clone {
    /// Creates an empty list
    fn new() -> Self {
        Self::default()
    }

    /// Returns *true* if the list holds no edges. Runs in constant time.
    fn is_empty(&self) -> bool;

    /// Returns the number of edges in the list, saturating at `NumEdges::MAX`.
    /// May traverse the whole list.
    fn size(&self) -> NumEdges;

    /// Inserts `edge` as the new first element of the list
    fn prepend(&mut self, edge: Edge);

    /// Returns the first (i.e. most recently prepended) edge if the list is not empty
    fn first(&self) -> Option<&Edge>;

    type EdgeIter<'a>: Iterator<Item = &'a Edge> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all edges, most recently prepended first
    fn iter(&self) -> Self::EdgeIter<'_>;

    /// Returns *true* if some edge goes from `tail` to `head`. The weight is ignored.
    fn contains(&self, tail: Node, head: Node) -> bool {
        self.iter().any(|edge| edge.connects(tail, head))
    }

    /// Removes (and drops) all edges matching `predicate` while keeping the order of the others.
    /// Returns the number of removed edges.
    fn remove_if<F: FnMut(&Edge) -> bool>(&mut self, predicate: F) -> NumEdges;

    /// Removes all edges from the list
    fn clear(&mut self);
}
