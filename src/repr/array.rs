use std::{iter::Rev, slice::Iter};

use super::*;

/// Adjacency list backed by a `Vec<Edge>`.
///
/// Edges are stored oldest first and iterated in reverse, so the observable order matches
/// [`LinkedEdgeList`] while prepending is an amortized `O(1)` push.
#[derive(Debug, Default, Clone)]
pub struct ArrEdgeList(Vec<Edge>);

impl EdgeList for ArrEdgeList {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn size(&self) -> NumEdges {
        NumEdges::try_from(self.0.len()).unwrap_or(NumEdges::MAX)
    }

    fn prepend(&mut self, edge: Edge) {
        self.0.push(edge);
    }

    fn first(&self) -> Option<&Edge> {
        self.0.last()
    }

    type EdgeIter<'a>
        = Rev<Iter<'a, Edge>>
    where
        Self: 'a;

    fn iter(&self) -> Self::EdgeIter<'_> {
        self.0.iter().rev()
    }

    fn remove_if<F: FnMut(&Edge) -> bool>(&mut self, mut predicate: F) -> NumEdges {
        let size_before = self.0.len();
        self.0.retain(|edge| !predicate(edge));
        (size_before - self.0.len()) as NumEdges
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}
