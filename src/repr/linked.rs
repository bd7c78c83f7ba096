use std::fmt::{self, Debug};

use super::*;

/// A single link of a [`LinkedEdgeList`]: an edge plus the owned rest of the chain.
pub struct EdgeLink {
    edge: Edge,
    next: Option<Box<EdgeLink>>,
}

impl EdgeLink {
    /// Allocates a new detached link
    pub fn new(edge: Edge) -> Box<Self> {
        Box::new(Self { edge, next: None })
    }

    /// Returns the edge stored in this link
    pub fn edge(&self) -> &Edge {
        &self.edge
    }

    /// Returns the successor of this link
    pub fn next(&self) -> Option<&EdgeLink> {
        self.next.as_deref()
    }

    /// Consumes the link and returns its edge
    pub fn into_edge(self) -> Edge {
        self.edge
    }
}

/// Adjacency list as an owned, singly-linked chain.
///
/// Every link is owned by its predecessor (the first by the list), so an edge is reachable from
/// exactly one place and is dropped exactly once: either when it is removed or when the list goes away.
#[derive(Default)]
pub struct LinkedEdgeList {
    first: Option<Box<EdgeLink>>,
}

impl LinkedEdgeList {
    /// Makes an already-allocated `link` the new first element.
    /// The former first element becomes its successor; any successors `link` still carried are dropped.
    pub fn prepend_link(&mut self, mut link: Box<EdgeLink>) {
        link.next = self.first.take();
        self.first = Some(link);
    }

    /// Detaches and returns the first link, handing its ownership to the caller
    pub fn pop_front(&mut self) -> Option<Box<EdgeLink>> {
        let mut link = self.first.take()?;
        self.first = link.next.take();
        Some(link)
    }

    /// Returns the first link of the chain
    pub fn first_link(&self) -> Option<&EdgeLink> {
        self.first.as_deref()
    }
}

/// Iterator over the edges of a [`LinkedEdgeList`]
pub struct LinkedEdgeIter<'a> {
    next: Option<&'a EdgeLink>,
}

impl<'a> Iterator for LinkedEdgeIter<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|link| {
            self.next = link.next();
            &link.edge
        })
    }
}

impl EdgeList for LinkedEdgeList {
    fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    fn size(&self) -> NumEdges {
        NumEdges::try_from(self.iter().count()).unwrap_or(NumEdges::MAX)
    }

    fn prepend(&mut self, edge: Edge) {
        self.prepend_link(EdgeLink::new(edge));
    }

    fn first(&self) -> Option<&Edge> {
        self.first_link().map(EdgeLink::edge)
    }

    type EdgeIter<'a>
        = LinkedEdgeIter<'a>
    where
        Self: 'a;

    fn iter(&self) -> Self::EdgeIter<'_> {
        LinkedEdgeIter {
            next: self.first_link(),
        }
    }

    fn remove_if<F: FnMut(&Edge) -> bool>(&mut self, mut predicate: F) -> NumEdges {
        // Unlink everything onto `kept` (reversing it), then reverse back
        let mut kept = LinkedEdgeList::default();
        let mut removed = 0;

        while let Some(link) = self.pop_front() {
            if predicate(&link.edge) {
                removed += 1;
            } else {
                kept.prepend_link(link);
            }
        }

        while let Some(link) = kept.pop_front() {
            self.prepend_link(link);
        }

        removed
    }

    fn clear(&mut self) {
        // Unlink iteratively: the default recursive drop could overflow the stack on long chains
        let mut next = self.first.take();
        while let Some(mut link) = next {
            next = link.next.take();
        }
    }
}

impl Drop for LinkedEdgeList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for LinkedEdgeList {
    fn clone(&self) -> Self {
        let edges: Vec<Edge> = self.iter().copied().collect();

        let mut list = Self::default();
        for edge in edges.into_iter().rev() {
            list.prepend(edge);
        }
        list
    }
}

impl Debug for LinkedEdgeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
