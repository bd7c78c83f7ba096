use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the vertex-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of vertices of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V in ascending order
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if `u` is a vertex of the graph, i.e. `u < n`
    fn has_vertex(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;
}

/// Getters for the weighted out-edges of every vertex.
///
/// Unlike most graph libraries, queries for vertices `u >= n` do not panic:
/// they behave as if `u` was an isolated vertex.
pub trait WeightedAdjacency: GraphNodeOrder + Sized {
    /// Returns an iterator over all edges with tail `u`, most recently inserted first.
    /// Empty if `u >= n`.
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_;

    /// Returns the number of edges with tail `u` (`0` if `u >= n`)
    fn out_degree_of(&self, u: Node) -> NumEdges;

    /// Returns the number of edges with head `u` (`0` if `u >= n`).
    /// Scans every edge of the graph.
    fn in_degree_of(&self, u: Node) -> NumEdges {
        if !self.has_vertex(u) {
            return 0;
        }

        self.edges().filter(|edge| edge.head == u).count() as NumEdges
    }

    /// Returns the in-degrees of all vertices in a single pass over the edges.
    /// Edges with a head `>= n` are not counted, matching [`WeightedAdjacency::in_degree_of`].
    fn in_degrees(&self) -> Vec<NumEdges> {
        let mut degrees = vec![0; self.len()];
        for edge in self.edges() {
            if let Some(degree) = degrees.get_mut(edge.head as usize) {
                *degree += 1;
            }
        }
        degrees
    }

    /// Returns an iterator over all edges: vertices in ascending order, the edges of each vertex
    /// most recently inserted first. This is the order used for printing and exporting.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| self.edges_of(u))
    }

    /// Returns an iterator over all edges in sorted order
    fn ordered_edges(&self) -> impl Iterator<Item = Edge> {
        let mut edges = self.edges().collect_vec();
        edges.sort();
        edges.into_iter()
    }
}

/// Trait to test the existence of edges in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if at least one edge `(tail, head)` of any weight exists.
    /// Returns *false* if `tail >= n`.
    fn has_edge(&self, tail: Node, head: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates a graph with `n` vertices and no edges.
    /// Returns [`GraphError::Allocation`] if the adjacency lists cannot be allocated.
    fn try_new(n: NumNodes) -> Result<Self, GraphError>;

    /// Creates a graph with `n` vertices and no edges.
    /// ** Panics if the allocation fails **
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing {
    /// Inserts the edge `(tail, head)` with the given weight in front of the adjacency list of `tail`.
    /// Parallel edges are allowed.
    ///
    /// Returns [`GraphError::InvalidVertex`] without modifying the graph if `tail >= n` or `head >= n`,
    /// and [`GraphError::EdgeLimit`] if the graph already holds `2^32 - 1` edges.
    fn connect(&mut self, tail: Node, head: Node, weight: Weight) -> Result<(), GraphError>;

    /// Connects all edges in the collection and stops at the first failure
    fn connect_all(
        &mut self,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<(), GraphError> {
        for edge in edges {
            let Edge { tail, head, weight } = edge.into();
            self.connect(tail, head, weight)?;
        }
        Ok(())
    }

    /// Removes all edges `(tail, head)` of any weight and returns the number of removed edges.
    /// A no-op if `tail >= n` or no such edge exists.
    fn disconnect(&mut self, tail: Node, head: Node) -> NumEdges;

    /// Drops all edges and adjacency lists and turns the graph into the empty graph with
    /// `0` vertices. Calling this on an already released graph is a no-op.
    fn release(&mut self);
}

/// A super trait for creating a graph from scratch from a set of edges and a number of vertices
pub trait GraphFromScratch {
    /// Create a graph from a number of vertices and an iterator over edges.
    /// ** Panics if an edge has an endpoint `>= n` **
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        if let Err(err) = graph.connect_all(edges) {
            panic!("{err}");
        }
        graph
    }
}
