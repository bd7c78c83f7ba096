/*!
# Weighted Directed Graph

[`WeightedDigraph`] owns one [`EdgeList`] per vertex together with a running edge count.
The number of vertices is fixed once the graph is created; edges are added with
[`connect`](GraphEdgeEditing::connect) and removed with [`disconnect`](GraphEdgeEditing::disconnect).

```
use wdigraph::prelude::*;

let mut graph = Digraph::new(4);
graph.connect(0, 1, 1).unwrap();
graph.connect(1, 2, 2).unwrap();
assert!(graph.connect(4, 0, 0).is_err());

assert_eq!(graph.number_of_edges(), 2);
assert_eq!(graph.out_degree_of(1), 1);
assert_eq!(graph.in_degree_of(1), 1);
```
*/

use super::*;
use crate::testing::test_graph_ops;

/// A directed, weighted multigraph storing the outgoing edges of every vertex.
///
/// The [`Default`] value is the released graph with `0` vertices.
///
/// # Type parameters
/// - `L`: [`EdgeList`] implementation used for the adjacency lists.
#[derive(Debug, Clone, Default)]
pub struct WeightedDigraph<L>
where
    L: EdgeList,
{
    lists: Vec<L>,
    num_edges: NumEdges,
}

/// Weighted digraph using singly-linked adjacency lists
pub type Digraph = WeightedDigraph<LinkedEdgeList>;

/// Weighted digraph using array-backed adjacency lists
pub type ArrDigraph = WeightedDigraph<ArrEdgeList>;

impl<L: EdgeList> WeightedDigraph<L> {
    /// Assembles a graph from already populated adjacency lists, one per vertex.
    /// Every edge is expected to sit in the list of its tail; this is not checked.
    /// The edge count saturates at `NumEdges::MAX`.
    pub fn from_lists(lists: Vec<L>) -> Self {
        let num_edges = lists
            .iter()
            .map(EdgeList::size)
            .fold(0, NumEdges::saturating_add);
        Self { lists, num_edges }
    }

    /// Replaces the graph by an empty graph with `n` vertices.
    ///
    /// On failure the graph is left released, i.e. empty with `0` vertices.
    pub fn initialize(&mut self, n: NumNodes) -> Result<(), GraphError> {
        self.release();
        *self = Self::try_new(n)?;
        Ok(())
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> NumNodes {
        self.number_of_nodes()
    }

    /// Number of edges
    pub fn edge_count(&self) -> NumEdges {
        self.num_edges
    }

    /// Returns the adjacency list of `u` or `None` if `u >= n`
    pub fn adjacency_list(&self, u: Node) -> Option<&L> {
        self.lists.get(u as usize)
    }

    /// Returns all adjacency lists indexed by vertex
    pub fn adjacency_lists(&self) -> &[L] {
        &self.lists
    }

    /// Returns *true* if the stored edge count matches the sizes of all adjacency lists
    /// and every edge sits in the list of its tail.
    /// Walks the whole graph.
    pub fn is_consistent(&self) -> bool {
        let total: NumEdges = self.lists.iter().map(EdgeList::size).sum();

        total == self.num_edges
            && self
                .lists
                .iter()
                .enumerate()
                .all(|(u, list)| list.iter().all(|edge| edge.tail as usize == u))
    }
}

impl<L: EdgeList> GraphNodeOrder for WeightedDigraph<L> {
    fn number_of_nodes(&self) -> NumNodes {
        self.lists.len() as NumNodes
    }
}

impl<L: EdgeList> GraphEdgeOrder for WeightedDigraph<L> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<L: EdgeList> WeightedAdjacency for WeightedDigraph<L> {
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.lists
            .get(u as usize)
            .into_iter()
            .flat_map(|list| list.iter().copied())
    }

    fn out_degree_of(&self, u: Node) -> NumEdges {
        self.lists.get(u as usize).map_or(0, EdgeList::size)
    }
}

impl<L: EdgeList> AdjacencyTest for WeightedDigraph<L> {
    fn has_edge(&self, tail: Node, head: Node) -> bool {
        self.lists
            .get(tail as usize)
            .is_some_and(|list| list.contains(tail, head))
    }
}

impl<L: EdgeList> GraphNew for WeightedDigraph<L> {
    fn try_new(n: NumNodes) -> Result<Self, GraphError> {
        let mut lists = Vec::new();
        lists
            .try_reserve_exact(n as usize)
            .map_err(|_| GraphError::Allocation { vertex_count: n })?;
        lists.resize_with(n as usize, L::new);

        Ok(Self {
            lists,
            num_edges: 0,
        })
    }

    fn new(n: NumNodes) -> Self {
        Self {
            lists: (0..n).map(|_| L::new()).collect(),
            num_edges: 0,
        }
    }
}

impl<L: EdgeList> GraphEdgeEditing for WeightedDigraph<L> {
    fn connect(&mut self, tail: Node, head: Node, weight: Weight) -> Result<(), GraphError> {
        for vertex in [tail, head] {
            if !self.has_vertex(vertex) {
                return Err(GraphError::InvalidVertex {
                    vertex,
                    vertex_count: self.number_of_nodes(),
                });
            }
        }

        let num_edges = self.num_edges.checked_add(1).ok_or(GraphError::EdgeLimit)?;

        self.lists[tail as usize].prepend(Edge::new(tail, head, weight));
        self.num_edges = num_edges;
        Ok(())
    }

    fn disconnect(&mut self, tail: Node, head: Node) -> NumEdges {
        let Some(list) = self.lists.get_mut(tail as usize) else {
            return 0;
        };

        let removed = list.remove_if(|edge| edge.head == head);
        self.num_edges -= removed;
        removed
    }

    fn release(&mut self) {
        // Dropping the lists drops every edge they own
        self.lists = Vec::new();
        self.num_edges = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn initialize_sets_counts() {
        let mut graph = Digraph::default();
        assert_eq!(graph.vertex_count(), 0);

        graph.initialize(5).unwrap();
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 0);
        assert!(
            graph
                .adjacency_lists()
                .iter()
                .all(|list| list.is_empty())
        );
    }

    #[test]
    fn initialize_replaces_previous_content() {
        let mut graph = Digraph::new(3);
        graph.connect(0, 2, 1).unwrap();

        graph.initialize(2).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn driver_scenario() {
        let mut graph = Digraph::new(4);
        for (tail, head, weight) in [(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 0, 0)] {
            assert!(graph.connect(tail, head, weight).is_ok());
        }

        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.in_degree_of(1), 1);
        assert_eq!(graph.out_degree_of(1), 1);

        assert_eq!(graph.disconnect(2, 3), 1);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.out_degree_of(2), 0);
        assert!(graph.is_consistent());
    }

    #[test]
    fn connect_prepends() {
        let mut graph = Digraph::new(3);
        graph.connect(0, 1, 1).unwrap();
        graph.connect(0, 2, 2).unwrap();
        graph.connect(0, 1, 3).unwrap();

        assert_eq!(
            graph.edges_of(0).collect_vec(),
            vec![Edge::new(0, 1, 3), Edge::new(0, 2, 2), Edge::new(0, 1, 1)]
        );
        assert_eq!(
            graph.adjacency_list(0).and_then(EdgeList::first),
            Some(&Edge::new(0, 1, 3))
        );
    }

    #[test]
    fn connect_rejects_invalid_vertices() {
        let mut graph = Digraph::new(2);

        assert_eq!(
            graph.connect(2, 0, 1),
            Err(GraphError::InvalidVertex {
                vertex: 2,
                vertex_count: 2
            })
        );
        assert_eq!(
            graph.connect(0, 7, 1),
            Err(GraphError::InvalidVertex {
                vertex: 7,
                vertex_count: 2
            })
        );
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.edges().next().is_none());

        let mut released = Digraph::default();
        assert!(released.connect(0, 0, 0).is_err());
    }

    #[test]
    fn disconnect_removes_parallel_edges_only() {
        let mut graph = Digraph::new(3);
        graph.connect(0, 1, 1).unwrap();
        graph.connect(0, 1, 2).unwrap();
        graph.connect(0, 2, 3).unwrap();
        graph.connect(1, 0, 4).unwrap();

        assert_eq!(graph.disconnect(0, 1), 2);
        assert!(!graph.has_edge(0, 1));
        assert!(graph.has_edge(0, 2));
        assert!(graph.has_edge(1, 0));
        assert_eq!(graph.edge_count(), 2);

        assert_eq!(graph.disconnect(0, 1), 0);
        assert_eq!(graph.disconnect(5, 1), 0);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.is_consistent());
    }

    #[test]
    fn degrees_of_missing_vertices_are_zero() {
        let graph = Digraph::from_edges(2, [(0, 1, 1), (1, 1, 1)]);

        assert_eq!(graph.in_degree_of(1), 2);
        assert_eq!(graph.in_degree_of(2), 0);
        assert_eq!(graph.out_degree_of(2), 0);
        assert_eq!(graph.in_degrees(), vec![0, 2]);
        assert!(graph.has_self_loop(1));
    }

    #[test]
    fn release_is_idempotent() {
        let mut graph = Digraph::new(3);
        graph.connect(0, 1, 1).unwrap();
        graph.connect(2, 1, 1).unwrap();

        graph.release();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.adjacency_lists().is_empty());

        graph.release();
        assert_eq!(graph.vertex_count(), 0);
        assert!(graph.is_consistent());
    }

    #[test]
    fn in_degrees_ignore_out_of_range_heads() {
        let mut list = LinkedEdgeList::default();
        list.prepend(Edge::new(0, 5, 1));
        list.prepend(Edge::new(0, 0, 2));
        let graph = Digraph::from_lists(vec![list]);

        assert_eq!(graph.in_degree_of(0), 1);
        assert_eq!(graph.in_degrees(), vec![1]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn connect_rejects_edges_beyond_limit() {
        let mut graph = Digraph::new(2);
        graph.num_edges = NumEdges::MAX;

        assert_eq!(graph.connect(0, 1, 1), Err(GraphError::EdgeLimit));
        assert_eq!(graph.edge_count(), NumEdges::MAX);
        assert!(graph.adjacency_list(0).is_some_and(EdgeList::is_empty));

        graph.num_edges = NumEdges::MAX - 1;
        assert!(graph.connect(0, 1, 1).is_ok());
        assert_eq!(graph.edge_count(), NumEdges::MAX);
    }

    #[test]
    fn graph_from_hand_built_lists() {
        let mut list = LinkedEdgeList::default();
        list.prepend_link(EdgeLink::new(Edge::new(0, 1, 1)));

        let mut graph = Digraph::from_lists(vec![list, LinkedEdgeList::default()]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.out_degree_of(0), 1);
        assert_eq!(graph.out_degree_of(1), 0);

        graph.connect(0, 1, 2).unwrap();
        let first = graph.adjacency_list(0).and_then(EdgeList::first).unwrap();
        assert_eq!(first.endpoints(), (0, 1));
        assert_eq!(graph.edge_count(), 2);
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_digraph,
    Digraph,
    (
        GraphNew,
        WeightedAdjacency,
        AdjacencyTest,
        GraphEdgeEditing,
        EdgeListIo
    )
);

test_graph_ops!(
    test_arr_digraph,
    ArrDigraph,
    (
        GraphNew,
        WeightedAdjacency,
        AdjacencyTest,
        GraphEdgeEditing,
        EdgeListIo
    )
);
