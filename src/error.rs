use thiserror::Error;

use crate::{Node, NumEdges, NumNodes};

/// Errors raised when building or editing a graph.
///
/// File-level problems are reported as [`std::io::Error`] by the [`io`](crate::io) module instead.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GraphError {
    /// Memory for the adjacency lists could not be reserved
    #[error("Could not allocate adjacency lists for {vertex_count} vertices")]
    Allocation { vertex_count: NumNodes },
    /// An endpoint does not exist in the graph
    #[error("Vertex {vertex} does not exist in a graph with {vertex_count} vertices")]
    InvalidVertex { vertex: Node, vertex_count: NumNodes },
    /// The graph already holds `NumEdges::MAX` edges
    #[error("Graph cannot hold more than {} edges", NumEdges::MAX)]
    EdgeLimit,
}
