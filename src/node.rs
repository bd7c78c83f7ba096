/*!
# Node Representation

Vertices are plain `u32` ids in the range `0..n`. Nearly every graph fits into `2^32` vertices and
using `u32` over `usize` halves the memory of every stored endpoint.
*/

/// Vertices can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` vertices in a graph
pub type NumNodes = Node;
