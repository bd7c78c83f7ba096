/*!
`wdigraph` is a small library for **w**eighted **di**rected **graph**s stored as per-vertex adjacency lists.

# Representation

We represent **vertices** as `u32` in the range `0..n` where `n` is the number of vertices in the graph.
The number of vertices is fixed when a graph is created.
An **edge** is a struct [`Edge`](crate::edge::Edge) holding a `tail`, a `head` and a non-negative `weight`.
Parallel edges are allowed; no implicit deduplication takes place.

Every vertex owns an adjacency list holding exactly the edges whose tail it is, ordered most recently
inserted first. See the [`repr`] module for the available lists:

- [`LinkedEdgeList`](crate::repr::LinkedEdgeList): an owned singly-linked chain
- [`ArrEdgeList`](crate::repr::ArrEdgeList): an array-backed list with the same observable order

# Usage

There are *2* submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, edges, errors, basic graph operations, and all representations,
- [`io`] includes handlers for reading graphs from text and writing them as text, dot files or a printed report.

```
use wdigraph::{io::*, prelude::*};

let mut graph = Digraph::new(4);
graph.connect(0, 1, 1).unwrap();
graph.connect(3, 0, 12).unwrap();
graph.disconnect(0, 1);

let mut report = Vec::new();
graph.try_write_report(&mut report).unwrap();
assert_eq!(
    String::from_utf8(report).unwrap(),
    "Graph with 4 vertices and 1 edges:\nvertex 0:\nvertex 1:\nvertex 2:\nvertex 3:\n   3 ->  0 (12)\n"
);
```

# Concurrency

Graphs are plain single-threaded values. Sharing one between threads requires external
synchronization, e.g. a single `Mutex` around the whole graph.
*/

pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;
pub use ops::*;

/// `wdigraph::prelude` includes definitions for vertices, edges and errors, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
