use std::fmt::{self, Debug, Display, Write};

use crate::Node;

/// Edge weights are non-negative integers
pub type Weight = u32;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// A directed, weighted edge from `tail` to `head`.
///
/// An edge is always stored in the adjacency list of its `tail`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub tail: Node,
    pub head: Node,
    pub weight: Weight,
}

impl Display for Edge {
    /// Renders the edge as `tail -> head (weight)`.
    /// Both endpoints are right-aligned to two places and the weight is zero-padded to two digits,
    /// i.e. `Edge::new(2, 15, 7)` becomes `" 2 -> 15 (07)"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2} -> {:>2} ({:02})", self.tail, self.head, self.weight)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Creates a new edge
    pub const fn new(tail: Node, head: Node, weight: Weight) -> Self {
        Self { tail, head, weight }
    }

    /// Returns the pair `(tail, head)`, dropping the weight
    pub fn endpoints(&self) -> (Node, Node) {
        (self.tail, self.head)
    }

    /// Returns *true* if the edge goes from `tail` to `head` (weight is ignored)
    pub fn connects(&self, tail: Node, head: Node) -> bool {
        self.tail == tail && self.head == head
    }

    /// Returns *true* if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.tail == self.head
    }

    /// Renders the edge like [`Display`] but keeps at most `capacity - 1` bytes,
    /// mirroring a buffer of `capacity` bytes that also has to hold a terminator.
    /// A capacity of `0` (or `1`) results in an empty string.
    pub fn to_string_bounded(&self, capacity: usize) -> String {
        let mut writer = BoundedWriter {
            buf: String::new(),
            remaining: capacity.saturating_sub(1),
        };
        // An error only signals that the output was truncated
        let _ = write!(writer, "{self}");
        writer.buf
    }

    /// Writes the rendering of the edge into `buf` followed by a NUL-byte, truncating if needed.
    /// Never writes past `buf.len()` and returns the number of bytes written before the NUL-byte.
    pub fn write_bounded(&self, buf: &mut [u8]) -> usize {
        if buf.is_empty() {
            return 0;
        }

        let rendered = self.to_string_bounded(buf.len());
        let len = rendered.len();
        buf[..len].copy_from_slice(rendered.as_bytes());
        buf[len] = 0;
        len
    }
}

/// A `fmt::Write` sink that accepts at most `remaining` bytes and fails once it is full
struct BoundedWriter {
    buf: String,
    remaining: usize,
}

impl Write for BoundedWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if s.len() <= self.remaining {
            self.buf.push_str(s);
            self.remaining -= s.len();
            return Ok(());
        }

        let mut cut = self.remaining;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        self.buf.push_str(&s[..cut]);
        self.remaining = 0;
        Err(fmt::Error)
    }
}

impl From<(Node, Node, Weight)> for Edge {
    fn from(value: (Node, Node, Weight)) -> Self {
        Edge::new(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for Edge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        Edge::new(value.0, value.1, value.2)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}
