//! # Dot
//!
//! Export for [GraphViz](https://graphviz.org/). Only a bare digraph with one `tail -> head`
//! statement per line is emitted.
//! With the default settings the graph with the single edge `0 -> 1` is written as
//! ```text
//! digraph {
//! 0 -> 1
//! }
//! ```
//!
//! Weights are not exported unless requested via [`DotWriter::weights`], in which case each
//! edge gets a `[label=weight]` attribute. Edges are written in the order of
//! [`WeightedAdjacency::edges`].
use std::io::Write;

use log::error;

use super::*;

/// Exports graphs as GraphViz digraphs
#[derive(Debug, Clone, Default)]
pub struct DotWriter {
    /// Increment vertices by 1 before writing
    inc_nodes: bool,
    /// Prefix of a vertex (empty by default)
    prefix: String,
    /// Attach the weight of each edge as label
    weights: bool,
}

impl DotWriter {
    /// Writer with plain 0-indexed vertices and no labels
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, vertices are written 1-indexed
    pub fn inc_nodes(mut self, inc_nodes: bool) -> Self {
        self.inc_nodes = inc_nodes;
        self
    }

    /// Set the prefix of a vertex (empty by default). A prefix is needed if the output is to be
    /// combined with other graphs in a single file.
    pub fn node_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
        self
    }

    /// If *true*, every edge is labelled with its weight
    pub fn weights(mut self, weights: bool) -> Self {
        self.weights = weights;
        self
    }

    /// Writes the opening bracket of the graph
    pub fn start_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "digraph {{")
    }

    /// Formats a vertex depending on `self.prefix, self.inc_nodes`
    fn format_node(&self, u: Node) -> String {
        let u = u as u64 + self.inc_nodes as u64;
        format!("{}{u}", self.prefix)
    }

    /// Writes an iterator of edges to `writer`, one per line
    pub fn write_edges<W, I>(&self, writer: &mut W, edges: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Edge>,
    {
        for edge in edges {
            write!(
                writer,
                "{} -> {}",
                self.format_node(edge.tail),
                self.format_node(edge.head)
            )?;

            if self.weights {
                write!(writer, " [label={}]", edge.weight)?;
            }

            writeln!(writer)?;
        }
        Ok(())
    }

    /// Writes the closing bracket
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }
}

impl<G> GraphWriter<G> for DotWriter
where
    G: WeightedAdjacency,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        self.start_graph(&mut writer)?;
        self.write_edges(&mut writer, graph.edges())?;
        self.finish_graph(&mut writer)
    }
}

/// Exporting graphs with a default [`DotWriter`]
pub trait DotWrite {
    /// Writes the digraph into `writer`
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Creates the file at `path` and writes the digraph into it
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(&mut writer)?;
        writer.flush()
    }

    /// Writes the graph to the file at `path`.
    ///
    /// Never fails: if the file cannot be created or written, the problem is logged.
    fn to_dot<P>(&self, path: P)
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if let Err(err) = self.try_write_dot_file(path) {
            error!("Cannot write dot file {}: {err}", path.display());
        }
    }
}

impl<G> DotWrite for G
where
    G: WeightedAdjacency,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}
