//! # Report
//!
//! Human readable listing of a graph: a header line with the number of vertices and edges,
//! then every vertex in ascending order followed by its edges (most recently connected first),
//! each indented by two spaces and rendered via the [`Display`](std::fmt::Display) impl of [`Edge`].
//! ```text
//! Graph with 2 vertices and 1 edges:
//! vertex 0:
//!    0 ->  1 (10)
//! vertex 1:
//! ```
use std::io::Write;

use log::error;

use super::*;

/// A writer for the printed report
#[derive(Debug, Clone)]
pub struct ReportWriter {
    /// Prepended to every edge line
    indent: String,
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
        }
    }
}

impl ReportWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the string prepended to every edge line (two spaces by default)
    pub fn indent<S: Into<String>>(mut self, indent: S) -> Self {
        self.indent = indent.into();
        self
    }
}

impl<G> GraphWriter<G> for ReportWriter
where
    G: WeightedAdjacency + GraphEdgeOrder,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        writeln!(
            writer,
            "Graph with {} vertices and {} edges:",
            graph.number_of_nodes(),
            graph.number_of_edges()
        )?;

        for u in graph.vertices() {
            writeln!(writer, "vertex {u}:")?;
            for edge in graph.edges_of(u) {
                writeln!(writer, "{}{edge}", self.indent)?;
            }
        }

        Ok(())
    }
}

/// Trait for writing the report of a graph.
/// Shorthand for default settings.
pub trait ReportWrite {
    /// Tries to write the report to a writer
    fn try_write_report<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the report to the standard output stream.
    /// Failures are logged, not returned.
    fn print(&self) {
        let mut stdout = std::io::stdout().lock();
        if let Err(err) = self.try_write_report(&mut stdout).and_then(|_| stdout.flush()) {
            error!("Cannot print graph: {err}");
        }
    }
}

impl<G> ReportWrite for G
where
    G: WeightedAdjacency + GraphEdgeOrder,
{
    fn try_write_report<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        ReportWriter::default().try_write_graph(self, writer)
    }
}
