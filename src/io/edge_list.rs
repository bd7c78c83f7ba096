//! # EdgeList
//!
//! The EdgeList-Format starts with the number of vertices `n`, followed by any number of
//! whitespace-separated triples `tail head weight`, each describing the edge `tail -> head`.
//! For example, a graph with two vertices and a single edge of weight `10` from `0` to `1` reads
//! ```text
//! 2
//! 0 1 10
//! ```
//!
//! The reader is a convenience loader, not a validator: a triple that contains an unparsable token,
//! an incomplete triple at the end of the input, and triples naming vertices `>= n` are logged and
//! skipped. Lines that are not valid UTF-8 are skipped as a whole. Only a missing or unparsable
//! vertex count, or an error of the underlying reader, makes reading fail.

use std::{
    fs::File,
    io::{BufRead, BufWriter, ErrorKind, Split, Write},
    path::Path,
    vec::IntoIter,
};

use itertools::Itertools;
use log::{debug, error, warn};

use super::*;

/// Best-effort parser for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Prefix of lines to ignore; empty to ignore nothing
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "c".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Reader with comment prefix `c`
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier. An empty identifier disables comments.
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G> GraphReader<G> for EdgeListReader
where
    G: GraphNew + GraphEdgeEditing,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut tokens = EdgeListTokens::new(reader, &self.comment_identifier);

        let header = tokens
            .next()
            .transpose()?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;
        let n: NumNodes = header.parse().map_err(|_| {
            io_error!(
                ErrorKind::InvalidData,
                format!("Invalid number of vertices: {header}")
            )
        })?;

        let mut graph = G::try_new(n).map_err(|err| io_error!(ErrorKind::OutOfMemory, err))?;

        let mut record = Vec::with_capacity(3);
        for token in tokens {
            record.push(token?);
            if record.len() == 3 {
                connect_record(&mut graph, &record);
                record.clear();
            }
        }

        if !record.is_empty() {
            debug!("Skipping incomplete edge record at end of input: {record:?}");
        }

        Ok(graph)
    }
}

/// Parses a `tail head weight` record and connects it, logging and skipping it on failure
fn connect_record<G: GraphEdgeEditing>(graph: &mut G, record: &[String]) {
    let parsed: std::result::Result<Vec<u32>, _> = record.iter().map(|t| t.parse()).collect();

    match parsed.as_deref() {
        Ok(&[tail, head, weight]) => {
            if let Err(err) = graph.connect(tail, head, weight) {
                warn!("Failed to connect: {tail} -> {head}: {err}");
            }
        }
        _ => debug!("Skipping malformed edge record: {record:?}"),
    }
}

/// Loading graphs from the EdgeList-Format with a default [`EdgeListReader`]
pub trait EdgeListRead: Sized {
    /// Parses a graph from `reader`
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Opens `path` and parses it
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }

    /// Replaces `self` by the graph stored in the file at `path`.
    ///
    /// Never fails: if the file cannot be opened or does not start with a vertex count,
    /// the problem is logged and `self` is left untouched.
    fn build_from_file<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();
        match Self::try_read_edge_list_file(path) {
            Ok(graph) => *self = graph,
            Err(err) => error!("Cannot build graph from {}: {err}", path.display()),
        }
    }
}

impl<G> EdgeListRead for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Splits the non-comment-lines of a reader into whitespace-separated tokens
struct EdgeListTokens<'a, R> {
    /// Raw source lines
    lines: Split<R>,
    /// Remaining tokens of the current line
    pending: IntoIter<String>,
    /// Comment prefix; empty disables comments
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> EdgeListTokens<'a, R> {
    fn new(reader: R, comment_identifier: &'a str) -> Self {
        Self {
            lines: reader.split(b'\n'),
            pending: Vec::new().into_iter(),
            comment_identifier,
        }
    }

    fn is_comment(&self, line: &str) -> bool {
        !self.comment_identifier.is_empty() && line.trim_start().starts_with(self.comment_identifier)
    }
}

impl<'a, R: BufRead> Iterator for EdgeListTokens<'a, R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.next() {
                return Some(Ok(token));
            }

            match self.lines.next()? {
                Err(err) => return Some(Err(err)),
                Ok(bytes) => {
                    let Ok(line) = String::from_utf8(bytes) else {
                        debug!("Skipping line that is not valid UTF-8");
                        continue;
                    };
                    if self.is_comment(&line) {
                        continue;
                    }

                    self.pending = line
                        .split_whitespace()
                        .map(str::to_string)
                        .collect_vec()
                        .into_iter();
                }
            }
        }
    }
}

/// A writer for the EdgeList-Format.
///
/// The edges of each vertex are written oldest first, so reading the output back
/// reproduces the adjacency lists in the same order.
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G> GraphWriter<G> for EdgeListWriter
where
    G: WeightedAdjacency,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", graph.number_of_nodes())?;

        for u in graph.vertices() {
            for Edge { tail, head, weight } in graph.edges_of(u).collect_vec().into_iter().rev() {
                writeln!(writer, "{tail} {head} {weight}")?;
            }
        }

        Ok(())
    }
}

/// Saving graphs in the EdgeList-Format
pub trait EdgeListWrite {
    /// Serializes the graph into `writer`
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Creates the file at `path`, serializes the graph into it and flushes
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(&mut writer)?;
        writer.flush()
    }
}

impl<G: WeightedAdjacency> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::{super::tests::TempPath, *};

    fn read(input: &str) -> Result<Digraph> {
        Digraph::try_read_edge_list(input.as_bytes())
    }

    #[test]
    fn reads_single_edge() {
        let graph = read("2\n0 1 10\n").unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges().collect_vec(), vec![Edge::new(0, 1, 10)]);
    }

    #[test]
    fn triples_may_span_lines() {
        let graph = read("3 0 1\n 5 1\n2 6\n\n2 0 7").unwrap();

        assert_eq!(
            graph.edges().collect_vec(),
            vec![Edge::new(0, 1, 5), Edge::new(1, 2, 6), Edge::new(2, 0, 7)]
        );
    }

    #[test]
    fn later_edges_come_first() {
        let graph = read("2\n0 1 1\n0 0 2\n0 1 3\n").unwrap();

        assert_eq!(
            graph.edges_of(0).map(|e| e.weight).collect_vec(),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn missing_or_invalid_header() {
        assert_eq!(read("").unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(read("c only a comment\n").unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(read("x\n0 1 1\n").unwrap_err().kind(), ErrorKind::InvalidData);
        assert_eq!(read("-3\n").unwrap_err().kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn skips_malformed_records() {
        let graph = read("3\n0 1 1\n0 x 2\n1 2 3\n").unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(1, 2));
    }

    #[test]
    fn skips_invalid_vertices() {
        let graph = read("2\n0 1 1\n5 0 1\n1 9 1\n1 0 2\n").unwrap();

        assert_eq!(
            graph.edges().collect_vec(),
            vec![Edge::new(0, 1, 1), Edge::new(1, 0, 2)]
        );
    }

    #[test]
    fn skips_incomplete_trailing_record() {
        let graph = read("2\n0 1 1\n1 0\n").unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn comments_are_ignored() {
        let graph = read("c header follows\n2\nc edges\n0 1 4\n").unwrap();
        assert_eq!(graph.edges().collect_vec(), vec![Edge::new(0, 1, 4)]);

        let graph: Digraph = EdgeListReader::new()
            .comment_identifier("#")
            .try_read_graph("# comment\n2\n1 0 3\n".as_bytes())
            .unwrap();
        assert_eq!(graph.edges().collect_vec(), vec![Edge::new(1, 0, 3)]);
    }

    #[test]
    fn skips_lines_with_invalid_utf8() {
        let graph = Digraph::try_read_edge_list(&b"3\n0 1 1\n\xff\xfe\n1 2 3\n"[..]).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(
            graph.edges().collect_vec(),
            vec![Edge::new(0, 1, 1), Edge::new(1, 2, 3)]
        );
    }

    #[test]
    fn windows_line_endings() {
        let graph = read("2\r\n0 1 4\r\n1 0 5\r\n").unwrap();
        assert_eq!(
            graph.edges().collect_vec(),
            vec![Edge::new(0, 1, 4), Edge::new(1, 0, 5)]
        );
    }

    #[test]
    fn header_only_graph() {
        let graph = read("4").unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn write_preserves_list_order() {
        let graph = ArrDigraph::from_edges(3, [(0, 1, 1), (0, 2, 2), (2, 0, 3), (0, 1, 4)]);

        let mut buffer = Vec::new();
        graph.try_write_edge_list(&mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "3\n0 1 1\n0 2 2\n0 1 4\n2 0 3\n");

        let read = ArrDigraph::try_read_edge_list(output.as_bytes()).unwrap();
        assert_eq!(read.edges().collect_vec(), graph.edges().collect_vec());
    }

    #[test]
    fn build_from_file() {
        let path = TempPath::new("graph1.txt");
        std::fs::write(&path.0, "2\n0 1 10\n").unwrap();

        let mut graph = Digraph::default();
        graph.build_from_file(&path.0);
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn build_from_file_degrades_gracefully() {
        let mut graph = Digraph::from_edges(2, [(0, 1, 1)]);

        graph.build_from_file(&TempPath::new("does-not-exist.txt").0);
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);

        let path = TempPath::new("bad-header.txt");
        std::fs::write(&path.0, "not a number\n").unwrap();
        graph.build_from_file(&path.0);
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }
}
