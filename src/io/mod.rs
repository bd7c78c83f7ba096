/*!
# IO

Utilities for reading and writing weighted digraphs from and to text.

## Input Formats

- **EdgeList**: the vertex count followed by whitespace-separated `tail head weight` triples.
  Reading is best-effort: malformed or out-of-range records are logged and skipped.

## Output Formats

In addition to the above format, the following are supported for writing:
- **Dot**: a minimal subset of the [DOT language](https://graphviz.org/doc/info/lang.html) of
  [GraphViz](https://graphviz.org/), listing one `tail -> head` line per edge.
- **Report**: the human readable listing also produced by [`ReportWrite::print`].

## Traits

Two layers of traits:
- [`GraphReader`] and [`GraphWriter`] are implemented by the configurable reader/writer structs of each format.
- [`GraphRead`] and [`GraphWrite`] are implemented by every graph and pick the format at runtime via [`FileFormat`].
*/

pub mod dot;
pub mod edge_list;
pub mod report;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
    str::FromStr,
};

use crate::prelude::*;

pub use dot::*;
pub use edge_list::*;
pub use report::*;

/// The text formats known to this module. Parsed case-insensitively from
/// `edgelist`/`txt`, `dot`/`gv` and `report`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Vertex count followed by `tail head weight` triples
    EdgeList,
    /// `digraph { .. }` with one `tail -> head` statement per edge
    Dot,
    /// Human readable listing of all adjacency lists
    Report,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "edgelist" | "txt" => Ok(FileFormat::EdgeList),
            "dot" | "gv" => Ok(FileFormat::Dot),
            "report" => Ok(FileFormat::Report),
            _ => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}")
            )),
        }
    }
}

/// A configured parser producing graphs of type `G`.
pub trait GraphReader<G> {
    /// Parses a graph from `reader`.
    ///
    /// # Errors
    /// Fails on IO errors and on input that does not describe a graph at all.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Opens `path` and parses it with [`GraphReader::try_read_graph`].
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// A configured serializer for graphs of type `G`.
pub trait GraphWriter<G> {
    /// Serializes `graph` into `writer`. The writer is not flushed.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Creates (or truncates) the file at `path`, serializes `graph` into it and flushes.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()
    }
}

/// Reading with the format chosen at runtime. Only [`FileFormat::EdgeList`] can be read.
pub trait GraphRead: Sized {
    /// Parses a graph in `format` from `reader`.
    ///
    /// # Errors
    /// `InvalidInput` for write-only formats, otherwise as [`GraphReader::try_read_graph`].
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead;

    /// Opens `path` and parses it with [`GraphRead::try_from_reader`].
    fn try_from_file<P>(path: P, format: FileFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format)
    }
}

impl<G> GraphRead for G
where
    G: EdgeListRead,
{
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead,
    {
        raise_error_unless!(
            format == FileFormat::EdgeList,
            ErrorKind::InvalidInput,
            format!("{format:?} is write-only")
        );
        Self::try_read_edge_list(reader)
    }
}

/// Writing with the format chosen at runtime, using the default settings of each writer.
pub trait GraphWrite {
    /// Serializes the graph in `format` into `writer`.
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Creates the file at `path` and serializes the graph in `format` into it.
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_to_writer(&mut writer, format)?;
        writer.flush()
    }
}

impl<G> GraphWrite for G
where
    G: EdgeListWrite + DotWrite + ReportWrite,
{
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::EdgeList => self.try_write_edge_list(writer),
            FileFormat::Dot => self.try_write_dot(writer),
            FileFormat::Report => self.try_write_report(writer),
        }
    }
}

/// `std::io::Error` of the given kind and message
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Returns early with an `std::io::Error` unless `$cond` holds
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

use io_error;
use raise_error_unless;

#[cfg(test)]
pub(crate) mod tests {
    use std::{
        path::PathBuf,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use itertools::Itertools;

    use super::*;

    /// Returns a fresh path in the temp dir; the file is removed when the guard is dropped
    pub(crate) struct TempPath(pub PathBuf);

    impl TempPath {
        pub(crate) fn new(name: &str) -> Self {
            static COUNTER: AtomicUsize = AtomicUsize::new(0);
            let id = COUNTER.fetch_add(1, Ordering::Relaxed);

            Self(std::env::temp_dir().join(format!(
                "wdigraph-{}-{id}-{name}",
                std::process::id()
            )))
        }
    }

    impl Drop for TempPath {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    #[test]
    fn file_format_from_str() {
        assert_eq!("dot".parse::<FileFormat>().unwrap(), FileFormat::Dot);
        assert_eq!("EdgeList".parse::<FileFormat>().unwrap(), FileFormat::EdgeList);
        assert_eq!("report".parse::<FileFormat>().unwrap(), FileFormat::Report);
        assert!("metis".parse::<FileFormat>().is_err());
    }

    #[test]
    fn read_by_format() {
        let graph = Digraph::try_from_reader("2\n0 1 10\n".as_bytes(), FileFormat::EdgeList).unwrap();
        assert_eq!(graph.number_of_edges(), 1);

        let err = Digraph::try_from_reader("2\n".as_bytes(), FileFormat::Dot).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn write_by_format() {
        let graph = Digraph::from_edges(2, [(0, 1, 10)]);

        let mut dot = Vec::new();
        graph.try_write_to_writer(&mut dot, FileFormat::Dot).unwrap();
        assert_eq!(String::from_utf8(dot).unwrap(), "digraph {\n0 -> 1\n}\n");

        let mut report = Vec::new();
        graph
            .try_write_to_writer(&mut report, FileFormat::Report)
            .unwrap();
        assert!(String::from_utf8(report).unwrap().starts_with("Graph with 2 vertices"));

        let mut edge_list = Vec::new();
        graph
            .try_write_to_writer(&mut edge_list, FileFormat::EdgeList)
            .unwrap();
        assert_eq!(String::from_utf8(edge_list).unwrap(), "2\n0 1 10\n");
    }

    #[test]
    fn write_and_read_file_by_format() {
        let path = TempPath::new("format.txt");
        let graph = Digraph::from_edges(3, [(0, 1, 4), (2, 1, 5), (0, 2, 6)]);

        graph.try_write_to_file(&path.0, FileFormat::EdgeList).unwrap();
        let read = Digraph::try_from_file(&path.0, FileFormat::EdgeList).unwrap();

        assert_eq!(read.edges().collect_vec(), graph.edges().collect_vec());
    }
}
