//! Walks through the graph API: builds a small graph, prints and exports it, edits it,
//! and finally loads and prints a graph from a file.
//!
//! Usage: `wdigraph [INPUT] [DOT_OUTPUT]` (defaults: `graph1.txt`, `test.dot`)
//!
//! Problems (rejected edges, unreadable files) are logged to stderr; set `RUST_LOG` to see more.

use std::{env, process::ExitCode};

use log::{LevelFilter, error};
use wdigraph::{io::*, prelude::*};

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let mut args = env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "graph1.txt".to_string());
    let dot_output = args.next().unwrap_or_else(|| "test.dot".to_string());

    let mut graph = Digraph::default();
    if let Err(err) = graph.initialize(4) {
        error!("{err}");
        return ExitCode::FAILURE;
    }

    for (tail, head, weight) in [(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 0, 0)] {
        if let Err(err) = graph.connect(tail, head, weight) {
            error!("Failed to connect: {tail} -> {head}: {err}");
        }
    }

    graph.print();
    graph.to_dot(&dot_output);

    graph.disconnect(2, 3);

    println!("Vertex 1 has an indegree of {}", graph.in_degree_of(1));
    println!("Vertex 1 has an outdegree of {}", graph.out_degree_of(1));

    graph.release();

    graph.build_from_file(&input);
    graph.print();

    graph.release();
    ExitCode::SUCCESS
}
