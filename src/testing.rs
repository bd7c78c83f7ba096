/// Generates the common test-suite for a graph representation.
///
/// Every graph is checked against a reference model: one `Vec<Edge>` per vertex,
/// most recently connected edge first.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{io::*, prelude::*, testing::test_graph_ops};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates `m` random edges with endpoints in `0..n + invalid`,
            /// including parallel edges and self-loops
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges, invalid: NumNodes) -> Vec<Edge> {
                (0..m)
                    .map(|_| {
                        Edge::new(
                            rng.random_range(0..n + invalid),
                            rng.random_range(0..n + invalid),
                            rng.random_range(0..100),
                        )
                    })
                    .collect_vec()
            }

            /// Connects random edges and returns the graph with its reference model
            fn random_graph<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> ($graph, Vec<Vec<Edge>>) {
                let mut graph = <$graph>::new(n);
                let mut model: Vec<Vec<Edge>> = vec![Vec::new(); n as usize];

                for edge in random_edges(rng, n, m, 2) {
                    let valid = edge.tail < n && edge.head < n;
                    let before = graph.number_of_edges();

                    assert_eq!(graph.connect(edge.tail, edge.head, edge.weight).is_ok(), valid);

                    if valid {
                        model[edge.tail as usize].insert(0, edge);
                        assert_eq!(graph.number_of_edges(), before + 1);
                        assert!(graph.has_edge(edge.tail, edge.head));
                    } else {
                        assert_eq!(graph.number_of_edges(), before);
                    }
                }

                (graph, model)
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                for graph in [<$graph>::new(n), <$graph>::try_new(n).unwrap()] {
                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert!(graph.edges().next().is_none());
                    assert!(graph.is_consistent());
                }
            }
        }
    };
    ($graph:ident: WeightedAdjacency) => {
        #[test]
        fn test_weighted_adjacency() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m in [n * 2, n * 5, n * 10] {
                    for _ in 0..5 {
                        let (graph, model) = random_graph(rng, n, m as NumEdges);

                        for u in 0..n {
                            assert_eq!(graph.edges_of(u).collect_vec(), model[u as usize]);
                            assert_eq!(graph.out_degree_of(u), model[u as usize].len() as NumEdges);
                            assert_eq!(
                                graph.in_degree_of(u),
                                model.iter().flatten().filter(|e| e.head == u).count() as NumEdges
                            );
                        }

                        for u in [n, n + 1, Node::MAX] {
                            assert_eq!(graph.out_degree_of(u), 0);
                            assert_eq!(graph.in_degree_of(u), 0);
                            assert!(graph.edges_of(u).next().is_none());
                        }

                        assert_eq!(
                            graph.in_degrees(),
                            graph.vertices().map(|u| graph.in_degree_of(u)).collect_vec()
                        );
                        assert_eq!(graph.edges().collect_vec(), model.concat());
                        assert_eq!(graph.number_of_edges(), model.concat().len() as NumEdges);
                        assert_eq!(
                            graph.ordered_edges().collect_vec(),
                            model.concat().into_iter().sorted().collect_vec()
                        );
                        assert!(graph.is_consistent());
                    }
                }
            }
        }
    };
    ($graph:ident: AdjacencyTest) => {
        #[test]
        fn test_adjacency_test() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [10 as NumNodes, 20] {
                let (graph, model) = random_graph(rng, n, n * 3);

                for u in 0..n {
                    for v in 0..n {
                        assert_eq!(
                            graph.has_edge(u, v),
                            model[u as usize].iter().any(|e| e.head == v)
                        );
                    }
                    assert!(!graph.has_edge(u, n));
                    assert!(!graph.has_edge(n, u));
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m in [n * 2, n * 5, n * 10] {
                    for _ in 0..5 {
                        let (mut graph, mut model) = random_graph(rng, n, m as NumEdges);

                        for _ in 0..(m / 2) {
                            let tail = rng.random_range(0..n + 2);
                            let head = rng.random_range(0..n + 2);
                            let before = graph.number_of_edges();

                            let expected = model.get_mut(tail as usize).map_or(0, |list| {
                                let size_before = list.len();
                                list.retain(|e| e.head != head);
                                (size_before - list.len()) as NumEdges
                            });

                            assert_eq!(graph.disconnect(tail, head), expected);
                            assert_eq!(graph.number_of_edges(), before - expected);
                            assert!(!graph.has_edge(tail, head));
                        }

                        assert_eq!(graph.edges().collect_vec(), model.concat());
                        assert!(graph.is_consistent());

                        let copy = graph.clone();

                        graph.release();
                        assert_eq!(graph.number_of_nodes(), 0);
                        assert_eq!(graph.number_of_edges(), 0);
                        assert!(graph.edges().next().is_none());

                        graph.release();
                        assert_eq!(graph.number_of_nodes(), 0);

                        assert_eq!(copy.edges().collect_vec(), model.concat());
                    }
                }
            }
        }
    };
    ($graph:ident: EdgeListIo) => {
        #[test]
        fn test_edge_list_io() {
            let rng = &mut Pcg64Mcg::seed_from_u64(7);

            for n in [1 as NumNodes, 10, 30] {
                let (graph, _) = random_graph(rng, n, n * 4);

                let mut buffer = Vec::new();
                graph.try_write_edge_list(&mut buffer).unwrap();
                let read = <$graph>::try_read_edge_list(buffer.as_slice()).unwrap();

                assert_eq!(read.number_of_nodes(), graph.number_of_nodes());
                assert_eq!(read.edges().collect_vec(), graph.edges().collect_vec());

                let mut dot = Vec::new();
                graph.try_write_dot(&mut dot).unwrap();
                let dot = String::from_utf8(dot).unwrap();
                assert_eq!(dot.lines().count(), graph.number_of_edges() as usize + 2);
            }
        }
    };
}

pub(crate) use test_graph_ops;
