/// Cross-checks an unweighted representation against a naive adjacency matrix built from random edges.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, *};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a list of at most `m_ub` random edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                (0..m_ub)
                    .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
                    .collect_vec()
            }

            #[test]
            fn graph_new() {
                for n in 0..20 {
                    let graph = <$graph>::new(n);
                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                }
            }

            #[test]
            fn adjacency_matches_matrix() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [5 as NumNodes, 20, 50] {
                    for m_ub in [n, n * 3] {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut matrix = vec![vec![false; n as usize]; n as usize];
                        for &Edge(u, v) in &edges {
                            matrix[u as usize][v as usize] = true;
                            if $undirected {
                                matrix[v as usize][u as usize] = true;
                            }
                        }

                        let graph = <$graph>::from_edges(n, edges.iter());

                        for u in 0..n {
                            let expected = (0..n).filter(|&v| matrix[u as usize][v as usize]).collect_vec();
                            assert_eq!(graph.neighbors_of(u).sorted().collect_vec(), expected);
                            assert_eq!(graph.degree_of(u) as usize, expected.len());
                            for v in 0..n {
                                assert_eq!(graph.has_edge(u, v), matrix[u as usize][v as usize]);
                            }
                        }

                        let mut normalized = edges
                            .iter()
                            .map(|e| if $undirected { e.normalized() } else { *e })
                            .collect_vec();
                        normalized.sort_unstable();
                        normalized.dedup();
                        assert_eq!(graph.number_of_edges() as usize, normalized.len());
                        assert_eq!(graph.ordered_edges($undirected), normalized);
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
