//! Phase 3: union every pair of ε-similar core vertices into clusters.
//!
//! Runs single-threaded over the [`DisjointSet`] built in phase 2, in two
//! sub-passes: union the pairs already known `DIRECT` first, then
//! resolve whatever `Bound` edges between two cores the checker never
//! got around to.

use pscan_graph::{CsrView, Idx};

use crate::checker::{resolve, Classification};
use crate::disjoint_set::DisjointSet;
use crate::edge_state::{EdgeState, EdgeStateTable};

/// Unions every core vertex with every `DIRECT` core neighbour, then
/// resolves and unions the remaining `Bound` core-to-core edges.
/// Returns the resulting forest; each tree's root is its minimum member,
/// but this is an intermediate clustering, not yet the final cluster id
/// assignment (see [`crate::finalizer`]).
pub fn cluster_cores<NI: Idx>(
    graph: &CsrView<'_, NI>,
    edges: &EdgeStateTable,
    classification: &Classification,
) -> DisjointSet {
    let node_count = graph.node_count();
    let mut forest = DisjointSet::new(node_count);

    // First phase: union every already-DIRECT core-to-core edge. Cheap,
    // no oracle calls, and resolves the overwhelming majority of edges
    // since pruning and core-checking already turned most of them
    // terminal.
    for u in 0..node_count {
        if !classification.is_core(u) {
            continue;
        }
        let start = graph.edge_start(u);
        for (offset, &v) in graph.neighbors(u).iter().enumerate() {
            let v = v.index();
            if u >= v || !classification.is_core(v) {
                continue;
            }
            let edge_idx = start + offset;
            if edges.get(edge_idx) == EdgeState::Direct {
                forest.union(u, v);
            }
        }
    }

    // Second phase: whatever core-to-core edges are still `Bound` were
    // left unresolved by the checker because core status was already
    // decided before reaching them. Resolve and union those now.
    for u in 0..node_count {
        if !classification.is_core(u) {
            continue;
        }
        let start = graph.edge_start(u);
        for (offset, &v) in graph.neighbors(u).iter().enumerate() {
            let v = v.index();
            if u >= v || !classification.is_core(v) {
                continue;
            }
            let edge_idx = start + offset;
            let EdgeState::Bound(k) = edges.get(edge_idx) else {
                continue;
            };
            if resolve(graph, edges, u, v, edge_idx, k).is_direct() {
                forest.union(u, v);
            }
        }
    }

    forest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::check_cores;
    use crate::pruner::prune;

    macro_rules! run_pipeline {
        ($offset:expr, $adj:expr, $degree:expr, $eps_a:expr, $eps_b:expr, $mu:expr) => {{
            let graph = CsrView::<u32>::new(&$offset, &$adj, &$degree);
            let edges = EdgeStateTable::new(graph.edge_count());
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(1)
                .build()
                .unwrap();
            prune(&graph, &edges, $eps_a, $eps_b, 8192, &pool);
            let classification = check_cores(&graph, &edges, $mu, 32, 64, &pool);
            (graph, edges, classification)
        }};
    }

    #[test]
    fn triangle_forms_a_single_cluster() {
        let offset = vec![0u32, 2, 4, 6];
        let adj = vec![1u32, 2, 0, 2, 0, 1];
        let degree = vec![2u32, 2, 2];
        let (graph, edges, classification) = run_pipeline!(offset, adj, degree, 1, 2, 2);

        let mut forest = cluster_cores(&graph, &edges, &classification);
        assert_eq!(forest.find(0), 0);
        assert_eq!(forest.find(1), 0);
        assert_eq!(forest.find(2), 0);
    }

    #[test]
    fn path_splits_into_two_clusters_across_the_non_direct_middle_edge() {
        let offset = vec![0u32, 1, 3, 5, 6];
        let adj = vec![1u32, 0, 2, 1, 3, 2];
        let degree = vec![1u32, 2, 2, 1];
        // eps = 0.7 => eps_a = 7, eps_b = 10
        let (graph, edges, classification) = run_pipeline!(offset, adj, degree, 7, 10, 2);

        let mut forest = cluster_cores(&graph, &edges, &classification);
        assert_eq!(forest.find(0), forest.find(1));
        assert_eq!(forest.find(2), forest.find(3));
        assert_ne!(forest.find(0), forest.find(2));
    }

    #[test]
    fn two_disjoint_triangles_form_two_clusters() {
        let offset = vec![0u32, 2, 4, 6, 8, 10, 12];
        let adj = vec![1u32, 2, 0, 2, 0, 1, 4, 5, 3, 5, 3, 4];
        let degree = vec![2u32; 6];
        let (graph, edges, classification) = run_pipeline!(offset, adj, degree, 1, 2, 2);

        let mut forest = cluster_cores(&graph, &edges, &classification);
        assert_eq!(forest.find(0), forest.find(1));
        assert_eq!(forest.find(1), forest.find(2));
        assert_eq!(forest.find(3), forest.find(4));
        assert_eq!(forest.find(4), forest.find(5));
        assert_ne!(forest.find(0), forest.find(3));
    }
}
