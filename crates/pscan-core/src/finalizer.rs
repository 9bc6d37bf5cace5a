//! Phase 4a: turn the core union-find forest into an explicit, flat
//! cluster-id array.
//!
//! Union-by-min already makes each tree's root its minimum member, so
//! "the cluster id" is just that root, found once per core vertex and
//! written into a plain `Vec` the rest of the pipeline (and any
//! downstream consumer) can index without touching the forest again.

use crate::checker::Classification;
use crate::disjoint_set::DisjointSet;

/// For every core vertex, its cluster id (the minimum vertex id in its
/// cluster). `None` for non-core vertices; their id is decided by
/// [`crate::assigner`] instead, and may not be unique.
pub fn finalize(
    forest: &mut DisjointSet,
    classification: &Classification,
    node_count: usize,
) -> Vec<Option<u32>> {
    (0..node_count)
        .map(|u| {
            if classification.is_core(u) {
                Some(forest.find(u) as u32)
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::check_cores;
    use crate::clusterer::cluster_cores;
    use crate::edge_state::EdgeStateTable;
    use crate::pruner::prune;
    use pscan_graph::CsrView;

    #[test]
    fn triangle_cluster_id_is_the_minimum_member() {
        let offset = vec![0u32, 2, 4, 6];
        let adj = vec![1u32, 2, 0, 2, 0, 1];
        let degree = vec![2u32, 2, 2];
        let graph = CsrView::<u32>::new(&offset, &adj, &degree);
        let edges = EdgeStateTable::new(graph.edge_count());
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap();
        prune(&graph, &edges, 1, 2, 8192, &pool);
        let classification = check_cores(&graph, &edges, 2, 32, 64, &pool);
        let mut forest = cluster_cores(&graph, &edges, &classification);

        let ids = finalize(&mut forest, &classification, graph.node_count());
        assert_eq!(ids, vec![Some(0), Some(0), Some(0)]);
    }

    #[test]
    fn two_disjoint_triangles_get_two_distinct_ids() {
        let offset = vec![0u32, 2, 4, 6, 8, 10, 12];
        let adj = vec![1u32, 2, 0, 2, 0, 1, 4, 5, 3, 5, 3, 4];
        let degree = vec![2u32; 6];
        let graph = CsrView::<u32>::new(&offset, &adj, &degree);
        let edges = EdgeStateTable::new(graph.edge_count());
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap();
        prune(&graph, &edges, 1, 2, 8192, &pool);
        let classification = check_cores(&graph, &edges, 2, 32, 64, &pool);
        let mut forest = cluster_cores(&graph, &edges, &classification);

        let ids = finalize(&mut forest, &classification, graph.node_count());
        assert_eq!(ids, vec![Some(0), Some(0), Some(0), Some(3), Some(3), Some(3)]);
    }
}
