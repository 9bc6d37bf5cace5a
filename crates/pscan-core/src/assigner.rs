//! Phase 4b: attach every non-core vertex to each cluster it borders.
//!
//! Split into two sub-stages: a parallel stage resolves any `Bound` edge
//! from a non-core vertex to a core neighbour (a pure side effect on
//! [`EdgeStateTable`], so no synchronized output is needed), then a
//! serial stage walks the now-fully-terminal edges and emits one
//! `(cluster_id, vertex)` pair per direct non-core-to-core edge. A
//! non-core vertex bordering cores in more than one cluster is emitted
//! once per cluster; duplicates are the caller's to dedupe.

use rayon::prelude::*;

use pscan_graph::{CsrView, Idx};

use crate::checker::{resolve, Classification};
use crate::edge_state::{EdgeState, EdgeStateTable};

/// Resolves every still-`Bound` edge from a non-core vertex to a core
/// neighbour, then emits `(cluster_id, vertex)` for each direct one.
pub fn assign_non_cores<NI: Idx + Sync>(
    graph: &CsrView<'_, NI>,
    edges: &EdgeStateTable,
    classification: &Classification,
    cluster_ids: &[Option<u32>],
    batch_size: usize,
    pool: &rayon::ThreadPool,
) -> Vec<(u32, usize)> {
    let node_count = graph.node_count();

    pool.install(|| {
        (0..node_count)
            .into_par_iter()
            .chunks(batch_size)
            .for_each(|chunk| {
                for u in chunk {
                    if classification.is_core(u) {
                        continue;
                    }
                    eval_non_core_edges(graph, edges, classification, u);
                }
            });
    });

    let mut assignments = Vec::new();
    for u in 0..node_count {
        if classification.is_core(u) {
            continue;
        }
        let start = graph.edge_start(u);
        for (offset, &v) in graph.neighbors(u).iter().enumerate() {
            let v = v.index();
            if !classification.is_core(v) {
                continue;
            }
            let edge_idx = start + offset;
            if edges.get(edge_idx) == EdgeState::Direct {
                let cluster_id = cluster_ids[v].expect("core vertex always has a cluster id");
                assignments.push((cluster_id, u));
            }
        }
    }

    assignments
}

fn eval_non_core_edges<NI: Idx>(
    graph: &CsrView<'_, NI>,
    edges: &EdgeStateTable,
    classification: &Classification,
    u: usize,
) {
    let start = graph.edge_start(u);
    for (offset, &v) in graph.neighbors(u).iter().enumerate() {
        let v = v.index();
        if !classification.is_core(v) {
            continue;
        }
        let edge_idx = start + offset;
        let EdgeState::Bound(k) = edges.get(edge_idx) else {
            continue;
        };
        resolve(graph, edges, u, v, edge_idx, k);
    }
}
