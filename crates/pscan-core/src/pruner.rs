//! Phase 1: initialise every directed edge's state from degree bounds
//! alone, with no similarity computation.
//!
//! Embarrassingly parallel over vertex batches: each vertex only writes
//! the edge-state entries of its own out-edges, so batches never
//! contend, even though the symmetric pair `(u, v)`/`(v, u)` is computed
//! independently by both endpoints (both computations yield the same
//! verdict, so no coordination is needed).

use rayon::prelude::*;

use pscan_graph::{CsrView, Idx};

use crate::edge_state::{EdgeState, EdgeStateTable};
use crate::similarity::required_intersection;

/// Runs the pruning phase over `graph`, writing every edge's initial
/// state into `edges`. After this call returns, no edge state is
/// `Unknown`.
pub fn prune<NI: Idx + Sync>(
    graph: &CsrView<'_, NI>,
    edges: &EdgeStateTable,
    eps_a: u32,
    eps_b: u32,
    batch_size: usize,
    pool: &rayon::ThreadPool,
) {
    let node_count = graph.node_count();
    let eps_a_sq = eps_a as u128 * eps_a as u128;
    let eps_b_sq = eps_b as u128 * eps_b as u128;

    pool.install(|| {
        (0..node_count)
            .into_par_iter()
            .chunks(batch_size)
            .for_each(|chunk| {
                for u in chunk {
                    prune_vertex(graph, edges, u, eps_a, eps_b, eps_a_sq, eps_b_sq);
                }
            });
    });
}

fn prune_vertex<NI: Idx>(
    graph: &CsrView<'_, NI>,
    edges: &EdgeStateTable,
    u: usize,
    eps_a: u32,
    eps_b: u32,
    eps_a_sq: u128,
    eps_b_sq: u128,
) {
    let closed_du = graph.degree(u) as u32 + 1;
    let start = graph.edge_start(u);

    for (offset, &v) in graph.neighbors(u).iter().enumerate() {
        let edge_idx = start + offset;
        let v = v.index();
        let closed_dv = graph.degree(v) as u32 + 1;

        let (lo, hi) = if closed_du <= closed_dv {
            (closed_du, closed_dv)
        } else {
            (closed_dv, closed_du)
        };

        // Best case (full overlap) still falls short of ε: no intersection
        // size can make this edge DIRECT.
        let state = if (lo as u128) * eps_b_sq < (hi as u128) * eps_a_sq {
            EdgeState::NotDirect
        } else {
            let k = required_intersection(closed_du, closed_dv, eps_a, eps_b);
            if k <= 2 {
                // u and v themselves already satisfy the bound.
                EdgeState::Direct
            } else {
                EdgeState::Bound(k)
            }
        };

        edges.set(edge_idx, state);
    }
}
