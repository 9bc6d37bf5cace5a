//! Phase 2: classify every vertex as core or non-core using lazily
//! evaluated similarity, in two barrier-separated parallel passes.
//!
//! A vertex is core as soon as it accumulates `μ - 1` confirmed `DIRECT`
//! out-edges (the self always counts as one more similar member); it is
//! non-core as soon as its remaining possibly-direct out-edges can no
//! longer reach `μ - 1`. Both counters are updated using only
//! already-terminal edge state first, falling back to the similarity
//! oracle only for edges still `Bound`, and even then, only once per
//! undirected edge when `u <= v`, deferring the other half to the second
//! pass.

use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use pscan_graph::{CsrView, Idx};

use crate::edge_state::{EdgeState, EdgeStateTable};
use crate::similarity::eval;

/// The vertex classification produced by [`check_cores`].
pub struct Classification {
    is_core: Box<[AtomicBool]>,
    is_non_core: Box<[AtomicBool]>,
}

impl Classification {
    fn new(node_count: usize) -> Self {
        let mut is_core = Vec::with_capacity(node_count);
        is_core.resize_with(node_count, || AtomicBool::new(false));
        let mut is_non_core = Vec::with_capacity(node_count);
        is_non_core.resize_with(node_count, || AtomicBool::new(false));
        Self {
            is_core: is_core.into_boxed_slice(),
            is_non_core: is_non_core.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn is_core(&self, u: usize) -> bool {
        self.is_core[u].load(Ordering::Relaxed)
    }

    #[inline]
    pub fn is_non_core(&self, u: usize) -> bool {
        self.is_non_core[u].load(Ordering::Relaxed)
    }

    #[inline]
    fn is_classified(&self, u: usize) -> bool {
        self.is_core(u) || self.is_non_core(u)
    }

    #[inline]
    fn mark_core(&self, u: usize) {
        self.is_core[u].store(true, Ordering::Relaxed);
    }

    #[inline]
    fn mark_non_core(&self, u: usize) {
        self.is_non_core[u].store(true, Ordering::Relaxed);
    }

    /// Copies the classification into a plain `Vec<bool>` of core flags,
    /// treating any vertex left unclassified (both flags false) as
    /// non-core.
    pub fn into_is_core_vec(self) -> Vec<bool> {
        self.is_core
            .iter()
            .map(|flag| flag.load(Ordering::Relaxed))
            .collect()
    }
}

/// Runs both core-check passes and returns the resulting classification.
pub fn check_cores<NI: Idx + Sync>(
    graph: &CsrView<'_, NI>,
    edges: &EdgeStateTable,
    mu: u32,
    first_pass_batch: usize,
    second_pass_batch: usize,
    pool: &rayon::ThreadPool,
) -> Classification {
    let node_count = graph.node_count();
    let classification = Classification::new(node_count);

    pool.install(|| {
        (0..node_count)
            .into_par_iter()
            .chunks(first_pass_batch)
            .for_each(|chunk| {
                for u in chunk {
                    check_core_first_pass(graph, edges, &classification, mu, u);
                }
            });
    });

    pool.install(|| {
        (0..node_count)
            .into_par_iter()
            .chunks(second_pass_batch)
            .for_each(|chunk| {
                for u in chunk {
                    if !classification.is_classified(u) {
                        check_core_second_pass(graph, edges, &classification, mu, u);
                    }
                }
            });
    });

    classification
}

/// Threshold on confirmed-direct out-edges for `u` to be a core: the
/// self always counts as one further ε-similar member.
#[inline]
fn core_threshold(mu: u32) -> u32 {
    mu - 1
}

fn check_core_first_pass<NI: Idx>(
    graph: &CsrView<'_, NI>,
    edges: &EdgeStateTable,
    classification: &Classification,
    mu: u32,
    u: usize,
) {
    let threshold = core_threshold(mu);
    let start = graph.edge_start(u);
    let mut sd: u32 = 0;
    let mut ed: u32 = graph.degree(u) as u32;

    // Pass over already-terminal edges only; no oracle calls here.
    for (offset, _) in graph.neighbors(u).iter().enumerate() {
        let edge_idx = start + offset;
        match edges.get(edge_idx) {
            EdgeState::Direct => {
                sd += 1;
                if sd >= threshold {
                    classification.mark_core(u);
                    return;
                }
            }
            EdgeState::NotDirect => {
                ed -= 1;
                if ed < threshold {
                    classification.mark_non_core(u);
                    return;
                }
            }
            EdgeState::Bound(_) | EdgeState::Unknown => {}
        }
    }

    // Remaining Bound edges: only the lower-id endpoint evaluates, so
    // the symmetric pair is computed at most once per undirected edge in
    // this pass. The other endpoint catches up in the second pass.
    for (offset, &v) in graph.neighbors(u).iter().enumerate() {
        let edge_idx = start + offset;
        let v = v.index();
        if u > v {
            continue;
        }
        let EdgeState::Bound(k) = edges.get(edge_idx) else {
            continue;
        };

        let resolved = resolve(graph, edges, u, v, edge_idx, k);
        match resolved {
            EdgeState::Direct => {
                sd += 1;
                if sd >= threshold {
                    classification.mark_core(u);
                    return;
                }
            }
            EdgeState::NotDirect => {
                ed -= 1;
                if ed < threshold {
                    classification.mark_non_core(u);
                    return;
                }
            }
            _ => unreachable!("resolve always returns a terminal state"),
        }
    }
}

fn check_core_second_pass<NI: Idx>(
    graph: &CsrView<'_, NI>,
    edges: &EdgeStateTable,
    classification: &Classification,
    mu: u32,
    u: usize,
) {
    let threshold = core_threshold(mu);
    let start = graph.edge_start(u);
    let mut sd: u32 = 0;
    let mut ed: u32 = graph.degree(u) as u32;

    for (offset, _) in graph.neighbors(u).iter().enumerate() {
        let edge_idx = start + offset;
        match edges.get(edge_idx) {
            EdgeState::Direct => {
                sd += 1;
                if sd >= threshold {
                    classification.mark_core(u);
                    return;
                }
            }
            EdgeState::NotDirect => {
                ed -= 1;
                if ed < threshold {
                    classification.mark_non_core(u);
                    return;
                }
            }
            EdgeState::Bound(_) | EdgeState::Unknown => {}
        }
    }

    // The first pass's `u <= v` guard may have left Bound edges
    // unevaluated from u's side; resolve all of them now regardless of
    // orientation.
    for (offset, &v) in graph.neighbors(u).iter().enumerate() {
        let edge_idx = start + offset;
        let v = v.index();
        let EdgeState::Bound(k) = edges.get(edge_idx) else {
            continue;
        };

        let resolved = resolve(graph, edges, u, v, edge_idx, k);
        match resolved {
            EdgeState::Direct => {
                sd += 1;
                if sd >= threshold {
                    classification.mark_core(u);
                    return;
                }
            }
            EdgeState::NotDirect => {
                ed -= 1;
                if ed < threshold {
                    classification.mark_non_core(u);
                    return;
                }
            }
            _ => unreachable!("resolve always returns a terminal state"),
        }
    }

    // All edges are now terminal; sd and ed must have converged, so this
    // is unreachable in practice, but a vertex that is neither core nor
    // non-core counts as non-core.
    classification.mark_non_core(u);
}

pub(crate) fn resolve<NI: Idx>(
    graph: &CsrView<'_, NI>,
    edges: &EdgeStateTable,
    u: usize,
    v: usize,
    edge_idx: usize,
    k: u32,
) -> EdgeState {
    let resolved = if eval(graph, u, v, k) {
        EdgeState::Direct
    } else {
        EdgeState::NotDirect
    };
    edges.set(edge_idx, resolved);
    edges.set(graph.reverse_index(u, v), resolved);
    resolved
}
