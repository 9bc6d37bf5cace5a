//! Exact structural similarity comparison via sorted neighbour-list
//! intersection, and the integer lower bound used to avoid running it
//! unless necessary.
//!
//! σ(u, v) = |N[u] ∩ N[v]| / √(|N[u]| · |N[v]|) is compared against ε by
//! clearing denominators: σ(u, v) ≥ ε iff |N[u] ∩ N[v]|² · εb² ≥
//! |N[u]| · |N[v]| · εa², which is exact integer arithmetic once ε has
//! been decomposed into (εa, εb). `required_intersection` turns the
//! right-hand side into the smallest intersection size that satisfies
//! it; `eval` then only needs to count up to that size.

use pscan_graph::{CsrView, Idx};

/// The smallest `k` such that `k² · εb² ≥ closed_du · closed_dv · εa²`,
/// i.e. the intersection size required for σ(u, v) ≥ ε given the closed
/// neighbourhood sizes `closed_du = deg(u) + 1`, `closed_dv = deg(v) + 1`.
///
/// Computed via a floating-point √ estimate, then nudged up with exact
/// 128-bit integer arithmetic until the inequality holds, widened to
/// 128 bits since closed-neighbourhood sizes and ε's numerator and
/// denominator are each allowed the full `u32` range.
pub fn required_intersection(closed_du: u32, closed_dv: u32, eps_a: u32, eps_b: u32) -> u32 {
    let closed_du = closed_du as u128;
    let closed_dv = closed_dv as u128;
    let eps_a = eps_a as u128;
    let eps_b = eps_b as u128;

    let target = closed_du * closed_dv * eps_a * eps_a;
    let eps_b_sq = eps_b * eps_b;

    let estimate = (target as f64 / eps_b_sq as f64).sqrt();
    let mut k = estimate as u128;

    while k * k * eps_b_sq < target {
        k += 1;
    }

    k as u32
}

/// Exact σ(u, v) ≥ ε check via a two-cursor walk over the sorted
/// neighbour lists of `u` and `v`. `required_k` is the `Bound(k)` value
/// computed by [`required_intersection`] for this edge.
///
/// Returns `true` when the edge is `DIRECT` (σ(u, v) ≥ ε), `false` when
/// it is `NOT_DIRECT`.
pub fn eval<NI: Idx>(graph: &CsrView<'_, NI>, u: usize, v: usize, required_k: u32) -> bool {
    let nu = graph.neighbors(u);
    let nv = graph.neighbors(v);

    let mut iu = 0usize;
    let mut iv = 0usize;
    // u and v each count as a member of the other's closed neighbourhood.
    let mut cn: u32 = 2;
    let mut du = graph.degree(u) as u32 + 2;
    let mut dv = graph.degree(v) as u32 + 2;

    loop {
        match (nu.get(iu), nv.get(iv)) {
            (Some(&a), Some(&b)) if a < b => {
                iu += 1;
                du -= 1;
            }
            (Some(&a), Some(&b)) if a > b => {
                iv += 1;
                dv -= 1;
            }
            (Some(_), Some(_)) => {
                iu += 1;
                iv += 1;
                cn += 1;
            }
            // One neighbour list is exhausted: no further common
            // elements are possible, so the intersection can't grow.
            _ => return false,
        }

        if cn >= required_k {
            return true;
        }
        if du < required_k || dv < required_k {
            return false;
        }
    }
}
