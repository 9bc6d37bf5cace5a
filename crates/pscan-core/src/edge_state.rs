//! Per directed-edge similarity state, shared lock-free across worker
//! threads.
//!
//! Each edge index holds one of four logical variants (`Unknown`,
//! `Direct`, `NotDirect`, or `Bound(k)`), packed into a single `u32` so a
//! plain `AtomicU32` gives a word-sized, naturally-aligned store. The two
//! high bits carry an explicit tag rather than relying on sign: `DIRECT`
//! and `NOT_DIRECT` would otherwise need negative sentinels that collide
//! with a genuine `Bound` payload on any encoding that reuses the sign
//! bit.
//!
//! Concurrent writers never disagree: a `Bound -> {Direct, NotDirect}`
//! transition is monotonic and the same `(u, v, k)` always evaluates to
//! the same verdict, so a race just means one side's oracle call was
//! redundant, never wrong.

use std::sync::atomic::{AtomicU32, Ordering};

const TAG_SHIFT: u32 = 30;
const TAG_MASK: u32 = 0b11 << TAG_SHIFT;
const VALUE_MASK: u32 = (1 << TAG_SHIFT) - 1;

const TAG_UNKNOWN: u32 = 0;
const TAG_DIRECT: u32 = 1;
const TAG_NOT_DIRECT: u32 = 2;
const TAG_BOUND: u32 = 3;

/// The state of one directed edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeState {
    /// Not yet examined (only observable before pruning runs).
    Unknown,
    /// σ(u, v) ≥ ε confirmed.
    Direct,
    /// σ(u, v) < ε confirmed.
    NotDirect,
    /// DIRECT requires the intersection to reach at least `k`.
    Bound(u32),
}

impl EdgeState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, EdgeState::Direct | EdgeState::NotDirect)
    }

    #[inline]
    pub fn is_direct(self) -> bool {
        matches!(self, EdgeState::Direct)
    }

    fn encode(self) -> u32 {
        match self {
            EdgeState::Unknown => TAG_UNKNOWN << TAG_SHIFT,
            EdgeState::Direct => TAG_DIRECT << TAG_SHIFT,
            EdgeState::NotDirect => TAG_NOT_DIRECT << TAG_SHIFT,
            EdgeState::Bound(k) => {
                debug_assert!(k <= VALUE_MASK, "bound {k} does not fit in 30 bits");
                (TAG_BOUND << TAG_SHIFT) | (k & VALUE_MASK)
            }
        }
    }

    fn decode(word: u32) -> Self {
        match word & TAG_MASK {
            w if w == TAG_UNKNOWN << TAG_SHIFT => EdgeState::Unknown,
            w if w == TAG_DIRECT << TAG_SHIFT => EdgeState::Direct,
            w if w == TAG_NOT_DIRECT << TAG_SHIFT => EdgeState::NotDirect,
            w if w == TAG_BOUND << TAG_SHIFT => EdgeState::Bound(word & VALUE_MASK),
            _ => unreachable!("only two tag bits are ever written"),
        }
    }
}

/// A mapping from directed-edge index to [`EdgeState`], safe to read and
/// write from any number of threads without locking.
pub struct EdgeStateTable(Box<[AtomicU32]>);

impl EdgeStateTable {
    /// Creates a table of `edge_count` entries, all `Unknown`.
    pub fn new(edge_count: usize) -> Self {
        let mut states = Vec::with_capacity(edge_count);
        states.resize_with(edge_count, || AtomicU32::new(EdgeState::Unknown.encode()));
        Self(states.into_boxed_slice())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, edge_idx: usize) -> EdgeState {
        EdgeState::decode(self.0[edge_idx].load(Ordering::Acquire))
    }

    #[inline]
    pub fn set(&self, edge_idx: usize, state: EdgeState) {
        self.0[edge_idx].store(state.encode(), Ordering::Release);
    }
}
