use crate::error::GraphDefect;
use crate::index::Idx;

/// An immutable, read-only view over a Compressed-Sparse-Row graph.
///
/// `offset` has `node_count() + 1` entries; the neighbours of vertex `u`
/// are `adj[offset[u].index()..offset[u + 1].index()]`, stored in
/// strictly increasing order with no self-loop. `degree[u]` caches
/// `offset[u + 1] - offset[u]` so callers don't need to subtract offsets
/// on every access.
///
/// The view borrows its backing storage rather than owning it: building,
/// loading, and persisting the CSR arrays is the responsibility of the
/// collaborator that owns the graph (file readers, in-memory builders,
/// etc.), not of this crate.
#[derive(Clone, Copy, Debug)]
pub struct CsrView<'a, NI: Idx> {
    offset: &'a [NI],
    adj: &'a [NI],
    degree: &'a [NI],
}

impl<'a, NI: Idx> CsrView<'a, NI> {
    /// Wraps the given CSR arrays without validating them.
    ///
    /// Use [`CsrView::validate`] (or let [`pscan_core::Engine::new`]
    /// call it for you) before relying on the invariants documented on
    /// this type.
    pub fn new(offset: &'a [NI], adj: &'a [NI], degree: &'a [NI]) -> Self {
        Self {
            offset,
            adj,
            degree,
        }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.degree.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn degree(&self, u: usize) -> usize {
        self.degree[u].index()
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> &'a [NI] {
        let from = self.offset[u].index();
        let to = self.offset[u + 1].index();
        &self.adj[from..to]
    }

    #[inline]
    pub fn edge_start(&self, u: usize) -> usize {
        self.offset[u].index()
    }

    #[inline]
    pub fn offsets(&self) -> &'a [NI] {
        self.offset
    }

    /// Locates the index in `adj` at which the reverse edge of the
    /// directed edge `(u, v)` (stored at `edge_idx` within `u`'s range)
    /// is stored, i.e. the index `j` with `adj[j] == u` and `j` inside
    /// `v`'s neighbour range.
    ///
    /// Binary search over `v`'s (sorted) neighbour range.
    pub fn reverse_index(&self, u: usize, v: usize) -> usize {
        let from = self.offset[v].index();
        let to = self.offset[v + 1].index();
        let u = NI::new(u);
        match self.adj[from..to].binary_search(&u) {
            Ok(pos) => from + pos,
            Err(_) => panic!("edge ({u:?}, {v}) has no mirrored reverse edge"),
        }
    }

    /// Checks the structural invariants this view relies on: sorted,
    /// self-loop-free neighbour lists, a monotone offset array of the
    /// right length, and a symmetric adjacency (every edge has a mirrored
    /// reverse edge).
    pub fn validate(&self) -> Result<(), GraphDefect> {
        if self.offset.len() != self.node_count() + 1 {
            return Err(GraphDefect::OffsetLengthMismatch);
        }
        if self.offset[self.node_count()].index() != self.adj.len() {
            return Err(GraphDefect::OffsetLengthMismatch);
        }

        for u in 0..self.node_count() {
            if self.offset[u] > self.offset[u + 1] {
                return Err(GraphDefect::OffsetNotMonotonic(u));
            }
        }

        for u in 0..self.node_count() {
            let neighbors = self.neighbors(u);
            for window in neighbors.windows(2) {
                if window[0] >= window[1] {
                    return Err(GraphDefect::UnsortedNeighbors(u));
                }
            }
            if neighbors.binary_search(&NI::new(u)).is_ok() {
                return Err(GraphDefect::SelfLoop(u));
            }
        }

        for u in 0..self.node_count() {
            for &v in self.neighbors(u) {
                let v = v.index();
                if self.neighbors(v).binary_search(&NI::new(u)).is_err() {
                    return Err(GraphDefect::Asymmetric(u, v));
                }
            }
        }

        Ok(())
    }
}
