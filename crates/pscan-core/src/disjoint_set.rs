//! Single-threaded union-find over vertex ids, used to merge core
//! vertices into clusters.
//!
//! Clustering and finalization run after both parallel phases have
//! finished, so unlike [`crate::edge_state`] or
//! [`crate::checker::Classification`] this structure needs no atomics: a
//! plain `&mut self` API with union-by-min and path-halving is enough.

use pscan_graph::Idx;

/// A disjoint-set forest over `0..n`, where each set's representative is
/// always its smallest member.
pub struct DisjointSet {
    parent: Vec<u32>,
}

impl DisjointSet {
    /// Creates `n` singleton sets, each its own representative.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
        }
    }

    /// Finds the representative of the set containing `u`, halving the
    /// path to it along the way.
    pub fn find(&mut self, u: usize) -> usize {
        let mut u = u;
        while self.parent[u] as usize != u {
            let grandparent = self.parent[self.parent[u] as usize];
            self.parent[u] = grandparent;
            u = self.parent[u] as usize;
        }
        u
    }

    /// Merges the sets containing `u` and `v`. The resulting
    /// representative is always the smaller of the two roots, so the
    /// final representative of any cluster is its minimum member id.
    pub fn union(&mut self, u: usize, v: usize) {
        let ru = self.find(u);
        let rv = self.find(v);
        if ru == rv {
            return;
        }
        if ru < rv {
            self.parent[rv] = ru as u32;
        } else {
            self.parent[ru] = rv as u32;
        }
    }

    /// Finds the representative of `u`'s set, translated through an
    /// [`Idx`] type.
    pub fn find_idx<NI: Idx>(&mut self, u: NI) -> usize {
        self.find(u.index())
    }

    /// The raw parent array backing this forest, exposed read-only for
    /// callers that want the union-find structure itself rather than
    /// just the flattened cluster ids `finalizer::finalize` derives
    /// from it.
    pub fn parent(&self) -> &[u32] {
        &self.parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_singletons() {
        let mut ds = DisjointSet::new(4);
        for i in 0..4 {
            assert_eq!(ds.find(i), i);
        }
    }

    #[test]
    fn union_picks_smaller_root() {
        let mut ds = DisjointSet::new(5);
        ds.union(3, 1);
        assert_eq!(ds.find(3), 1);
        assert_eq!(ds.find(1), 1);

        ds.union(1, 4);
        assert_eq!(ds.find(4), 1);
    }

    #[test]
    fn union_is_transitive_across_chains() {
        let mut ds = DisjointSet::new(6);
        ds.union(0, 1);
        ds.union(2, 3);
        ds.union(1, 2);
        for i in 0..4 {
            assert_eq!(ds.find(i), 0);
        }
        assert_eq!(ds.find(4), 4);
        assert_eq!(ds.find(5), 5);
    }

    #[test]
    fn union_of_same_set_is_a_no_op() {
        let mut ds = DisjointSet::new(3);
        ds.union(0, 1);
        let before = ds.find(0);
        ds.union(1, 0);
        assert_eq!(ds.find(0), before);
    }
}
