//! Orchestrates the four pSCAN phases over a validated graph view.
//!
//! Each parallel phase gets its own short-lived `rayon::ThreadPool`,
//! built just before the phase runs and dropped at its end, forming a
//! hard barrier between phases. Clustering and finalization run on the
//! calling thread instead, since their single `DisjointSet` has no
//! parallel-safe story here.

use std::time::Instant;

use log::info;

use pscan_graph::{CsrView, Idx};

use crate::assigner::assign_non_cores;
use crate::checker::check_cores;
use crate::clusterer::cluster_cores;
use crate::config::EngineConfig;
use crate::edge_state::EdgeStateTable;
use crate::error::Error;
use crate::finalizer::finalize;
use crate::pruner::prune;

/// The full output of a clustering run.
#[derive(Debug, Clone)]
pub struct ClusterResult {
    /// `is_core[u]` is true iff `u` met the μ-core threshold.
    pub is_core: Vec<bool>,
    /// `cluster_id[u]` is `u`'s cluster id if `u` is core, `None` otherwise.
    pub cluster_id: Vec<Option<u32>>,
    /// `(cluster_id, vertex)` pairs for every non-core vertex directly
    /// adjacent to a core in that cluster. A non-core vertex bordering
    /// several clusters appears once per cluster.
    pub non_core_members: Vec<(u32, usize)>,
    /// The core disjoint-set's raw parent array, exposed read-only
    /// alongside the already-flattened `cluster_id`.
    pub parent: Vec<u32>,
}

/// A pSCAN run bound to one graph view and one set of parameters.
pub struct Engine<'a, NI: Idx> {
    graph: CsrView<'a, NI>,
    eps_a: u32,
    eps_b: u32,
    mu: u32,
    config: EngineConfig,
}

impl<'a, NI: Idx + Sync> Engine<'a, NI> {
    /// Validates `graph` and the similarity parameters before committing
    /// to a run. `eps` is supplied pre-decomposed as `eps_a / eps_b` so
    /// every similarity comparison can stay in exact integer arithmetic,
    /// `mu` is the minimum closed-neighbourhood size for a core vertex.
    pub fn new(
        graph: CsrView<'a, NI>,
        eps_a: u32,
        eps_b: u32,
        mu: u32,
        config: EngineConfig,
    ) -> Result<Self, Error> {
        graph.validate()?;
        if eps_a == 0 || eps_b == 0 || eps_a > eps_b {
            return Err(Error::InvalidParameters("eps must satisfy 0 < eps_a <= eps_b"));
        }
        if mu < 2 {
            return Err(Error::InvalidParameters("mu must be at least 2"));
        }
        Ok(Self {
            graph,
            eps_a,
            eps_b,
            mu,
            config,
        })
    }

    /// Runs all four phases to completion and returns the classification.
    pub fn run(&self) -> ClusterResult {
        let node_count = self.graph.node_count();
        let edges = EdgeStateTable::new(self.graph.edge_count());

        let prune_pool = self.build_pool();
        let started = Instant::now();
        prune(
            &self.graph,
            &edges,
            self.eps_a,
            self.eps_b,
            self.config.prune_batch,
            &prune_pool,
        );
        info!("prune: {} edges in {:?}", edges.len(), started.elapsed());
        drop(prune_pool);

        let check_pool = self.build_pool();
        let started = Instant::now();
        let classification = check_cores(
            &self.graph,
            &edges,
            self.mu,
            self.config.first_pass_batch,
            self.config.second_pass_batch,
            &check_pool,
        );
        info!("check_cores: {node_count} vertices in {:?}", started.elapsed());
        drop(check_pool);

        let started = Instant::now();
        let mut forest = cluster_cores(&self.graph, &edges, &classification);
        let cluster_id = finalize(&mut forest, &classification, node_count);
        let parent = forest.parent().to_vec();
        info!("cluster + finalize: {:?}", started.elapsed());

        let assign_pool = self.build_pool();
        let started = Instant::now();
        let non_core_members = assign_non_cores(
            &self.graph,
            &edges,
            &classification,
            &cluster_id,
            self.config.assign_batch,
            &assign_pool,
        );
        info!(
            "assign_non_cores: {} memberships in {:?}",
            non_core_members.len(),
            started.elapsed()
        );
        drop(assign_pool);

        ClusterResult {
            is_core: classification.into_is_core_vec(),
            cluster_id,
            non_core_members,
            parent,
        }
    }

    fn build_pool(&self) -> rayon::ThreadPool {
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.thread_count)
            .build()
            .expect("thread pool construction only fails on platform thread-spawn errors")
    }
}
