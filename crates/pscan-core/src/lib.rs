//! Parallel structural clustering (pSCAN) over a [`pscan_graph::CsrView`].
//!
//! A run proceeds in four phases, each described in its own module:
//!
//! 1. [`pruner`]: initialise every edge's similarity state from degree
//!    bounds alone.
//! 2. [`checker`]: classify every vertex as core or non-core, lazily
//!    resolving only the edges that still matter.
//! 3. [`clusterer`] + [`finalizer`]: union ε-similar cores into
//!    clusters and flatten the result into per-vertex cluster ids.
//! 4. [`assigner`]: attach every non-core vertex to each cluster it
//!    borders.
//!
//! [`engine::Engine`] drives all four phases behind short-lived `rayon`
//! thread pools; [`similarity`] and [`edge_state`] hold the shared
//! similarity oracle and lock-free edge-state storage the first two
//! phases build on.

pub mod assigner;
pub mod checker;
pub mod clusterer;
pub mod config;
pub mod disjoint_set;
pub mod edge_state;
pub mod engine;
pub mod error;
pub mod finalizer;
pub mod pruner;
pub mod similarity;

pub use checker::Classification;
pub use config::EngineConfig;
pub use disjoint_set::DisjointSet;
pub use edge_state::{EdgeState, EdgeStateTable};
pub use engine::{ClusterResult, Engine};
pub use error::Error;

pub use pscan_graph::{CsrView, GraphDefect, Idx};
