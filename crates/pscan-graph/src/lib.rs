//! Immutable CSR graph view used by the pscan structural clustering core.
//!
//! This crate provides just enough graph representation for
//! `pscan-core` to run its algorithms against: a borrowed
//! Compressed-Sparse-Row view (offsets + sorted, symmetric adjacency
//! lists) and the [`Idx`] node-id abstraction the view is generic over.
//!
//! Building a graph from disk, an edge list, or any other external
//! format is explicitly out of scope: callers construct the CSR arrays
//! themselves (however they see fit) and hand a borrowed view to the
//! engine.

pub mod error;
pub mod index;
pub mod view;

pub use crate::error::GraphDefect;
pub use crate::index::Idx;
pub use crate::view::CsrView;
