//! # kruskal-mst
//!
//! Minimum spanning trees by Kruskal's algorithm over a disjoint-set core.
//!
//! The caller supplies a vertex count and weighted undirected edges; the
//! builder returns the accepted edges, their total weight, and an ordered
//! trace of every accept/reject decision. The trace is plain data, so
//! anything that wants to replay the run (a renderer, an animator, a test)
//! can consume it without this crate knowing about it.
//!
//! ## Modules
//!
//! - [`collections`] — Disjoint-set with path compression and union by rank
//! - [`graph`] — Edges and weight types
//! - [`kruskal`] — The MST builder, its options, result and trace
//! - [`error`] — Failure taxonomy
//!
//! ## Design Philosophy
//!
//! - **Deterministic**: stable sort, fixed tie-breaking, no randomness
//! - **Fail loudly**: bad vertex counts and out-of-range endpoints are
//!   reported, never clamped or dropped
//! - **Property-based testing**: optimality and forest invariants verified
//!   via proptest against brute force
//!
//! ```
//! use kruskal_mst::compute_mst;
//!
//! let mst = compute_mst([(0, 1, 4u32), (1, 2, 2), (0, 2, 4), (2, 3, 3)], 4)?;
//! assert_eq!(mst.total_weight, 9);
//! assert!(mst.is_spanning_tree());
//! # Ok::<(), kruskal_mst::MstError>(())
//! ```

pub mod collections;
pub mod error;
pub mod graph;
pub mod kruskal;

pub use error::MstError;
pub use graph::{Edge, Weight};
pub use kruskal::{compute_mst, compute_mst_with, Decision, KruskalOptions, MstResult, TraceEntry};
