//! Minimum spanning tree (forest) by Kruskal's algorithm.
//!
//! Edges are stable-sorted by ascending weight and scanned once. Each edge
//! whose endpoints lie in different components of a [`UnionFind`] is
//! accepted and merges them; every other edge would close a cycle and is
//! rejected. Every evaluation is recorded in an ordered trace so an
//! external consumer (a renderer, an animator, a test) can replay the run.
//!
//! # Determinism
//!
//! Equal-weight edges keep their relative input order, so identical input
//! always yields the identical tree, total, and trace.
//!
//! # Disconnected input
//!
//! A disconnected graph is not an error. The result is a minimum spanning
//! forest with `V - k` edges for `k` components; see
//! [`MstResult::component_count`].
//!
//! # Complexity
//! Time: O(E log E) for the sort plus O(E α(V)) for the scan.
//! Space: O(V + E)

use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::collections::UnionFind;
use crate::error::MstError;
use crate::graph::{Edge, Weight};

/// Builder configuration.
///
/// # Examples
/// ```
/// use kruskal_mst::kruskal::KruskalOptions;
/// let opts = KruskalOptions::new().with_stop_when_spanning(true);
/// assert!(opts.stop_when_spanning);
/// assert!(!KruskalOptions::default().stop_when_spanning);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KruskalOptions {
    /// Stop scanning once `V - 1` edges are accepted.
    ///
    /// Edges left unscanned do not appear in the trace at all; they are
    /// not reported as rejected.
    pub stop_when_spanning: bool,
}

impl KruskalOptions {
    /// Options that evaluate and trace every edge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_stop_when_spanning(mut self, stop: bool) -> Self {
        self.stop_when_spanning = stop;
        self
    }
}

/// Outcome of evaluating one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// The edge joined two components and is part of the tree.
    Accepted,
    /// Both endpoints were already connected; the edge would close a cycle.
    RejectedCycle,
}

/// One evaluated edge, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "W: Serialize, W::Sum: Serialize",
    deserialize = "W: Deserialize<'de>, W::Sum: Deserialize<'de>"
))]
pub struct TraceEntry<W: Weight> {
    pub edge: Edge<W>,
    pub decision: Decision,
    /// Tree weight after this decision.
    pub cumulative_weight: W::Sum,
}

/// Minimum spanning tree (or forest) together with its decision trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "W: Serialize, W::Sum: Serialize",
    deserialize = "W: Deserialize<'de>, W::Sum: Deserialize<'de>"
))]
pub struct MstResult<W: Weight> {
    /// Accepted edges in acceptance order (non-decreasing weight).
    pub edges: Vec<Edge<W>>,
    /// Sum of accepted weights, in the widened accumulator type.
    pub total_weight: W::Sum,
    /// Every evaluated edge, in evaluation order.
    pub trace: Vec<TraceEntry<W>>,
    pub vertex_count: usize,
    /// Number of edges supplied by the caller. Exceeds `trace.len()` only
    /// when the scan stopped early.
    pub considered: usize,
}

impl<W: Weight> MstResult<W> {
    /// Number of accepted edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of trees in the spanning forest, i.e. connected components of
    /// the input graph.
    pub fn component_count(&self) -> usize {
        self.vertex_count - self.edges.len()
    }

    /// Returns `true` if the accepted edges connect every vertex.
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count() == 1
    }

    /// Number of edges the scan actually evaluated.
    pub fn evaluated(&self) -> usize {
        self.trace.len()
    }

    /// Trace entries that were accepted.
    pub fn accepted(&self) -> impl Iterator<Item = &TraceEntry<W>> {
        self.trace
            .iter()
            .filter(|entry| entry.decision == Decision::Accepted)
    }

    /// Trace entries that were rejected as cycles.
    pub fn rejected(&self) -> impl Iterator<Item = &TraceEntry<W>> {
        self.trace
            .iter()
            .filter(|entry| entry.decision == Decision::RejectedCycle)
    }
}

impl<W: Weight> fmt::Display for MstResult<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Edges in MST:")?;
        for edge in &self.edges {
            writeln!(f, "{edge}")?;
        }
        write!(f, "The total weight of MST: {}", self.total_weight)
    }
}

/// Computes a minimum spanning tree with default [`KruskalOptions`].
///
/// Every edge is evaluated and appears in the trace.
///
/// # Errors
/// - [`MstError::InvalidVertexCount`] if `vertex_count == 0`.
/// - [`MstError::VertexOutOfRange`] for the first edge (in input order)
///   with an endpoint outside `[0, vertex_count)`.
///
/// # Examples
/// ```
/// use kruskal_mst::kruskal::{compute_mst, Decision};
///
/// let mst = compute_mst([(0, 1, 1u32), (1, 2, 1), (0, 2, 1)], 3)?;
/// assert_eq!(mst.total_weight, 2);
/// assert_eq!(mst.edge_count(), 2);
/// assert_eq!(mst.trace[2].decision, Decision::RejectedCycle);
/// # Ok::<(), kruskal_mst::MstError>(())
/// ```
pub fn compute_mst<W, I, E>(edges: I, vertex_count: usize) -> Result<MstResult<W>, MstError>
where
    W: Weight,
    I: IntoIterator<Item = E>,
    E: Into<Edge<W>>,
{
    compute_mst_with(edges, vertex_count, &KruskalOptions::default())
}

/// Computes a minimum spanning tree with explicit options.
///
/// # Errors
/// Same as [`compute_mst`].
///
/// # Examples
/// ```
/// use kruskal_mst::kruskal::{compute_mst_with, KruskalOptions};
///
/// let edges = [(0, 1, 1u32), (1, 2, 2), (0, 2, 3)];
/// let opts = KruskalOptions::new().with_stop_when_spanning(true);
/// let mst = compute_mst_with(edges, 3, &opts)?;
/// assert_eq!(mst.evaluated(), 2); // (0, 2, 3) never looked at
/// assert_eq!(mst.considered, 3);
/// # Ok::<(), kruskal_mst::MstError>(())
/// ```
pub fn compute_mst_with<W, I, E>(
    edges: I,
    vertex_count: usize,
    options: &KruskalOptions,
) -> Result<MstResult<W>, MstError>
where
    W: Weight,
    I: IntoIterator<Item = E>,
    E: Into<Edge<W>>,
{
    if vertex_count == 0 {
        return Err(MstError::InvalidVertexCount { vertex_count });
    }

    let mut sorted: Vec<Edge<W>> = edges.into_iter().map(Into::into).collect();
    validate(&sorted, vertex_count)?;
    let considered = sorted.len();
    // Stable: equal weights keep input order.
    sorted.sort_by_key(|edge| edge.weight);

    debug!("kruskal: {vertex_count} vertices, {considered} edges");

    let target = vertex_count - 1;
    let mut sets = UnionFind::new(vertex_count);
    let mut tree = Vec::with_capacity(target);
    let mut total = W::Sum::default();
    let mut decisions = Vec::with_capacity(considered);

    for edge in sorted {
        if options.stop_when_spanning && tree.len() == target {
            debug!(
                "kruskal: spanning tree complete, {} edges left unevaluated",
                considered - decisions.len()
            );
            break;
        }

        let decision = if sets.union(edge.u, edge.v)? {
            total = total + edge.weight.widen();
            tree.push(edge);
            Decision::Accepted
        } else {
            Decision::RejectedCycle
        };
        trace!("kruskal: {edge} -> {decision:?} (total {total})");

        decisions.push(TraceEntry {
            edge,
            decision,
            cumulative_weight: total,
        });
    }

    debug!(
        "kruskal: accepted {} of {} evaluated edges, total weight {total}, {} component(s)",
        tree.len(),
        decisions.len(),
        sets.component_count()
    );

    Ok(MstResult {
        edges: tree,
        total_weight: total,
        trace: decisions,
        vertex_count,
        considered,
    })
}

fn validate<W>(edges: &[Edge<W>], vertex_count: usize) -> Result<(), MstError> {
    for (index, edge) in edges.iter().enumerate() {
        if let Some(vertex) = [edge.u, edge.v].into_iter().find(|&v| v >= vertex_count) {
            return Err(MstError::VertexOutOfRange {
                vertex,
                vertex_count,
                edge_index: Some(index),
            });
        }
    }
    Ok(())
}
