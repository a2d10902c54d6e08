//! Error type shared by the disjoint-set and the MST builder.
//!
//! Every failure is a violated precondition on the caller's input or a
//! broken internal invariant. The computation is pure, so a failing input
//! fails identically on every call.

use thiserror::Error;

/// Errors reported by [`UnionFind`](crate::collections::UnionFind) and
/// [`compute_mst`](crate::kruskal::compute_mst).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MstError {
    /// The vertex count is zero; a graph needs at least one vertex.
    #[error("invalid vertex count {vertex_count}: a graph needs at least one vertex")]
    InvalidVertexCount { vertex_count: usize },

    /// A vertex index lies outside `[0, vertex_count)`.
    ///
    /// `edge_index` is the position of the offending edge in the caller's
    /// input when the error comes from edge validation.
    #[error("{}", describe_out_of_range(.vertex, .vertex_count, .edge_index))]
    VertexOutOfRange {
        vertex: usize,
        vertex_count: usize,
        edge_index: Option<usize>,
    },

    /// The disjoint-set forest is no longer a forest.
    #[error("internal invariant violated: {detail}")]
    InternalInvariantViolation { detail: String },
}

fn describe_out_of_range(vertex: &usize, vertex_count: &usize, edge_index: &Option<usize>) -> String {
    match edge_index {
        Some(index) => format!(
            "edge #{index} references vertex {vertex}, outside [0, {vertex_count})"
        ),
        None => format!("vertex {vertex} is outside [0, {vertex_count})"),
    }
}
