//! Weighted undirected edges and the weight types they may carry.
//!
//! Vertices are plain indices in `[0, V)`; they have no representation of
//! their own beyond the vertex count handed to the builder.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A totally ordered edge weight with a wider accumulator type.
///
/// The MST total is summed in [`Weight::Sum`] so that adding `V - 1`
/// maximal weights cannot overflow for any realistic vertex count.
///
/// Floating-point types are deliberately not implemented: they have no
/// total order. Map them to an ordered key before building edges.
///
/// # Examples
/// ```
/// use kruskal_mst::graph::Weight;
/// assert_eq!(u32::MAX.widen() + u32::MAX.widen(), 2 * u32::MAX as u64);
/// ```
pub trait Weight: Copy + Ord + fmt::Debug + fmt::Display {
    /// Accumulator type for sums of weights.
    type Sum: Copy + Default + Ord + Add<Output = Self::Sum> + fmt::Debug + fmt::Display;

    /// Converts the weight losslessly into the accumulator type.
    fn widen(self) -> Self::Sum;
}

macro_rules! impl_weight {
    ($($t:ty => $sum:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                type Sum = $sum;

                #[inline]
                fn widen(self) -> $sum {
                    <$sum>::from(self)
                }
            }
        )*
    };
}

impl_weight! {
    u8 => u64,
    u16 => u64,
    u32 => u64,
    u64 => u128,
    i8 => i64,
    i16 => i64,
    i32 => i64,
    i64 => i128,
}

// `From<usize>` is not implemented for `u128`/`i128`.
impl Weight for usize {
    type Sum = u128;

    #[inline]
    fn widen(self) -> u128 {
        self as u128
    }
}

impl Weight for isize {
    type Sum = i128;

    #[inline]
    fn widen(self) -> i128 {
        self as i128
    }
}

/// An undirected weighted edge between vertices `u` and `v`.
///
/// `(u, v, w)` and `(v, u, w)` describe the same connection; the builder
/// keeps whichever orientation the caller supplied.
///
/// # Examples
/// ```
/// use kruskal_mst::graph::Edge;
/// let e: Edge<u32> = (2, 5, 7).into();
/// assert_eq!(e, Edge::new(2, 5, 7));
/// assert_eq!(e.to_string(), "2 - 5 : 7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<W> {
    pub u: usize,
    pub v: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(u: usize, v: usize, weight: W) -> Self {
        Self { u, v, weight }
    }

    /// Returns the endpoints in stored orientation.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.u, self.v)
    }

    /// Returns `true` if both endpoints are the same vertex.
    ///
    /// Self-loops are valid input; the builder always rejects them as
    /// cycles.
    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }

    /// Returns `true` if `self` and `other` join the same pair of vertices,
    /// in either orientation, regardless of weight.
    pub fn same_endpoints<V>(&self, other: &Edge<V>) -> bool {
        (self.u == other.u && self.v == other.v) || (self.u == other.v && self.v == other.u)
    }
}

impl<W> From<(usize, usize, W)> for Edge<W> {
    fn from((u, v, weight): (usize, usize, W)) -> Self {
        Self { u, v, weight }
    }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} : {}", self.u, self.v, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tuple() {
        let e: Edge<u8> = (0, 1, 4).into();
        assert_eq!(e.endpoints(), (0, 1));
        assert_eq!(e.weight, 4);
    }

    #[test]
    fn test_self_loop() {
        assert!(Edge::new(3, 3, 1u32).is_self_loop());
        assert!(!Edge::new(3, 4, 1u32).is_self_loop());
    }

    #[test]
    fn test_same_endpoints_ignores_orientation_and_weight() {
        let a = Edge::new(1, 2, 4u32);
        assert!(a.same_endpoints(&Edge::new(2, 1, 9u32)));
        assert!(a.same_endpoints(&Edge::new(1, 2, 4u32)));
        assert!(!a.same_endpoints(&Edge::new(1, 3, 4u32)));
    }

    #[test]
    fn test_widen_does_not_overflow() {
        let total = (0..1000).fold(0u64, |acc, _| acc + u32::MAX.widen());
        assert_eq!(total, 1000 * u64::from(u32::MAX));
        assert_eq!((-5i32).widen(), -5i64);
        assert_eq!(usize::MAX.widen(), usize::MAX as u128);
    }

    #[test]
    fn test_display() {
        assert_eq!(Edge::new(5, 4, 3i64).to_string(), "5 - 4 : 3");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Edge::new(0, 2, 4u32)).unwrap();
        assert_eq!(json, r#"{"u":0,"v":2,"weight":4}"#);
        let back: Edge<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Edge::new(0, 2, 4));
    }
}
