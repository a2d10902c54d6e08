//! Disjoint-set (Union-Find) data structure.
//!
//! Maintains a partition of the vertices `0..n` into disjoint sets with
//! near-constant-time union and find operations. This is the cycle
//! detector behind Kruskal's algorithm: an edge closes a cycle exactly when
//! both endpoints already share a representative.
//!
//! # Algorithm
//!
//! Uses **path compression** during `find` and **union by rank** during
//! `union` to achieve amortized O(α(n)) per operation, where α is the
//! inverse Ackermann function.
//!
//! `find` is iterative (walk to the root, then a second pass re-pointing
//! every visited node), so arbitrarily long parent chains cannot exhaust
//! the stack.
//!
//! # References
//!
//! - Tarjan (1975), "Efficiency of a Good but Not Linear Set Union Algorithm"
//! - Tarjan & van Leeuwen (1984), "Worst-Case Analysis of Set Union Algorithms"

use log::trace;

use crate::error::MstError;

/// Disjoint-set forest with path compression and union by rank.
///
/// # Examples
/// ```
/// use kruskal_mst::collections::UnionFind;
///
/// let mut uf = UnionFind::new(5);
/// assert_eq!(uf.component_count(), 5);
///
/// uf.union(0, 1)?;
/// uf.union(2, 3)?;
/// assert_eq!(uf.component_count(), 3);
///
/// assert!(uf.connected(0, 1)?);
/// assert!(!uf.connected(0, 2)?);
///
/// uf.union(1, 3)?;
/// assert!(uf.connected(0, 2)?); // transitivity
/// assert_eq!(uf.component_count(), 2);
///
/// assert!(uf.find(9).is_err());
/// # Ok::<(), kruskal_mst::MstError>(())
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Creates `n` disjoint singleton sets `{0}, {1}, ..., {n-1}`, each of
    /// rank 0.
    ///
    /// # Complexity
    /// O(n)
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            size: vec![1; n],
            components: n,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Finds the representative (root) of the set containing `x`.
    ///
    /// Applies **path compression**: every node on the path from `x` to
    /// the root is made a direct child of the root.
    ///
    /// # Errors
    /// - [`MstError::VertexOutOfRange`] if `x >= len()`.
    /// - [`MstError::InternalInvariantViolation`] if the parent walk does
    ///   not reach a root within `len()` steps.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    pub fn find(&mut self, x: usize) -> Result<usize, MstError> {
        self.check(x)?;

        let mut root = x;
        let mut steps = 0;
        while self.parent[root] != root {
            root = self.parent[root];
            steps += 1;
            if steps > self.parent.len() {
                return Err(MstError::InternalInvariantViolation {
                    detail: format!("parent chain from vertex {x} does not reach a root"),
                });
            }
        }

        let mut node = x;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Uses **union by rank**: the root with smaller rank is attached under
    /// the root with larger rank. On a tie `y`'s root goes under `x`'s root
    /// and `x`'s root gains one rank.
    ///
    /// # Returns
    /// `true` if `x` and `y` were in different sets (and are now merged),
    /// `false` if they were already in the same set.
    ///
    /// # Errors
    /// Same as [`find`](Self::find), for either argument.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool, MstError> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x == root_y {
            return Ok(false);
        }

        let (root, child) = match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => (root_y, root_x),
            std::cmp::Ordering::Greater => (root_x, root_y),
            std::cmp::Ordering::Equal => {
                self.rank[root_x] += 1;
                (root_x, root_y)
            }
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.components -= 1;

        trace!(
            "union({x}, {y}): root {child} attached under {root} (rank {})",
            self.rank[root]
        );
        Ok(true)
    }

    /// Returns `true` if `x` and `y` are in the same set.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool, MstError> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Returns the number of disjoint sets.
    ///
    /// # Complexity
    /// O(1)
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the size of the set containing `x`.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    pub fn component_size(&mut self, x: usize) -> Result<usize, MstError> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }

    /// Returns the rank stored for `x`. Only meaningful while `x` is a root.
    pub fn rank_of(&self, x: usize) -> Result<u8, MstError> {
        self.check(x)?;
        Ok(self.rank[x])
    }

    /// Returns the current parent pointer of `x` without compressing.
    pub fn parent_of(&self, x: usize) -> Result<usize, MstError> {
        self.check(x)?;
        Ok(self.parent[x])
    }

    fn check(&self, x: usize) -> Result<(), MstError> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(MstError::VertexOutOfRange {
                vertex: x,
                vertex_count: self.parent.len(),
                edge_index: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let uf = UnionFind::new(5);
        assert_eq!(uf.len(), 5);
        assert_eq!(uf.component_count(), 5);
        for i in 0..5 {
            assert_eq!(uf.parent_of(i).unwrap(), i);
            assert_eq!(uf.rank_of(i).unwrap(), 0);
        }
    }

    #[test]
    fn test_new_empty() {
        let mut uf = UnionFind::new(0);
        assert_eq!(uf.len(), 0);
        assert!(uf.is_empty());
        assert_eq!(uf.component_count(), 0);
        assert!(uf.find(0).is_err());
    }

    #[test]
    fn test_find_initial() {
        let mut uf = UnionFind::new(5);
        for i in 0..5 {
            assert_eq!(uf.find(i).unwrap(), i);
        }
    }

    #[test]
    fn test_find_out_of_range() {
        let mut uf = UnionFind::new(3);
        assert_eq!(
            uf.find(3),
            Err(MstError::VertexOutOfRange {
                vertex: 3,
                vertex_count: 3,
                edge_index: None,
            })
        );
        assert!(uf.union(0, 7).is_err());
        // A failed union leaves the partition untouched.
        assert_eq!(uf.component_count(), 3);
    }

    #[test]
    fn test_union_basic() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1).unwrap());
        assert!(uf.connected(0, 1).unwrap());
        assert_eq!(uf.component_count(), 4);
    }

    #[test]
    fn test_union_same_set() {
        let mut uf = UnionFind::new(5);
        uf.union(0, 1).unwrap();
        assert!(!uf.union(0, 1).unwrap()); // already same set
        assert!(!uf.union(1, 0).unwrap());
        assert_eq!(uf.component_count(), 4);
    }

    #[test]
    fn test_equal_rank_attaches_y_under_x() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1).unwrap();
        assert_eq!(uf.parent_of(1).unwrap(), 0);
        assert_eq!(uf.rank_of(0).unwrap(), 1);

        uf.union(3, 2).unwrap();
        assert_eq!(uf.parent_of(2).unwrap(), 3);
        assert_eq!(uf.rank_of(3).unwrap(), 1);

        uf.union(2, 1).unwrap();
        // Roots 3 and 0 tie at rank 1; 0 (root of y) goes under 3.
        assert_eq!(uf.parent_of(0).unwrap(), 3);
        assert_eq!(uf.rank_of(3).unwrap(), 2);
    }

    #[test]
    fn test_lower_rank_goes_under_higher_rank() {
        let mut uf = UnionFind::new(3);
        uf.union(0, 1).unwrap();
        // Singleton 2 (rank 0) merged with root 0 (rank 1), in both orders.
        uf.union(2, 0).unwrap();
        assert_eq!(uf.parent_of(2).unwrap(), 0);
        assert_eq!(uf.rank_of(0).unwrap(), 1);
    }

    #[test]
    fn test_path_compression_flattens() {
        let mut uf = UnionFind::new(8);
        // Build a rank-3 tree: ((0,1),(2,3)),((4,5),(6,7)).
        for (x, y) in [(0, 1), (2, 3), (4, 5), (6, 7), (0, 2), (4, 6), (0, 4)] {
            uf.union(x, y).unwrap();
        }
        assert_eq!(uf.rank_of(0).unwrap(), 3);
        // 7 -> 6 -> 4 -> 0 before compression.
        assert_eq!(uf.parent_of(7).unwrap(), 6);
        assert_eq!(uf.find(7).unwrap(), 0);
        assert_eq!(uf.parent_of(7).unwrap(), 0);
        assert_eq!(uf.parent_of(6).unwrap(), 0);
    }

    #[test]
    fn test_transitivity() {
        let mut uf = UnionFind::new(5);
        uf.union(0, 1).unwrap();
        uf.union(1, 2).unwrap();
        assert!(uf.connected(0, 2).unwrap());
    }

    #[test]
    fn test_merge_components() {
        let mut uf = UnionFind::new(5);
        uf.union(0, 1).unwrap();
        uf.union(2, 3).unwrap();
        assert_eq!(uf.component_count(), 3);

        uf.union(1, 3).unwrap(); // merge two components
        assert_eq!(uf.component_count(), 2);
        assert!(uf.connected(0, 2).unwrap());
        assert!(uf.connected(0, 3).unwrap());
        assert!(!uf.connected(0, 4).unwrap());
    }

    #[test]
    fn test_component_size() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.component_size(0).unwrap(), 1);

        uf.union(0, 1).unwrap();
        assert_eq!(uf.component_size(0).unwrap(), 2);
        assert_eq!(uf.component_size(1).unwrap(), 2);

        uf.union(0, 2).unwrap();
        assert_eq!(uf.component_size(2).unwrap(), 3);
    }

    #[test]
    fn test_many_unions_into_one_set() {
        let n = 200_000;
        let mut uf = UnionFind::new(n);
        for i in 1..n {
            uf.union(0, i).unwrap();
        }
        assert_eq!(uf.component_count(), 1);
        assert_eq!(uf.find(n - 1).unwrap(), 0);
    }
}
