//! Disjoint-set (union-find) forest with path compression.
//!
//! Backs the grid connectivity tracker: region labels are elements, and two
//! labels belong to the same connected region when they share a root. The
//! structure is single-writer; `find` takes `&mut self` because compression
//! rewrites parent pointers (the induced partition never changes).

use crate::error::{Error, Result};

/// Number of elements reserved by [`DisjointSet::default`].
const DEFAULT_CAPACITY: usize = 1000;

/// Minimum number of slots added whenever the backing array grows.
const GROWTH_INCREMENT: usize = 100;

/// Array-backed union-find over non-negative integer elements.
///
/// Elements at or beyond the current capacity are implicit singletons:
/// [`DisjointSet::find`] returns them unchanged without materializing them,
/// and [`DisjointSet::union`] grows the backing array first.
///
/// There is no union-by-rank; the second argument's root always wins. Path
/// compression alone keeps amortized costs near-constant for the access
/// patterns the grid tracker produces (labels unioned once per scan).
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// `parent[i] == i` marks a root.
    parent: Vec<i32>,
}

impl DisjointSet {
    /// Create a set where every element in `[0, capacity)` is a singleton.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            parent: (0..capacity).map(|i| i as i32).collect(),
        }
    }

    /// Current number of materialized elements.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.parent.len()
    }

    /// Reset every materialized element to a singleton without shrinking.
    pub fn clear(&mut self) {
        for (i, parent) in self.parent.iter_mut().enumerate() {
            *parent = i as i32;
        }
    }

    /// Find the root of `x`, compressing the traversed path.
    ///
    /// Every element on the walk from `x` to its root is re-pointed directly
    /// at the root, not just `x` itself. An element at or beyond the current
    /// capacity is its own root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `x` is negative.
    pub fn find(&mut self, x: i32) -> Result<i32> {
        if x < 0 {
            return Err(Error::OutOfRange { index: x });
        }
        let start = x as usize;
        if start >= self.parent.len() {
            return Ok(x);
        }

        let mut root = start;
        while self.parent[root] != root as i32 {
            root = self.parent[root] as usize;
        }

        let mut cursor = start;
        while self.parent[cursor] != root as i32 {
            let next = self.parent[cursor] as usize;
            self.parent[cursor] = root as i32;
            cursor = next;
        }

        Ok(root as i32)
    }

    /// Merge the sets containing `p` and `q`.
    ///
    /// Grows the backing array when `max(p, q)` exceeds the current
    /// capacity, to `max(max(p, q) + 1, capacity + 100)`, with the new slots
    /// self-parented. Equal roots are a no-op; otherwise `p`'s root is
    /// linked under `q`'s root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either index is negative.
    pub fn union(&mut self, p: i32, q: i32) -> Result<()> {
        if p < 0 {
            return Err(Error::OutOfRange { index: p });
        }
        if q < 0 {
            return Err(Error::OutOfRange { index: q });
        }

        let bigger = p.max(q) as usize;
        if bigger >= self.parent.len() {
            let target = (bigger + 1).max(self.parent.len() + GROWTH_INCREMENT);
            self.parent.extend((self.parent.len()..target).map(|i| i as i32));
        }

        let p_root = self.find(p)?;
        let q_root = self.find(q)?;
        if p_root == q_root {
            return Ok(());
        }

        self.parent[p_root as usize] = q_root;
        Ok(())
    }

    /// Whether `p` and `q` currently share a root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either index is negative.
    pub fn is_connected(&mut self, p: i32, q: i32) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }
}

impl Default for DisjointSet {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
