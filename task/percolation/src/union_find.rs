//! Disjoint-set forest over the elements `0..n`.
//!
//! Union by size keeps every tree at most `log2(n)` deep, and `find`
//! compresses the path it walks, so both operations run in amortized
//! near-constant time.

use crate::{Error, Result};

////////////////////////////////////////////////////////////////////////////////

/// Weighted quick-union with path compression.
///
/// # Examples
/// ```
/// use percolation::UnionFind;
///
/// let mut uf = UnionFind::new(4);
/// uf.union(0, 1).unwrap();
/// uf.union(2, 3).unwrap();
/// assert_eq!(uf.count(), 2);
/// assert!(uf.connected(0, 1).unwrap());
/// assert!(!uf.connected(1, 2).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n - 1}`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the canonical representative of the set containing `p`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `p >= len()`.
    pub fn find(&mut self, p: usize) -> Result<usize> {
        self.validate(p)?;
        Ok(self.root(p))
    }

    /// Merges the sets containing `p` and `q`.
    ///
    /// Returns `true` if they were in different sets before the call.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if either element is out of range.
    pub fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        self.validate(p)?;
        self.validate(q)?;

        let root_p = self.root(p);
        let root_q = self.root(q);
        if root_p == root_q {
            return Ok(false);
        }

        let (small, large) = if self.size[root_p] < self.size[root_q] {
            (root_p, root_q)
        } else {
            (root_q, root_p)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.count -= 1;

        Ok(true)
    }

    /// Returns `true` if `p` and `q` share a representative.
    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    fn root(&mut self, p: usize) -> usize {
        let mut root = p;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = p;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    fn validate(&self, p: usize) -> Result<()> {
        if p >= self.len() {
            return Err(Error::InvalidArgument(format!(
                "element {p} is not in [0, {})",
                self.len()
            )));
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.len(), 5);
        assert_eq!(uf.count(), 5);
        for p in 0..5 {
            assert_eq!(uf.find(p).unwrap(), p);
        }
    }

    #[test]
    fn empty() {
        let mut uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.count(), 0);
        assert!(uf.find(0).is_err());
    }

    #[test]
    fn union_merges_once() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1).unwrap());
        assert!(!uf.union(1, 0).unwrap());
        assert_eq!(uf.count(), 4);
        assert!(uf.connected(0, 1).unwrap());
    }

    #[test]
    fn transitivity() {
        let mut uf = UnionFind::new(6);
        uf.union(0, 1).unwrap();
        uf.union(2, 3).unwrap();
        assert!(!uf.connected(0, 3).unwrap());

        uf.union(1, 2).unwrap();
        assert!(uf.connected(0, 3).unwrap());
        assert!(!uf.connected(0, 5).unwrap());
        assert_eq!(uf.count(), 3);
    }

    #[test]
    fn smaller_tree_goes_under_larger() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1).unwrap();
        uf.union(0, 2).unwrap();
        let root = uf.find(0).unwrap();

        uf.union(3, 0).unwrap();
        assert_eq!(uf.find(3).unwrap(), root);
    }

    #[test]
    fn out_of_range() {
        let mut uf = UnionFind::new(3);
        assert!(matches!(uf.find(3), Err(Error::InvalidArgument(_))));
        assert!(matches!(uf.union(0, 3), Err(Error::InvalidArgument(_))));
        assert!(matches!(uf.union(7, 0), Err(Error::InvalidArgument(_))));
        assert!(matches!(uf.connected(0, 4), Err(Error::InvalidArgument(_))));
        assert_eq!(uf.count(), 3);
    }

    #[test]
    fn long_chain() {
        let n = 10_000;
        let mut uf = UnionFind::new(n);
        for p in 1..n {
            uf.union(p - 1, p).unwrap();
        }
        assert_eq!(uf.count(), 1);
        assert!(uf.connected(0, n - 1).unwrap());
    }
}
