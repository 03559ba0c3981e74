//! Mapping between 1-indexed lattice coordinates and union-find elements.
//!
//! For a lattice of side `n` the forest holds `n * n + 2` elements: `0` is
//! the virtual top site, `1..=n * n` are the real sites in row-major order,
//! and `n * n + 1` is the virtual bottom site.

use crate::{Error, Result};

////////////////////////////////////////////////////////////////////////////////

/// Union-find element of the virtual site above the first row.
pub const TOP: usize = 0;

/// Returns `value` if it is at least one.
///
/// # Errors
///
/// [`Error::InvalidArgument`] naming `name` if `value` is zero.
pub fn ensure_positive(name: &str, value: usize) -> Result<usize> {
    if value == 0 {
        return Err(Error::InvalidArgument(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteIndex {
    size: usize,
}

impl SiteIndex {
    /// The caller must ensure that `size` is positive.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of union-find elements, virtual sites included.
    pub fn universe(&self) -> usize {
        self.size * self.size + 2
    }

    /// Union-find element of the virtual site below the last row.
    pub fn bottom(&self) -> usize {
        self.size * self.size + 1
    }

    /// Checks that both coordinates lie in `[1, size]`.
    pub fn validate(&self, row: usize, col: usize) -> Result<()> {
        if !(1..=self.size).contains(&row) || !(1..=self.size).contains(&col) {
            return Err(Error::InvalidArgument(format!(
                "site ({row}, {col}) is outside of [1, {n}] x [1, {n}]",
                n = self.size
            )));
        }
        Ok(())
    }

    /// Union-find element of a site. Coordinates must be valid.
    pub fn id(&self, row: usize, col: usize) -> usize {
        self.size * (row - 1) + col
    }

    /// Grid-adjacent sites of a valid site: up, down, left, right.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let n = self.size;
        [
            (row > 1).then(|| (row - 1, col)),
            (row < n).then(|| (row + 1, col)),
            (col > 1).then(|| (row, col - 1)),
            (col < n).then(|| (row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_a_bijection() {
        let index = SiteIndex::new(4);
        let mut ids = Vec::new();
        for row in 1..=4 {
            for col in 1..=4 {
                ids.push(index.id(row, col));
            }
        }
        assert_eq!(ids, (1..=16).collect::<Vec<_>>());
        assert_eq!(index.bottom(), 17);
        assert_eq!(index.universe(), 18);
        assert!(!ids.contains(&TOP));
    }

    #[test]
    fn validate_bounds() {
        let index = SiteIndex::new(3);
        assert!(index.validate(1, 1).is_ok());
        assert!(index.validate(3, 3).is_ok());
        for (row, col) in [(0, 1), (1, 0), (4, 1), (1, 4), (0, 0), (4, 4)] {
            assert!(matches!(
                index.validate(row, col),
                Err(Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn neighbors_stay_inside() {
        let index = SiteIndex::new(3);
        let corner: Vec<_> = index.neighbors(1, 1).collect();
        assert_eq!(corner, vec![(2, 1), (1, 2)]);

        let center: Vec<_> = index.neighbors(2, 2).collect();
        assert_eq!(center, vec![(1, 2), (3, 2), (2, 1), (2, 3)]);

        let single = SiteIndex::new(1);
        assert_eq!(single.neighbors(1, 1).count(), 0);
    }

    #[test]
    fn positive() {
        assert_eq!(ensure_positive("n", 3), Ok(3));
        assert!(matches!(
            ensure_positive("n", 0),
            Err(Error::InvalidArgument(_))
        ));
    }
}
