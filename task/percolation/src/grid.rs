use crate::{
    reachability::BoolGrid,
    site::{ensure_positive, SiteIndex, TOP},
    union_find::UnionFind,
    Result,
};

////////////////////////////////////////////////////////////////////////////////

/// An `n`-by-`n` lattice of sites, all blocked initially.
///
/// Sites are addressed by 1-indexed `(row, col)` pairs. Every site of the
/// first row is joined to a virtual top site and every site of the last row
/// to a virtual bottom site, so percolation is a single connectivity query.
///
/// Since every open site of the last row shares the virtual bottom site,
/// once the lattice percolates [`is_full`](Self::is_full) also reports
/// bottom-row sites that are only reachable from below ("backwash").
#[derive(Debug, Clone)]
pub struct Percolation {
    index: SiteIndex,
    opened: Vec<Vec<bool>>,
    open_count: usize,
    connectivity: UnionFind,
}

impl Percolation {
    /// Creates a lattice of side `n` with every site blocked.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`](crate::Error::InvalidArgument) if `n` is zero.
    pub fn new(n: usize) -> Result<Self> {
        let n = ensure_positive("grid size", n)?;
        let index = SiteIndex::new(n);

        Ok(Self {
            index,
            opened: vec![vec![false; n]; n],
            open_count: 0,
            connectivity: UnionFind::new(index.universe()),
        })
    }

    /// Returns the side of the lattice.
    pub fn size(&self) -> usize {
        self.index.size()
    }

    /// Opens the site and joins it with its open neighbors.
    ///
    /// Every call counts towards [`number_of_open_sites`](Self::number_of_open_sites),
    /// even if the site was already open.
    ///
    /// # Arguments
    ///
    /// * `row` - must be in `[1, n]`.
    /// * `col` - must be in `[1, n]`.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        self.index.validate(row, col)?;
        log::trace!("opening site ({row}, {col})");

        self.opened[row - 1][col - 1] = true;
        self.open_count += 1;

        let id = self.index.id(row, col);
        if row == 1 {
            self.connectivity.union(id, TOP)?;
        }
        if row == self.size() {
            self.connectivity.union(id, self.index.bottom())?;
        }
        for (r, c) in self.index.neighbors(row, col) {
            if self.opened[r - 1][c - 1] {
                self.connectivity.union(id, self.index.id(r, c))?;
            }
        }

        Ok(())
    }

    /// Returns `true` if the site has been opened.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.index.validate(row, col)?;
        Ok(self.opened[row - 1][col - 1])
    }

    /// Returns `true` if the site is connected to the virtual top site.
    ///
    /// Blocked sites are never full: they stay alone in their own set.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        self.index.validate(row, col)?;
        self.connectivity.connected(self.index.id(row, col), TOP)
    }

    /// Returns the number of [`open`](Self::open) calls made so far.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Returns `true` if the virtual top and bottom sites are connected.
    pub fn percolates(&mut self) -> bool {
        let bottom = self.index.bottom();
        // Both virtual sites are always inside the forest.
        self.connectivity.connected(TOP, bottom).unwrap_or(false)
    }

    /// Copies the open flags into a 0-indexed [`BoolGrid`].
    pub fn to_bool_grid(&self) -> BoolGrid {
        let n = self.size();
        let mut grid = BoolGrid::new(n, n);
        for (row, flags) in self.opened.iter().enumerate() {
            for (col, &open) in flags.iter().enumerate() {
                grid.set(row, col, open);
            }
        }
        grid
    }
}

////////////////////////////////////////////////////////////////////////////////
