//! Brute-force percolation check by breadth-first search.

use std::collections::VecDeque;

////////////////////////////////////////////////////////////////////////////////

/// Represents a grid of open flags, indexed from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolGrid {
    width: usize,
    height: usize,
    lattice: Vec<Vec<bool>>,
}

impl BoolGrid {
    /// Creates a new grid with every site blocked.
    ///
    /// # Arguments
    ///
    /// * `width` - number of columns.
    /// * `height` - number of rows.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            lattice: vec![vec![false; width]; height],
        }
    }

    /// Returns grid width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns grid height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the site is open.
    ///
    /// # Panics
    ///
    /// If `row >= height` or `col >= width`.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.lattice[row][col]
    }

    /// Opens or blocks the site.
    ///
    /// # Panics
    ///
    /// If `row >= height` or `col >= width`.
    pub fn set(&mut self, row: usize, col: usize, open: bool) {
        self.lattice[row][col] = open
    }

    fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let moves: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        moves.into_iter().filter_map(move |(dr, dc)| {
            let row = row.checked_add_signed(dr)?;
            let col = col.checked_add_signed(dc)?;
            (row < self.height && col < self.width).then_some((row, col))
        })
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Returns `true` if some chain of adjacent open sites connects the first
/// row to the last one. An empty grid does not percolate.
pub fn percolates(grid: &BoolGrid) -> bool {
    if grid.width() == 0 || grid.height() == 0 {
        return false;
    }

    let mut visited = vec![vec![false; grid.width()]; grid.height()];
    let mut queue = VecDeque::new();
    for col in 0..grid.width() {
        if grid.get(0, col) {
            visited[0][col] = true;
            queue.push_back((0, col));
        }
    }

    while let Some((row, col)) = queue.pop_front() {
        if row == grid.height() - 1 {
            return true;
        }
        for (r, c) in grid.neighbors(row, col) {
            if grid.get(r, c) && !visited[r][c] {
                visited[r][c] = true;
                queue.push_back((r, c));
            }
        }
    }

    false
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(rows: &[&str]) -> BoolGrid {
        let mut grid = BoolGrid::new(rows[0].len(), rows.len());
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                grid.set(r, c, ch == '.');
            }
        }
        grid
    }

    #[test]
    fn straight_column() {
        assert!(percolates(&parse(&["#.#", "#.#", "#.#"])));
    }

    #[test]
    fn winding_path() {
        assert!(percolates(&parse(&[".##", "..#", "#..", "##."])));
    }

    #[test]
    fn diagonal_is_not_adjacent() {
        assert!(!percolates(&parse(&[".##", "#.#", "##."])));
    }

    #[test]
    fn blocked_and_empty() {
        assert!(!percolates(&BoolGrid::new(4, 4)));
        assert!(!percolates(&BoolGrid::new(0, 0)));
        assert!(percolates(&parse(&["."])));
    }
}
