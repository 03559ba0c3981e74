#![forbid(unsafe_code)]

//! Site percolation on an `n`-by-`n` lattice.
//!
//! [`Percolation`] tracks which sites are open and answers connectivity
//! queries through a [`UnionFind`] forest with two virtual sites, one above
//! the first row and one below the last. [`PercolationStats`] estimates the
//! percolation threshold by opening random sites until the lattice
//! percolates, over a number of independent trials.

pub mod error;
pub mod grid;
pub mod random;
pub mod reachability;
pub mod site;
pub mod stats;
pub mod union_find;

pub use error::{Error, Result};
pub use grid::Percolation;
pub use random::UniformSource;
pub use reachability::BoolGrid;
pub use stats::PercolationStats;
pub use union_find::UnionFind;
