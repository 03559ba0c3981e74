//! Monte Carlo estimate of the percolation threshold.

use crate::{grid::Percolation, random::UniformSource, site::ensure_positive, Result};

////////////////////////////////////////////////////////////////////////////////

/// Normal quantile of a two-sided 95% confidence interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Runs independent trials on an `n`-by-`n` lattice and summarizes the
/// fraction of sites opened at the moment each trial first percolated.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    grid_size: usize,
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Prepares `trials` trials on a lattice of side `n`. Every threshold
    /// reads `0.0` until [`run`](Self::run) is called.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`](crate::Error::InvalidArgument) if `n` or `trials`
    /// is zero.
    pub fn new(n: usize, trials: usize) -> Result<Self> {
        let grid_size = ensure_positive("grid size", n)?;
        let trials = ensure_positive("trials", trials)?;

        Ok(Self {
            grid_size,
            thresholds: vec![0.0; trials],
        })
    }

    /// Same as [`new`](Self::new) followed by [`run`](Self::run).
    pub fn simulate(n: usize, trials: usize, source: &mut impl UniformSource) -> Result<Self> {
        let mut stats = Self::new(n, trials)?;
        stats.run(source)?;
        Ok(stats)
    }

    /// Runs every trial, overwriting the recorded thresholds.
    pub fn run(&mut self, source: &mut impl UniformSource) -> Result<()> {
        for (i, threshold) in self.thresholds.iter_mut().enumerate() {
            *threshold = run_trial(self.grid_size, source)?;
            log::debug!("trial {}: threshold {}", i + 1, threshold);
        }

        log::info!(
            "{} trials on a {n}x{n} grid: mean {}",
            self.trials(),
            self.mean(),
            n = self.grid_size,
        );
        Ok(())
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        mean(&self.thresholds)
    }

    /// Sample standard deviation of the percolation threshold. `NaN` for a
    /// single trial.
    pub fn stddev(&self) -> f64 {
        stddev(&self.thresholds)
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Opens uniformly random sites of a fresh lattice until it percolates and
/// returns the number of `open` calls divided by `n * n`.
///
/// Draws are not filtered: a site may be picked, and counted, more than once.
pub fn run_trial(n: usize, source: &mut impl UniformSource) -> Result<f64> {
    let mut perc = Percolation::new(n)?;
    while !perc.percolates() {
        let row = source.uniform_int(1, n + 1);
        let col = source.uniform_int(1, n + 1);
        perc.open(row, col)?;
    }
    Ok(perc.number_of_open_sites() as f64 / (n * n) as f64)
}

/// Arithmetic mean. `NaN` for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample standard deviation with the `n - 1` denominator. `NaN` for fewer
/// than two values.
pub fn stddev(data: &[f64]) -> f64 {
    let mu = mean(data);
    let sum_sq: f64 = data.iter().map(|x| (x - mu) * (x - mu)).sum();
    (sum_sq / (data.len() as f64 - 1.0)).sqrt()
}

////////////////////////////////////////////////////////////////////////////////
