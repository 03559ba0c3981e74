use rand::Rng;

/// A source of uniformly distributed integers.
pub trait UniformSource {
    /// Draws an integer uniformly from `[lo, hi)`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `lo >= hi`.
    fn uniform_int(&mut self, lo: usize, hi: usize) -> usize;
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn uniform_int(&mut self, lo: usize, hi: usize) -> usize {
        self.gen_range(lo..hi)
    }
}
