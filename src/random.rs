use rand::Rng;

/// The random choices a maze generator makes.
///
/// Every `rand::Rng` is a `RandomSource`, so a thread rng, a seeded `StdRng` or any other generator
/// can be handed straight to the generators. Tests can implement this directly to script the
/// choices.
pub trait RandomSource {
    /// A fair coin toss.
    fn coin_flip(&mut self) -> bool;

    /// An index picked uniformly from `low + 1 ..= high - 1`.
    ///
    /// Callers guarantee `high - low >= 2` so the range is never empty.
    fn strictly_between(&mut self, low: usize, high: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    #[inline]
    fn coin_flip(&mut self) -> bool {
        self.gen()
    }

    #[inline]
    fn strictly_between(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low + 1..high)
    }
}
