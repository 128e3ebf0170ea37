//! Interval lookup cache for repeated nearby queries.

/// Remembers the last located knot interval.
///
/// A query inside the cached interval `[xs[i], xs[i+1])` is answered in
/// O(1); anything else falls back to a binary search bounded on the side of
/// the cache the query lies on. The cache only affects speed: the index
/// returned by [`Accelerator::find`] is always the correct interval.
///
/// An accelerator is not tied to one knot vector, but its statistics are only
/// meaningful when it is used with a single spline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accelerator {
    cache: usize,
    hits: u64,
    misses: u64,
}

impl Accelerator {
    /// Creates an empty accelerator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds `i` such that `xs[i] <= x < xs[i+1]`, with `x == xs[n-1]`
    /// mapping to the last interval `n-2`.
    ///
    /// The caller guarantees `xs.len() >= 2` and `xs[0] <= x <= xs[n-1]`.
    pub fn find(&mut self, xs: &[f64], x: f64) -> usize {
        let last = xs.len() - 1;
        // A cache from a longer knot vector is simply a miss.
        let cache = self.cache.min(last - 1);

        if x < xs[cache] {
            self.misses += 1;
            self.cache = bsearch(xs, x, 0, cache);
            log::trace!("accelerator miss below interval {cache}: now {}", self.cache);
        } else if x >= xs[cache + 1] {
            self.misses += 1;
            self.cache = bsearch(xs, x, cache, last);
            log::trace!("accelerator miss above interval {cache}: now {}", self.cache);
        } else {
            self.hits += 1;
            self.cache = cache;
        }

        self.cache
    }

    /// Index of the most recently located interval.
    pub fn cached_interval(&self) -> usize {
        self.cache
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that needed a search.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Clears the cache and the statistics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Binary search over `xs[lo..=hi]` for the interval containing `x`.
fn bsearch(xs: &[f64], x: f64, mut lo: usize, mut hi: usize) -> usize {
    while hi > lo + 1 {
        let mid = (lo + hi) / 2;
        if xs[mid] > x {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    lo
}
