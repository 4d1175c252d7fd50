//! Cache Statistics
//!
//! Counters recording how much work the cache performed. Useful for checking
//! that repeated or shortened queries are served without rescanning.

/// Work counters accumulated across all `resolve` calls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Calls to `resolve`
    pub resolves: u64,
    /// Resolves answered by an existing frame without any narrowing
    pub hits: u64,
    /// Narrow steps that pushed a new frame
    pub narrows: u64,
    /// Narrow steps that found no match (not memoized)
    pub misses: u64,
    /// Frames popped and merged back into their parent
    pub backtracks: u64,
    /// Items passed to the matcher
    pub items_scanned: u64,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Narrow attempts of either outcome
    pub fn narrow_attempts(&self) -> u64 {
        self.narrows + self.misses
    }
}
