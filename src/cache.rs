//! Narrowing Cache
//!
//! Answers a sequence of progressively typed queries by reusing the frame left
//! by the previous query. Extending the query narrows the live pool; shortening
//! or diverging backtracks frames until the top key is a prefix of the query.

use crate::config::CacheConfig;
use crate::error::StackError;
use crate::frame::FrameStack;
use crate::matcher::{Contains, Matcher};
use crate::stats::CacheStats;
use tracing::{debug, instrument, trace};

/// Relation between the top frame key and the requested query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Top key equals the query
    Match,
    /// Top key is a proper prefix of the query
    Extend,
    /// Anything else: the top frame has to be unwound
    Diverge,
}

impl Step {
    fn classify(key: &str, query: &str) -> Self {
        if key == query {
            Step::Match
        } else if key.len() < query.len() && query.starts_with(key) {
            Step::Extend
        } else {
            Step::Diverge
        }
    }
}

/// Incremental substring-narrowing cache over a fixed dataset
///
/// Owns every item for its whole lifetime. Items only move between frames;
/// none are dropped or duplicated.
pub struct CacheManager<T, M> {
    stack: FrameStack<T>,
    matcher: M,
    stats: CacheStats,
}

impl<T: AsRef<str>> CacheManager<T, Contains> {
    /// Build a cache over text items using a [`Contains`] matcher configured by `config`
    pub fn from_config(items: Vec<T>, config: &CacheConfig) -> Self {
        let matcher = if config.case_sensitive {
            Contains::new()
        } else {
            Contains::case_insensitive()
        };
        Self::new(items, matcher)
    }
}

impl<T, M> CacheManager<T, M>
where
    M: Matcher<T>,
{
    /// Take ownership of `items` as the root frame's pool.
    pub fn new(items: Vec<T>, matcher: M) -> Self {
        debug!(items = items.len(), "Creating narrowing cache");
        Self {
            stack: FrameStack::new(items),
            matcher,
            stats: CacheStats::new(),
        }
    }

    /// Resolve `query` against the cached narrowing path.
    ///
    /// Returns the items matching `query`, or `None` when nothing in the dataset
    /// matches. The returned slice borrows the live top frame, so it must be
    /// dropped (or copied) before the next call.
    #[instrument(level = "debug", skip(self), fields(depth = self.stack.depth()))]
    pub fn resolve(&mut self, query: &str) -> Option<&[T]> {
        self.stats.resolves += 1;

        loop {
            match Step::classify(self.stack.top().key(), query) {
                Step::Match => {
                    self.stats.hits += 1;
                    debug!(found = self.stack.top().len(), "Resolved from cached frame");
                    return Some(self.stack.top().items());
                }
                Step::Extend => {
                    self.extend_to(query);
                    return if self.stack.top().key() == query {
                        debug!(found = self.stack.top().len(), "Resolved by narrowing");
                        Some(self.stack.top().items())
                    } else {
                        debug!(
                            reached = self.stack.top().key(),
                            "No match; narrowing stopped short of query"
                        );
                        None
                    };
                }
                Step::Diverge => {
                    if let Err(StackError::Underflow) = self.backtrack() {
                        debug!("No match; stack exhausted at root frame");
                        return None;
                    }
                }
            }
        }
    }

    /// Like [`resolve`](Self::resolve), but returns an owned snapshot.
    pub fn resolve_cloned(&mut self, query: &str) -> Option<Vec<T>>
    where
        T: Clone,
    {
        self.resolve(query).map(<[T]>::to_vec)
    }

    /// Pop the top frame and merge its items back into the frame below.
    ///
    /// Fails with [`StackError::Underflow`] at the root frame, leaving the stack untouched.
    pub fn backtrack(&mut self) -> Result<(), StackError> {
        let key_len = self.stack.top().key().len();
        self.stack.merge_top()?;
        self.stats.backtracks += 1;
        trace!(
            popped_key_len = key_len,
            top = self.stack.top().key(),
            pool = self.stack.top().len(),
            "Backtracked frame"
        );
        Ok(())
    }

    /// Unwind every frame, returning the full dataset to the root pool.
    pub fn reset(&mut self) {
        while self.backtrack().is_ok() {}
    }

    /// Narrow one token at a time from the top key up to `query`.
    ///
    /// Stops at the first token with no matches: with a monotone matcher no
    /// longer token can match a pool the shorter one emptied.
    fn extend_to(&mut self, query: &str) {
        let base = self.stack.top().key().len();
        for (offset, ch) in query[base..].char_indices() {
            let end = base + offset + ch.len_utf8();
            if !self.narrow(&query[..end]) {
                break;
            }
        }
    }

    /// Move the top frame's items matching `token` into a new frame keyed by `token`.
    ///
    /// Returns false, with no structural change, when nothing matches.
    fn narrow(&mut self, token: &str) -> bool {
        let matcher = &self.matcher;
        let prepared = matcher.prepare_token(token);
        let top = self.stack.top_mut();
        let scanned = top.len();
        let child = top.split_off_matching(token, |item| matcher.matches_prepared(item, &prepared));
        self.stats.items_scanned += scanned as u64;

        match child {
            Some(frame) => {
                trace!(
                    token,
                    matched = frame.len(),
                    remaining = self.stack.top().len(),
                    "Narrowed frame"
                );
                self.stack.push(frame);
                self.stats.narrows += 1;
                true
            }
            None => {
                trace!(token, scanned, "Narrow found no match");
                self.stats.misses += 1;
                false
            }
        }
    }
}

impl<T, M> CacheManager<T, M> {
    /// Key of the top frame
    pub fn current_key(&self) -> &str {
        self.stack.top().key()
    }

    /// Cached keys from the root upward
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.stack.frames().map(|frame| frame.key())
    }

    /// Number of frames, root included
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Total items owned by the cache, always the dataset size
    pub fn len(&self) -> usize {
        self.stack.item_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Consume the cache, returning every item from the root frame upward.
    pub fn into_items(self) -> Vec<T> {
        self.stack.into_items()
    }
}

impl<T, M> std::fmt::Debug for CacheManager<T, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheManager")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .field("items", &self.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
