//! Cache Frames
//!
//! A frame pairs a query prefix with the items that match it and have not been
//! claimed by a longer cached prefix. Frames are stacked into a single linear
//! narrowing path by [`FrameStack`].

pub mod stack;

pub use stack::FrameStack;

/// Cache frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<T> {
    key: String,
    items: Vec<T>,
}

impl<T> Frame<T> {
    /// Create a frame owning `items` under `key`
    pub fn new(key: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            key: key.into(),
            items,
        }
    }

    /// Create the root frame: empty key, every item unfiltered
    pub fn root(items: Vec<T>) -> Self {
        Self::new(String::new(), items)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Move every item matching `pred` into a new frame keyed by `key`.
    ///
    /// Relative order is kept on both sides. Returns `None`, leaving this frame
    /// untouched, when nothing matches.
    pub fn split_off_matching<F>(&mut self, key: &str, mut pred: F) -> Option<Frame<T>>
    where
        F: FnMut(&T) -> bool,
    {
        let (matched, rest): (Vec<T>, Vec<T>) =
            std::mem::take(&mut self.items).into_iter().partition(|item| pred(item));
        self.items = rest;

        if matched.is_empty() {
            None
        } else {
            Some(Frame::new(key, matched))
        }
    }

    /// Append `other`'s items after this frame's own, consuming `other`.
    pub fn absorb(&mut self, other: Frame<T>) {
        self.items.extend(other.items);
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
