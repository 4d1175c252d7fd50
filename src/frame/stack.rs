//! Frame Stack
//!
//! Ordered bottom-to-top arena of frames encoding one linear narrowing path.
//! The bottom frame is keyed by the empty string and can never be popped.

use super::Frame;
use crate::error::StackError;

/// Non-empty stack of frames
#[derive(Debug, Clone)]
pub struct FrameStack<T> {
    frames: Vec<Frame<T>>,
}

impl<T> FrameStack<T> {
    /// Create a stack holding a single root frame over `items`
    pub fn new(items: Vec<T>) -> Self {
        Self {
            frames: vec![Frame::root(items)],
        }
    }

    /// Top frame. Always present.
    pub fn top(&self) -> &Frame<T> {
        &self.frames[self.frames.len() - 1]
    }

    pub(crate) fn top_mut(&mut self) -> &mut Frame<T> {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// Push a frame whose key extends the current top key.
    pub fn push(&mut self, frame: Frame<T>) {
        debug_assert!(
            frame.key().len() > self.top().key().len(),
            "pushed key {:?} must be longer than top key {:?}",
            frame.key(),
            self.top().key()
        );
        debug_assert!(
            frame.key().starts_with(self.top().key()),
            "pushed key {:?} must extend top key {:?}",
            frame.key(),
            self.top().key()
        );
        self.frames.push(frame);
    }

    /// Remove and return the top frame.
    ///
    /// Fails with [`StackError::Underflow`] when only the root frame remains.
    pub fn pop(&mut self) -> Result<Frame<T>, StackError> {
        if self.frames.len() == 1 {
            return Err(StackError::Underflow);
        }
        self.frames.pop().ok_or(StackError::Underflow)
    }

    /// Pop the top frame and merge its items into the frame below.
    pub fn merge_top(&mut self) -> Result<(), StackError> {
        let popped = self.pop()?;
        self.top_mut().absorb(popped);
        Ok(())
    }

    /// Number of frames, root included
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Total items held across all frames
    pub fn item_count(&self) -> usize {
        self.frames.iter().map(Frame::len).sum()
    }

    /// Frames from bottom to top
    pub fn frames(&self) -> impl Iterator<Item = &Frame<T>> {
        self.frames.iter()
    }

    /// Consume the stack, returning every item from the bottom frame upward.
    pub fn into_items(self) -> Vec<T> {
        self.frames.into_iter().flat_map(Frame::into_items).collect()
    }
}
