use heapless::Deque;

use crate::color::Rgb;

/// Output operations requested by the controller for one tick
///
/// The driver executes them in order against the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Blink the whole strip in the alert color, leaving it dark
    Blink(Rgb),
    /// Crossfade from the last flushed frame to all-off
    FadeOut,
    /// Capture the active mode and crossfade from all-off into it
    FadeIn,
    /// Flush an all-off frame
    Blank,
    /// Render and flush the next frame of the active mode
    Render,
}

/// Most operations one tick can produce: alert, mode change fades,
/// visibility fades and a render.
pub const MAX_TICK_OPERATIONS: usize = 8;

/// Ordered queue of operations to be performed by the driver
///
/// N is the number of operations the queue can hold
#[derive(Debug, Default)]
pub struct OperationQueue<const N: usize = MAX_TICK_OPERATIONS> {
    inner: Deque<Operation, N>,
}

impl<const N: usize> OperationQueue<N> {
    pub const fn new() -> Self {
        Self {
            inner: Deque::new(),
        }
    }

    /// Push an operation onto the queue
    ///
    /// Returns the operation if the queue is full
    pub fn push(&mut self, operation: Operation) -> Result<(), Operation> {
        self.inner.push_back(operation)
    }

    /// Pop the next operation from the queue
    ///
    /// Returns None if the queue is empty
    pub fn pop(&mut self) -> Option<Operation> {
        self.inner.pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over the queued operations in execution order
    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.inner.iter()
    }

    /// Push the fade pair that replaces the lit mode with the next one
    pub fn push_mode_change(&mut self) -> Result<(), Operation> {
        if N - self.inner.len() < 2 {
            return Err(Operation::FadeOut);
        }
        self.push(Operation::FadeOut)?;
        self.push(Operation::FadeIn)
    }

    /// Push the fade-out that turns the strip off
    pub fn push_power_off(&mut self) -> Result<(), Operation> {
        if N - self.inner.len() < 2 {
            return Err(Operation::FadeOut);
        }
        self.push(Operation::FadeOut)?;
        self.push(Operation::Blank)
    }
}
