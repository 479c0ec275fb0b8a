//! Bounded rotary event queue for `no_std` environments
//!
//! The host's quadrature decoder (often an interrupt handler) pushes
//! discrete rotation steps; the control loop drains them each poll. Built on
//! `critical-section` and `heapless::Deque`, so it is safe to share between
//! an ISR and the main loop.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// One discrete rotation step of an encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotaryEvent {
    StepLeft,
    StepRight,
}

/// Error returned when pushing into a full queue.
///
/// Dropping excess steps is acceptable; the user simply keeps turning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull;

/// A bounded, interrupt-safe queue of rotation steps.
pub struct RotaryChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<RotaryEvent, SIZE>>>,
}

impl<const SIZE: usize> RotaryChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle, typically handed to the decoder ISR.
    pub const fn sender(&self) -> RotarySender<'_, SIZE> {
        RotarySender { channel: self }
    }

    /// Get a receiver handle for the control loop.
    pub const fn receiver(&self) -> RotaryReceiver<'_, SIZE> {
        RotaryReceiver { channel: self }
    }

    fn push(&self, event: RotaryEvent) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(|_| QueueFull)
        })
    }

    fn pop(&self) -> Option<RotaryEvent> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }
}

impl<const SIZE: usize> Default for RotaryChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`RotaryChannel`].
#[derive(Clone, Copy)]
pub struct RotarySender<'a, const SIZE: usize> {
    channel: &'a RotaryChannel<SIZE>,
}

impl<const SIZE: usize> RotarySender<'_, SIZE> {
    /// Push one rotation step, dropping it if the queue is full.
    pub fn send(&self, event: RotaryEvent) -> Result<(), QueueFull> {
        self.channel.push(event)
    }
}

/// A receiver handle for a [`RotaryChannel`].
#[derive(Clone, Copy)]
pub struct RotaryReceiver<'a, const SIZE: usize> {
    channel: &'a RotaryChannel<SIZE>,
}

impl<const SIZE: usize> RotaryReceiver<'_, SIZE> {
    /// Take the next queued rotation step, if any.
    pub fn next_step(&self) -> Option<RotaryEvent> {
        self.channel.pop()
    }
}
