//! Debounced button with click and press-and-hold detection
//!
//! Converts a polled raw level into edge events. Raw transitions inside the
//! debounce window are treated as bounce and ignored; a click is a release
//! that follows a press which never reached the hold threshold.

use embassy_time::{Duration, Instant};

use crate::DigitalInput;

/// Raw digital level of an input pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// Settled logical state of the button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Pressed,
    Released,
}

/// Receiver of button edge events
///
/// All methods default to no-ops, so a listener only implements the
/// gestures it cares about.
pub trait ButtonListener {
    fn on_pressed(&mut self, _now: Instant) {}
    fn on_released(&mut self, _now: Instant) {}
    fn on_clicked(&mut self, _now: Instant) {}
    fn on_press_and_hold(&mut self, _now: Instant) {}
}

/// Configuration for a debounced button
#[derive(Debug, Clone, Copy)]
pub struct ButtonConfig {
    /// Minimum time between settled transitions
    pub debounce: Duration,
    /// Press duration after which a hold fires
    pub hold_threshold: Duration,
    /// Whether a low level means pressed (pull-up wiring)
    pub active_low: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(20),
            hold_threshold: Duration::from_millis(250),
            active_low: true,
        }
    }
}

/// Debounced button state machine
#[derive(Debug)]
pub struct DebouncedButton {
    config: ButtonConfig,
    settled: State,
    held: bool,
    last_settle: Instant,
    press_started: Instant,
}

impl DebouncedButton {
    pub const fn new(config: ButtonConfig) -> Self {
        Self {
            config,
            settled: State::Released,
            held: false,
            last_settle: Instant::from_millis(0),
            press_started: Instant::from_millis(0),
        }
    }

    /// Sample the input and dispatch any resulting events.
    ///
    /// Call this once per loop iteration. Hold detection runs on every poll,
    /// independent of level transitions.
    pub fn poll<D: DigitalInput, L: ButtonListener>(
        &mut self,
        input: &mut D,
        now: Instant,
        listener: &mut L,
    ) {
        let state = self.state_of(input.read_level());

        self.check_hold(now, listener);

        if state == self.settled {
            return;
        }
        if now.duration_since(self.last_settle) < self.config.debounce {
            // Bounce
            return;
        }
        self.last_settle = now;
        self.settle(state, now, listener);
    }

    const fn state_of(&self, level: Level) -> State {
        let pressed = matches!(level, Level::Low) == self.config.active_low;
        if pressed { State::Pressed } else { State::Released }
    }

    fn settle<L: ButtonListener>(&mut self, state: State, now: Instant, listener: &mut L) {
        if state == State::Pressed {
            self.press_started = now;
            listener.on_pressed(now);
        } else {
            listener.on_released(now);
        }

        if state == State::Released && self.settled == State::Pressed && !self.held {
            listener.on_clicked(now);
        }

        if state == State::Released {
            self.held = false;
        }

        self.settled = state;
    }

    fn check_hold<L: ButtonListener>(&mut self, now: Instant, listener: &mut L) {
        if self.settled == State::Pressed
            && !self.held
            && now.duration_since(self.press_started) > self.config.hold_threshold
        {
            self.held = true;
            listener.on_press_and_hold(now);
        }
    }
}
