#![no_std]

pub mod button;
pub mod channel;
pub mod color;
pub mod control;
pub mod field;
pub mod math8;
pub mod ramp;
pub mod strip;

pub use button::{ButtonConfig, ButtonListener, DebouncedButton, Level};
pub use channel::{RotaryChannel, RotaryEvent, RotaryReceiver, RotarySender};
pub use control::{ControlConfig, StripControl};
pub use field::target_brightness;
pub use ramp::{Direction, step_toward};
pub use strip::{ColorMode, StepSizes, StripController};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract indexed pixel frame buffer
///
/// Implement this trait to support different hardware platforms. Strip
/// controllers write derived pixel colors through it; presentation and
/// clearing stay with the host.
pub trait PixelBus {
    /// Write one pixel color at a global frame buffer index
    fn set_pixel(&mut self, index: u16, color: Rgb);

    /// Present the frame to the LEDs
    fn show(&mut self);

    /// Whether the buffer is mid-transfer. Controllers skip ticking while
    /// busy to avoid tearing.
    fn is_busy(&self) -> bool {
        false
    }

    /// Blank the frame buffer
    fn clear(&mut self);
}

/// Abstract polled digital input
///
/// One instance per pin; pin selection and pull-up wiring are the host's
/// responsibility.
pub trait DigitalInput {
    /// Sample the current raw level
    fn read_level(&mut self) -> Level;
}
