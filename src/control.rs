//! Input-to-intent mapping
//!
//! Binds one rotary encoder and one button to one strip controller.
//! Rotation normally adjusts the lit length; after a press-and-hold the
//! control enters a transient color-adjust mode where rotation changes the
//! hue or color temperature instead. The mode falls back to normal after an
//! idle timeout.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::button::{ButtonConfig, ButtonListener, DebouncedButton};
use crate::channel::{RotaryEvent, RotaryReceiver};
use crate::strip::{StepSizes, StripController};
use crate::{DigitalInput, PixelBus};

/// Configuration for the input mapping
#[derive(Debug, Clone, Copy)]
pub struct ControlConfig {
    /// Lit length change per rotation step in normal mode
    pub percent_step: f32,
    /// Color change per rotation step in color-adjust mode
    pub color_step: u8,
    /// Idle time after which color-adjust mode reverts to normal
    pub adjust_timeout: Duration,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            percent_step: 5.0,
            color_step: 15,
            adjust_timeout: Duration::from_millis(3000),
        }
    }
}

/// One encoder + one button driving one strip
pub struct StripControl<'a, const PIXEL_COUNT: usize, const EVENTS: usize> {
    strip: StripController<PIXEL_COUNT>,
    button: DebouncedButton,
    events: RotaryReceiver<'a, EVENTS>,
    config: ControlConfig,
    color_adjust: bool,
    last_adjust: Instant,
}

impl<'a, const PIXEL_COUNT: usize, const EVENTS: usize> StripControl<'a, PIXEL_COUNT, EVENTS> {
    pub const fn new(
        events: RotaryReceiver<'a, EVENTS>,
        button: ButtonConfig,
        steps: StepSizes,
        config: ControlConfig,
    ) -> Self {
        Self {
            strip: StripController::new(steps),
            button: DebouncedButton::new(button),
            events,
            config,
            color_adjust: false,
            last_adjust: Instant::from_millis(0),
        }
    }

    /// Assign the strip's frame buffer range.
    pub fn setup(&mut self, first_index: u16, invert: bool) {
        self.strip.setup(first_index, invert);
    }

    /// Drain queued rotation steps, poll the button and expire the
    /// color-adjust timeout.
    ///
    /// Call once per loop iteration with the host's monotonic clock.
    pub fn poll<D: DigitalInput>(&mut self, input: &mut D, now: Instant) {
        while let Some(event) = self.events.next_step() {
            self.handle_rotation(event, now);
        }

        let Self {
            strip,
            button,
            color_adjust,
            last_adjust,
            ..
        } = self;
        let mut intents = ButtonIntents {
            strip,
            color_adjust,
            last_adjust,
        };
        button.poll(input, now, &mut intents);

        if self.color_adjust && now.duration_since(self.last_adjust) > self.config.adjust_timeout {
            #[cfg(feature = "esp32-log")]
            println!("[StripControl.poll] color-adjust timed out");
            self.color_adjust = false;
        }
    }

    /// Run one convergence tick of the strip.
    ///
    /// Pass `force = true` to repaint every pixel, e.g. from an overlay draw
    /// hook after the host cleared the frame.
    pub fn tick<B: PixelBus>(&mut self, bus: &mut B, force: bool) {
        self.strip.tick(bus, force);
    }

    /// Whether rotation currently adjusts color instead of lit length.
    pub const fn is_color_adjusting(&self) -> bool {
        self.color_adjust
    }

    pub const fn strip(&self) -> &StripController<PIXEL_COUNT> {
        &self.strip
    }

    pub const fn strip_mut(&mut self) -> &mut StripController<PIXEL_COUNT> {
        &mut self.strip
    }

    fn handle_rotation(&mut self, event: RotaryEvent, now: Instant) {
        if self.color_adjust {
            self.last_adjust = now;
            match event {
                RotaryEvent::StepRight => self.strip.raise_color(self.config.color_step),
                RotaryEvent::StepLeft => self.strip.lower_color(self.config.color_step),
            }
        } else {
            match event {
                RotaryEvent::StepRight => self.strip.add_percentage(self.config.percent_step),
                RotaryEvent::StepLeft => self.strip.reduce_percentage(self.config.percent_step),
            }
        }
    }
}

/// Button gesture dispatch against a borrowed strip
struct ButtonIntents<'s, const PIXEL_COUNT: usize> {
    strip: &'s mut StripController<PIXEL_COUNT>,
    color_adjust: &'s mut bool,
    last_adjust: &'s mut Instant,
}

impl<const PIXEL_COUNT: usize> ButtonListener for ButtonIntents<'_, PIXEL_COUNT> {
    fn on_clicked(&mut self, now: Instant) {
        if *self.color_adjust {
            *self.last_adjust = now;
            let mode = self.strip.color_mode().toggled();
            self.strip.set_color_mode(mode);
        } else {
            self.strip.toggle();
        }
    }

    fn on_press_and_hold(&mut self, now: Instant) {
        *self.color_adjust = !*self.color_adjust;
        if *self.color_adjust {
            *self.last_adjust = now;
        }
        #[cfg(feature = "esp32-log")]
        println!(
            "[StripControl.poll] color-adjust {}",
            if *self.color_adjust { "on" } else { "off" }
        );
    }
}
