//! Strip controller - per-strip convergence state machine
//!
//! Owns one strip's pixels and its current vs. requested color, color
//! temperature and lit length. Each tick moves every quantity one bounded
//! step toward its target and emits derived pixel colors, producing a smooth
//! fade instead of an instant jump.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PixelBus;
use crate::color::{Hsv, Rgb, hsv2rgb, kelvin_to_rgb, temperature_to_kelvin};
use crate::field::target_brightness;
use crate::math8::scale8;
use crate::ramp::{Direction, clamp_percent, step_toward};

/// Which quantity governs a strip's color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Hue byte on a 0-255 color wheel
    Rgb,
    /// Correlated color temperature, kelvin-mapped
    Cct,
}

impl ColorMode {
    /// The other mode
    pub const fn toggled(self) -> Self {
        match self {
            Self::Rgb => Self::Cct,
            Self::Cct => Self::Rgb,
        }
    }
}

/// Per-tick step magnitudes
///
/// The observed hardware variants use different magnitudes, so these are
/// configuration rather than constants. Brightness falls faster than it
/// rises, so a shrinking strip dims quicker than a growing one brightens.
#[derive(Debug, Clone, Copy)]
pub struct StepSizes {
    /// Hue and color temperature step per tick
    pub color: u8,
    /// Per-pixel brightness step when rising
    pub brightness_raise: u8,
    /// Per-pixel brightness step when falling
    pub brightness_fall: u8,
}

impl Default for StepSizes {
    fn default() -> Self {
        Self {
            color: 4,
            brightness_raise: 1,
            brightness_fall: 8,
        }
    }
}

/// One addressable LED of a strip
///
/// The index into the global frame buffer is assigned once at setup. The
/// displayed color is derived from strip state plus brightness on each tick
/// that touches the pixel, never stored here.
#[derive(Debug, Clone, Copy)]
struct Pixel {
    index: u16,
    brightness: u8,
}

impl Pixel {
    const fn new() -> Self {
        Self {
            index: 0,
            brightness: 255,
        }
    }
}

/// Per-strip convergence state machine
pub struct StripController<const PIXEL_COUNT: usize> {
    pixels: [Pixel; PIXEL_COUNT],
    steps: StepSizes,
    first_index: u16,
    lit_percent: f32,
    current_color: u8,
    requested_color: u8,
    current_temperature: u8,
    requested_temperature: u8,
    cct_color: Rgb,
    direction: Direction,
    mode: ColorMode,
    pending: bool,
    invert: bool,
    on: bool,
}

impl<const PIXEL_COUNT: usize> StripController<PIXEL_COUNT> {
    /// Create a controller with default state: on, CCT mode, half lit.
    ///
    /// The current temperature starts one step away from the requested one
    /// so the very first tick steps it and repaints every pixel.
    pub const fn new(steps: StepSizes) -> Self {
        Self {
            pixels: [Pixel::new(); PIXEL_COUNT],
            steps,
            first_index: 0,
            lit_percent: 50.0,
            current_color: 0,
            requested_color: 0,
            current_temperature: 100,
            requested_temperature: 99,
            cct_color: Rgb { r: 0, g: 0, b: 0 },
            direction: Direction::Increase,
            mode: ColorMode::Cct,
            pending: true,
            invert: false,
            on: true,
        }
    }

    /// Assign frame buffer indices starting at `first_index`.
    ///
    /// `invert` reverses which end of the strip lights first. Panics on a
    /// zero-length strip; that is a wiring error, not a runtime condition.
    pub fn setup(&mut self, first_index: u16, invert: bool) {
        assert!(PIXEL_COUNT > 0, "strip must have at least one pixel");
        self.first_index = first_index;
        self.invert = invert;
        for (offset, pixel) in self.pixels.iter_mut().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let offset = offset as u16;
            pixel.index = first_index + offset;
        }
        self.pending = true;
    }

    pub fn turn_on(&mut self) {
        self.on = true;
        self.pending = true;
    }

    pub fn turn_off(&mut self) {
        self.on = false;
        self.pending = true;
    }

    pub fn toggle(&mut self) {
        self.on = !self.on;
        self.pending = true;
    }

    /// Switch between hue and color temperature control. No-op while off.
    pub fn set_color_mode(&mut self, mode: ColorMode) {
        if !self.on {
            return;
        }
        self.mode = mode;
        self.pending = true;
    }

    /// Grow the lit length. No-op while off or when already at 100%.
    #[allow(clippy::float_cmp)]
    pub fn add_percentage(&mut self, amount: f32) {
        if !self.on {
            return;
        }
        let clamped = clamp_percent(self.lit_percent + amount);
        if clamped == self.lit_percent {
            // Already saturated, don't wake the loop
            return;
        }
        self.lit_percent = clamped;
        self.pending = true;
    }

    /// Shrink the lit length. No-op while off or when already at 0%.
    #[allow(clippy::float_cmp)]
    pub fn reduce_percentage(&mut self, amount: f32) {
        if !self.on {
            return;
        }
        let clamped = clamp_percent(self.lit_percent - amount);
        if clamped == self.lit_percent {
            return;
        }
        self.lit_percent = clamped;
        self.pending = true;
    }

    /// Request a warmer-to-cooler / hue-forward color change. No-op while off.
    ///
    /// In CCT mode the request is clamped at 255; in RGB mode the hue wraps
    /// around the color wheel.
    pub fn raise_color(&mut self, amount: u8) {
        if !self.on {
            return;
        }
        self.direction = Direction::Increase;
        match self.mode {
            ColorMode::Cct => {
                self.requested_temperature = self.requested_temperature.saturating_add(amount);
            }
            ColorMode::Rgb => {
                self.requested_color = self.requested_color.wrapping_add(amount);
            }
        }
        self.pending = true;
    }

    /// Request a color change in the opposite direction. No-op while off.
    pub fn lower_color(&mut self, amount: u8) {
        if !self.on {
            return;
        }
        self.direction = Direction::Decrease;
        match self.mode {
            ColorMode::Cct => {
                self.requested_temperature = self.requested_temperature.saturating_sub(amount);
            }
            ColorMode::Rgb => {
                self.requested_color = self.requested_color.wrapping_sub(amount);
            }
        }
        self.pending = true;
    }

    /// Run one convergence step and emit changed pixel colors.
    ///
    /// Returns immediately while the bus is mid-transfer, and does no work
    /// when nothing is pending unless `force` is set. `force` also re-emits
    /// every pixel unconditionally, for a full repaint after an external
    /// frame clear.
    pub fn tick<B: PixelBus>(&mut self, bus: &mut B, force: bool) {
        if bus.is_busy() {
            return;
        }
        if !self.pending && !force {
            return;
        }
        self.pending = false;

        let mut repaint = force;
        match self.mode {
            ColorMode::Rgb if self.current_color != self.requested_color => {
                self.current_color = step_toward(
                    self.current_color,
                    self.requested_color,
                    self.steps.color,
                    self.direction,
                );
                repaint = true;
                if self.current_color != self.requested_color {
                    self.pending = true;
                }
            }
            ColorMode::Cct if self.current_temperature != self.requested_temperature => {
                self.current_temperature = step_toward(
                    self.current_temperature,
                    self.requested_temperature,
                    self.steps.color,
                    self.direction,
                );
                let kelvin = temperature_to_kelvin(self.current_temperature);
                self.cct_color = kelvin_to_rgb(kelvin);
                #[cfg(feature = "esp32-log")]
                println!(
                    "[StripController.tick] temperature {} ({}K)",
                    self.current_temperature, kelvin
                );
                repaint = true;
                if self.current_temperature != self.requested_temperature {
                    self.pending = true;
                }
            }
            ColorMode::Rgb | ColorMode::Cct => {}
        }

        // Pixels converge and emit in increasing index order.
        let mut still_converging = false;
        for pixel in &mut self.pixels {
            let required = if self.on {
                target_brightness(
                    pixel.index,
                    self.first_index,
                    PIXEL_COUNT,
                    self.lit_percent,
                    self.invert,
                )
            } else {
                0
            };

            let changed = pixel.brightness != required;
            if changed {
                let (step, direction) = if pixel.brightness > required {
                    (self.steps.brightness_fall, Direction::Decrease)
                } else {
                    (self.steps.brightness_raise, Direction::Increase)
                };
                pixel.brightness = step_toward(pixel.brightness, required, step, direction);
                if pixel.brightness != required {
                    still_converging = true;
                }
            }

            if changed || repaint {
                let color = match self.mode {
                    ColorMode::Rgb => hsv2rgb(Hsv {
                        hue: self.current_color,
                        sat: 255,
                        val: pixel.brightness,
                    }),
                    ColorMode::Cct => Rgb {
                        r: scale8(self.cct_color.r, pixel.brightness),
                        g: scale8(self.cct_color.g, pixel.brightness),
                        b: scale8(self.cct_color.b, pixel.brightness),
                    },
                };
                bus.set_pixel(pixel.index, color);
            }
        }
        if still_converging {
            self.pending = true;
        }
    }

    /// Whether any quantity still differs from its target.
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    pub const fn is_on(&self) -> bool {
        self.on
    }

    pub const fn color_mode(&self) -> ColorMode {
        self.mode
    }

    pub const fn lit_percent(&self) -> f32 {
        self.lit_percent
    }

    /// Current hue byte (RGB mode)
    pub const fn hue(&self) -> u8 {
        self.current_color
    }

    /// Current color temperature byte (CCT mode)
    pub const fn color_temperature(&self) -> u8 {
        self.current_temperature
    }
}

impl<const PIXEL_COUNT: usize> Default for StripController<PIXEL_COUNT> {
    fn default() -> Self {
        Self::new(StepSizes::default())
    }
}
