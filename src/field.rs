//! Per-pixel target brightness derived from a lit length
//!
//! Models a bar graph with an antialiased edge: a hard lit region at full
//! brightness followed by a linear falloff over roughly ten pixels.

/// Brightness lost per position beyond the lit boundary (255 over a
/// 10-position falloff window).
pub const FALLOFF_PER_PIXEL: f32 = 25.5;

/// Target brightness for one pixel of a strip.
///
/// The lit boundary sits at `floor(pixel_count * lit_percent / 100)` pixels
/// past `first_index`. Without inversion, pixels at or before the boundary
/// are at full brightness and pixels beyond it fade linearly to zero;
/// `invert` mirrors which end of the strip lights first.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn target_brightness(
    index: u16,
    first_index: u16,
    pixel_count: usize,
    lit_percent: f32,
    invert: bool,
) -> u8 {
    debug_assert!(pixel_count > 0);
    #[allow(clippy::cast_precision_loss)]
    let boundary = libm::floorf(
        pixel_count as f32 * lit_percent / 100.0 + f32::from(first_index),
    );

    let position = f32::from(index);
    let distance = if invert {
        if position >= boundary {
            return 255;
        }
        boundary - position
    } else {
        if position <= boundary {
            return 255;
        }
        position - boundary
    };

    let faded = libm::floorf(255.0 - distance * FALLOFF_PER_PIXEL);
    if faded <= 0.0 { 0 } else { faded as u8 }
}
