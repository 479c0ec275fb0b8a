//! Bounded step primitives
//!
//! Every converging quantity (hue, color temperature, per-pixel brightness,
//! lit length) moves toward its target through these helpers, one bounded
//! step per tick.

/// Direction of the last requested change
///
/// Picks between increment and decrement when a quantity converges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

/// Move `current` one bounded step toward `target`.
///
/// The result never crosses `target` and repeated application reaches it in
/// `ceil(|current - target| / step)` calls. If `target` lies on the wrong
/// side of `direction`, the value snaps to `target` immediately, so a stale
/// direction cannot cause oscillation.
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn step_toward(current: u8, target: u8, step: u8, direction: Direction) -> u8 {
    // i16 keeps the byte arithmetic total at the representation's bounds.
    let diff = match direction {
        Direction::Increase => target as i16 - current as i16,
        Direction::Decrease => current as i16 - target as i16,
    };
    let reached = match direction {
        Direction::Increase => diff < step as i16,
        Direction::Decrease => diff <= step as i16,
    };
    if reached {
        return target;
    }
    match direction {
        Direction::Increase => current + step,
        Direction::Decrease => current - step,
    }
}

/// Clamp a lit-length percentage into `[0, 100]`.
#[inline]
pub fn clamp_percent(value: f32) -> f32 {
    value.clamp(0.0, 100.0)
}
