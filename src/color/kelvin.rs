use super::Rgb;

/// Map a color temperature byte to kelvin
///
/// Linear map from `[0, 255]` to `[1000, 10000]` kelvin, rounded.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn temperature_to_kelvin(temperature: u8) -> u16 {
    let span = (temperature as f32 / 255.0) * 9000.0;
    1000 + libm::roundf(span) as u16
}

/// Convert a kelvin temperature to an RGB color
///
/// Blackbody curve approximation. Supports temperatures between 1000K and
/// 40000K; inputs outside that range are clamped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn kelvin_to_rgb(kelvin: u16) -> Rgb {
    let temp = (f32::from(kelvin) / 100.0).clamp(10.0, 400.0);

    let red = if temp <= 66.0 {
        255.0
    } else {
        (329.698_73 * libm::powf(temp - 60.0, -0.133_204_76)).clamp(0.0, 255.0)
    };

    let green = if temp <= 66.0 {
        99.470_8 * libm::logf(temp) - 161.119_57
    } else {
        288.122_17 * libm::powf(temp - 60.0, -0.075_514_85)
    }
    .clamp(0.0, 255.0);

    let blue = if temp >= 66.0 {
        255.0
    } else if temp <= 19.0 {
        0.0
    } else {
        (138.517_73 * libm::logf(temp - 10.0) - 305.044_8).clamp(0.0, 255.0)
    };

    Rgb {
        r: red as u8,
        g: green as u8,
        b: blue as u8,
    }
}
