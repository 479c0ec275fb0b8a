mod kelvin;

pub use kelvin::{kelvin_to_rgb, temperature_to_kelvin};
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use smart_leds::hsv::hsv2rgb;

pub type Rgb = RGB8;
pub type Hsv = HSV;
