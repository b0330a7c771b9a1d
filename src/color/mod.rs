mod kelvin;

pub use kelvin::{KELVIN_MAX, KELVIN_MIN, kelvin_to_rgb};
use smart_leds::RGB8;

pub type Rgb = RGB8;
