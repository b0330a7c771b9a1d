//! Blackbody color temperature approximation.

use super::Rgb;

/// Lowest temperature the approximation is defined for
pub const KELVIN_MIN: u16 = 1_000;
/// Highest temperature the approximation is defined for
pub const KELVIN_MAX: u16 = 40_000;

/// Natural log of 10..=66, indexed by `value - 10`
#[allow(clippy::approx_constant)]
const LN_LUT: [f32; 57] = [
    2.302_585, 2.397_895, 2.484_907, 2.564_949, 2.639_057, 2.708_05, 2.772_589, 2.833_213,
    2.890_372, 2.944_439, 2.995_732, 3.044_522, 3.091_042, 3.135_494, 3.178_054, 3.218_876,
    3.258_097, 3.295_837, 3.332_205, 3.367_296, 3.401_197, 3.433_987, 3.465_736, 3.496_508,
    3.526_361, 3.555_348, 3.583_519, 3.610_918, 3.637_586, 3.663_562, 3.688_879, 3.713_572,
    3.737_67, 3.761_2, 3.784_19, 3.806_662, 3.828_641, 3.850_148, 3.871_201, 3.891_82, 3.912_023,
    3.931_826, 3.951_244, 3.970_292, 3.988_984, 4.007_333, 4.025_352, 4.043_051, 4.060_443,
    4.077_537, 4.094_345, 4.110_874, 4.127_134, 4.143_135, 4.158_883, 4.174_387, 4.189_655,
];

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ln(value: f32) -> f32 {
    let index = (value as usize).wrapping_sub(10);
    match LN_LUT.get(index) {
        Some(ln) => *ln,
        None => libm::logf(value),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Convert a Kelvin temperature to an RGB color
///
/// Inputs outside [`KELVIN_MIN`]..=[`KELVIN_MAX`] are clamped into that range,
/// so low configured bounds such as 800 K render as 1000 K.
#[inline]
pub fn kelvin_to_rgb(kelvin: u16) -> Rgb {
    let temp = f32::from(kelvin.clamp(KELVIN_MIN, KELVIN_MAX)) / 100.0;

    let red = if temp <= 66.0 {
        255.0
    } else {
        329.698_73 * libm::powf(temp - 60.0, -0.133_204_76)
    };

    let green = if temp <= 66.0 {
        99.470_8 * ln(temp) - 161.119_57
    } else {
        288.122_17 * libm::powf(temp - 60.0, -0.075_514_85)
    };

    let blue = if temp >= 66.0 {
        255.0
    } else if temp <= 19.0 {
        0.0
    } else {
        138.517_73 * ln(temp - 10.0) - 305.044_8
    };

    Rgb {
        r: channel(red),
        g: channel(green),
        b: channel(blue),
    }
}
