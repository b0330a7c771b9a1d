//! Brightness and color temperature control
//!
//! Brightness steps use step rejection: a step that would leave
//! `[MIN_BRIGHTNESS, MAX_BRIGHTNESS]` is discarded whole. Color temperature
//! steps stop at the bound they would cross. Direct setters clamp.

use crate::color::{Rgb, kelvin_to_rgb};

/// Lowest brightness the strip is driven at
pub const MIN_BRIGHTNESS: u8 = 10;
/// Highest brightness the strip is driven at
pub const MAX_BRIGHTNESS: u8 = 250;

/// Brightness and color temperature the renderer should show
///
/// Delivered as one value so the strip never shows a new brightness with
/// a stale color or the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotometricUpdate {
    pub brightness: u8,
    pub color_temperature: u16,
    pub color: Rgb,
}

/// Photometric values and their bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotometricState {
    pub brightness: u8,
    pub color_temperature: u16,
    pub lower_bound: u16,
    pub upper_bound: u16,
    pub step: u16,
}

/// Owner of brightness and color temperature
#[derive(Debug, Clone)]
pub struct PhotometricController {
    state: PhotometricState,
    color: Rgb,
}

impl PhotometricController {
    /// Create a controller, clamping the startup values into their bounds
    pub fn new(
        brightness: u16,
        color_temperature: u16,
        lower_bound: u16,
        upper_bound: u16,
        step: u16,
    ) -> Self {
        let (lower_bound, upper_bound) = ordered(lower_bound, upper_bound);
        let color_temperature = color_temperature.clamp(lower_bound, upper_bound);
        Self {
            state: PhotometricState {
                brightness: clamp_brightness(brightness),
                color_temperature,
                lower_bound,
                upper_bound,
                step,
            },
            color: kelvin_to_rgb(color_temperature),
        }
    }

    pub const fn state(&self) -> &PhotometricState {
        &self.state
    }

    pub const fn brightness(&self) -> u8 {
        self.state.brightness
    }

    pub const fn color_temperature(&self) -> u16 {
        self.state.color_temperature
    }

    /// Current values as a renderer update
    pub const fn update(&self) -> PhotometricUpdate {
        PhotometricUpdate {
            brightness: self.state.brightness,
            color_temperature: self.state.color_temperature,
            color: self.color,
        }
    }

    pub fn set_brightness(&mut self, brightness: u16) -> Option<PhotometricUpdate> {
        self.apply_brightness(clamp_brightness(brightness))
    }

    /// Raise brightness by `amount` unless that would exceed the maximum
    pub fn increase_brightness(&mut self, amount: u8) -> Option<PhotometricUpdate> {
        let brightness = self
            .state
            .brightness
            .checked_add(amount)
            .filter(|value| *value <= MAX_BRIGHTNESS)?;
        self.apply_brightness(brightness)
    }

    /// Lower brightness by `amount` unless that would go below the minimum
    pub fn decrease_brightness(&mut self, amount: u8) -> Option<PhotometricUpdate> {
        let brightness = self
            .state
            .brightness
            .checked_sub(amount)
            .filter(|value| *value >= MIN_BRIGHTNESS)?;
        self.apply_brightness(brightness)
    }

    pub fn set_color_temperature(&mut self, kelvin: u16) -> Option<PhotometricUpdate> {
        self.apply_color_temperature(kelvin.clamp(self.state.lower_bound, self.state.upper_bound))
    }

    /// Warm up by one step, stopping at the lower bound
    pub fn decrease_color_temperature(&mut self) -> Option<PhotometricUpdate> {
        let kelvin = self
            .state
            .color_temperature
            .saturating_sub(self.state.step)
            .max(self.state.lower_bound);
        self.apply_color_temperature(kelvin)
    }

    /// Cool down by one step, stopping at the upper bound
    pub fn increase_color_temperature(&mut self) -> Option<PhotometricUpdate> {
        let kelvin = self
            .state
            .color_temperature
            .saturating_add(self.state.step)
            .min(self.state.upper_bound);
        self.apply_color_temperature(kelvin)
    }

    /// Replace the color temperature bounds, re-clamping the current value
    pub fn set_bounds(&mut self, lower_bound: u16, upper_bound: u16) -> Option<PhotometricUpdate> {
        let (lower_bound, upper_bound) = ordered(lower_bound, upper_bound);
        self.state.lower_bound = lower_bound;
        self.state.upper_bound = upper_bound;
        self.set_color_temperature(self.state.color_temperature)
    }

    pub fn set_step(&mut self, step: u16) {
        self.state.step = step;
    }

    fn apply_brightness(&mut self, brightness: u8) -> Option<PhotometricUpdate> {
        if brightness == self.state.brightness {
            return None;
        }
        self.state.brightness = brightness;
        Some(self.update())
    }

    fn apply_color_temperature(&mut self, kelvin: u16) -> Option<PhotometricUpdate> {
        if kelvin == self.state.color_temperature {
            return None;
        }
        self.state.color_temperature = kelvin;
        self.color = kelvin_to_rgb(kelvin);
        Some(self.update())
    }
}

#[allow(clippy::cast_possible_truncation)]
fn clamp_brightness(brightness: u16) -> u8 {
    brightness.clamp(u16::from(MIN_BRIGHTNESS), u16::from(MAX_BRIGHTNESS)) as u8
}

const fn ordered(lower: u16, upper: u16) -> (u16, u16) {
    if lower <= upper {
        (lower, upper)
    } else {
        (upper, lower)
    }
}
