//! Persisted configuration of the arc light
//!
//! A host loads a [`ConfigDocument`] from its settings store, merges it into
//! the built-in [`ArcLightConfig`] and saves [`ArcLightConfig::to_document`]
//! back. Every field is optional; a missing field keeps the value already in
//! memory.

use log::{debug, info};
use serde::{Deserialize, Serialize};

/// GPIO number as used by the host's pin-ownership registry
pub type PinId = u8;

const DEFAULT_PIN_LINE_A: PinId = 13;
const DEFAULT_PIN_LINE_B: PinId = 14;
const DEFAULT_PIN_BUTTON: PinId = 4;

const DEFAULT_BRIGHTNESS: u8 = 127;
const DEFAULT_COLOR_TEMP_LOWER_BOUND: u16 = 800;
const DEFAULT_COLOR_TEMP_UPPER_BOUND: u16 = 4000;
const DEFAULT_COLOR_TEMPERATURE: u16 = 1800;
const DEFAULT_COLOR_TEMPERATURE_STEP: u16 = 100;

/// Pins the encoder and its button are wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderPins {
    /// Line sampled for falling edges (DT on KY-040 boards)
    pub line_a: PinId,
    /// Direction line (CLK on KY-040 boards)
    pub line_b: PinId,
    /// Active-low push button (SW)
    pub button: PinId,
}

impl EncoderPins {
    pub const fn as_array(self) -> [PinId; 3] {
        [self.line_a, self.line_b, self.button]
    }

    pub const fn from_array(pins: [PinId; 3]) -> Self {
        let [line_a, line_b, button] = pins;
        Self {
            line_a,
            line_b,
            button,
        }
    }
}

impl Default for EncoderPins {
    fn default() -> Self {
        Self {
            line_a: DEFAULT_PIN_LINE_A,
            line_b: DEFAULT_PIN_LINE_B,
            button: DEFAULT_PIN_BUTTON,
        }
    }
}

/// Settings the arc light starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcLightConfig {
    pub startup_brightness: u8,
    pub color_temp_lower_bound: u16,
    pub color_temp_upper_bound: u16,
    pub startup_color_temperature: u16,
    pub color_temperature_step: u16,
    pub pins: EncoderPins,
}

impl Default for ArcLightConfig {
    fn default() -> Self {
        Self {
            startup_brightness: DEFAULT_BRIGHTNESS,
            color_temp_lower_bound: DEFAULT_COLOR_TEMP_LOWER_BOUND,
            color_temp_upper_bound: DEFAULT_COLOR_TEMP_UPPER_BOUND,
            startup_color_temperature: DEFAULT_COLOR_TEMPERATURE,
            color_temperature_step: DEFAULT_COLOR_TEMPERATURE_STEP,
            pins: EncoderPins::default(),
        }
    }
}

/// Partial settings, absent fields are left untouched by [`ArcLightConfig::merge`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConfigPatch {
    #[serde(
        rename = "Startup brightness",
        skip_serializing_if = "Option::is_none"
    )]
    pub startup_brightness: Option<u8>,
    #[serde(
        rename = "Minimal color temperature",
        skip_serializing_if = "Option::is_none"
    )]
    pub color_temp_lower_bound: Option<u16>,
    #[serde(
        rename = "Maximal color temperature",
        skip_serializing_if = "Option::is_none"
    )]
    pub color_temp_upper_bound: Option<u16>,
    // Older firmware wrote this key with a leading space
    #[serde(
        rename = "Startup color temperature",
        alias = " Startup color temperature",
        skip_serializing_if = "Option::is_none"
    )]
    pub startup_color_temperature: Option<u16>,
    #[serde(
        rename = "Color temperature change step",
        skip_serializing_if = "Option::is_none"
    )]
    pub color_temperature_step: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pins: Option<[PinId; 3]>,
}

/// Settings document as stored by the host, keyed by module name
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConfigDocument {
    #[serde(rename = "ArcLight", default, skip_serializing_if = "Option::is_none")]
    pub arc_light: Option<ConfigPatch>,
}

impl ArcLightConfig {
    /// Apply the present fields of `patch`
    ///
    /// Returns whether any value changed.
    pub fn merge(&mut self, patch: &ConfigPatch) -> bool {
        let mut changed = false;

        if let Some(brightness) = patch.startup_brightness {
            changed |= replace(&mut self.startup_brightness, brightness);
        }
        if let Some(lower) = patch.color_temp_lower_bound {
            changed |= replace(&mut self.color_temp_lower_bound, lower);
        }
        if let Some(upper) = patch.color_temp_upper_bound {
            changed |= replace(&mut self.color_temp_upper_bound, upper);
        }
        if let Some(kelvin) = patch.startup_color_temperature {
            changed |= replace(&mut self.startup_color_temperature, kelvin);
        }
        if let Some(step) = patch.color_temperature_step {
            changed |= replace(&mut self.color_temperature_step, step);
        }
        if let Some(pins) = patch.pins {
            changed |= replace(&mut self.pins, EncoderPins::from_array(pins));
        }

        changed
    }

    /// Merge the arc light section of a stored document
    ///
    /// A missing section keeps the current values and returns `false`.
    pub fn load(&mut self, document: &ConfigDocument) -> bool {
        let Some(patch) = &document.arc_light else {
            info!("ArcLight: no config found, using defaults");
            return false;
        };
        self.merge(patch);
        debug!("ArcLight config (re)loaded: {:?}", self);
        true
    }

    /// Every field as a patch
    pub const fn to_patch(&self) -> ConfigPatch {
        ConfigPatch {
            startup_brightness: Some(self.startup_brightness),
            color_temp_lower_bound: Some(self.color_temp_lower_bound),
            color_temp_upper_bound: Some(self.color_temp_upper_bound),
            startup_color_temperature: Some(self.startup_color_temperature),
            color_temperature_step: Some(self.color_temperature_step),
            pins: Some(self.pins.as_array()),
        }
    }

    /// Document to hand back to the settings store
    pub const fn to_document(&self) -> ConfigDocument {
        ConfigDocument {
            arc_light: Some(self.to_patch()),
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
