use log::{debug, info, warn};

use crate::StripRenderer;
use crate::arc::{ArcRenderer, ArcState, Segment};
use crate::config::{ArcLightConfig, ConfigPatch};
use crate::encoder::{QuadratureDecoder, RotationEvent};
use crate::error::Error;
use crate::input::LineSample;
use crate::mode::{Mode, ModeSelector};
use crate::photometric::{PhotometricController, PhotometricState};
use crate::pins::{PinRegistry, PinReservation};
use crate::push::StatePush;
use crate::router::{GestureRouter, StripUpdate};

/// Strip segment the arc is rendered into
pub const ARC_SEGMENT_INDEX: u8 = 0;

/// What happened during one poll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollEvents {
    /// Decoded encoder detent
    pub rotation: Option<RotationEvent>,
    /// Update sent to the renderer for that detent
    pub update: Option<StripUpdate>,
    /// New mode after a button press
    pub mode: Option<Mode>,
}

/// Arc light - the rotary encoder control core
///
/// Owns the encoder state, the mode, the arc and the photometric values,
/// and forwards every change to the strip renderer.
pub struct ArcLight<R: StripRenderer> {
    // External dependencies and configuration
    renderer: R,
    config: ArcLightConfig,
    reservation: PinReservation,

    // Internal state
    decoder: QuadratureDecoder,
    modes: ModeSelector,
    arc: ArcRenderer,
    photometric: PhotometricController,
}

impl<R: StripRenderer> ArcLight<R> {
    /// Reserve the encoder pins and set up the initial strip state
    ///
    /// Returns `Error::ResourceUnavailable` without touching the renderer if
    /// any pin is already owned.
    pub fn new<P: PinRegistry>(
        config: ArcLightConfig,
        strip_length: u16,
        registry: &mut P,
        renderer: R,
    ) -> Result<Self, Error> {
        let reservation = registry
            .reserve(config.pins)
            .inspect_err(|err| warn!("ArcLight disabled: {}", err))?;

        let photometric = PhotometricController::new(
            u16::from(config.startup_brightness),
            config.startup_color_temperature,
            config.color_temp_lower_bound,
            config.color_temp_upper_bound,
            config.color_temperature_step,
        );

        let mut light = Self {
            renderer,
            config,
            reservation,
            decoder: QuadratureDecoder::new(),
            modes: ModeSelector::new(),
            arc: ArcRenderer::new(strip_length),
            photometric,
        };
        light.emit_segment(light.arc.segment());
        light.renderer.set_photometric(light.photometric.update());
        info!("ArcLight started on {} LEDs", strip_length);

        Ok(light)
    }

    /// Process one sample of the input lines
    ///
    /// The encoder is handled first, then the button, so a detent that
    /// arrives together with a press still uses the old mode.
    pub fn poll(&mut self, sample: LineSample) -> PollEvents {
        let mode = self.modes.mode();
        let rotation = self.decoder.poll(sample.line_a, sample.line_b);
        let update = rotation.and_then(|event| {
            GestureRouter::route(mode, event, &mut self.arc, &mut self.photometric)
        });
        if let Some(update) = update {
            self.emit(update);
        }

        let mode = self.modes.poll(sample.button);
        if let Some(mode) = mode {
            info!("ArcLight mode: {}", mode.as_str());
        }

        PollEvents {
            rotation,
            update,
            mode,
        }
    }

    /// Apply an external state push
    ///
    /// Photometric fields are emitted together as one update. Returns
    /// whether anything changed.
    pub fn apply_push(&mut self, push: &StatePush) -> bool {
        if push.is_empty() {
            debug!("ArcLight: ignoring empty state push");
            return false;
        }

        let brightness = push
            .brightness
            .and_then(|value| self.photometric.set_brightness(value));
        let temperature = push
            .color_temperature
            .and_then(|kelvin| self.photometric.set_color_temperature(kelvin));
        let photometric_changed = brightness.is_some() || temperature.is_some();
        if photometric_changed {
            self.renderer.set_photometric(self.photometric.update());
        }

        let segment = match (push.center, push.half_arc_length) {
            (Some(center), Some(half)) => self.arc.restore(center, half),
            (Some(center), None) => self.arc.set_center(center),
            (None, Some(half)) => self.arc.set_arc_half_length(half),
            (None, None) => None,
        };
        if let Some(segment) = segment {
            self.emit_segment(segment);
        }

        photometric_changed || segment.is_some()
    }

    /// Merge new settings
    ///
    /// Color temperature bounds and step apply immediately. Startup values
    /// and pins are only stored and take effect on the next start.
    pub fn update_config(&mut self, patch: &ConfigPatch) -> bool {
        let previous_pins = self.config.pins;
        if !self.config.merge(patch) {
            return false;
        }

        if let Some(update) = self.photometric.set_bounds(
            self.config.color_temp_lower_bound,
            self.config.color_temp_upper_bound,
        ) {
            self.renderer.set_photometric(update);
        }
        self.photometric
            .set_step(self.config.color_temperature_step);

        if previous_pins != self.config.pins {
            info!("ArcLight: new pins take effect after restart");
        }
        true
    }

    /// Release the encoder pins and return the renderer
    pub fn shutdown<P: PinRegistry>(self, registry: &mut P) -> R {
        registry.release(self.reservation);
        info!("ArcLight stopped");
        self.renderer
    }

    /// Settings to persist
    pub const fn config(&self) -> &ArcLightConfig {
        &self.config
    }

    pub const fn mode(&self) -> Mode {
        self.modes.mode()
    }

    pub const fn arc(&self) -> &ArcState {
        self.arc.state()
    }

    pub fn segment(&self) -> Segment {
        self.arc.segment()
    }

    pub const fn photometric(&self) -> &PhotometricState {
        self.photometric.state()
    }

    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    pub const fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn emit(&mut self, update: StripUpdate) {
        match update {
            StripUpdate::Segment(segment) => self.emit_segment(segment),
            StripUpdate::Photometric(update) => self.renderer.set_photometric(update),
        }
    }

    fn emit_segment(&mut self, segment: Segment) {
        self.renderer
            .set_segment(ARC_SEGMENT_INDEX, segment.start, segment.end);
    }
}
