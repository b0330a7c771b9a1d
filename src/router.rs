use crate::arc::{ArcRenderer, Segment};
use crate::encoder::RotationEvent;
use crate::mode::Mode;
use crate::photometric::{PhotometricController, PhotometricUpdate};

/// Encoder steps applied per detent in brightness mode
pub const BRIGHTNESS_STEP: u8 = 1;
/// Half arc length change per detent in arc length mode
pub const ARC_LENGTH_STEP: u16 = 1;

/// Change the strip renderer has to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripUpdate {
    /// New illuminated range
    Segment(Segment),
    /// New brightness and color pair
    Photometric(PhotometricUpdate),
}

/// Maps a rotation to the operation of the current mode
///
/// Left turns decrease, right turns increase. Each event reaches exactly
/// one handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureRouter;

impl GestureRouter {
    /// Dispatch `event` to the handler selected by `mode`
    ///
    /// Returns the resulting update, or `None` if clamping left the state
    /// unchanged.
    pub fn route(
        mode: Mode,
        event: RotationEvent,
        arc: &mut ArcRenderer,
        photometric: &mut PhotometricController,
    ) -> Option<StripUpdate> {
        use RotationEvent::{RotateLeft, RotateRight};

        match (mode, event) {
            (Mode::Brightness, RotateLeft) => photometric
                .decrease_brightness(BRIGHTNESS_STEP)
                .map(StripUpdate::Photometric),
            (Mode::Brightness, RotateRight) => photometric
                .increase_brightness(BRIGHTNESS_STEP)
                .map(StripUpdate::Photometric),
            (Mode::ArcLength, RotateLeft) => arc
                .decrease_arc_length(ARC_LENGTH_STEP)
                .map(StripUpdate::Segment),
            (Mode::ArcLength, RotateRight) => arc
                .increase_arc_length(ARC_LENGTH_STEP)
                .map(StripUpdate::Segment),
            (Mode::Position, RotateLeft) => arc.decrease_position().map(StripUpdate::Segment),
            (Mode::Position, RotateRight) => arc.increase_position().map(StripUpdate::Segment),
            (Mode::ColorTemperature, RotateLeft) => photometric
                .decrease_color_temperature()
                .map(StripUpdate::Photometric),
            (Mode::ColorTemperature, RotateRight) => photometric
                .increase_color_temperature()
                .map(StripUpdate::Photometric),
        }
    }
}
