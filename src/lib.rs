#![no_std]

pub mod arc;
pub mod color;
pub mod config;
pub mod controller;
pub mod encoder;
pub mod error;
pub mod input;
#[cfg(feature = "esp32-log")]
pub mod logging;
pub mod mode;
pub mod photometric;
pub mod pins;
pub mod push;
pub mod router;
pub mod scheduler;

pub use arc::{ArcRenderer, ArcState, Segment, half_arc_length};
pub use config::{ArcLightConfig, ConfigDocument, ConfigPatch, EncoderPins, PinId};
pub use controller::{ARC_SEGMENT_INDEX, ArcLight, PollEvents};
pub use encoder::{QuadratureDecoder, RotationEvent, SharedDecoder};
pub use error::Error;
pub use input::{GpioInputs, InputSource, Line, LineSample};
pub use mode::{Mode, ModeSelector};
pub use photometric::{
    MAX_BRIGHTNESS, MIN_BRIGHTNESS, PhotometricController, PhotometricState, PhotometricUpdate,
};
pub use pins::{PinOwner, PinRegistry, PinReservation, PinTable};
pub use push::{PushChannel, PushReceiver, PushSender, StatePush};
pub use router::{GestureRouter, StripUpdate};
pub use scheduler::{DEFAULT_POLL_INTERVAL, PollResult, PollScheduler};

pub use color::{Rgb, kelvin_to_rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract strip renderer trait
///
/// Implement this trait to connect the arc light to an LED strip driver.
/// The arc light is generic over this trait.
pub trait StripRenderer {
    /// Select the illuminated LED range `start..end` of segment `index`
    fn set_segment(&mut self, index: u8, start: u16, end: u16);

    /// Show new brightness and color together
    fn set_photometric(&mut self, update: PhotometricUpdate);
}
