//! Error types for the arc light core.

use crate::config::PinId;
use crate::input::Line;

/// Errors that can stop the arc light from running.
///
/// Out of range brightness, color temperature or arc values are never
/// errors, they are clamped where they enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An input pin is already owned by another subsystem.
    #[error("pin {pin} is not available")]
    ResourceUnavailable {
        /// The pin that could not be reserved.
        pin: PinId,
    },

    /// Reading a digital input line failed.
    #[error("failed to read input line {0:?}")]
    InputRead(Line),
}
