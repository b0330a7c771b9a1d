//! Digital inputs sampled on each poll

use embedded_hal::digital::InputPin;

use crate::error::Error;

/// One of the three sampled lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    A,
    B,
    Button,
}

/// Levels of all lines at one instant, `true` is high
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSample {
    pub line_a: bool,
    pub line_b: bool,
    pub button: bool,
}

impl LineSample {
    /// Encoder at rest on a detent with the button released
    pub const IDLE: Self = Self {
        line_a: true,
        line_b: true,
        button: true,
    };
}

/// Source of line samples
///
/// Implement this trait to read the encoder on different platforms.
pub trait InputSource {
    fn sample(&mut self) -> Result<LineSample, Error>;
}

/// Input source reading three `embedded-hal` input pins
pub struct GpioInputs<A, B, S> {
    line_a: A,
    line_b: B,
    button: S,
}

impl<A, B, S> GpioInputs<A, B, S>
where
    A: InputPin,
    B: InputPin,
    S: InputPin,
{
    pub const fn new(line_a: A, line_b: B, button: S) -> Self {
        Self {
            line_a,
            line_b,
            button,
        }
    }

    /// Hand the pins back
    pub fn release(self) -> (A, B, S) {
        (self.line_a, self.line_b, self.button)
    }
}

impl<A, B, S> InputSource for GpioInputs<A, B, S>
where
    A: InputPin,
    B: InputPin,
    S: InputPin,
{
    fn sample(&mut self) -> Result<LineSample, Error> {
        Ok(LineSample {
            line_a: self.line_a.is_high().map_err(|_| Error::InputRead(Line::A))?,
            line_b: self.line_b.is_high().map_err(|_| Error::InputRead(Line::B))?,
            button: self
                .button
                .is_high()
                .map_err(|_| Error::InputRead(Line::Button))?,
        })
    }
}
