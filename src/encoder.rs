//! Quadrature decoding for mechanical rotary encoders (KY-040 style)
//!
//! The decoder counts one detent per falling edge on line A and reads the
//! direction from line B at that instant. It keeps no timing state: the
//! caller samples both lines at a fixed cadence (see
//! [`crate::scheduler::DEFAULT_POLL_INTERVAL`]).

use core::cell::Cell;

use critical_section::Mutex;

/// Direction of a single decoded encoder detent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationEvent {
    /// Counter-clockwise, line B low while A falls
    RotateLeft,
    /// Clockwise, line B high while A falls
    RotateRight,
}

/// Falling-edge quadrature decoder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuadratureDecoder {
    previous_a: bool,
}

impl QuadratureDecoder {
    /// Create a decoder that treats line A as previously low
    pub const fn new() -> Self {
        Self { previous_a: false }
    }

    /// Feed one sample of both lines
    ///
    /// Returns an event only on a high to low transition of `line_a`.
    pub fn poll(&mut self, line_a: bool, line_b: bool) -> Option<RotationEvent> {
        let fell = self.previous_a && !line_a;
        self.previous_a = line_a;

        if !fell {
            return None;
        }
        if line_b {
            Some(RotationEvent::RotateRight)
        } else {
            Some(RotationEvent::RotateLeft)
        }
    }
}

/// Decoder that can be fed from an interrupt handler and the poll loop alike
///
/// State updates happen inside a critical section, so an edge interrupt and
/// the main loop never observe a half-updated previous level.
pub struct SharedDecoder {
    inner: Mutex<Cell<QuadratureDecoder>>,
}

impl SharedDecoder {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(QuadratureDecoder::new())),
        }
    }

    /// Feed one sample of both lines, see [`QuadratureDecoder::poll`]
    pub fn poll(&self, line_a: bool, line_b: bool) -> Option<RotationEvent> {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut decoder = cell.get();
            let event = decoder.poll(line_a, line_b);
            cell.set(decoder);
            event
        })
    }
}

impl Default for SharedDecoder {
    fn default() -> Self {
        Self::new()
    }
}
