//! Pin ownership
//!
//! The arc light only starts once all three encoder pins are reserved from
//! the host's registry, and hands them back on shutdown.

use heapless::Vec;

use crate::config::{EncoderPins, PinId};
use crate::error::Error;

/// Subsystem holding a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOwner {
    ArcLight,
    /// Any other user of the registry, identified by the host
    Other(u8),
}

/// Proof that the encoder pins are owned by the arc light
#[derive(Debug, PartialEq, Eq)]
pub struct PinReservation {
    pins: EncoderPins,
}

impl PinReservation {
    /// Only meant for [`PinRegistry`] implementations
    pub const fn new(pins: EncoderPins) -> Self {
        Self { pins }
    }

    pub const fn pins(&self) -> EncoderPins {
        self.pins
    }
}

/// Shared registry the host uses to arbitrate pins between subsystems
pub trait PinRegistry {
    /// Reserve all encoder pins, or none of them
    fn reserve(&mut self, pins: EncoderPins) -> Result<PinReservation, Error>;

    /// Give the pins back
    fn release(&mut self, reservation: PinReservation);
}

/// Fixed capacity pin table
///
/// N is the number of pins that can be owned at the same time
#[derive(Debug, Default)]
pub struct PinTable<const N: usize> {
    owned: Vec<(PinId, PinOwner), N>,
}

impl<const N: usize> PinTable<N> {
    pub const fn new() -> Self {
        Self { owned: Vec::new() }
    }

    /// Get the owner of a pin
    pub fn owner(&self, pin: PinId) -> Option<PinOwner> {
        self.owned
            .iter()
            .find(|(owned, _)| *owned == pin)
            .map(|(_, owner)| *owner)
    }

    /// Claim a single pin for `owner`
    ///
    /// Fails if the pin is taken by anyone, including `owner`, or the table
    /// is full.
    pub fn allocate(&mut self, pin: PinId, owner: PinOwner) -> Result<(), Error> {
        if self.owner(pin).is_some() {
            return Err(Error::ResourceUnavailable { pin });
        }
        self.owned
            .push((pin, owner))
            .map_err(|_| Error::ResourceUnavailable { pin })
    }

    /// Free a pin if `owner` holds it
    pub fn deallocate(&mut self, pin: PinId, owner: PinOwner) {
        self.owned
            .retain(|(owned, holder)| !(*owned == pin && *holder == owner));
    }
}

impl<const N: usize> PinRegistry for PinTable<N> {
    fn reserve(&mut self, pins: EncoderPins) -> Result<PinReservation, Error> {
        let all = pins.as_array();
        for (index, pin) in all.iter().enumerate() {
            // Reject duplicates within the request itself
            let requested_twice = all.iter().take(index).any(|other| other == pin);
            if requested_twice {
                return Err(Error::ResourceUnavailable { pin: *pin });
            }
        }

        for (index, pin) in all.iter().enumerate() {
            if let Err(err) = self.allocate(*pin, PinOwner::ArcLight) {
                for allocated in all.iter().take(index) {
                    self.deallocate(*allocated, PinOwner::ArcLight);
                }
                return Err(err);
            }
        }

        Ok(PinReservation::new(pins))
    }

    fn release(&mut self, reservation: PinReservation) {
        for pin in reservation.pins.as_array() {
            self.deallocate(pin, PinOwner::ArcLight);
        }
    }
}
