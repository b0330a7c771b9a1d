//! External state pushes
//!
//! A network or UI task can set brightness, color temperature or restore a
//! saved arc without going through the encoder. Pushes are queued on a
//! bounded channel built on `critical-section` and `heapless::Deque`, and the
//! poll loop applies them through the same clamping setters as the encoder.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;
use serde::{Deserialize, Serialize};

/// Requested state, absent fields are left as they are
///
/// Deserializes from the `"arcLight"` object of a JSON state update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatePush {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_temperature: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub half_arc_length: Option<u16>,
}

impl StatePush {
    /// Check if the push requests anything
    pub const fn is_empty(&self) -> bool {
        self.brightness.is_none()
            && self.color_temperature.is_none()
            && self.center.is_none()
            && self.half_arc_length.is_none()
    }
}

/// Error returned when trying to push to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub StatePush);

/// Error returned when no push is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Bounded queue of pending pushes
///
/// SIZE is the number of pushes that can wait for the next poll
pub struct PushChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<StatePush, SIZE>>>,
}

impl<const SIZE: usize> PushChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle, any number may exist
    pub const fn sender(&self) -> PushSender<'_, SIZE> {
        PushSender { channel: self }
    }

    /// Get the receiver handle for the poll loop
    pub const fn receiver(&self) -> PushReceiver<'_, SIZE> {
        PushReceiver { channel: self }
    }

    /// Queue a push
    ///
    /// Returns `Err(TrySendError(push))` if the channel is full.
    pub fn try_send(&self, push: StatePush) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(push).map_err(TrySendError)
        })
    }

    /// Take the oldest pending push
    pub fn try_receive(&self) -> Result<StatePush, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }
}

impl<const SIZE: usize> Default for PushChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending side of a [`PushChannel`]
#[derive(Clone, Copy)]
pub struct PushSender<'a, const SIZE: usize> {
    channel: &'a PushChannel<SIZE>,
}

impl<const SIZE: usize> PushSender<'_, SIZE> {
    pub fn try_send(&self, push: StatePush) -> Result<(), TrySendError> {
        self.channel.try_send(push)
    }
}

/// Receiving side of a [`PushChannel`]
#[derive(Clone, Copy)]
pub struct PushReceiver<'a, const SIZE: usize> {
    channel: &'a PushChannel<SIZE>,
}

impl<const SIZE: usize> PushReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<StatePush, TryReceiveError> {
        self.channel.try_receive()
    }
}
