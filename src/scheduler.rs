//! Poll loop timing.
//!
//! Provides portable poll pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between ticks.

use embassy_time::{Duration, Instant};

use crate::StripRenderer;
use crate::controller::{ArcLight, PollEvents};
use crate::error::Error;
use crate::input::InputSource;
use crate::push::PushReceiver;

/// Default interval between input samples.
///
/// Short enough to catch every encoder detent at normal turning speed.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2);

/// Result of a scheduler tick.
#[derive(Debug, Clone, Copy)]
pub struct PollResult {
    /// Events of this tick, `None` if the poll was not due yet.
    pub events: Option<PollEvents>,
    /// The deadline for the next poll.
    pub next_deadline: Instant,
    /// How long to wait until the next poll (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Drives an [`ArcLight`] from an input source at a fixed cadence.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = PollScheduler::new(light, inputs).with_pushes(channel.receiver());
///
/// loop {
///     let now = Instant::from_millis(get_current_time_ms());
///     let result = scheduler.tick(now)?;
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct PollScheduler<'a, I: InputSource, R: StripRenderer, const PUSH_SIZE: usize> {
    inputs: I,
    light: ArcLight<R>,
    pushes: Option<PushReceiver<'a, PUSH_SIZE>>,
    next_poll: Instant,
    interval: Duration,
}

impl<'a, I: InputSource, R: StripRenderer, const PUSH_SIZE: usize>
    PollScheduler<'a, I, R, PUSH_SIZE>
{
    /// Create a new scheduler polling every [`DEFAULT_POLL_INTERVAL`].
    pub fn new(light: ArcLight<R>, inputs: I) -> Self {
        Self::with_interval(light, inputs, DEFAULT_POLL_INTERVAL)
    }

    /// Create a new scheduler with a custom poll interval.
    pub fn with_interval(light: ArcLight<R>, inputs: I, interval: Duration) -> Self {
        Self {
            inputs,
            light,
            pushes: None,
            next_poll: Instant::from_millis(0),
            interval,
        }
    }

    /// Apply state pushes from `receiver` before each poll.
    #[must_use]
    pub fn with_pushes(mut self, receiver: PushReceiver<'a, PUSH_SIZE>) -> Self {
        self.pushes = Some(receiver);
        self
    }

    /// Poll the inputs if the deadline has passed.
    ///
    /// Pending pushes are applied first, then one input sample is processed.
    /// When the scheduler has fallen more than two intervals behind, the
    /// deadline is reset to `now` instead of catching up.
    pub fn tick(&mut self, now: Instant) -> Result<PollResult, Error> {
        if now < self.next_poll {
            return Ok(PollResult {
                events: None,
                next_deadline: self.next_poll,
                sleep_duration: self.next_poll - now,
            });
        }

        let max_drift = Duration::from_ticks(self.interval.as_ticks().saturating_mul(2));
        if now > self.next_poll + max_drift {
            self.next_poll = now;
        }

        self.apply_pushes();
        let sample = self.inputs.sample()?;
        let events = self.light.poll(sample);

        self.next_poll += self.interval;
        let sleep_duration = if self.next_poll > now {
            self.next_poll - now
        } else {
            Duration::from_ticks(0)
        };

        Ok(PollResult {
            events: Some(events),
            next_deadline: self.next_poll,
            sleep_duration,
        })
    }

    fn apply_pushes(&mut self) {
        let Some(pushes) = self.pushes else {
            return;
        };
        while let Ok(push) = pushes.try_receive() {
            self.light.apply_push(&push);
        }
    }

    /// Get a reference to the arc light.
    pub const fn light(&self) -> &ArcLight<R> {
        &self.light
    }

    /// Get a mutable reference to the arc light.
    pub const fn light_mut(&mut self) -> &mut ArcLight<R> {
        &mut self.light
    }

    /// Stop polling and hand back the arc light and the input source.
    pub fn into_parts(self) -> (ArcLight<R>, I) {
        (self.light, self.inputs)
    }
}
