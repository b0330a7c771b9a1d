//! Illuminated arc around a movable center
//!
//! The arc is a contiguous LED range `[center - half, center + half]`
//! clipped to the strip. All operations clamp instead of failing.

/// Range of LEDs lit by the arc, `end` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: u16,
    pub end: u16,
}

impl Segment {
    /// Get the number of LEDs in the segment
    pub const fn count(self) -> u16 {
        self.end.saturating_sub(self.start)
    }

    /// Check if the segment contains no LEDs
    pub const fn is_empty(self) -> bool {
        self.count() == 0
    }
}

/// Default half arc length for a strip, large enough to light all of it
///
/// Odd lengths give `len / 2`, even lengths `len / 2 + 1`.
pub const fn half_arc_length(strip_length: u16) -> u16 {
    let half = strip_length / 2;
    if strip_length.is_multiple_of(2) {
        half.saturating_add(1)
    } else {
        half
    }
}

/// Arc geometry
///
/// Invariants: `center <= strip_length` and
/// `half_arc_length_min <= half_arc_length <= half_arc_length_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcState {
    pub strip_length: u16,
    pub center: u16,
    pub half_arc_length: u16,
    pub half_arc_length_min: u16,
    pub half_arc_length_max: u16,
}

impl ArcState {
    /// Centered arc covering the whole strip
    pub const fn new(strip_length: u16) -> Self {
        let half = half_arc_length(strip_length);
        Self {
            strip_length,
            center: strip_length / 2,
            half_arc_length: half,
            half_arc_length_min: 0,
            half_arc_length_max: half,
        }
    }

    /// Visible LED range for the current geometry
    pub fn segment(&self) -> Segment {
        let start = self.center.saturating_sub(self.half_arc_length);
        let end = self
            .center
            .saturating_add(self.half_arc_length)
            .min(self.strip_length);
        Segment { start, end }
    }
}

/// Owner of the arc geometry
#[derive(Debug, Clone)]
pub struct ArcRenderer {
    state: ArcState,
}

impl ArcRenderer {
    pub const fn new(strip_length: u16) -> Self {
        Self {
            state: ArcState::new(strip_length),
        }
    }

    pub const fn state(&self) -> &ArcState {
        &self.state
    }

    pub fn segment(&self) -> Segment {
        self.state.segment()
    }

    /// Widen the arc by `amount` on each side, up to the maximum
    pub fn increase_arc_length(&mut self, amount: u16) -> Option<Segment> {
        let half = self.state.half_arc_length.saturating_add(amount);
        self.apply_half_arc_length(half)
    }

    /// Narrow the arc by `amount` on each side, down to the minimum
    pub fn decrease_arc_length(&mut self, amount: u16) -> Option<Segment> {
        let half = self.state.half_arc_length.saturating_sub(amount);
        self.apply_half_arc_length(half)
    }

    /// Move the center one LED towards the strip end
    pub fn increase_position(&mut self) -> Option<Segment> {
        self.apply_center(self.state.center.saturating_add(1))
    }

    /// Move the center one LED towards the strip start
    pub fn decrease_position(&mut self) -> Option<Segment> {
        self.apply_center(self.state.center.saturating_sub(1))
    }

    pub fn set_arc_half_length(&mut self, half_arc_length: u16) -> Option<Segment> {
        self.apply_half_arc_length(half_arc_length)
    }

    pub fn set_center(&mut self, center: u16) -> Option<Segment> {
        self.apply_center(center)
    }

    /// Restore a saved arc, both values clamped like the setters
    pub fn restore(&mut self, center: u16, half_arc_length: u16) -> Option<Segment> {
        let center_changed = self.apply_center(center).is_some();
        let half_changed = self.apply_half_arc_length(half_arc_length).is_some();
        (center_changed || half_changed).then(|| self.segment())
    }

    /// Returns the new segment if the value changed after clamping
    fn apply_half_arc_length(&mut self, half_arc_length: u16) -> Option<Segment> {
        let clamped = half_arc_length.clamp(
            self.state.half_arc_length_min,
            self.state.half_arc_length_max,
        );
        if clamped == self.state.half_arc_length {
            return None;
        }
        self.state.half_arc_length = clamped;
        Some(self.segment())
    }

    fn apply_center(&mut self, center: u16) -> Option<Segment> {
        let clamped = center.min(self.state.strip_length);
        if clamped == self.state.center {
            return None;
        }
        self.state.center = clamped;
        Some(self.segment())
    }
}
