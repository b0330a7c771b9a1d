#![allow(dead_code)]

use myrtio_arc_light::{
    ArcLightConfig, Error, InputSource, LineSample, PhotometricUpdate, StripRenderer,
};

/// Renderer that records every call
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub segments: Vec<(u8, u16, u16)>,
    pub photometric: Vec<PhotometricUpdate>,
}

impl StripRenderer for RecordingRenderer {
    fn set_segment(&mut self, index: u8, start: u16, end: u16) {
        self.segments.push((index, start, end));
    }

    fn set_photometric(&mut self, update: PhotometricUpdate) {
        self.photometric.push(update);
    }
}

/// Input source replaying a fixed list of samples, then staying idle
#[derive(Debug, Default)]
pub struct ScriptedInputs {
    samples: Vec<LineSample>,
    position: usize,
}

impl ScriptedInputs {
    pub fn new(samples: Vec<LineSample>) -> Self {
        Self {
            samples,
            position: 0,
        }
    }
}

impl InputSource for ScriptedInputs {
    fn sample(&mut self) -> Result<LineSample, Error> {
        let sample = self
            .samples
            .get(self.position)
            .copied()
            .unwrap_or(LineSample::IDLE);
        self.position += 1;
        Ok(sample)
    }
}

pub const fn lines(line_a: bool, line_b: bool, button: bool) -> LineSample {
    LineSample {
        line_a,
        line_b,
        button,
    }
}

/// Samples producing one clockwise detent
pub fn right_detent() -> [LineSample; 2] {
    [lines(true, true, true), lines(false, true, true)]
}

/// Samples producing one counter-clockwise detent
pub fn left_detent() -> [LineSample; 2] {
    [lines(true, false, true), lines(false, false, true)]
}

/// Samples producing one button press and release
pub fn press() -> [LineSample; 2] {
    [lines(false, false, false), lines(false, false, true)]
}

pub fn default_config() -> ArcLightConfig {
    ArcLightConfig::default()
}
