//! Encoder modes and the button driven mode selector

const MODE_NAME_BRIGHTNESS: &str = "brightness";
const MODE_NAME_ARC_LENGTH: &str = "arc_length";
const MODE_NAME_POSITION: &str = "position";
const MODE_NAME_COLOR_TEMPERATURE: &str = "color_temperature";

const MODE_ID_BRIGHTNESS: u8 = 0;
const MODE_ID_ARC_LENGTH: u8 = 1;
const MODE_ID_POSITION: u8 = 2;
const MODE_ID_COLOR_TEMPERATURE: u8 = 3;

/// What a rotation of the encoder adjusts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    #[default]
    Brightness = MODE_ID_BRIGHTNESS,
    ArcLength = MODE_ID_ARC_LENGTH,
    Position = MODE_ID_POSITION,
    ColorTemperature = MODE_ID_COLOR_TEMPERATURE,
}

impl Mode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_BRIGHTNESS => Self::Brightness,
            MODE_ID_ARC_LENGTH => Self::ArcLength,
            MODE_ID_POSITION => Self::Position,
            MODE_ID_COLOR_TEMPERATURE => Self::ColorTemperature,
            _ => return None,
        })
    }

    /// The mode following this one, wrapping back to brightness
    pub const fn next(self) -> Self {
        match self {
            Self::Brightness => Self::ArcLength,
            Self::ArcLength => Self::Position,
            Self::Position => Self::ColorTemperature,
            Self::ColorTemperature => Self::Brightness,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brightness => MODE_NAME_BRIGHTNESS,
            Self::ArcLength => MODE_NAME_ARC_LENGTH,
            Self::Position => MODE_NAME_POSITION,
            Self::ColorTemperature => MODE_NAME_COLOR_TEMPERATURE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_BRIGHTNESS => Some(Self::Brightness),
            MODE_NAME_ARC_LENGTH => Some(Self::ArcLength),
            MODE_NAME_POSITION => Some(Self::Position),
            MODE_NAME_COLOR_TEMPERATURE => Some(Self::ColorTemperature),
            _ => None,
        }
    }
}

/// Edge-triggered mode selector for an active-low push button
///
/// Bouncing is absorbed by the poll cadence, there is no timing logic here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSelector {
    mode: Mode,
    previous: bool,
}

impl ModeSelector {
    /// Start in [`Mode::Brightness`] with the button released
    pub const fn new() -> Self {
        Self {
            mode: Mode::Brightness,
            previous: true,
        }
    }

    /// Current mode
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Feed one sample of the button line
    ///
    /// Returns the new mode when the line goes from high to low.
    pub fn poll(&mut self, button_line: bool) -> Option<Mode> {
        let pressed = self.previous && !button_line;
        self.previous = button_line;

        if !pressed {
            return None;
        }
        self.mode = self.mode.next();
        Some(self.mode)
    }
}

impl Default for ModeSelector {
    fn default() -> Self {
        Self::new()
    }
}
