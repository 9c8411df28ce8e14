//! Mode system with compile-time known mode variants
//!
//! All modes are stored in an enum to avoid heap allocations.
//! Each mode implements the `Mode` trait and keeps its own animation phase.

mod breathe;
mod pattern;
mod rainbow;
mod registry;
mod static_color;

pub use breathe::BreatheMode;
pub use pattern::{MAX_ACCENTS, PatternMode};
pub use rainbow::RainbowMode;
pub use registry::{MAX_MODES, ModeEntry, ModeRegistry};
pub use static_color::StaticColorMode;

use crate::color::{
    BLUE, CUSTOM_RED, CUSTOM_YELLOW, GREEN, LIGHT_BLUE, ORANGE, RED, Rgb, VIOLET, WHITE, YELLOW,
};

const MODE_NAME_DEFAULT: &str = "default";
const MODE_NAME_STATIC_RED: &str = "static_red";
const MODE_NAME_STATIC_ORANGE: &str = "static_orange";
const MODE_NAME_STATIC_YELLOW: &str = "static_yellow";
const MODE_NAME_STATIC_GREEN: &str = "static_green";
const MODE_NAME_STATIC_BLUE: &str = "static_blue";
const MODE_NAME_STATIC_VIOLET: &str = "static_violet";
const MODE_NAME_STATIC_LIGHT_BLUE: &str = "static_light_blue";
const MODE_NAME_BREATHE_WHITE: &str = "breathe_white";
const MODE_NAME_RAINBOW: &str = "rainbow";

const MODE_ID_DEFAULT: u8 = 0;
const MODE_ID_STATIC_RED: u8 = 1;
const MODE_ID_STATIC_ORANGE: u8 = 2;
const MODE_ID_STATIC_YELLOW: u8 = 3;
const MODE_ID_STATIC_GREEN: u8 = 4;
const MODE_ID_STATIC_BLUE: u8 = 5;
const MODE_ID_STATIC_VIOLET: u8 = 6;
const MODE_ID_STATIC_LIGHT_BLUE: u8 = 7;
const MODE_ID_BREATHE_WHITE: u8 = 8;
const MODE_ID_RAINBOW: u8 = 9;

/// Pixel positions of the accent colors in the default pattern
const DEFAULT_ACCENTS: [(usize, Rgb); 2] = [(0, CUSTOM_YELLOW), (4, CUSTOM_RED)];

pub trait Mode {
    /// Render the frame for the current phase
    ///
    /// Must not change any state: rendering twice yields the same frame.
    fn render(&self, leds: &mut [Rgb]);

    /// Move the animation phase to the next frame
    fn advance(&mut self) {}
}

/// Mode slot - enum containing all possible modes
#[derive(Debug, Clone)]
pub enum ModeSlot {
    /// Fixed color per pixel index
    Pattern(PatternMode),
    /// Single uniform color
    Static(StaticColorMode),
    /// Uniform color pulsing between two intensities
    Breathe(BreatheMode),
    /// Color wheel rotating along the strip
    Rainbow(RainbowMode),
}

/// Built-in modes, in cycling order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ModeId {
    Default = MODE_ID_DEFAULT,
    StaticRed = MODE_ID_STATIC_RED,
    StaticOrange = MODE_ID_STATIC_ORANGE,
    StaticYellow = MODE_ID_STATIC_YELLOW,
    StaticGreen = MODE_ID_STATIC_GREEN,
    StaticBlue = MODE_ID_STATIC_BLUE,
    StaticViolet = MODE_ID_STATIC_VIOLET,
    StaticLightBlue = MODE_ID_STATIC_LIGHT_BLUE,
    BreatheWhite = MODE_ID_BREATHE_WHITE,
    Rainbow = MODE_ID_RAINBOW,
}

impl ModeId {
    pub const ALL: [Self; 10] = [
        Self::Default,
        Self::StaticRed,
        Self::StaticOrange,
        Self::StaticYellow,
        Self::StaticGreen,
        Self::StaticBlue,
        Self::StaticViolet,
        Self::StaticLightBlue,
        Self::BreatheWhite,
        Self::Rainbow,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_DEFAULT => Self::Default,
            MODE_ID_STATIC_RED => Self::StaticRed,
            MODE_ID_STATIC_ORANGE => Self::StaticOrange,
            MODE_ID_STATIC_YELLOW => Self::StaticYellow,
            MODE_ID_STATIC_GREEN => Self::StaticGreen,
            MODE_ID_STATIC_BLUE => Self::StaticBlue,
            MODE_ID_STATIC_VIOLET => Self::StaticViolet,
            MODE_ID_STATIC_LIGHT_BLUE => Self::StaticLightBlue,
            MODE_ID_BREATHE_WHITE => Self::BreatheWhite,
            MODE_ID_RAINBOW => Self::Rainbow,
            _ => return None,
        })
    }

    pub fn to_slot(self) -> ModeSlot {
        match self {
            Self::Default => {
                let mut pattern = PatternMode::new(WHITE);
                for (index, color) in DEFAULT_ACCENTS {
                    pattern = pattern.with_accent(index, color);
                }
                ModeSlot::Pattern(pattern)
            }
            Self::StaticRed => ModeSlot::Static(StaticColorMode::new(RED)),
            Self::StaticOrange => ModeSlot::Static(StaticColorMode::new(ORANGE)),
            Self::StaticYellow => ModeSlot::Static(StaticColorMode::new(YELLOW)),
            Self::StaticGreen => ModeSlot::Static(StaticColorMode::new(GREEN)),
            Self::StaticBlue => ModeSlot::Static(StaticColorMode::new(BLUE)),
            Self::StaticViolet => ModeSlot::Static(StaticColorMode::new(VIOLET)),
            Self::StaticLightBlue => ModeSlot::Static(StaticColorMode::new(LIGHT_BLUE)),
            Self::BreatheWhite => ModeSlot::Breathe(BreatheMode::new(WHITE)),
            Self::Rainbow => ModeSlot::Rainbow(RainbowMode::default()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => MODE_NAME_DEFAULT,
            Self::StaticRed => MODE_NAME_STATIC_RED,
            Self::StaticOrange => MODE_NAME_STATIC_ORANGE,
            Self::StaticYellow => MODE_NAME_STATIC_YELLOW,
            Self::StaticGreen => MODE_NAME_STATIC_GREEN,
            Self::StaticBlue => MODE_NAME_STATIC_BLUE,
            Self::StaticViolet => MODE_NAME_STATIC_VIOLET,
            Self::StaticLightBlue => MODE_NAME_STATIC_LIGHT_BLUE,
            Self::BreatheWhite => MODE_NAME_BREATHE_WHITE,
            Self::Rainbow => MODE_NAME_RAINBOW,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Registry entry for this built-in mode
    pub fn to_entry(self) -> ModeEntry {
        ModeEntry::new(self.as_str(), self.to_slot())
    }
}

impl ModeSlot {
    /// Render the current mode
    pub fn render(&self, leds: &mut [Rgb]) {
        match self {
            Self::Pattern(mode) => mode.render(leds),
            Self::Static(mode) => mode.render(leds),
            Self::Breathe(mode) => mode.render(leds),
            Self::Rainbow(mode) => mode.render(leds),
        }
    }

    /// Advance the animation phase of the current mode
    pub fn advance(&mut self) {
        match self {
            Self::Pattern(mode) => Mode::advance(mode),
            Self::Static(mode) => Mode::advance(mode),
            Self::Breathe(mode) => Mode::advance(mode),
            Self::Rainbow(mode) => Mode::advance(mode),
        }
    }
}
