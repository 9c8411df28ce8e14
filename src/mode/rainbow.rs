//! Rainbow cycling mode
//!
//! Spreads one full turn of the color wheel across the strip and rotates it
//! by a fixed step every frame. The phase wraps after 256 positions.

use super::Mode;
use crate::color::{Rgb, wheel};

const DEFAULT_SPEED: u8 = 1;

#[derive(Debug, Clone)]
pub struct RainbowMode {
    /// Wheel position of the first pixel
    offset: u8,
    /// Wheel positions advanced per frame
    speed: u8,
}

impl Default for RainbowMode {
    fn default() -> Self {
        Self {
            offset: 0,
            speed: DEFAULT_SPEED,
        }
    }
}

impl RainbowMode {
    /// Set the rotation speed
    #[must_use]
    pub fn with_speed(mut self, speed: u8) -> Self {
        self.speed = speed;
        self
    }

    pub const fn offset(&self) -> u8 {
        self.offset
    }
}

impl Mode for RainbowMode {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&self, leds: &mut [Rgb]) {
        let count = leds.len();
        for (i, led) in leds.iter_mut().enumerate() {
            let base = (i * 256 / count) as u8;
            *led = wheel(base.wrapping_add(self.offset));
        }
    }

    fn advance(&mut self) {
        self.offset = self.offset.wrapping_add(self.speed);
    }
}
