//! Breathing mode
//!
//! A uniform color whose intensity ramps between a lower and an upper bound,
//! reversing direction whenever it reaches either bound.

use super::Mode;
use crate::color::{Rgb, fill, scale};

/// 10% of full scale
const DEFAULT_MIN: u8 = 26;
const DEFAULT_MAX: u8 = 255;
/// 2% of full scale
const DEFAULT_STEP: u8 = 5;

#[derive(Debug, Clone)]
pub struct BreatheMode {
    color: Rgb,
    min: u8,
    max: u8,
    step: u8,
    intensity: u8,
    rising: bool,
}

impl BreatheMode {
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
            intensity: DEFAULT_MIN,
            rising: true,
        }
    }

    /// Set the intensity bounds and per-frame step
    ///
    /// Bounds are swapped if given in the wrong order.
    #[must_use]
    pub fn with_bounds(mut self, min: u8, max: u8, step: u8) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min = min;
        self.max = max;
        self.step = step;
        self.intensity = min;
        self.rising = true;
        self
    }

    pub const fn intensity(&self) -> u8 {
        self.intensity
    }
}

impl Mode for BreatheMode {
    fn render(&self, leds: &mut [Rgb]) {
        fill(leds, scale(self.color, self.intensity));
    }

    fn advance(&mut self) {
        if self.rising {
            self.intensity = self.intensity.saturating_add(self.step);
            if self.intensity >= self.max {
                self.intensity = self.max;
                self.rising = false;
            }
        } else {
            self.intensity = self.intensity.saturating_sub(self.step);
            if self.intensity <= self.min {
                self.intensity = self.min;
                self.rising = true;
            }
        }
    }
}
