//! Static multi-color pattern
//!
//! A base color on every pixel with a few pixels overridden by accent colors.

use heapless::Vec;

use super::Mode;
use crate::color::{Rgb, fill};

/// Maximum number of accent pixels in a pattern
pub const MAX_ACCENTS: usize = 4;

#[derive(Debug, Clone)]
pub struct PatternMode {
    base: Rgb,
    accents: Vec<(usize, Rgb), MAX_ACCENTS>,
}

impl PatternMode {
    pub const fn new(base: Rgb) -> Self {
        Self {
            base,
            accents: Vec::new(),
        }
    }

    /// Override the color of one pixel
    ///
    /// Accents past [`MAX_ACCENTS`] are ignored, as are indexes beyond the
    /// end of the strip at render time.
    #[must_use]
    pub fn with_accent(mut self, index: usize, color: Rgb) -> Self {
        let _ = self.accents.push((index, color));
        self
    }
}

impl Mode for PatternMode {
    fn render(&self, leds: &mut [Rgb]) {
        fill(leds, self.base);
        for &(index, color) in &self.accents {
            if let Some(led) = leds.get_mut(index) {
                *led = color;
            }
        }
    }
}
