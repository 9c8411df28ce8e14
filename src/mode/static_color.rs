//! Static color fill mode

use super::Mode;
use crate::color::{Rgb, fill};

/// Static color mode - fills all LEDs with one color
#[derive(Debug, Clone)]
pub struct StaticColorMode {
    color: Rgb,
}

impl StaticColorMode {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Mode for StaticColorMode {
    fn render(&self, leds: &mut [Rgb]) {
        fill(leds, self.color);
    }
}
