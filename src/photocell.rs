//! Ambient light gate with hysteresis.
//!
//! A dark reading turns the strip on only below the on-threshold, and a lit
//! strip stays on until the reading rises above the higher off-threshold.

use crate::config::PhotocellConfig;

/// Largest valid photocell reading
pub const SENSOR_MAX: u32 = u16::MAX as u32;

/// Clamp a raw sensor reading into the sensor range
#[allow(clippy::cast_possible_truncation)]
pub const fn clamp_reading(raw: u32) -> u16 {
    if raw > SENSOR_MAX {
        return u16::MAX;
    }
    raw as u16
}

#[derive(Debug, Clone, Copy)]
pub struct PhotocellGate {
    on_threshold: u16,
    off_threshold: u16,
}

impl PhotocellGate {
    pub const fn new(config: &PhotocellConfig) -> Self {
        Self {
            on_threshold: config.on_threshold,
            off_threshold: config.off_threshold,
        }
    }

    /// Whether the ambient light asks for the strip to be lit
    ///
    /// `lit` is the current visibility of the strip.
    pub const fn wants_light(&self, level: u16, lit: bool) -> bool {
        if lit {
            level <= self.off_threshold
        } else {
            level < self.on_threshold
        }
    }
}
