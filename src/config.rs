//! Controller configuration
//!
//! Defaults match the production build: an 8 pixel strip, a 250 ms
//! double-click window and a 10 ms loop tick.

use embassy_time::Duration;

use crate::color::{GREEN, RED, Rgb};
use crate::error::ConfigError;

pub const DEFAULT_CLICK_WINDOW: Duration = Duration::from_millis(250);
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(10);

pub const DEFAULT_PHOTO_ON_THRESHOLD: u16 = 9500;
pub const DEFAULT_PHOTO_OFF_THRESHOLD: u16 = 10500;

pub const DEFAULT_FADE_STEPS: u16 = 8;
pub const DEFAULT_FADE_STEP_DELAY: Duration = Duration::from_micros(13_500);

pub const DEFAULT_ALERT_BLINKS: u8 = 3;
pub const DEFAULT_ALERT_BLINK_TIME: Duration = Duration::from_millis(100);

/// Momentary switch click classification
#[derive(Debug, Clone, Copy)]
pub struct ClickConfig {
    /// Maximum spacing between two presses of a double-click
    pub window: Duration,
}

/// Photocell hysteresis thresholds
///
/// Readings are raw sensor values, higher is brighter.
#[derive(Debug, Clone, Copy)]
pub struct PhotocellConfig {
    /// An unlit strip turns on once light drops below this value
    pub on_threshold: u16,
    /// A lit strip turns off once light rises above this value
    pub off_threshold: u16,
}

/// Crossfade timing
#[derive(Debug, Clone, Copy)]
pub struct FadeConfig {
    /// Number of interpolation steps; `steps + 1` frames are flushed
    pub steps: u16,
    /// Pause after each flushed frame
    pub step_delay: Duration,
}

/// Alert blink shown when ambient light control is toggled
#[derive(Debug, Clone, Copy)]
pub struct AlertConfig {
    pub blinks: u8,
    /// Duration of both the lit and the dark half of a blink
    pub blink_time: Duration,
    /// Blink color when ambient control becomes enabled
    pub enabled_color: Rgb,
    /// Blink color when ambient control becomes disabled
    pub disabled_color: Rgb,
}

/// Configuration for the controller and its driver loop
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    pub click: ClickConfig,
    pub photocell: PhotocellConfig,
    pub fade: FadeConfig,
    pub alert: AlertConfig,
    /// Sleep between loop iterations
    pub tick_interval: Duration,
    /// Whether the photocell may turn the strip on after a cold start
    pub ambient_enabled: bool,
}

impl ClickConfig {
    pub const fn new() -> Self {
        Self {
            window: DEFAULT_CLICK_WINDOW,
        }
    }
}

impl PhotocellConfig {
    pub const fn new() -> Self {
        Self {
            on_threshold: DEFAULT_PHOTO_ON_THRESHOLD,
            off_threshold: DEFAULT_PHOTO_OFF_THRESHOLD,
        }
    }
}

impl FadeConfig {
    pub const fn new() -> Self {
        Self {
            steps: DEFAULT_FADE_STEPS,
            step_delay: DEFAULT_FADE_STEP_DELAY,
        }
    }
}

impl AlertConfig {
    pub const fn new() -> Self {
        Self {
            blinks: DEFAULT_ALERT_BLINKS,
            blink_time: DEFAULT_ALERT_BLINK_TIME,
            enabled_color: GREEN,
            disabled_color: RED,
        }
    }
}

impl ControllerConfig {
    pub const fn new() -> Self {
        Self {
            click: ClickConfig::new(),
            photocell: PhotocellConfig::new(),
            fade: FadeConfig::new(),
            alert: AlertConfig::new(),
            tick_interval: DEFAULT_TICK_INTERVAL,
            ambient_enabled: true,
        }
    }

    /// Check the configuration invariants
    ///
    /// Called once on construction; the control loop assumes a valid config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fade.steps == 0 {
            return Err(ConfigError::ZeroFadeSteps);
        }
        if self.photocell.on_threshold >= self.photocell.off_threshold {
            return Err(ConfigError::InvalidThresholds);
        }
        if self.click.window.as_ticks() == 0 {
            return Err(ConfigError::ZeroClickWindow);
        }
        // Two presses within the window must land on different ticks
        if self.tick_interval.as_ticks() > self.click.window.as_ticks() / 4 {
            return Err(ConfigError::TickTooCoarse);
        }
        Ok(())
    }
}

impl Default for ClickConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for PhotocellConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::new()
    }
}
