//! Visibility and mode controller
//!
//! Owns every piece of process-wide state: visibility, active mode and its
//! animation phases, the ambient control flag and the pending click. Each
//! tick it consumes one input sample and describes the required output as
//! an [`OperationQueue`], without touching any hardware.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::click::{ClickClassifier, ClickEvent};
use crate::color::Rgb;
use crate::config::{AlertConfig, ControllerConfig};
use crate::error::ConfigError;
use crate::mode::ModeRegistry;
use crate::operation::{Operation, OperationQueue};
use crate::photocell::PhotocellGate;

/// Inputs sampled at the start of a tick
#[derive(Debug, Clone, Copy)]
pub struct InputSample {
    /// Momentary switch level, `true` when released
    pub momentary: bool,
    /// Whether the latching switch is closed
    pub latch_active: bool,
    /// Clamped photocell reading
    pub light_level: u16,
}

#[derive(Debug, Clone)]
pub struct Controller {
    clicks: ClickClassifier,
    gate: PhotocellGate,
    alert: AlertConfig,
    modes: ModeRegistry,
    lit: bool,
    ambient_enabled: bool,
}

impl Controller {
    /// Create a controller cycling through the built-in modes
    pub fn new(config: &ControllerConfig) -> Result<Self, ConfigError> {
        Self::with_modes(config, ModeRegistry::builtin())
    }

    /// Create a controller with a custom mode registry
    pub fn with_modes(config: &ControllerConfig, modes: ModeRegistry) -> Result<Self, ConfigError> {
        config.validate()?;
        if modes.is_empty() {
            return Err(ConfigError::EmptyModeList);
        }
        Ok(Self {
            clicks: ClickClassifier::new(config.click.window),
            gate: PhotocellGate::new(&config.photocell),
            alert: config.alert,
            modes,
            lit: false,
            ambient_enabled: config.ambient_enabled,
        })
    }

    pub const fn is_lit(&self) -> bool {
        self.lit
    }

    pub const fn is_ambient_enabled(&self) -> bool {
        self.ambient_enabled
    }

    pub const fn mode_index(&self) -> usize {
        self.modes.active_index()
    }

    pub fn mode_name(&self) -> &'static str {
        self.modes.active_name()
    }

    pub const fn clicks(&self) -> &ClickClassifier {
        &self.clicks
    }

    /// Process one input sample
    ///
    /// Returns the output operations for this tick in execution order.
    pub fn tick(&mut self, input: &InputSample, now: Instant) -> OperationQueue {
        let mut operations = OperationQueue::new();

        match self.clicks.classify(input.momentary, now) {
            ClickEvent::Double => self.toggle_ambient(&mut operations),
            ClickEvent::Single => self.advance_mode(&mut operations),
            ClickEvent::None => {}
        }

        let wants_lit = input.latch_active
            || (self.ambient_enabled && self.gate.wants_light(input.light_level, self.lit));

        match (self.lit, wants_lit) {
            (false, true) => {
                #[cfg(feature = "esp32-log")]
                println!("[controller] turn on: fade in");
                let _ = operations.push(Operation::FadeIn);
                self.lit = true;
            }
            (true, false) => {
                #[cfg(feature = "esp32-log")]
                println!("[controller] turn off: fade out");
                let _ = operations.push_power_off();
                self.lit = false;
            }
            (true, true) => {
                let _ = operations.push(Operation::Render);
            }
            (false, false) => {}
        }

        operations
    }

    /// Render the active mode's current frame without advancing it
    pub fn capture(&self, leds: &mut [Rgb]) {
        self.modes.capture(leds);
    }

    /// Render the active mode's next animation frame
    pub fn render_next(&mut self, leds: &mut [Rgb]) {
        self.modes.render_next(leds);
    }

    fn toggle_ambient(&mut self, operations: &mut OperationQueue) {
        self.ambient_enabled = !self.ambient_enabled;
        #[cfg(feature = "esp32-log")]
        println!("[controller] double-click: ambient control {}", self.ambient_enabled);

        if self.alert.blinks == 0 {
            return;
        }
        let color = if self.ambient_enabled {
            self.alert.enabled_color
        } else {
            self.alert.disabled_color
        };
        let _ = operations.push(Operation::Blink(color));
    }

    fn advance_mode(&mut self, operations: &mut OperationQueue) {
        if self.lit {
            let _ = operations.push_mode_change();
        }
        self.modes.advance();
        #[cfg(feature = "esp32-log")]
        println!(
            "[controller] single-click: mode {} {}",
            self.modes.active_index(),
            self.modes.active_name()
        );
    }
}
