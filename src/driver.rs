//! Main control loop
//!
//! Each tick samples the inputs, lets the controller decide, executes the
//! resulting operations against the strip and sleeps for the tick interval.
//! Fades and blinks block the loop until they finish; inputs are not
//! sampled meanwhile.
//!
//! # Usage
//!
//! ```ignore
//! let peripherals = Peripherals {
//!     momentary: PinSwitch::new(button),
//!     latch: PinSwitch::new(latch),
//!     photocell,
//! };
//! let driver: Driver<_, _, _, _, _, 8> =
//!     Driver::new(&ControllerConfig::new(), peripherals, sink, EmbassyClock)?;
//! driver.run()?;
//! ```

use core::convert::Infallible;

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{OFF, Rgb};
use crate::config::{AlertConfig, ControllerConfig};
use crate::controller::{Controller, InputSample};
use crate::error::ConfigError;
use crate::fade::Crossfade;
use crate::io::{AnalogInput, Clock, DigitalInput, LedSink};
use crate::mode::ModeRegistry;
use crate::operation::Operation;
use crate::photocell::clamp_reading;

/// Controller inputs
pub struct Peripherals<M, L, A> {
    /// Momentary mode/ambient switch
    pub momentary: M,
    /// Latching override switch
    pub latch: L,
    /// Ambient light sensor
    pub photocell: A,
}

/// Driver loop
///
/// N is the number of LEDs in the strip
pub struct Driver<M, L, A, S, C, const N: usize> {
    // External dependencies
    inputs: Peripherals<M, L, A>,
    sink: S,
    clock: C,

    // Configuration
    crossfade: Crossfade,
    alert: AlertConfig,
    tick_interval: Duration,

    // Internal state
    controller: Controller,
    /// Last frame flushed to the strip
    frame: [Rgb; N],
}

impl<M, L, A, S, C, const N: usize> Driver<M, L, A, S, C, N>
where
    M: DigitalInput,
    L: DigitalInput,
    A: AnalogInput,
    S: LedSink,
    C: Clock,
{
    /// Create a driver cycling through the built-in modes
    pub fn new(
        config: &ControllerConfig,
        inputs: Peripherals<M, L, A>,
        sink: S,
        clock: C,
    ) -> Result<Self, ConfigError> {
        Self::with_modes(config, ModeRegistry::builtin(), inputs, sink, clock)
    }

    /// Create a driver with a custom mode registry
    pub fn with_modes(
        config: &ControllerConfig,
        modes: ModeRegistry,
        inputs: Peripherals<M, L, A>,
        sink: S,
        clock: C,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            inputs,
            sink,
            clock,
            crossfade: Crossfade::new(&config.fade),
            alert: config.alert,
            tick_interval: config.tick_interval,
            controller: Controller::with_modes(config, modes)?,
            frame: [OFF; N],
        })
    }

    pub const fn controller(&self) -> &Controller {
        &self.controller
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Blank the strip before the first tick
    pub fn start(&mut self) -> Result<(), S::Error> {
        self.show(&[OFF; N])?;
        #[cfg(feature = "esp32-log")]
        println!("[driver] startup complete");
        Ok(())
    }

    /// Blank the strip and tick forever
    ///
    /// Only returns when the strip fails to flush.
    pub fn run(mut self) -> Result<Infallible, S::Error> {
        self.start()?;
        loop {
            self.tick()?;
        }
    }

    /// Run one loop iteration, including the trailing sleep
    pub fn tick(&mut self) -> Result<(), S::Error> {
        let now = self.clock.now();
        let input = self.sample();

        let mut operations = self.controller.tick(&input, now);
        while let Some(operation) = operations.pop() {
            self.execute(operation)?;
        }

        self.clock.sleep(self.tick_interval);
        Ok(())
    }

    fn sample(&mut self) -> InputSample {
        InputSample {
            momentary: self.inputs.momentary.read(),
            latch_active: !self.inputs.latch.read(),
            light_level: clamp_reading(self.inputs.photocell.read()),
        }
    }

    fn execute(&mut self, operation: Operation) -> Result<(), S::Error> {
        match operation {
            Operation::Blink(color) => self.blink(color),
            Operation::FadeOut => self.fade_to(&[OFF; N]),
            Operation::FadeIn => {
                let mut target = [OFF; N];
                self.controller.capture(&mut target);
                self.frame = [OFF; N];
                self.fade_to(&target)
            }
            Operation::Blank => self.show(&[OFF; N]),
            Operation::Render => {
                let mut frame = [OFF; N];
                self.controller.render_next(&mut frame);
                self.show(&frame)
            }
        }
    }

    fn fade_to(&mut self, target: &[Rgb; N]) -> Result<(), S::Error> {
        let source = self.frame;
        self.frame = self
            .crossfade
            .run(&source, target, &mut self.sink, &mut self.clock)?;
        Ok(())
    }

    fn blink(&mut self, color: Rgb) -> Result<(), S::Error> {
        for _ in 0..self.alert.blinks {
            self.show(&[color; N])?;
            self.clock.sleep(self.alert.blink_time);
            self.show(&[OFF; N])?;
            self.clock.sleep(self.alert.blink_time);
        }
        Ok(())
    }

    fn show(&mut self, frame: &[Rgb; N]) -> Result<(), S::Error> {
        self.sink.set_buffer(frame);
        self.sink.flush()?;
        self.frame = *frame;
        Ok(())
    }
}
