//! Hardware collaborator contracts
//!
//! The controller core only talks to switches, the photocell, the strip and
//! the clock through these traits. Adapters for `embedded-hal` pins,
//! `smart-leds` writers and the `embassy-time` driver are provided.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;
use smart_leds::SmartLedsWrite;

use crate::color::Rgb;

/// Digital switch input
pub trait DigitalInput {
    /// Read the switch level
    ///
    /// Pull-up convention: `true` when released/open, `false` when pressed.
    fn read(&mut self) -> bool;
}

/// Analog sensor input, higher readings are brighter
pub trait AnalogInput {
    /// Read the raw sensor value
    ///
    /// Values above 65535 are clamped by the caller.
    fn read(&mut self) -> u32;
}

/// Addressable LED strip
pub trait LedSink {
    type Error;

    /// Stage a frame for the next flush
    fn set_buffer(&mut self, colors: &[Rgb]);

    /// Push the staged frame to the LEDs
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Monotonic clock with a blocking sleep
pub trait Clock {
    fn now(&self) -> Instant;

    fn sleep(&mut self, duration: Duration);
}

/// Switch backed by an `embedded-hal` input pin
///
/// A failed read reports the released level.
pub struct PinSwitch<P: InputPin> {
    pin: P,
}

impl<P: InputPin> PinSwitch<P> {
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> DigitalInput for PinSwitch<P> {
    fn read(&mut self) -> bool {
        self.pin.is_high().unwrap_or(true)
    }
}

/// Strip backed by any `smart-leds` writer
///
/// N is the number of LEDs in the strip
pub struct SmartLedsSink<W, const N: usize> {
    writer: W,
    buffer: [Rgb; N],
}

impl<W, const N: usize> SmartLedsSink<W, N> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: [Rgb { r: 0, g: 0, b: 0 }; N],
        }
    }
}

impl<W, const N: usize> LedSink for SmartLedsSink<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    type Error = W::Error;

    fn set_buffer(&mut self, colors: &[Rgb]) {
        for (led, color) in self.buffer.iter_mut().zip(colors) {
            *led = *color;
        }
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.writer.write(self.buffer.iter().copied())
    }
}

/// Clock backed by the `embassy-time` driver
///
/// Sleeping busy-waits with [`embassy_time::block_for`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}
