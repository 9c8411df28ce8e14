#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;
use std::vec::Vec;

use embassy_time::{Duration, Instant};
use streetcar_light::{AnalogInput, Clock, DigitalInput, LedSink, Rgb};

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Switch level shared between the test and the driver
#[derive(Clone)]
pub struct FakeSwitch(pub Rc<Cell<bool>>);

impl FakeSwitch {
    pub fn released() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn set_pressed(&self, pressed: bool) {
        self.0.set(!pressed);
    }
}

impl DigitalInput for FakeSwitch {
    fn read(&mut self) -> bool {
        self.0.get()
    }
}

/// Photocell reading shared between the test and the driver
#[derive(Clone)]
pub struct FakePhotocell(pub Rc<Cell<u32>>);

impl FakePhotocell {
    pub fn new(level: u32) -> Self {
        Self(Rc::new(Cell::new(level)))
    }

    pub fn set(&self, level: u32) {
        self.0.set(level);
    }
}

impl AnalogInput for FakePhotocell {
    fn read(&mut self) -> u32 {
        self.0.get()
    }
}

/// Sink recording every flushed frame
pub struct RecordingSink<const N: usize> {
    staged: [Rgb; N],
    pub flushed: Vec<[Rgb; N]>,
}

impl<const N: usize> RecordingSink<N> {
    pub fn new() -> Self {
        Self {
            staged: [BLACK; N],
            flushed: Vec::new(),
        }
    }

    pub fn last(&self) -> Option<[Rgb; N]> {
        self.flushed.last().copied()
    }
}

impl<const N: usize> LedSink for RecordingSink<N> {
    type Error = ();

    fn set_buffer(&mut self, colors: &[Rgb]) {
        self.staged.copy_from_slice(colors);
    }

    fn flush(&mut self) -> Result<(), ()> {
        self.flushed.push(self.staged);
        Ok(())
    }
}

/// Sink that always fails to flush
pub struct BrokenSink;

impl LedSink for BrokenSink {
    type Error = &'static str;

    fn set_buffer(&mut self, _colors: &[Rgb]) {}

    fn flush(&mut self) -> Result<(), Self::Error> {
        Err("bus error")
    }
}

/// Virtual clock that only moves when slept on
pub struct FakeClock {
    now: Instant,
    pub sleeps: Vec<Duration>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            now: Instant::from_millis(0),
            sleeps: Vec::new(),
        }
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.now
    }

    fn sleep(&mut self, duration: Duration) {
        self.now += duration;
        self.sleeps.push(duration);
    }
}

pub fn uniform<const N: usize>(frame: &[Rgb; N], color: Rgb) -> bool {
    frame.iter().all(|pixel| *pixel == color)
}
