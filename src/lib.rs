#![no_std]

pub mod click;
pub mod color;
pub mod config;
pub mod controller;
pub mod driver;
pub mod error;
pub mod fade;
pub mod io;
pub mod math8;
pub mod mode;
pub mod operation;
pub mod photocell;

pub use click::{ClickClassifier, ClickEvent};
pub use config::{AlertConfig, ClickConfig, ControllerConfig, FadeConfig, PhotocellConfig};
pub use controller::{Controller, InputSample};
pub use driver::{Driver, Peripherals};
pub use error::ConfigError;
pub use fade::Crossfade;
pub use io::{AnalogInput, Clock, DigitalInput, EmbassyClock, LedSink, PinSwitch, SmartLedsSink};
pub use mode::{Mode, ModeEntry, ModeId, ModeRegistry, ModeSlot};
pub use operation::{Operation, OperationQueue};
pub use photocell::PhotocellGate;

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};
