mod utils;
mod wheel;

use smart_leds::RGB8;

pub use utils::{fill, lerp, scale};
pub use wheel::wheel;

pub type Rgb = RGB8;

pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 100 };
pub const CUSTOM_YELLOW: Rgb = Rgb { r: 255, g: 150, b: 20 };
pub const CUSTOM_RED: Rgb = Rgb { r: 255, g: 30, b: 30 };

pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const ORANGE: Rgb = Rgb { r: 255, g: 120, b: 0 };
pub const YELLOW: Rgb = Rgb { r: 255, g: 200, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const VIOLET: Rgb = Rgb { r: 148, g: 0, b: 211 };
pub const LIGHT_BLUE: Rgb = Rgb { r: 100, g: 180, b: 255 };
