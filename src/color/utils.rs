use crate::{
    color::Rgb,
    math8::{lerp8, scale8},
};

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn lerp(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: lerp8(a.r, b.r, amount_of_b),
        g: lerp8(a.g, b.g, amount_of_b),
        b: lerp8(a.b, b.b, amount_of_b),
    }
}

/// Scale every channel of a color by a brightness factor (0-255 = 0.0-1.0)
#[inline]
pub fn scale(color: Rgb, factor: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, factor),
        g: scale8(color.g, factor),
        b: scale8(color.b, factor),
    }
}

/// Fill the whole buffer with one color
pub fn fill(leds: &mut [Rgb], color: Rgb) {
    for led in leds {
        *led = color;
    }
}
