//! 8-bit integer helpers shared by color math and fades.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// A scale of 255 returns the value unchanged.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Clamp a wide intermediate channel value into `0..=255`
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn clamp_channel(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

/// Linear blend between two 8-bit values
///
/// `amount_of_b` of 0 returns `a` and 255 returns `b`, both exactly.
/// Intermediate results are truncated towards `a`.
#[inline]
pub const fn lerp8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i32 - a as i32;
    clamp_channel(a as i32 + delta * amount_of_b as i32 / 255)
}

/// Progress of `step` out of `steps` mapped onto 0-255
///
/// Zero `steps` is treated as already complete.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn fraction8(step: u16, steps: u16) -> u8 {
    if steps == 0 || step >= steps {
        return 255;
    }
    ((step as u32 * 255) / steps as u32) as u8
}
