use crate::color::Rgb;

/// Position on a 256-step red → green → blue color wheel
#[allow(clippy::cast_possible_truncation)]
pub const fn wheel(pos: u8) -> Rgb {
    match pos {
        0..85 => Rgb {
            r: pos * 3,
            g: 255 - pos * 3,
            b: 0,
        },
        85..170 => {
            let pos = pos - 85;
            Rgb {
                r: 255 - pos * 3,
                g: 0,
                b: pos * 3,
            }
        }
        _ => {
            let pos = pos - 170;
            Rgb {
                r: 0,
                g: pos * 3,
                b: 255 - pos * 3,
            }
        }
    }
}
