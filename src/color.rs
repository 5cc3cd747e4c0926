use smart_leds::RGB8;

use crate::math8::scale8;

pub type Rgb = RGB8;

/// Build an [`Rgb`] from a packed `0xRRGGBB` value
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(value: u32) -> Rgb {
    Rgb {
        r: ((value >> 16) & 0xFF) as u8,
        g: ((value >> 8) & 0xFF) as u8,
        b: (value & 0xFF) as u8,
    }
}

/// Scale each channel of a color by an intensity (0-255)
pub const fn scale_color(color: Rgb, intensity: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, intensity),
        g: scale8(color.g, intensity),
        b: scale8(color.b, intensity),
    }
}
