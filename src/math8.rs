/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Fade-in intensity for `step` of an N-step animation: `255 * step / N`
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn fade_in8(step: u16, total: u16) -> u8 {
    if total == 0 || step >= total {
        return 255;
    }
    ((255 * step as u32) / total as u32) as u8
}

/// Fade-out intensity for `step` of an N-step animation: `255 * (N - step) / N`
///
/// Not the complement of [`fade_in8`]: integer division makes
/// `255*(N-step)/N` and `255 - 255*step/N` differ by one on most steps.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn fade_out8(step: u16, total: u16) -> u8 {
    if total == 0 || step >= total {
        return 0;
    }
    ((255 * (total - step) as u32) / total as u32) as u8
}
