//! Math utility functions.

use crate::color::Component;

/// Returns true if the value is close enough to zero for the conversion
/// formulas to treat it as zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < 1.0e-6
}

/// Wrap a hue angle into [0, 360).
pub fn normalize_hue(hue: Component) -> Component {
    hue.rem_euclid(360.0)
}

/// Quantize a unit value to a byte channel. Rounding is half-up; inputs
/// here are never negative before clamping.
pub fn unit_to_byte(value: Component) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Quantize a unit value to an integer percentage.
pub fn unit_to_percent(value: Component) -> u8 {
    (value * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Quantize an angle in degrees to a whole degree in 0..=360.
pub fn to_degrees(value: Component) -> u16 {
    value.round().clamp(0.0, 360.0) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantization_rounds_half_up_and_clamps() {
        assert_eq!(unit_to_byte(0.5), 128);
        assert_eq!(unit_to_byte(1.2), 255);
        assert_eq!(unit_to_byte(-0.1), 0);
        assert_eq!(unit_to_percent(0.125), 13);
        assert_eq!(unit_to_percent(0.0), 0);
        assert_eq!(to_degrees(359.6), 360);
        assert_eq!(to_degrees(-0.4), 0);
    }

    #[test]
    fn hue_wraps_into_a_single_turn() {
        assert_eq!(normalize_hue(370.0), 10.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(360.0), 0.0);
    }
}
