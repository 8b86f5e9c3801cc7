//! Model a color with the HSL notation.

use crate::color::{Component, Components};
use crate::math;

/// A color in the HSL notation: hue in whole degrees, saturation and
/// lightness as integer percentages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsl {
    /// The hue angle in degrees.
    pub hue: u16,
    /// The saturation percentage.
    pub saturation: u8,
    /// The lightness percentage.
    pub lightness: u8,
}

impl Hsl {
    /// Create a new HSL color. Hue is clamped to 360, saturation and
    /// lightness to 100.
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue: hue.min(360),
            saturation: saturation.min(100),
            lightness: lightness.min(100),
        }
    }

    /// Components carry the hue in degrees and saturation/lightness in
    /// [0, 1].
    pub fn to_components(&self) -> Components {
        Components(
            self.hue as Component,
            self.saturation as Component / 100.0,
            self.lightness as Component / 100.0,
        )
    }

    /// Quantize components (hue in degrees, the rest in [0, 1]) back to
    /// the integer notation.
    pub fn from_components(components: &Components) -> Self {
        Self {
            hue: math::to_degrees(components.0),
            saturation: math::unit_to_percent(components.1),
            lightness: math::unit_to_percent(components.2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_each_channel_to_its_domain() {
        assert_eq!(Hsl::new(400, 120, 200), Hsl::new(360, 100, 100));
    }

    #[test]
    fn components_round_trip() {
        let hsl = Hsl::new(207, 44, 49);
        assert_eq!(Hsl::from_components(&hsl.to_components()), hsl);
    }
}
