//! Conversions between the color models.
//!
//! Only the conversions to and from RGB exist; a derivation between CMYK
//! and HSL is always chained through RGB so that every value is produced
//! by one rounding path, no matter which model it started in.

use crate::cmyk::Cmyk;
use crate::hsl::Hsl;
use crate::rgb::Rgb;

impl Rgb {
    /// Convert to the CMYK model.
    pub fn to_cmyk(&self) -> Cmyk {
        Cmyk::from_components(&util::rgb_to_cmyk(&self.to_components()))
    }

    /// Convert to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        Hsl::from_components(&util::rgb_to_hsl(&self.to_components()))
    }
}

impl Cmyk {
    /// Convert to the RGB model.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_components(&util::cmyk_to_rgb(&self.to_components()))
    }
}

impl Hsl {
    /// Convert to the RGB model.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_components(&util::hsl_to_rgb(&self.to_components()))
    }
}

mod util {
    use crate::color::{Component, Components};
    use crate::math::{almost_zero, normalize_hue};

    /// Calculate the hue from RGB components and return it along with the
    /// min and max RGB values. Achromatic input has a hue of zero.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            0.0
        };

        (hue, min, max)
    }

    /// Convert from RGB notation to HSL notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation =
            if almost_zero(delta) || almost_zero(lightness) || almost_zero(1.0 - lightness) {
                0.0
            } else {
                (max - lightness) / lightness.min(1.0 - lightness)
            };

        Components(hue, saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let hue = normalize_hue(hue);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 30.0) % 12.0;
                let a = saturation * lightness.min(1.0 - lightness);
                lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
            }};
        }

        Components(f!(0.0), f!(8.0), f!(4.0))
    }

    /// Convert from RGB notation to CMYK coverage. Black carries no
    /// chroma, so the key saturates and the inks drop to zero.
    pub fn rgb_to_cmyk(from: &Components) -> [Component; 4] {
        let Components(red, green, blue) = *from;

        let key = 1.0 - red.max(green).max(blue);
        let white = 1.0 - key;
        if almost_zero(white) {
            return [0.0, 0.0, 0.0, 1.0];
        }

        [
            (1.0 - red - key) / white,
            (1.0 - green - key) / white,
            (1.0 - blue - key) / white,
            key,
        ]
    }

    /// Convert from CMYK coverage to RGB notation.
    pub fn cmyk_to_rgb(from: &[Component; 4]) -> Components {
        let [cyan, magenta, yellow, key] = *from;

        let white = 1.0 - key;
        Components(
            (1.0 - cyan) * white,
            (1.0 - magenta) * white,
            (1.0 - yellow) * white,
        )
    }
}
