//! The synchronization controller: one owned value holding the RGB, CMYK
//! and HSL forms of the edited color, kept consistent through edits.

use bitflags::bitflags;
use log::{debug, trace};
use std::str::FromStr;
use thiserror::Error;

use crate::cmyk::Cmyk;
use crate::hex::ParseHexError;
use crate::hsl::Hsl;
use crate::rgb::Rgb;

bitflags! {
    /// The representations an edit actually changed, so a renderer only
    /// repaints what moved.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Changed: u8 {
        /// The RGB channels, and with them the hex form, changed.
        const RGB = 1 << 0;
        /// The CMYK channels changed.
        const CMYK = 1 << 1;
        /// The HSL channels changed.
        const HSL = 1 << 2;
    }
}

/// A channel of the RGB model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RgbChannel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
}

/// A channel of the CMYK model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmykChannel {
    /// The cyan channel.
    Cyan,
    /// The magenta channel.
    Magenta,
    /// The yellow channel.
    Yellow,
    /// The key (black) channel.
    Key,
}

/// A channel of the HSL notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HslChannel {
    /// The hue angle.
    Hue,
    /// The saturation percentage.
    Saturation,
    /// The lightness percentage.
    Lightness,
}

/// Identifies a single editable channel in any of the representations,
/// the way an input widget names the field it is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// An RGB channel.
    Rgb(RgbChannel),
    /// A CMYK channel.
    Cmyk(CmykChannel),
    /// An HSL channel.
    Hsl(HslChannel),
}

/// A field name that does not map to any channel.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown field {0:?}")]
pub struct UnknownFieldError(String);

impl FromStr for Field {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "r" | "red" => Field::Rgb(RgbChannel::Red),
            "g" | "green" => Field::Rgb(RgbChannel::Green),
            "b" | "blue" => Field::Rgb(RgbChannel::Blue),
            "c" | "cyan" => Field::Cmyk(CmykChannel::Cyan),
            "m" | "magenta" => Field::Cmyk(CmykChannel::Magenta),
            "y" | "yellow" => Field::Cmyk(CmykChannel::Yellow),
            "k" | "key" | "black" => Field::Cmyk(CmykChannel::Key),
            "h" | "hue" => Field::Hsl(HslChannel::Hue),
            "s" | "saturation" => Field::Hsl(HslChannel::Saturation),
            "l" | "lightness" => Field::Hsl(HslChannel::Lightness),
            _ => return Err(UnknownFieldError(s.to_string())),
        })
    }
}

/// The settled tri-representation state of the edited color.
///
/// The representation named by the most recent edit is authoritative for
/// that edit; the other two are derived from it through RGB and then
/// stored as-is until the next edit, so rounding never feeds back on
/// itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorState {
    rgb: Rgb,
    cmyk: Cmyk,
    hsl: Hsl,
}

impl Default for ColorState {
    /// Mid gray, the state the editor starts from.
    fn default() -> Self {
        Self::from_rgb(Rgb::new(128, 128, 128))
    }
}

impl ColorState {
    /// Create a settled state anchored on an RGB value.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            cmyk: rgb.to_cmyk(),
            hsl: rgb.to_hsl(),
        }
    }

    /// Create a settled state anchored on a CMYK value.
    pub fn from_cmyk(cmyk: Cmyk) -> Self {
        let rgb = cmyk.to_rgb();
        Self {
            rgb,
            cmyk,
            hsl: rgb.to_hsl(),
        }
    }

    /// Create a settled state anchored on an HSL value.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let rgb = hsl.to_rgb();
        Self {
            rgb,
            cmyk: rgb.to_cmyk(),
            hsl,
        }
    }

    /// The current RGB form.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The current CMYK form.
    pub fn cmyk(&self) -> Cmyk {
        self.cmyk
    }

    /// The current HSL form.
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// The hex form of the canonical RGB value.
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }

    /// Set one RGB channel and derive the other representations.
    /// Out-of-range values are clamped to 0..=255.
    pub fn set_rgb(&mut self, channel: RgbChannel, value: i32) -> Changed {
        let value = value.clamp(0, 255) as u8;
        let mut rgb = self.rgb;
        match channel {
            RgbChannel::Red => rgb.red = value,
            RgbChannel::Green => rgb.green = value,
            RgbChannel::Blue => rgb.blue = value,
        }
        self.replace(Self::from_rgb(rgb))
    }

    /// Set one CMYK channel; RGB is derived from the new CMYK and HSL in
    /// turn from that RGB. Out-of-range values are clamped to 0..=100.
    pub fn set_cmyk(&mut self, channel: CmykChannel, value: i32) -> Changed {
        let value = value.clamp(0, 100) as u8;
        let mut cmyk = self.cmyk;
        match channel {
            CmykChannel::Cyan => cmyk.cyan = value,
            CmykChannel::Magenta => cmyk.magenta = value,
            CmykChannel::Yellow => cmyk.yellow = value,
            CmykChannel::Key => cmyk.key = value,
        }
        self.replace(Self::from_cmyk(cmyk))
    }

    /// Set one HSL channel; RGB is derived from the new HSL and CMYK in
    /// turn from that RGB. Hue clamps to 0..=360, the rest to 0..=100.
    pub fn set_hsl(&mut self, channel: HslChannel, value: i32) -> Changed {
        let mut hsl = self.hsl;
        match channel {
            HslChannel::Hue => hsl.hue = value.clamp(0, 360) as u16,
            HslChannel::Saturation => hsl.saturation = value.clamp(0, 100) as u8,
            HslChannel::Lightness => hsl.lightness = value.clamp(0, 100) as u8,
        }
        self.replace(Self::from_hsl(hsl))
    }

    /// Replace the color from a hex string. Malformed input returns the
    /// parse error and leaves the state untouched.
    pub fn set_hex(&mut self, hex: &str) -> Result<Changed, ParseHexError> {
        let rgb = Rgb::from_hex(hex)?;
        Ok(self.replace(Self::from_rgb(rgb)))
    }

    /// Apply a text edit to a single field, the way an input box delivers
    /// it. Text that does not parse as an integer is ignored and the
    /// prior settled state is retained.
    pub fn edit(&mut self, field: Field, text: &str) -> Changed {
        let Ok(value) = text.trim().parse::<i32>() else {
            debug!("ignoring non-numeric input {text:?} for {field:?}");
            return Changed::empty();
        };
        match field {
            Field::Rgb(channel) => self.set_rgb(channel, value),
            Field::Cmyk(channel) => self.set_cmyk(channel, value),
            Field::Hsl(channel) => self.set_hsl(channel, value),
        }
    }

    fn replace(&mut self, next: Self) -> Changed {
        let mut changed = Changed::empty();
        if next.rgb != self.rgb {
            changed |= Changed::RGB;
        }
        if next.cmyk != self.cmyk {
            changed |= Changed::CMYK;
        }
        if next.hsl != self.hsl {
            changed |= Changed::HSL;
        }
        *self = next;
        trace!(
            "settled on {} / {:?} / {:?} ({changed:?})",
            self.rgb,
            self.cmyk,
            self.hsl
        );
        changed
    }
}
