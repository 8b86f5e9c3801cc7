//! trichrome keeps the RGB, CMYK, HSL and hexadecimal forms of a single
//! color synchronized while the color is edited one channel at a time.

#![deny(missing_docs)]

mod cmyk;
mod color;
mod convert;
mod hex;
mod hsl;
mod math;
mod rgb;
mod state;
#[cfg(test)]
mod test;

pub use cmyk::Cmyk;
pub use color::{Component, Components};
pub use hex::ParseHexError;
pub use hsl::Hsl;
pub use rgb::Rgb;
pub use state::{
    Changed, CmykChannel, ColorState, Field, HslChannel, RgbChannel, UnknownFieldError,
};
