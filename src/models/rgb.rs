//! Model a color in the sRGB color space.

use crate::color::Component;
use crate::math::clamp_unit;

tincture_macros::gen_model! {
    /// A color specified in the sRGB color space with components in [0, 1].
    pub struct Srgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl Srgb {
    /// Create a color from 8-bit channel values.
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        let [red, green, blue] = bytes.map(|b| Component::from(b) / 255.0);
        Self::new(red, green, blue)
    }

    /// Quantize the color to 8-bit channel values. Components outside of
    /// [0, 1] are clamped first.
    pub fn to_bytes(&self) -> [u8; 3] {
        let quantize = |v: Component| (clamp_unit(v) * 255.0).round() as u8;
        [quantize(self.red), quantize(self.green), quantize(self.blue)]
    }
}

impl std::fmt::Display for Srgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [red, green, blue] = self.to_bytes();
        write!(f, "rgb({red}, {green}, {blue})")
    }
}
