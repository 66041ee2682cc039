//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;

tincture_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue component of the color in degrees.
        hue: Component,
        /// The saturation component of the color in [0, 1].
        saturation: Component,
        /// The lightness component of the color in [0, 1].
        lightness: Component,
    }
}

impl Hsl {
    /// The fully saturated color at medium lightness having the same hue.
    pub fn pure_hue(&self) -> Self {
        Self::new(self.hue, 1.0, 0.5)
    }
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue.round(),
            (self.saturation * 100.0).round(),
            (self.lightness * 100.0).round()
        )
    }
}
