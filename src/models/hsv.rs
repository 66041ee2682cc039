//! Model a color with the HSV notation in the sRGB color space.

use crate::color::Component;

tincture_macros::gen_model! {
    /// A color specified with the HSV (hue, saturation, value) notation. It
    /// only exists to describe positions on the shade spectrum, where the
    /// horizontal axis is the saturation and the vertical axis is the value.
    pub struct Hsv {
        /// The hue component of the color in degrees.
        hue: Component,
        /// The saturation component of the color in [0, 1].
        saturation: Component,
        /// The value component of the color in [0, 1].
        value: Component,
    }
}
