//! Conversions between the sRGB, HSL and HSV notations.
//!
//! NOTE: When a conversion yields a NaN hue, the hue is powerless (the color
//!       is achromatic) and the caller decides which hue to keep.

use crate::models::{Hsl, Hsv, Srgb};

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&self.to_components()).into()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        util::hsl_to_rgb(&self.to_components()).into()
    }

    /// Convert this color from the HSL notation to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        util::hsl_to_hsv(&self.to_components()).into()
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::hsv_to_hsl(&self.to_components()).into()
    }

    /// Convert this color from the HSV notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        self.to_hsl().to_srgb()
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{almost_zero, clamp_unit, wrap_hue},
    };

    /// Convert from RGB notation to HSL notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = from.map(clamp_unit);

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
            Component::NAN
        };

        let lightness = (min + max) / 2.0;

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
        let hue = wrap_hue(from.0);
        let saturation = clamp_unit(from.1);
        let lightness = clamp_unit(from.2);

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 30.0) % 12.0;
                let a = saturation * lightness.min(1.0 - lightness);
                lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
            }};
        }

        Components(f!(0.0), f!(8.0), f!(4.0))
    }

    /// Convert from HSL notation to HSV notation.
    ///
    /// At zero value (black) the HSV saturation is undefined, the HSL
    /// saturation is carried through so [`hsv_to_hsl`] can restore it.
    pub fn hsl_to_hsv(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;
        let saturation = clamp_unit(saturation);
        let lightness = clamp_unit(lightness);

        let value = lightness + saturation * lightness.min(1.0 - lightness);
        let saturation = if almost_zero(value) {
            saturation
        } else {
            2.0 * (1.0 - lightness / value)
        };

        Components(hue, clamp_unit(saturation), clamp_unit(value))
    }

    /// Convert from HSV notation to HSL notation.
    pub fn hsv_to_hsl(from: &Components) -> Components {
        let Components(hue, saturation, value) = *from;
        let saturation = clamp_unit(saturation);
        let value = clamp_unit(value);

        let lightness = value * (1.0 - saturation / 2.0);
        let saturation = if almost_zero(value) {
            saturation
        } else if almost_zero(lightness) || almost_zero(1.0 - lightness) {
            0.0
        } else {
            (value - lightness) / lightness.min(1.0 - lightness)
        };

        Components(hue, clamp_unit(saturation), clamp_unit(lightness))
    }
}
