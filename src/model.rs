//! The [`ColorModel`] owns the canonical color and every conversion between
//! it, the text field values and the cursor positions.

use crate::{
    color::Component,
    config::PickerConfig,
    error::PickerError,
    geometry::{HueGeometry, SpectrumGeometry, SurfacePoint, SurfaceRect},
    hex::{format_hex, parse_hex},
    math::{clamp_unit, wrap_hue},
    models::{Hsl, Hsv, Srgb},
};

/// Single source of truth for the selected color.
///
/// The color is stored once, as HSL with the hue in [0, 360) and the
/// saturation and lightness in [0, 1]. Every other representation is derived
/// from it on demand.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorModel {
    color: Hsl,
    spectrum: SpectrumGeometry,
    hue: HueGeometry,
    /// Where the hue cursor was placed by the last hue bar pick. The top and
    /// the bottom of the bar are both red, this keeps the cursor on the edge
    /// the user picked.
    hue_cursor: Option<Component>,
}

impl Default for ColorModel {
    fn default() -> Self {
        Self::from_config(&PickerConfig::default())
    }
}

impl ColorModel {
    /// Create a model for the given color and surfaces.
    pub fn new(color: Hsl, spectrum: SpectrumGeometry, hue: HueGeometry) -> Self {
        let mut model = Self {
            color,
            spectrum,
            hue,
            hue_cursor: None,
        };
        model.set_from_hsl(color.hue, color.saturation, color.lightness);
        model
    }

    /// Create a model from a picker configuration.
    pub fn from_config(config: &PickerConfig) -> Self {
        Self::new(
            config.initial_color,
            SpectrumGeometry::new(config.spectrum_rect),
            HueGeometry::new(config.hue_rect),
        )
    }

    /// Set the color from 8-bit RGB channels. Each channel is clamped to
    /// [0, 255]. An achromatic color keeps the current hue.
    pub fn set_from_rgb(&mut self, red: i32, green: i32, blue: i32) {
        let channel = |v: i32| v.clamp(0, 255) as u8;
        self.set_from_srgb(&Srgb::from_bytes([channel(red), channel(green), channel(blue)]));
    }

    /// Set the color from HSL components. The hue is wrapped into [0, 360),
    /// saturation and lightness are clamped to [0, 1].
    pub fn set_from_hsl(&mut self, hue: Component, saturation: Component, lightness: Component) {
        self.color = Hsl::new(wrap_hue(hue), clamp_unit(saturation), clamp_unit(lightness));
        self.hue_cursor = None;
    }

    /// Set the color from a 3 or 6 digit hex string. A malformed string is
    /// rejected and the color is left unchanged.
    pub fn set_from_hex(&mut self, hex: &str) -> Result<(), PickerError> {
        let srgb = parse_hex(hex).map_err(|source| PickerError::InvalidHexFormat {
            input: hex.to_string(),
            source,
        })?;
        self.set_from_srgb(&srgb);
        Ok(())
    }

    /// Set the saturation and value from a point on the shade spectrum,
    /// keeping the current hue.
    pub fn set_from_spectrum_point(&mut self, point: SurfacePoint) {
        let (saturation, value) = self.spectrum.saturation_value_at(point);
        let hsl = Hsv::new(self.color.hue, saturation, value).to_hsl();
        // The hue is untouched, so a hue bar pick stays where it was.
        self.color = Hsl::new(self.color.hue, hsl.saturation, hsl.lightness);
    }

    /// Set the hue from a vertical position on the hue bar, keeping the
    /// current HSL saturation and lightness.
    pub fn set_from_hue_point(&mut self, y: Component) {
        let y = y.max(0.0).min(self.hue.height());
        self.color.hue = wrap_hue(self.hue.hue_at(y));
        self.hue_cursor = Some(y);
    }

    /// Where the shade spectrum cursor is drawn for the current color.
    pub fn current_spectrum_cursor(&self) -> SurfacePoint {
        let hsv = self.color.to_hsv();
        self.spectrum.point_for(hsv.saturation, hsv.value)
    }

    /// Where the hue cursor is drawn for the current color.
    pub fn current_hue_cursor(&self) -> Component {
        self.hue_cursor
            .unwrap_or_else(|| self.hue.y_for(self.color.hue))
    }

    /// The current color as 8-bit RGB channels.
    pub fn to_rgb(&self) -> [u8; 3] {
        self.to_srgb().to_bytes()
    }

    /// The current color in the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        self.color.to_srgb()
    }

    /// The canonical color.
    pub fn to_hsl(&self) -> Hsl {
        self.color
    }

    /// The current color as 6 uppercase hex digits.
    pub fn to_hex(&self) -> String {
        format_hex(&self.to_srgb())
    }

    /// The fully saturated color at the current hue. The shade spectrum
    /// gradient and the hue cursor are painted with it.
    pub fn hue_color(&self) -> Hsl {
        self.color.pure_hue()
    }

    /// Geometry of the shade spectrum.
    pub fn spectrum(&self) -> &SpectrumGeometry {
        &self.spectrum
    }

    /// Geometry of the hue bar.
    pub fn hue_geometry(&self) -> &HueGeometry {
        &self.hue
    }

    /// Replace the bounding rectangle of the shade spectrum.
    pub fn set_spectrum_rect(&mut self, rect: SurfaceRect) {
        self.spectrum = SpectrumGeometry::new(rect);
    }

    /// Replace the bounding rectangle of the hue bar.
    pub fn set_hue_rect(&mut self, rect: SurfaceRect) {
        self.hue = HueGeometry::new(rect);
        self.hue_cursor = None;
    }

    fn set_from_srgb(&mut self, srgb: &Srgb) {
        let hsl = srgb.to_hsl();
        // Achromatic colors have a powerless hue.
        let hue = if hsl.hue.is_nan() {
            self.color.hue
        } else {
            hsl.hue
        };
        self.set_from_hsl(hue, hsl.saturation, hsl.lightness);
    }
}
