//! Start up configuration of a picker.

use crate::color::Component;
use crate::geometry::{surface_rect, SurfaceRect};
use crate::models::Hsl;
use crate::view::DisplayMode;

/// Default width and height of the shade spectrum.
pub const DEFAULT_SPECTRUM_SIZE: Component = 200.0;

/// Default width of the hue bar. Its height matches the spectrum.
pub const DEFAULT_HUE_WIDTH: Component = 20.0;

/// Picker configuration.
///
/// The surface rectangles are the bounding rectangles of the rendered
/// surfaces in page coordinates, as measured by the host.
///
/// ```rust
/// use tincture::{DisplayMode, PickerConfig, models::Hsl};
/// let config = PickerConfig::default()
///     .initial_color(Hsl::new(120.0, 1.0, 0.5))
///     .display_mode(DisplayMode::Rgb);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickerConfig {
    /// The color selected when the picker opens.
    pub initial_color: Hsl,
    /// Bounding rectangle of the shade spectrum.
    pub spectrum_rect: SurfaceRect,
    /// Bounding rectangle of the hue bar.
    pub hue_rect: SurfaceRect,
    /// The field group visible when the picker opens.
    pub display_mode: DisplayMode,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_color: Hsl::new(0.0, 1.0, 0.5),
            spectrum_rect: surface_rect(0.0, 0.0, DEFAULT_SPECTRUM_SIZE, DEFAULT_SPECTRUM_SIZE),
            hue_rect: surface_rect(
                DEFAULT_SPECTRUM_SIZE,
                0.0,
                DEFAULT_HUE_WIDTH,
                DEFAULT_SPECTRUM_SIZE,
            ),
            display_mode: DisplayMode::default(),
        }
    }
}

impl PickerConfig {
    /// Set the color selected when the picker opens.
    pub fn initial_color(mut self, color: Hsl) -> Self {
        self.initial_color = color;
        self
    }

    /// Set the bounding rectangle of the shade spectrum.
    pub fn spectrum_rect(mut self, rect: SurfaceRect) -> Self {
        self.spectrum_rect = rect;
        self
    }

    /// Set the bounding rectangle of the hue bar.
    pub fn hue_rect(mut self, rect: SurfaceRect) -> Self {
        self.hue_rect = rect;
        self
    }

    /// Set the field group visible when the picker opens.
    pub fn display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }
}
