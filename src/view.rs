//! The rendering side of the picker. The host implements [`ColorView`] on top
//! of whatever draws the fields, the surfaces and the cursors.

use crate::color::Component;
use crate::geometry::SurfacePoint;

/// One of the text fields of the picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Red channel, 0 to 255.
    Red,
    /// Green channel, 0 to 255.
    Green,
    /// Blue channel, 0 to 255.
    Blue,
    /// HSL hue in degrees.
    Hue,
    /// HSL saturation in percent.
    Saturation,
    /// HSL lightness in percent.
    Lightness,
    /// Six hexadecimal digits.
    Hex,
}

impl Field {
    /// Every field in display order.
    pub const ALL: [Field; 7] = [
        Field::Red,
        Field::Green,
        Field::Blue,
        Field::Hue,
        Field::Saturation,
        Field::Lightness,
        Field::Hex,
    ];

    /// The group this field belongs to.
    pub fn group(self) -> FieldGroup {
        match self {
            Field::Red | Field::Green | Field::Blue => FieldGroup::Rgb,
            Field::Hue | Field::Saturation | Field::Lightness => FieldGroup::Hsl,
            Field::Hex => FieldGroup::Hex,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Field::Red => "red",
            Field::Green => "green",
            Field::Blue => "blue",
            Field::Hue => "hue",
            Field::Saturation => "saturation",
            Field::Lightness => "lightness",
            Field::Hex => "hex",
        })
    }
}

/// Fields that are edited and shown together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    /// Red, green and blue.
    Rgb,
    /// Hue, saturation and lightness.
    Hsl,
    /// The hex field.
    Hex,
}

impl FieldGroup {
    /// The fields of this group.
    pub fn fields(self) -> &'static [Field] {
        match self {
            FieldGroup::Rgb => &[Field::Red, Field::Green, Field::Blue],
            FieldGroup::Hsl => &[Field::Hue, Field::Saturation, Field::Lightness],
            FieldGroup::Hex => &[Field::Hex],
        }
    }
}

/// A picking surface that can be dragged on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The 2-D saturation/value shade spectrum.
    Spectrum,
    /// The 1-D hue bar.
    Hue,
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Surface::Spectrum => "spectrum",
            Surface::Hue => "hue",
        })
    }
}

/// Which field group is visible. Cosmetic only, the color is not affected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// The hex field is visible.
    #[default]
    Hex,
    /// The RGB fields are visible.
    Rgb,
    /// The HSL fields are visible.
    Hsl,
}

impl DisplayMode {
    /// The mode that follows this one: hex, rgb, hsl and back to hex.
    pub fn next(self) -> Self {
        match self {
            DisplayMode::Hex => DisplayMode::Rgb,
            DisplayMode::Rgb => DisplayMode::Hsl,
            DisplayMode::Hsl => DisplayMode::Hex,
        }
    }

    /// The field group shown in this mode.
    pub fn group(self) -> FieldGroup {
        match self {
            DisplayMode::Hex => FieldGroup::Hex,
            DisplayMode::Rgb => FieldGroup::Rgb,
            DisplayMode::Hsl => FieldGroup::Hsl,
        }
    }
}

/// Commands issued by the controller to the host renderer.
///
/// Colors are passed as CSS text, e.g. `hsl(120, 100%, 50%)` or
/// `rgb(0, 255, 0)`. Positions are local to the surface.
pub trait ColorView {
    /// Show `value` in a text field.
    fn set_field_value(&mut self, field: Field, value: &str);

    /// Move the shade spectrum cursor.
    fn set_spectrum_cursor_position(&mut self, position: SurfacePoint);

    /// Move the hue bar cursor to a vertical position.
    fn set_hue_cursor_position(&mut self, y: Component);

    /// Fill the hue cursor with the fully saturated hue color.
    fn set_hue_cursor_color(&mut self, hue_color: &str);

    /// Regenerate the shade spectrum gradient for a new hue.
    fn set_spectrum_gradient_hue(&mut self, hue_color: &str);

    /// Show the selected color in the preview swatch.
    fn set_current_color(&mut self, color: &str);

    /// Toggle the cosmetic "dragging" state of a surface's cursor.
    fn set_dragging_style(&mut self, surface: Surface, on: bool);

    /// Make the field group of `mode` the active one.
    fn set_display_mode(&mut self, mode: DisplayMode);

    /// Show or clear a validation hint next to a field group.
    fn set_validation_hint(&mut self, group: FieldGroup, hint: Option<&str>) {
        let _ = (group, hint);
    }
}
