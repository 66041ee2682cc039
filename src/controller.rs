//! The [`ColorController`] turns host input events into [`ColorModel`]
//! updates and keeps every representation shown by a [`ColorView`] in sync.
//!
//! Every accepted mutation funnels through one synchronization routine, so
//! after an event has been handled the fields, both cursors, the gradient and
//! the preview all show the same color.

use bitflags::bitflags;

use crate::{
    color::Component,
    config::PickerConfig,
    error::PickerError,
    geometry::{PagePoint, SurfaceRect},
    model::ColorModel,
    view::{ColorView, DisplayMode, Field, FieldGroup, Surface},
};

bitflags! {
    /// The parts of the view refreshed by a synchronization pass.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Targets : u8 {
        /// The red, green and blue fields.
        const RGB_FIELDS = 1 << 0;
        /// The hue, saturation and lightness fields.
        const HSL_FIELDS = 1 << 1;
        /// The hex field.
        const HEX_FIELD = 1 << 2;
        /// The shade spectrum cursor.
        const SPECTRUM_CURSOR = 1 << 3;
        /// The hue cursor, position and fill.
        const HUE_CURSOR = 1 << 4;
        /// The shade spectrum gradient.
        const GRADIENT = 1 << 5;
        /// The preview swatch.
        const PREVIEW = 1 << 6;
    }
}

impl Targets {
    fn for_group(group: FieldGroup) -> Self {
        match group {
            FieldGroup::Rgb => Targets::RGB_FIELDS,
            FieldGroup::Hsl => Targets::HSL_FIELDS,
            FieldGroup::Hex => Targets::HEX_FIELD,
        }
    }
}

/// Releases the pointer listeners a host installed for a drag session.
///
/// The release function runs exactly once, when the guard is dropped.
#[derive(Default)]
pub struct ListenerGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    /// Create a guard that calls `release` when dropped.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard for hosts that route pointer events without installing
    /// listeners.
    pub fn none() -> Self {
        Self::default()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

/// A surface captured between pointer down and pointer up.
#[derive(Debug)]
pub struct DragSession {
    surface: Surface,
    _listeners: ListenerGuard,
}

impl DragSession {
    fn new(surface: Surface, listeners: ListenerGuard) -> Self {
        Self {
            surface,
            _listeners: listeners,
        }
    }

    /// The captured surface.
    pub fn surface(&self) -> Surface {
        self.surface
    }
}

/// An input event from the host.
#[derive(Debug)]
pub enum PickerEvent {
    /// A text field was committed with a new value.
    FieldChanged {
        /// The edited field.
        field: Field,
        /// The text of the field.
        value: String,
    },
    /// The pointer was pressed on a surface.
    PointerDown {
        /// The pressed surface.
        surface: Surface,
        /// Pointer position in page coordinates.
        point: PagePoint,
        /// Releases the move and up listeners when the drag ends.
        listeners: ListenerGuard,
    },
    /// The pointer moved.
    PointerMove {
        /// Pointer position in page coordinates.
        point: PagePoint,
    },
    /// The pointer was released.
    PointerUp,
    /// The display mode toggle was clicked.
    ToggleDisplayMode,
    /// The host measured a new bounding rectangle for a surface.
    SurfaceResized {
        /// The resized surface.
        surface: Surface,
        /// The new bounding rectangle.
        rect: SurfaceRect,
    },
}

/// Wires input events to a [`ColorModel`] and renders through a
/// [`ColorView`].
pub struct ColorController<V: ColorView> {
    model: ColorModel,
    view: V,
    mode: DisplayMode,
    session: Option<DragSession>,
    /// Last known text of every field, indexed by [`Field::index`].
    fields: [String; 7],
}

impl<V: ColorView> ColorController<V> {
    /// Create a controller and render the initial state.
    pub fn new(view: V, config: PickerConfig) -> Self {
        let mut controller = Self {
            model: ColorModel::from_config(&config),
            view,
            mode: config.display_mode,
            session: None,
            fields: Default::default(),
        };
        controller.view.set_display_mode(controller.mode);
        controller.sync(Targets::all());
        log::debug!("color picker initialized with {}", controller.model.to_hsl());
        controller
    }

    /// Dispatch a host event.
    pub fn handle(&mut self, event: PickerEvent) -> Result<(), PickerError> {
        match event {
            PickerEvent::FieldChanged { field, value } => return self.field_changed(field, value),
            PickerEvent::PointerDown {
                surface,
                point,
                listeners,
            } => self.pointer_down(surface, point, listeners),
            PickerEvent::PointerMove { point } => self.pointer_move(point),
            PickerEvent::PointerUp => self.pointer_up(),
            PickerEvent::ToggleDisplayMode => self.toggle_display_mode(),
            PickerEvent::SurfaceResized { surface, rect } => self.resize_surface(surface, rect),
        }
        Ok(())
    }

    /// A text field was committed. The whole group of the field is read back
    /// from the last known field values, converted and every other
    /// representation is refreshed.
    ///
    /// Text that can not be read leaves the color unchanged, reverts the
    /// group to the current color and shows a validation hint.
    pub fn field_changed(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), PickerError> {
        self.fields[field.index()] = value.into();
        let group = field.group();

        if let Err(err) = self.apply_group(group) {
            log::warn!("rejected {field} input: {err}");
            self.view.set_validation_hint(group, Some(&err.to_string()));
            self.sync(Targets::for_group(group));
            return Err(err);
        }

        self.view.set_validation_hint(group, None);

        let mut targets = Targets::all() - Targets::for_group(group);
        if self.group_is_stale(group) {
            // Clamped or expanded input, show what was accepted.
            targets |= Targets::for_group(group);
        }
        self.sync(targets);
        Ok(())
    }

    /// The pointer was pressed on a surface. Opens a drag session unless one
    /// is already open, in which case the event is ignored and `listeners` is
    /// released right away.
    pub fn pointer_down(&mut self, surface: Surface, point: PagePoint, listeners: ListenerGuard) {
        if let Some(session) = &self.session {
            log::debug!(
                "ignoring pointer down on {surface}, {} is being dragged",
                session.surface()
            );
            return;
        }

        self.apply_pointer(surface, point);
        self.view.set_dragging_style(surface, true);
        self.session = Some(DragSession::new(surface, listeners));
        log::debug!("drag session opened on {surface}");
    }

    /// The pointer moved. Every sample re-applies the point while a drag
    /// session is open.
    pub fn pointer_move(&mut self, point: PagePoint) {
        let Some(surface) = self.session.as_ref().map(DragSession::surface) else {
            return;
        };
        log::trace!("drag on {surface} at ({}, {})", point.x, point.y);
        self.apply_pointer(surface, point);
    }

    /// The pointer was released. Closes the drag session and releases its
    /// listeners. The color is not touched.
    pub fn pointer_up(&mut self) {
        if let Some(session) = self.session.take() {
            let surface = session.surface();
            self.view.set_dragging_style(surface, false);
            drop(session);
            log::debug!("drag session closed on {surface}");
        }
    }

    /// Cycle the visible field group: hex, rgb, hsl and back to hex.
    pub fn toggle_display_mode(&mut self) {
        self.mode = self.mode.next();
        self.view.set_display_mode(self.mode);
        log::debug!("display mode is now {:?}", self.mode);
    }

    /// Replace the bounding rectangle of a surface and move its cursor.
    pub fn resize_surface(&mut self, surface: Surface, rect: SurfaceRect) {
        match surface {
            Surface::Spectrum => {
                self.model.set_spectrum_rect(rect);
                self.sync(Targets::SPECTRUM_CURSOR);
            }
            Surface::Hue => {
                self.model.set_hue_rect(rect);
                self.sync(Targets::HUE_CURSOR);
            }
        }
    }

    /// The model holding the current color.
    pub fn model(&self) -> &ColorModel {
        &self.model
    }

    /// The view rendered to.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the view.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Consume the controller and return its view. An open drag session is
    /// released.
    pub fn into_view(self) -> V {
        self.view
    }

    /// The visible field group.
    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    /// The open drag session, if any.
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// The last known text of a field.
    pub fn field_value(&self, field: Field) -> &str {
        &self.fields[field.index()]
    }

    fn apply_pointer(&mut self, surface: Surface, point: PagePoint) {
        match surface {
            Surface::Spectrum => {
                let local = self.model.spectrum().to_local(point);
                self.model.set_from_spectrum_point(local);
            }
            Surface::Hue => {
                let local = self.model.hue_geometry().to_local(point);
                self.model.set_from_hue_point(local.y);
            }
        }
        self.sync(Targets::all());
    }

    fn apply_group(&mut self, group: FieldGroup) -> Result<(), PickerError> {
        match group {
            FieldGroup::Rgb => {
                let red = self.read_number(Field::Red, &[])?;
                let green = self.read_number(Field::Green, &[])?;
                let blue = self.read_number(Field::Blue, &[])?;
                self.model
                    .set_from_rgb(to_channel(red), to_channel(green), to_channel(blue));
            }
            FieldGroup::Hsl => {
                let hue = self.read_number(Field::Hue, &["deg", "°"])?;
                let saturation = self.read_number(Field::Saturation, &["%"])?;
                let lightness = self.read_number(Field::Lightness, &["%"])?;
                self.model
                    .set_from_hsl(hue, saturation / 100.0, lightness / 100.0);
            }
            FieldGroup::Hex => {
                self.model.set_from_hex(&self.fields[Field::Hex.index()])?;
            }
        }
        Ok(())
    }

    fn read_number(&self, field: Field, suffixes: &[&str]) -> Result<Component, PickerError> {
        parse_number(&self.fields[field.index()], suffixes).ok_or_else(|| {
            PickerError::InvalidNumber {
                field,
                value: self.fields[field.index()].clone(),
            }
        })
    }

    fn group_is_stale(&self, group: FieldGroup) -> bool {
        group
            .fields()
            .iter()
            .any(|&field| self.fields[field.index()] != self.field_text(field))
    }

    fn field_text(&self, field: Field) -> String {
        let [red, green, blue] = self.model.to_rgb();
        let hsl = self.model.to_hsl();
        match field {
            Field::Red => red.to_string(),
            Field::Green => green.to_string(),
            Field::Blue => blue.to_string(),
            Field::Hue => (hsl.hue.round() % 360.0).to_string(),
            Field::Saturation => (hsl.saturation * 100.0).round().to_string(),
            Field::Lightness => (hsl.lightness * 100.0).round().to_string(),
            Field::Hex => self.model.to_hex(),
        }
    }

    /// Push the current color to the selected parts of the view.
    fn sync(&mut self, targets: Targets) {
        for field in Field::ALL {
            if targets.contains(Targets::for_group(field.group())) {
                let text = self.field_text(field);
                self.view.set_field_value(field, &text);
                self.fields[field.index()] = text;
            }
        }

        if targets.contains(Targets::SPECTRUM_CURSOR) {
            self.view
                .set_spectrum_cursor_position(self.model.current_spectrum_cursor());
        }

        let hue_color = self.model.hue_color().to_string();

        if targets.contains(Targets::HUE_CURSOR) {
            self.view
                .set_hue_cursor_position(self.model.current_hue_cursor());
            self.view.set_hue_cursor_color(&hue_color);
        }

        if targets.contains(Targets::GRADIENT) {
            self.view.set_spectrum_gradient_hue(&hue_color);
        }

        if targets.contains(Targets::PREVIEW) {
            self.view
                .set_current_color(&self.model.to_srgb().to_string());
        }
    }
}

/// Read a decimal number, ignoring surrounding whitespace and one of the
/// given unit suffixes.
fn parse_number(text: &str, suffixes: &[&str]) -> Option<Component> {
    let text = text.trim();
    let text = suffixes
        .iter()
        .find_map(|suffix| text.strip_suffix(suffix))
        .unwrap_or(text)
        .trim_end();
    text.parse::<Component>().ok().filter(|v| v.is_finite())
}

fn to_channel(value: Component) -> i32 {
    value.round().clamp(0.0, 255.0) as i32
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;
    use crate::assert_component_eq;
    use crate::geometry::{surface_rect, SurfacePoint};
    use crate::models::Hsl;

    #[derive(Default)]
    struct RecordingView {
        fields: HashMap<Field, String>,
        field_writes: Vec<Field>,
        spectrum_cursor: Option<SurfacePoint>,
        hue_cursor: Option<Component>,
        hue_cursor_color: Option<String>,
        gradient: Option<String>,
        current: Option<String>,
        dragging: HashMap<Surface, bool>,
        mode: Option<DisplayMode>,
        hints: HashMap<FieldGroup, Option<String>>,
    }

    impl ColorView for RecordingView {
        fn set_field_value(&mut self, field: Field, value: &str) {
            self.fields.insert(field, value.to_string());
            self.field_writes.push(field);
        }

        fn set_spectrum_cursor_position(&mut self, position: SurfacePoint) {
            self.spectrum_cursor = Some(position);
        }

        fn set_hue_cursor_position(&mut self, y: Component) {
            self.hue_cursor = Some(y);
        }

        fn set_hue_cursor_color(&mut self, hue_color: &str) {
            self.hue_cursor_color = Some(hue_color.to_string());
        }

        fn set_spectrum_gradient_hue(&mut self, hue_color: &str) {
            self.gradient = Some(hue_color.to_string());
        }

        fn set_current_color(&mut self, color: &str) {
            self.current = Some(color.to_string());
        }

        fn set_dragging_style(&mut self, surface: Surface, on: bool) {
            self.dragging.insert(surface, on);
        }

        fn set_display_mode(&mut self, mode: DisplayMode) {
            self.mode = Some(mode);
        }

        fn set_validation_hint(&mut self, group: FieldGroup, hint: Option<&str>) {
            self.hints.insert(group, hint.map(str::to_string));
        }
    }

    impl RecordingView {
        fn field(&self, field: Field) -> &str {
            self.fields.get(&field).map(String::as_str).unwrap_or("")
        }
    }

    // Spectrum at (100, 50) sized 200x100, hue bar at (320, 50) sized 20x180.
    fn config() -> PickerConfig {
        PickerConfig::default()
            .initial_color(Hsl::new(0.0, 1.0, 0.5))
            .spectrum_rect(surface_rect(100.0, 50.0, 200.0, 100.0))
            .hue_rect(surface_rect(320.0, 50.0, 20.0, 180.0))
    }

    fn controller() -> ColorController<RecordingView> {
        ColorController::new(RecordingView::default(), config())
    }

    fn counting_guard() -> (ListenerGuard, Rc<Cell<u32>>) {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        (ListenerGuard::new(move || counter.set(counter.get() + 1)), released)
    }

    #[test]
    fn initial_render_shows_everything() {
        let c = controller();
        let v = c.view();
        assert_eq!(v.field(Field::Red), "255");
        assert_eq!(v.field(Field::Green), "0");
        assert_eq!(v.field(Field::Blue), "0");
        assert_eq!(v.field(Field::Hue), "0");
        assert_eq!(v.field(Field::Saturation), "100");
        assert_eq!(v.field(Field::Lightness), "50");
        assert_eq!(v.field(Field::Hex), "FF0000");
        assert_eq!(v.spectrum_cursor, Some(SurfacePoint::new(200.0, 0.0)));
        assert_eq!(v.hue_cursor, Some(180.0));
        assert_eq!(v.gradient.as_deref(), Some("hsl(0, 100%, 50%)"));
        assert_eq!(v.hue_cursor_color.as_deref(), Some("hsl(0, 100%, 50%)"));
        assert_eq!(v.current.as_deref(), Some("rgb(255, 0, 0)"));
        assert_eq!(v.mode, Some(DisplayMode::Hex));
        assert_eq!(c.field_value(Field::Hex), "FF0000");
    }

    #[test]
    fn hex_entry_moves_both_cursors() {
        let mut c = controller();
        c.field_changed(Field::Hex, "00FF00").expect("valid hex");

        assert_component_eq!(c.model().to_hsl().hue, 120.0, 1.0e-3);
        let v = c.view();
        assert_eq!(v.field(Field::Red), "0");
        assert_eq!(v.field(Field::Green), "255");
        assert_eq!(v.field(Field::Blue), "0");
        assert_eq!(v.field(Field::Hue), "120");
        assert_eq!(v.spectrum_cursor, Some(SurfacePoint::new(200.0, 0.0)));
        assert_component_eq!(v.hue_cursor.unwrap_or_default(), 120.0, 1.0e-2);
        assert_eq!(v.gradient.as_deref(), Some("hsl(120, 100%, 50%)"));
        assert_eq!(v.current.as_deref(), Some("rgb(0, 255, 0)"));
    }

    #[test]
    fn field_edit_does_not_rewrite_its_own_group() {
        let mut c = controller();
        c.view_mut().field_writes.clear();
        c.field_changed(Field::Hex, "00FF00").expect("valid hex");
        assert!(!c.view().field_writes.contains(&Field::Hex));
        assert!(c.view().field_writes.contains(&Field::Red));
        assert!(c.view().field_writes.contains(&Field::Hue));
    }

    #[test]
    fn normalized_input_rewrites_its_own_group() {
        let mut c = controller();
        c.field_changed(Field::Hex, "#0f0").expect("valid hex");
        assert_eq!(c.view().field(Field::Hex), "00FF00");

        c.field_changed(Field::Red, "300").expect("numeric");
        assert_eq!(c.view().field(Field::Red), "255");
        assert_eq!(c.view().field(Field::Green), "255");
        assert_eq!(c.view().field(Field::Hex), "FFFF00");
    }

    #[test]
    fn rgb_group_is_read_as_a_whole() {
        let mut c = controller();
        c.field_changed(Field::Green, "128").expect("numeric");
        assert_eq!(c.model().to_rgb(), [255, 128, 0]);
        c.field_changed(Field::Blue, " 64 ").expect("numeric");
        assert_eq!(c.model().to_rgb(), [255, 128, 64]);
        assert_eq!(c.view().field(Field::Hex), "FF8040");
    }

    #[test]
    fn hsl_fields_accept_units() {
        let mut c = controller();
        c.field_changed(Field::Hue, "240deg").expect("numeric");
        assert_eq!(c.model().to_rgb(), [0, 0, 255]);
        c.field_changed(Field::Lightness, "25%").expect("numeric");
        assert_eq!(c.model().to_rgb(), [0, 0, 128]);
        assert_eq!(c.view().field(Field::Lightness), "25");
        assert_eq!(c.view().field(Field::Hue), "240");
    }

    #[test]
    fn invalid_hex_is_reported_and_reverted() {
        let mut c = controller();
        let err = c.field_changed(Field::Hex, "12").unwrap_err();
        assert!(matches!(err, PickerError::InvalidHexFormat { .. }));
        assert_eq!(c.model().to_rgb(), [255, 0, 0]);
        assert_eq!(c.view().field(Field::Hex), "FF0000");
        assert!(matches!(c.view().hints.get(&FieldGroup::Hex), Some(Some(_))));

        c.field_changed(Field::Hex, "0000ff").expect("valid hex");
        assert_eq!(c.view().hints.get(&FieldGroup::Hex), Some(&None));
    }

    #[test]
    fn invalid_number_is_reported() {
        let mut c = controller();
        let err = c.field_changed(Field::Green, "lots").unwrap_err();
        assert_eq!(
            err,
            PickerError::InvalidNumber {
                field: Field::Green,
                value: "lots".to_string(),
            }
        );
        assert_eq!(c.model().to_rgb(), [255, 0, 0]);
        assert_eq!(c.view().field(Field::Green), "0");
    }

    #[test]
    fn spectrum_drag_session() {
        let mut c = controller();
        let (guard, released) = counting_guard();

        // Top left corner of the spectrum is white at the current hue.
        c.pointer_down(Surface::Spectrum, PagePoint::new(100.0, 50.0), guard);
        assert_eq!(c.drag_session().map(DragSession::surface), Some(Surface::Spectrum));
        assert_eq!(c.view().dragging.get(&Surface::Spectrum), Some(&true));
        assert_eq!(c.model().to_rgb(), [255, 255, 255]);
        let hsv = c.model().to_hsl().to_hsv();
        assert_component_eq!(hsv.saturation, 0.0);
        assert_component_eq!(hsv.value, 1.0);
        let after_down = c.model().clone();

        c.pointer_up();
        assert!(c.drag_session().is_none());
        assert_eq!(c.view().dragging.get(&Surface::Spectrum), Some(&false));
        assert_eq!(released.get(), 1);
        assert_eq!(c.model(), &after_down);
        assert_eq!(c.view().field(Field::Hex), "FFFFFF");
    }

    #[test]
    fn every_move_is_applied() {
        let mut c = controller();
        c.pointer_down(Surface::Spectrum, PagePoint::new(100.0, 50.0), ListenerGuard::none());
        c.pointer_move(PagePoint::new(300.0, 50.0));
        assert_eq!(c.model().to_rgb(), [255, 0, 0]);
        c.pointer_move(PagePoint::new(200.0, 100.0));
        let cursor = c.view().spectrum_cursor.unwrap_or_default();
        assert_component_eq!(cursor.x, 100.0, 1.0e-3);
        assert_component_eq!(cursor.y, 50.0, 1.0e-3);
        // Outside of the surface clamps to the edge.
        c.pointer_move(PagePoint::new(9000.0, 9000.0));
        assert_eq!(c.view().spectrum_cursor, Some(SurfacePoint::new(200.0, 100.0)));
        assert_eq!(c.model().to_rgb(), [0, 0, 0]);
        c.pointer_up();

        // Moves without a session are ignored.
        c.pointer_move(PagePoint::new(100.0, 50.0));
        assert_eq!(c.model().to_rgb(), [0, 0, 0]);
    }

    #[test]
    fn hue_drag_keeps_saturation_and_lightness() {
        let mut c = controller();
        c.field_changed(Field::Hex, "BF4040").expect("valid hex");
        let before = c.model().to_hsl();
        let spectrum_cursor = c.view().spectrum_cursor;

        let (guard, released) = counting_guard();
        c.pointer_down(Surface::Hue, PagePoint::new(330.0, 110.0), guard);
        assert_eq!(c.view().dragging.get(&Surface::Hue), Some(&true));
        let after = c.model().to_hsl();
        assert_component_eq!(after.hue, 240.0, 1.0e-3);
        assert_eq!(after.saturation, before.saturation);
        assert_eq!(after.lightness, before.lightness);
        assert_eq!(c.view().hue_cursor, Some(60.0));
        assert_eq!(c.view().gradient.as_deref(), Some("hsl(240, 100%, 50%)"));

        // The top of the bar is red and the cursor stays at the top.
        c.pointer_move(PagePoint::new(330.0, 0.0));
        assert_eq!(c.model().to_hsl().hue, 0.0);
        assert_eq!(c.view().hue_cursor, Some(0.0));
        assert_eq!(c.view().spectrum_cursor, spectrum_cursor);

        c.pointer_up();
        assert_eq!(released.get(), 1);
        assert_eq!(c.view().dragging.get(&Surface::Hue), Some(&false));
    }

    #[test]
    fn full_negative_turn_of_hue_shows_zero() {
        let mut c = controller();
        c.field_changed(Field::Hue, "-360").expect("valid hue");
        assert_eq!(c.view().field(Field::Hue), "0");
        assert_eq!(c.view().gradient.as_deref(), Some("hsl(0, 100%, 50%)"));
    }

    #[test]
    fn spectrum_drag_leaves_hue_cursor_at_top() {
        let mut c = controller();
        c.field_changed(Field::Hex, "BF4040").expect("valid hex");

        c.pointer_down(Surface::Hue, PagePoint::new(330.0, 50.0), ListenerGuard::none());
        c.pointer_up();
        assert_eq!(c.model().to_hsl().hue, 0.0);
        assert_eq!(c.view().hue_cursor, Some(0.0));

        c.pointer_down(Surface::Spectrum, PagePoint::new(200.0, 100.0), ListenerGuard::none());
        c.pointer_move(PagePoint::new(220.0, 80.0));
        c.pointer_up();
        assert_eq!(c.model().to_hsl().hue, 0.0);
        assert_eq!(c.view().hue_cursor, Some(0.0));
    }

    #[test]
    fn second_pointer_down_is_ignored() {
        let mut c = controller();
        let (first, first_released) = counting_guard();
        let (second, second_released) = counting_guard();

        c.pointer_down(Surface::Spectrum, PagePoint::new(150.0, 60.0), first);
        let model = c.model().clone();
        c.pointer_down(Surface::Hue, PagePoint::new(330.0, 100.0), second);

        assert_eq!(c.model(), &model);
        assert_eq!(second_released.get(), 1);
        assert_eq!(first_released.get(), 0);
        assert_eq!(c.drag_session().map(DragSession::surface), Some(Surface::Spectrum));

        c.pointer_up();
        assert_eq!(first_released.get(), 1);
        // A stray pointer up does nothing.
        c.pointer_up();
        assert_eq!(first_released.get(), 1);
    }

    #[test]
    fn dropping_the_controller_releases_listeners() {
        let mut c = controller();
        let (guard, released) = counting_guard();
        c.pointer_down(Surface::Hue, PagePoint::new(330.0, 100.0), guard);
        drop(c);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn toggling_three_times_is_identity() {
        let mut c = controller();
        let color = c.model().clone();
        c.toggle_display_mode();
        assert_eq!(c.display_mode(), DisplayMode::Rgb);
        assert_eq!(c.view().mode, Some(DisplayMode::Rgb));
        c.toggle_display_mode();
        assert_eq!(c.display_mode(), DisplayMode::Hsl);
        c.toggle_display_mode();
        assert_eq!(c.display_mode(), DisplayMode::Hex);
        assert_eq!(c.view().mode, Some(DisplayMode::Hex));
        assert_eq!(c.model(), &color);
    }

    #[test]
    fn events_dispatch() {
        let mut c = controller();
        c.handle(PickerEvent::FieldChanged {
            field: Field::Hex,
            value: "000080".to_string(),
        })
        .expect("valid hex");
        assert_eq!(c.model().to_rgb(), [0, 0, 128]);

        c.handle(PickerEvent::PointerDown {
            surface: Surface::Spectrum,
            point: PagePoint::new(300.0, 50.0),
            listeners: ListenerGuard::none(),
        })
        .expect("pointer events never fail");
        c.handle(PickerEvent::PointerMove {
            point: PagePoint::new(100.0, 50.0),
        })
        .expect("pointer events never fail");
        c.handle(PickerEvent::PointerUp).expect("pointer events never fail");
        assert_eq!(c.model().to_rgb(), [255, 255, 255]);

        c.handle(PickerEvent::ToggleDisplayMode).expect("toggle never fails");
        assert_eq!(c.display_mode(), DisplayMode::Rgb);

        let err = c.handle(PickerEvent::FieldChanged {
            field: Field::Hex,
            value: "nope".to_string(),
        });
        assert!(err.is_err());
    }

    #[test]
    fn resizing_moves_cursors() {
        let mut c = controller();
        c.resize_surface(Surface::Spectrum, surface_rect(0.0, 0.0, 100.0, 100.0));
        assert_eq!(c.view().spectrum_cursor, Some(SurfacePoint::new(100.0, 0.0)));
        c.resize_surface(Surface::Hue, surface_rect(0.0, 0.0, 10.0, 90.0));
        assert_eq!(c.view().hue_cursor, Some(90.0));
    }

    #[test]
    fn number_parsing() {
        assert_eq!(parse_number(" 12 ", &[]), Some(12.0));
        assert_eq!(parse_number("12.5%", &["%"]), Some(12.5));
        assert_eq!(parse_number("90 deg", &["deg", "°"]), Some(90.0));
        assert_eq!(parse_number("90°", &["deg", "°"]), Some(90.0));
        assert_eq!(parse_number("", &[]), None);
        assert_eq!(parse_number("inf", &[]), None);
        assert_eq!(parse_number("1e3", &[]), Some(1000.0));
        assert_eq!(to_channel(1000.0), 255);
        assert_eq!(to_channel(-3.0), 0);
        assert_eq!(to_channel(12.6), 13);
    }
}
