//! Drive a color picker without a UI and render its surfaces with cursors to
//! `spectrum.png` and `hue.png`.
//!
//! Usage: `tincture-render [HEX]`, the color defaults to chocolate.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_circle_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;
use tincture::{
    geometry::SurfacePoint,
    lerp,
    models::{Hsl, Srgb},
    ColorController, ColorModel, ColorView, Component, DisplayMode, Field, PickerConfig, Surface,
};

const CURSOR_RADIUS: i32 = 6;
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Remembers what has to be drawn and logs everything else.
#[derive(Default)]
struct PngView {
    spectrum_cursor: (Component, Component),
    hue_cursor: Component,
}

impl ColorView for PngView {
    fn set_field_value(&mut self, field: Field, value: &str) {
        log::info!("{field}: {value}");
    }

    fn set_spectrum_cursor_position(&mut self, position: SurfacePoint) {
        self.spectrum_cursor = (position.x, position.y);
    }

    fn set_hue_cursor_position(&mut self, y: Component) {
        self.hue_cursor = y;
    }

    fn set_hue_cursor_color(&mut self, hue_color: &str) {
        log::debug!("hue cursor filled with {hue_color}");
    }

    fn set_spectrum_gradient_hue(&mut self, hue_color: &str) {
        log::debug!("spectrum gradient at {hue_color}");
    }

    fn set_current_color(&mut self, color: &str) {
        log::info!("current color: {color}");
    }

    fn set_dragging_style(&mut self, surface: Surface, on: bool) {
        log::debug!("{surface} dragging: {on}");
    }

    fn set_display_mode(&mut self, mode: DisplayMode) {
        log::debug!("display mode: {mode:?}");
    }
}

fn to_pixel(color: &Srgb) -> Rgb<u8> {
    Rgb(color.to_bytes())
}

/// Paint the shade spectrum the way a canvas composites it: the hue color,
/// a white to transparent horizontal gradient on top and a transparent to
/// black vertical gradient over both.
fn render_spectrum(model: &ColorModel, view: &PngView) -> RgbImage {
    let size = model.spectrum().size();
    let (width, height) = (size.width.max(1.0) as u32, size.height.max(1.0) as u32);
    let base = model.hue_color().to_srgb();

    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let center = SurfacePoint::new(x as Component + 0.5, y as Component + 0.5);
        let (saturation, value) = model.spectrum().saturation_value_at(center);
        let channel = |c: Component| lerp(lerp(1.0, c, saturation), 0.0, 1.0 - value);
        *pixel = to_pixel(&Srgb::new(
            channel(base.red),
            channel(base.green),
            channel(base.blue),
        ));
    }

    let cursor = (
        view.spectrum_cursor.0.round() as i32,
        view.spectrum_cursor.1.round() as i32,
    );
    draw_hollow_circle_mut(&mut img, cursor, CURSOR_RADIUS, WHITE);
    draw_hollow_circle_mut(&mut img, cursor, CURSOR_RADIUS + 1, BLACK);

    img
}

fn render_hue_bar(model: &ColorModel, view: &PngView) -> RgbImage {
    let rect = model.hue_geometry().rect();
    let width = rect.size.width.max(1.0) as u32;
    let height = model.hue_geometry().height().max(1.0) as u32;

    let mut img = RgbImage::new(width, height);
    for (_, y, pixel) in img.enumerate_pixels_mut() {
        let hue = model.hue_geometry().hue_at(y as Component + 0.5);
        *pixel = to_pixel(&Hsl::new(hue, 1.0, 0.5).to_srgb());
    }

    let top = view.hue_cursor.round() as i32 - 2;
    draw_hollow_rect_mut(&mut img, Rect::at(0, top).of_size(width, 5), WHITE);

    img
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let hex = std::env::args().nth(1).unwrap_or_else(|| "D2691E".to_string());

    let mut picker = ColorController::new(PngView::default(), PickerConfig::default());
    if let Err(err) = picker.field_changed(Field::Hex, hex) {
        log::error!("{err}");
        std::process::exit(1);
    }

    render_spectrum(picker.model(), picker.view())
        .save("spectrum.png")
        .expect("could not write image to spectrum.png");
    render_hue_bar(picker.model(), picker.view())
        .save("hue.png")
        .expect("could not write image to hue.png");

    log::info!("wrote spectrum.png and hue.png");
}
