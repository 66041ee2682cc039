//! tincture keeps the representations of an interactive color picker in
//! sync: the RGB, HSL and hex text fields, the shade spectrum cursor and the
//! hue bar cursor.
//!
//! A [`ColorModel`] owns the canonical color and all conversions. A
//! [`ColorController`] feeds it host input events and renders the result
//! through a host supplied [`ColorView`].
//!
//! ```rust
//! use tincture::{ColorController, ColorView, DisplayMode, Field, PickerConfig, Surface};
//! use tincture::geometry::SurfacePoint;
//!
//! struct Log;
//!
//! impl ColorView for Log {
//!     fn set_field_value(&mut self, field: Field, value: &str) {}
//!     fn set_spectrum_cursor_position(&mut self, position: SurfacePoint) {}
//!     fn set_hue_cursor_position(&mut self, y: tincture::Component) {}
//!     fn set_hue_cursor_color(&mut self, hue_color: &str) {}
//!     fn set_spectrum_gradient_hue(&mut self, hue_color: &str) {}
//!     fn set_current_color(&mut self, color: &str) {}
//!     fn set_dragging_style(&mut self, surface: Surface, on: bool) {}
//!     fn set_display_mode(&mut self, mode: DisplayMode) {}
//! }
//!
//! let mut picker = ColorController::new(Log, PickerConfig::default());
//! picker.field_changed(Field::Hex, "00ff00").unwrap();
//! assert_eq!(picker.model().to_rgb(), [0, 255, 0]);
//! ```

#![deny(missing_docs)]

mod color;
mod config;
mod controller;
mod convert;
mod error;
pub mod geometry;
mod hex;
mod math;
mod model;
pub mod models;
mod view;


pub use color::{Component, Components};
pub use config::{PickerConfig, DEFAULT_HUE_WIDTH, DEFAULT_SPECTRUM_SIZE};
pub use controller::{ColorController, DragSession, ListenerGuard, PickerEvent, Targets};
pub use error::{HexFormatError, PickerError};
pub use hex::{format_hex, parse_hex};
pub use math::{clamp_unit, lerp, wrap_hue};
pub use model::ColorModel;
pub use view::{ColorView, DisplayMode, Field, FieldGroup, Surface};
