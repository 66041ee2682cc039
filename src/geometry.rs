//! Mapping between pointer positions on the picking surfaces and color
//! components.
//!
//! Host events arrive in [`PageSpace`]. Each surface knows its bounding
//! rectangle in page space and converts points to its own [`SurfaceSpace`],
//! where the origin is the top left corner of the surface. Points outside of
//! a surface are clamped to its edges, never rejected.

use euclid::{Point2D, Rect, Size2D};

use crate::color::Component;

/// Coordinate space of the host page, where pointer events are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSpace;

/// Coordinate space local to a picking surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSpace;

/// A point in page coordinates.
pub type PagePoint = Point2D<Component, PageSpace>;

/// A point relative to the top left corner of a picking surface.
pub type SurfacePoint = Point2D<Component, SurfaceSpace>;

/// The bounding rectangle of a picking surface in page coordinates.
pub type SurfaceRect = Rect<Component, PageSpace>;

/// Build a surface rectangle from its page offset and size.
pub fn surface_rect(x: Component, y: Component, width: Component, height: Component) -> SurfaceRect {
    Rect::new(Point2D::new(x, y), Size2D::new(width, height))
}

fn to_local(rect: &SurfaceRect, point: PagePoint) -> SurfacePoint {
    SurfacePoint::new(point.x - rect.origin.x, point.y - rect.origin.y)
}

/// Length used to clamp against. Degenerate rectangles are empty.
fn extent(length: Component) -> Component {
    if length.is_finite() {
        length.max(0.0)
    } else {
        0.0
    }
}

/// Length used as a divisor. A zero sized surface behaves like a 1 pixel one.
fn divisor(length: Component) -> Component {
    extent(length).max(1.0)
}

fn clamp_to(value: Component, max: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0).min(max)
    }
}

/// The 2-D shade spectrum. The horizontal axis is the HSV saturation and the
/// vertical axis is the HSV value, with full value at the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpectrumGeometry {
    rect: SurfaceRect,
}

impl SpectrumGeometry {
    /// Create the geometry of a spectrum surface.
    pub fn new(rect: SurfaceRect) -> Self {
        Self { rect }
    }

    /// The bounding rectangle in page coordinates.
    pub fn rect(&self) -> SurfaceRect {
        self.rect
    }

    /// The size of the surface.
    pub fn size(&self) -> Size2D<Component, SurfaceSpace> {
        Size2D::new(extent(self.rect.size.width), extent(self.rect.size.height))
    }

    /// Convert a page point to the local space of the surface.
    pub fn to_local(&self, point: PagePoint) -> SurfacePoint {
        to_local(&self.rect, point)
    }

    /// Clamp a local point to the edges of the surface.
    pub fn clamp(&self, point: SurfacePoint) -> SurfacePoint {
        let size = self.size();
        SurfacePoint::new(clamp_to(point.x, size.width), clamp_to(point.y, size.height))
    }

    /// Return the `(saturation, value)` pair at the given local point.
    pub fn saturation_value_at(&self, point: SurfacePoint) -> (Component, Component) {
        let point = self.clamp(point);
        let saturation = point.x / divisor(self.rect.size.width);
        let value = 1.0 - point.y / divisor(self.rect.size.height);
        (saturation, value)
    }

    /// Return the local point where a cursor for `(saturation, value)` is
    /// drawn. Inverse of [`Self::saturation_value_at`].
    pub fn point_for(&self, saturation: Component, value: Component) -> SurfacePoint {
        let size = self.size();
        SurfacePoint::new(
            clamp_to(saturation * size.width, size.width),
            clamp_to((1.0 - value) * size.height, size.height),
        )
    }
}

/// The 1-D vertical hue bar. The top of the bar is hue 360 and the bottom is
/// hue 0, both of which are red.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueGeometry {
    rect: SurfaceRect,
}

impl HueGeometry {
    /// Create the geometry of a hue bar.
    pub fn new(rect: SurfaceRect) -> Self {
        Self { rect }
    }

    /// The bounding rectangle in page coordinates.
    pub fn rect(&self) -> SurfaceRect {
        self.rect
    }

    /// The height of the bar.
    pub fn height(&self) -> Component {
        extent(self.rect.size.height)
    }

    /// Convert a page point to the local space of the bar.
    pub fn to_local(&self, point: PagePoint) -> SurfacePoint {
        to_local(&self.rect, point)
    }

    /// Return the hue in [0, 360] at the given local vertical position.
    pub fn hue_at(&self, y: Component) -> Component {
        let y = clamp_to(y, self.height());
        360.0 - 360.0 * (y / divisor(self.rect.size.height))
    }

    /// Return the local vertical position of a cursor for `hue`. Inverse of
    /// [`Self::hue_at`].
    pub fn y_for(&self, hue: Component) -> Component {
        let height = self.height();
        clamp_to(height - (hue / 360.0) * height, height)
    }
}
