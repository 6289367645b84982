//! Element definitions for the drawing surface.

mod ellipse;
mod line;
mod rectangle;

pub use ellipse::Ellipse;
pub use line::Line;
pub use rectangle::Rectangle;

use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Proximity allowance for line hits, in canvas units.
///
/// Points are converted to canvas space before hit-testing, so this does not
/// scale with zoom.
pub const LINE_HIT_TOLERANCE: f64 = 6.0;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().strip_prefix('#')?;
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Fill and stroke shared by every element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Fill color (None = no fill, used by lines).
    #[serde(default)]
    pub fill: Option<SerializableColor>,
    /// Stroke color.
    pub stroke: SerializableColor,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: Some(SerializableColor::new(0xE5, 0xE7, 0xEB, 255)),
            stroke: SerializableColor::new(0x11, 0x18, 0x27, 255),
        }
    }
}

impl ShapeStyle {
    /// The same style with the fill dropped.
    pub fn without_fill(&self) -> Self {
        Self {
            fill: None,
            stroke: self.stroke,
        }
    }

    /// Get the stroke color as a peniko Color.
    pub fn stroke_color(&self) -> Color {
        self.stroke.into()
    }

    /// Get the fill color as a peniko Color.
    pub fn fill_color(&self) -> Option<Color> {
        self.fill.map(Color::from)
    }
}

/// Unique identifier for elements.
pub type ShapeId = Uuid;

/// Distance from a point to a line segment (a→b), clamped to the segment ends.
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = a + seg * t;
    (point - proj).hypot()
}

/// Common behavior of every element variant.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the bounding box in canvas coordinates.
    fn bounds(&self) -> Rect;

    /// The reference point a move drag grabs: top-left for boxes, start for lines.
    fn origin(&self) -> Point;

    /// Check if a canvas-space point hits this element.
    ///
    /// `tolerance` is the proximity allowance for one-dimensional geometry;
    /// area shapes test containment of their closed interior and ignore it.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// A copy of this element translated so that `origin()` equals `origin`.
    fn with_origin(&self, origin: Point) -> Self
    where
        Self: Sized;
}

/// Variant tag shared by elements, drafts and drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Rect,
    Ellipse,
    Line,
}

/// A committed element. Values are replaced wholesale on edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Rect(Rectangle),
    Ellipse(Ellipse),
    Line(Line),
}

impl Element {
    pub fn id(&self) -> ShapeId {
        match self {
            Element::Rect(s) => s.id(),
            Element::Ellipse(s) => s.id(),
            Element::Line(s) => s.id(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Rect(_) => ElementKind::Rect,
            Element::Ellipse(_) => ElementKind::Ellipse,
            Element::Line(_) => ElementKind::Line,
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Element::Rect(s) => s.bounds(),
            Element::Ellipse(s) => s.bounds(),
            Element::Line(s) => s.bounds(),
        }
    }

    pub fn origin(&self) -> Point {
        match self {
            Element::Rect(s) => s.origin(),
            Element::Ellipse(s) => s.origin(),
            Element::Line(s) => s.origin(),
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Element::Rect(s) => s.hit_test(point, tolerance),
            Element::Ellipse(s) => s.hit_test(point, tolerance),
            Element::Line(s) => s.hit_test(point, tolerance),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Element::Rect(s) => s.style(),
            Element::Ellipse(s) => s.style(),
            Element::Line(s) => s.style(),
        }
    }

    /// A copy of this element moved so that its origin lands on `origin`.
    pub fn with_origin(&self, origin: Point) -> Element {
        match self {
            Element::Rect(s) => Element::Rect(s.with_origin(origin)),
            Element::Ellipse(s) => Element::Ellipse(s.with_origin(origin)),
            Element::Line(s) => Element::Line(s.with_origin(origin)),
        }
    }

    /// Offset from the element origin to `point` (the grab offset of a move).
    pub fn grab_offset(&self, point: Point) -> Vec2 {
        point - self.origin()
    }
}

impl From<Rectangle> for Element {
    fn from(rect: Rectangle) -> Self {
        Element::Rect(rect)
    }
}

impl From<Ellipse> for Element {
    fn from(ellipse: Ellipse) -> Self {
        Element::Ellipse(ellipse)
    }
}

impl From<Line> for Element {
    fn from(line: Line) -> Self {
        Element::Line(line)
    }
}

/// Hit-test an element with the default line tolerance.
pub fn hit(element: &Element, point: Point) -> bool {
    element.hit_test(point, LINE_HIT_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_distance_projects_inside() {
        let d = point_to_segment_dist(
            Point::new(50.0, 3.0),
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        );
        assert!((d - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_distance_clamps_to_ends() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 0.0);
        assert!((point_to_segment_dist(Point::new(-3.0, 4.0), a, b) - 5.0).abs() < 1e-12);
        assert!((point_to_segment_dist(Point::new(103.0, 4.0), a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_distance_degenerate() {
        let a = Point::new(10.0, 10.0);
        let d = point_to_segment_dist(Point::new(13.0, 14.0), a, a);
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_hex_colors() {
        let c = SerializableColor::from_hex("#E5E7EB").unwrap();
        assert_eq!(c, SerializableColor::new(0xE5, 0xE7, 0xEB, 255));
        assert_eq!(c.to_hex(), "#e5e7eb");
        assert_eq!(
            SerializableColor::from_hex("#11182780").unwrap().a,
            0x80
        );
        assert!(SerializableColor::from_hex("#12").is_none());
        assert!(SerializableColor::from_hex("111827").is_none());
    }

    #[test]
    fn test_peniko_roundtrip() {
        let c = SerializableColor::new(17, 24, 39, 255);
        let color: Color = c.into();
        assert_eq!(SerializableColor::from(color), c);
    }

    #[test]
    fn test_hit_exactness() {
        let rect: Element = Rectangle::new(Point::ZERO, 100.0, 50.0).into();
        assert!(hit(&rect, Point::new(50.0, 25.0)));
        assert!(hit(&rect, Point::new(100.0, 50.0)));
        assert!(!hit(&rect, Point::new(101.0, 25.0)));

        let ellipse: Element = Ellipse::new(Point::ZERO, 100.0, 50.0).into();
        assert!(hit(&ellipse, Point::new(50.0, 25.0)));
        assert!(!hit(&ellipse, Point::new(0.0, 0.0)));

        let line: Element = Line::new(Point::ZERO, Point::new(100.0, 0.0)).into();
        assert!(hit(&line, Point::new(50.0, 3.0)));
        assert!(!hit(&line, Point::new(50.0, 10.0)));
    }

    #[test]
    fn test_element_serde_tag() {
        let rect: Element = Rectangle::new(Point::new(10.0, 20.0), 30.0, 40.0).into();
        let json = serde_json::to_value(&rect).unwrap();
        assert_eq!(json["type"], "rect");
        let back: Element = serde_json::from_value(json).unwrap();
        assert_eq!(back, rect);
    }

    #[test]
    fn test_with_origin_keeps_id() {
        let line: Element = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 5.0)).into();
        let moved = line.with_origin(Point::new(20.0, 20.0));
        assert_eq!(moved.id(), line.id());
        assert_eq!(moved.origin(), Point::new(20.0, 20.0));
        assert_eq!(moved.bounds().size(), line.bounds().size());
    }
}
