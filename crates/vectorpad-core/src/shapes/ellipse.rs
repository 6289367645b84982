//! Ellipse element.

use super::{ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned ellipse inscribed in the box `position`, `width` x `height`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub(crate) id: ShapeId,
    /// Top-left corner of the bounding box.
    pub position: Point,
    /// Width of the bounding box.
    pub width: f64,
    /// Height of the bounding box.
    pub height: f64,
    /// Style properties.
    #[serde(default)]
    pub style: ShapeStyle,
}

impl Ellipse {
    /// Create a new ellipse with a fresh id.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width,
            height,
            style: ShapeStyle::default(),
        }
    }

    /// Builder-style setter for the style.
    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Center of the ellipse.
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        )
    }

    /// Horizontal and vertical radii.
    pub fn radii(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl ShapeTrait for Ellipse {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, (self.width, self.height))
    }

    fn origin(&self) -> Point {
        self.position
    }

    fn hit_test(&self, point: Point, _tolerance: f64) -> bool {
        let radii = self.radii();
        // A flat ellipse has no interior.
        if radii.x <= 0.0 || radii.y <= 0.0 {
            return false;
        }
        let center = self.center();
        let nx = (point.x - center.x) / radii.x;
        let ny = (point.y - center.y) / radii.y;
        nx * nx + ny * ny <= 1.0
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn with_origin(&self, origin: Point) -> Self {
        Self {
            position: origin,
            ..self.clone()
        }
    }
}
