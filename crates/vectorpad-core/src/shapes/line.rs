//! Line element.

use super::{ShapeId, ShapeStyle, ShapeTrait, point_to_segment_dist};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A straight segment between two endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ShapeId,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Style properties (lines carry no fill).
    #[serde(default)]
    pub style: ShapeStyle,
}

impl Line {
    /// Create a new line with a fresh id.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            style: ShapeStyle::default().without_fill(),
        }
    }

    /// Builder-style setter for the style.
    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }
}

impl ShapeTrait for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn origin(&self) -> Point {
        self.start
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        point_to_segment_dist(point, self.start, self.end) < tolerance
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn with_origin(&self, origin: Point) -> Self {
        let delta = origin - self.start;
        Self {
            start: origin,
            end: self.end + delta,
            ..self.clone()
        }
    }
}
