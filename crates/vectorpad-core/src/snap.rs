//! Grid snapping for committed and moved coordinates.

use kurbo::Point;

/// Default grid step for snapping, in canvas units.
pub const GRID_SIZE: f64 = 10.0;

/// Round a value to the nearest multiple of `step`.
///
/// Halfway values round towards positive infinity, so a drag that crosses
/// the origin lands on the same grid line from either side.
pub fn snap(value: f64, step: f64) -> f64 {
    (value / step + 0.5).floor() * step
}

/// Snap both coordinates of a point to the grid.
pub fn snap_to_grid(point: Point, step: f64) -> Point {
    Point::new(snap(point.x, step), snap(point.y, step))
}
