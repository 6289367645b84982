//! View transform between device (pointer) space and canvas space.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Lower zoom bound.
pub const MIN_ZOOM: f64 = 0.2;
/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 4.0;

/// Camera holds the pan offset and zoom factor of the view.
///
/// Device points are given relative to the page; the container origin is
/// subtracted before the pan, so `canvas = (device - origin - pan) / zoom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Translation of the canvas inside the container, in device units.
    pub pan: Vec2,
    /// Current zoom factor, always within `[min_zoom, max_zoom]`.
    pub zoom: f64,
    /// Minimum allowed zoom level.
    pub min_zoom: f64,
    /// Maximum allowed zoom level.
    pub max_zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

impl Camera {
    /// Create a camera at identity with the default zoom limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera with custom zoom limits. The initial zoom of 1.0 is
    /// clamped into them.
    pub fn with_limits(min_zoom: f64, max_zoom: f64) -> Self {
        Self {
            zoom: 1.0_f64.clamp(min_zoom, max_zoom),
            min_zoom,
            max_zoom,
            ..Self::default()
        }
    }

    /// Transform from canvas space to container-relative device space.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }

    /// Convert a device point to canvas coordinates.
    pub fn to_canvas(&self, device: Point, container_origin: Point) -> Point {
        let local = device - container_origin - self.pan;
        Point::new(local.x / self.zoom, local.y / self.zoom)
    }

    /// Convert a canvas point back to device coordinates.
    pub fn to_device(&self, canvas: Point, container_origin: Point) -> Point {
        container_origin + self.pan + canvas.to_vec2() * self.zoom
    }

    /// Set the zoom factor, clamped to the limits. Pan is left untouched.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Multiply the zoom factor, clamped. Pan is left untouched.
    pub fn zoom_by(&mut self, factor: f64) {
        self.set_zoom(self.zoom * factor);
    }

    /// Zoom by `factor`, keeping the canvas point under `device` fixed.
    pub fn zoom_at(&mut self, device: Point, container_origin: Point, factor: f64) {
        let new_zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }

        let focus = self.to_canvas(device, container_origin).to_vec2();
        self.pan += focus * (self.zoom - new_zoom);
        self.zoom = new_zoom;
    }
}

/// Zoom multiplier for a wheel event.
///
/// Scrolling up (negative `delta_y`) zooms in. A zero delta carries no
/// direction and yields `None`.
pub fn wheel_zoom_factor(delta_y: f64, zoom_in: f64, zoom_out: f64) -> Option<f64> {
    let direction = -delta_y;
    if direction > 0.0 {
        Some(zoom_in)
    } else if direction < 0.0 {
        Some(zoom_out)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera() {
        let camera = Camera::new();
        assert_eq!(camera.pan, Vec2::ZERO);
        assert!((camera.zoom - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_canvas_identity() {
        let camera = Camera::new();
        let canvas = camera.to_canvas(Point::new(100.0, 200.0), Point::ZERO);
        assert_eq!(canvas, Point::new(100.0, 200.0));
    }

    #[test]
    fn test_to_canvas_subtracts_origin_and_pan() {
        let mut camera = Camera::new();
        camera.pan = Vec2::new(50.0, 100.0);
        let canvas = camera.to_canvas(Point::new(120.0, 230.0), Point::new(20.0, 30.0));
        assert_eq!(canvas, Point::new(50.0, 100.0));
    }

    #[test]
    fn test_to_canvas_with_zoom() {
        let mut camera = Camera::new();
        camera.zoom = 2.0;
        let canvas = camera.to_canvas(Point::new(100.0, 200.0), Point::ZERO);
        assert_eq!(canvas, Point::new(50.0, 100.0));
    }

    #[test]
    fn test_transform_matches_to_device() {
        let mut camera = Camera::new();
        camera.pan = Vec2::new(30.0, -20.0);
        camera.zoom = 1.5;
        let canvas = Point::new(12.0, 7.0);
        let via_affine = camera.transform() * canvas;
        assert_eq!(via_affine, camera.to_device(canvas, Point::ZERO));
    }

    #[test]
    fn test_zoom_clamp() {
        let mut camera = Camera::new();
        camera.zoom_at(Point::ZERO, Point::ZERO, 0.001);
        assert!((camera.zoom - MIN_ZOOM).abs() < f64::EPSILON);

        camera.zoom_at(Point::ZERO, Point::ZERO, 1000.0);
        assert!((camera.zoom - MAX_ZOOM).abs() < f64::EPSILON);

        camera.zoom_by(10.0);
        assert!((camera.zoom - MAX_ZOOM).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zoom_at_keeps_focus() {
        let mut camera = Camera::new();
        camera.pan = Vec2::new(40.0, 10.0);
        let device = Point::new(300.0, 200.0);
        let origin = Point::new(8.0, 64.0);
        let before = camera.to_canvas(device, origin);
        camera.zoom_at(device, origin, 1.05);
        let after = camera.to_canvas(device, origin);
        assert!((before.x - after.x).abs() < 1e-9);
        assert!((before.y - after.y).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_at_limit_leaves_pan() {
        let mut camera = Camera::new();
        camera.zoom = MAX_ZOOM;
        camera.pan = Vec2::new(5.0, 5.0);
        camera.zoom_at(Point::new(100.0, 100.0), Point::ZERO, 1.05);
        assert_eq!(camera.pan, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_wheel_direction() {
        assert_eq!(wheel_zoom_factor(-120.0, 1.05, 0.95), Some(1.05));
        assert_eq!(wheel_zoom_factor(53.0, 1.05, 0.95), Some(0.95));
        assert_eq!(wheel_zoom_factor(0.0, 1.05, 0.95), None);
    }

    #[test]
    fn test_custom_limits_clamp_initial_zoom() {
        let camera = Camera::with_limits(1.5, 3.0);
        assert!((camera.zoom - 1.5).abs() < f64::EPSILON);
    }
}
