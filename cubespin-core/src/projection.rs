//! Perspective projection of 3D points onto the 2D viewport
use nalgebra::{Point2, Point3};

/// Field-of-view scale applied to x and y after the perspective divide
pub const FOV: f32 = 128.0;
/// Distance from the eye to the origin along the Z axis
pub const VIEW_DISTANCE: f32 = 3.5;
/// Viewport width in pixels
pub const VIEW_WIDTH: f32 = 400.0;
/// Viewport height in pixels
pub const VIEW_HEIGHT: f32 = 200.0;

/// Smallest |view_distance + z| that `checked_project` still divides by
const MIN_DEPTH: f32 = 1e-6;

/// Fixed-parameter perspective camera.
///
/// The projected point is `p.xy * fov / (view_distance + p.z)`, shifted so
/// that the origin lands in the middle of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub fov: f32,
    pub view_distance: f32,
    pub view_width: f32,
    pub view_height: f32,
}

impl Camera {
    pub const fn new(fov: f32, view_distance: f32, view_width: f32, view_height: f32) -> Self {
        Self {
            fov,
            view_distance,
            view_width,
            view_height,
        }
    }

    /// Project a 3D point to viewport coordinates.
    ///
    /// No guard against `view_distance + p.z == 0`; the result is infinite
    /// or NaN there. The cube corners never get that close.
    pub fn project(&self, p: &Point3<f32>) -> Point2<f32> {
        let factor = self.fov / (self.view_distance + p.z);
        Point2::new(
            p.x * factor + self.view_width / 2.0,
            p.y * factor + self.view_height / 2.0,
        )
    }

    /// Like [`Camera::project`], but returns `None` when the point sits on
    /// the eye plane.
    pub fn checked_project(&self, p: &Point3<f32>) -> Option<Point2<f32>> {
        if (self.view_distance + p.z).abs() < MIN_DEPTH {
            return None;
        }
        Some(self.project(p))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(FOV, VIEW_DISTANCE, VIEW_WIDTH, VIEW_HEIGHT)
    }
}

/// Project with the default camera
pub fn project(p: &Point3<f32>) -> Point2<f32> {
    Camera::default().project(p)
}
