//! Frame computation over the fixed cube
use nalgebra::Point2;
use serde::Serialize;

use crate::error::{CubeError, Result};
use crate::geometry::{CubeGeometry, Face, CUBE};
use crate::projection::Camera;
use crate::transform::rotate_xyz;

/// A projected corner as it goes over the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl From<Point2<f32>> for ScreenPoint {
    fn from(p: Point2<f32>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<ScreenPoint> for Point2<f32> {
    fn from(p: ScreenPoint) -> Self {
        Point2::new(p.x, p.y)
    }
}

/// One computed frame: the projected corners plus the face table to draw them with
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    #[serde(rename = "servername")]
    pub server_name: String,
    pub angle: i64,
    /// Index-aligned with the cube's corner order
    pub vertices: Vec<ScreenPoint>,
    #[serde(rename = "pointOrder")]
    pub point_order: Vec<Face>,
}

/// Parse the textual angle a caller sent.
///
/// Accepts an optional sign followed by decimal digits. Anything else,
/// including surrounding whitespace, is rejected rather than defaulted.
pub fn parse_angle(text: &str) -> Result<i64> {
    text.parse::<i64>()
        .map_err(|e| CubeError::InvalidInput(format!("angle {:?} is not an integer: {}", text, e)))
}

/// Computes frames for the cube. Holds only read-only configuration, so a
/// single instance can serve any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct VertexService {
    server_name: String,
    geometry: CubeGeometry,
    camera: Camera,
}

impl VertexService {
    pub fn new(server_name: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
            geometry: CUBE,
            camera: Camera::default(),
        }
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    /// Rotate every corner about X, Y then Z by `angle_degrees` and project it.
    ///
    /// Any integer is accepted; angles are not normalized.
    pub fn compute_frame(&self, angle_degrees: i64) -> ProjectionResult {
        let vertices: Vec<ScreenPoint> = self
            .geometry
            .corners()
            .map(|corner| ScreenPoint::from(self.camera.project(&rotate_xyz(&corner, angle_degrees))))
            .collect();

        ProjectionResult {
            server_name: self.server_name.clone(),
            angle: angle_degrees,
            vertices,
            point_order: self.geometry.faces().to_vec(),
        }
    }

    /// Validate a raw `angle` parameter and compute its frame.
    ///
    /// A missing or malformed angle fails before any computation happens.
    pub fn compute_frame_from_text(&self, angle: Option<&str>) -> Result<ProjectionResult> {
        let text = angle.ok_or_else(CubeError::missing_angle)?;
        let angle = parse_angle(text)?;
        Ok(self.compute_frame(angle))
    }
}
