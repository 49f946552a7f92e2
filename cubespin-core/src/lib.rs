//! cubespin core library - rotating cube projection
//!
//! Stateless geometry for the spinning-cube demo: rotation of the cube's
//! corners about X, Y and Z, perspective projection onto a 400x200 viewport,
//! and the frame computation that bundles both with the cube's face table.

pub mod error;
pub mod geometry;
pub mod projection;
pub mod service;
pub mod transform;

// Re-export commonly used types
pub use error::CubeError;
pub use geometry::{CubeGeometry, Face, CUBE};
pub use projection::{project, Camera};
pub use service::{parse_angle, ProjectionResult, ScreenPoint, VertexService};
pub use transform::{rotate_x, rotate_xyz, rotate_y, rotate_z, Axis};
