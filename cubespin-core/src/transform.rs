//! Rotations about the principal axes, angles in integer degrees
use nalgebra::Point3;

/// Principal axis of rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Sine and cosine of an angle given in whole degrees.
///
/// The trigonometry runs in double precision and is truncated to `f32`,
/// which is the precision every coordinate is stored and multiplied in.
fn sin_cos(angle_degrees: i64) -> (f32, f32) {
    let rad = angle_degrees as f64 * std::f64::consts::PI / 180.0;
    (rad.sin() as f32, rad.cos() as f32)
}

/// Rotate a point about the X axis
pub fn rotate_x(p: &Point3<f32>, angle_degrees: i64) -> Point3<f32> {
    let (sina, cosa) = sin_cos(angle_degrees);
    let y = p.y * cosa - p.z * sina;
    let z = p.y * sina + p.z * cosa;
    Point3::new(p.x, y, z)
}

/// Rotate a point about the Y axis
pub fn rotate_y(p: &Point3<f32>, angle_degrees: i64) -> Point3<f32> {
    let (sina, cosa) = sin_cos(angle_degrees);
    let z = p.z * cosa - p.x * sina;
    let x = p.z * sina + p.x * cosa;
    Point3::new(x, p.y, z)
}

/// Rotate a point about the Z axis
pub fn rotate_z(p: &Point3<f32>, angle_degrees: i64) -> Point3<f32> {
    let (sina, cosa) = sin_cos(angle_degrees);
    let x = p.x * cosa - p.y * sina;
    let y = p.x * sina + p.y * cosa;
    Point3::new(x, y, p.z)
}

/// Rotate a point about a single axis
pub fn rotate(p: &Point3<f32>, axis: Axis, angle_degrees: i64) -> Point3<f32> {
    match axis {
        Axis::X => rotate_x(p, angle_degrees),
        Axis::Y => rotate_y(p, angle_degrees),
        Axis::Z => rotate_z(p, angle_degrees),
    }
}

/// Rotate a point by the same angle about X, then Y, then Z.
///
/// Rotations do not commute, so this order is part of the output contract.
pub fn rotate_xyz(p: &Point3<f32>, angle_degrees: i64) -> Point3<f32> {
    [Axis::X, Axis::Y, Axis::Z]
        .iter()
        .fold(*p, |acc, axis| rotate(&acc, *axis, angle_degrees))
}
