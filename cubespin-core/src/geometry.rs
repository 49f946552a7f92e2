//! Fixed cube geometry: eight corners and six quad faces
use nalgebra::Point3;

pub const CORNER_COUNT: usize = 8;
pub const FACE_COUNT: usize = 6;

/// A quad face as four corner indices, walked in order as a closed loop
pub type Face = [usize; 4];

const CUBE_CORNERS: [[f32; 3]; CORNER_COUNT] = [
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0],
];

const CUBE_FACES: [Face; FACE_COUNT] = [
    [0, 1, 2, 3],
    [1, 5, 6, 2],
    [5, 4, 7, 6],
    [4, 0, 3, 7],
    [0, 4, 5, 1],
    [3, 2, 6, 7],
];

/// Corner and face tables of the demo cube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeGeometry {
    corners: [[f32; 3]; CORNER_COUNT],
    faces: [Face; FACE_COUNT],
}

/// The cube every frame is computed from
pub const CUBE: CubeGeometry = CubeGeometry::new();

impl CubeGeometry {
    pub const fn new() -> Self {
        Self {
            corners: CUBE_CORNERS,
            faces: CUBE_FACES,
        }
    }

    /// Corners in their fixed order
    pub fn corners(&self) -> impl ExactSizeIterator<Item = Point3<f32>> + '_ {
        self.corners.iter().map(|&[x, y, z]| Point3::new(x, y, z))
    }

    pub fn corner(&self, index: usize) -> Option<Point3<f32>> {
        self.corners.get(index).map(|&[x, y, z]| Point3::new(x, y, z))
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }
}

impl Default for CubeGeometry {
    fn default() -> Self {
        Self::new()
    }
}
