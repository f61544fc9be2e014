use std::fmt;
use std::ops::{Add, Sub};

use cgmath::Point3;
use serde::{Deserialize, Serialize};

/// Integer block position in world coordinates.
///
/// Used both for addressing blocks and as the key type for chunk
/// origins and visited sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    /// The six face-adjacent offsets, no diagonals. Searches expand
    /// neighbors in exactly this order, which together with the
    /// explicit tie-break makes them deterministic.
    pub const FACE_NEIGHBORS: [VoxelPos; 6] = [
        VoxelPos::new(0, 0, -1),
        VoxelPos::new(-1, 0, 0),
        VoxelPos::new(0, -1, 0),
        VoxelPos::new(1, 0, 0),
        VoxelPos::new(0, 1, 0),
        VoxelPos::new(0, 0, 1),
    ];

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Floors continuous coordinates onto the block grid.
    pub fn from_f64(x: f64, y: f64, z: f64) -> Self {
        Self::new(x.floor() as i32, y.floor() as i32, z.floor() as i32)
    }

    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// One block up.
    pub const fn above(self) -> Self {
        self.offset(0, 1, 0)
    }

    /// One block down.
    pub const fn below(self) -> Self {
        self.offset(0, -1, 0)
    }

    /// Euclidean length of this position treated as a vector.
    pub fn magnitude(self) -> f64 {
        let (x, y, z) = (self.x as f64, self.y as f64, self.z as f64);
        (x * x + y * y + z * z).sqrt()
    }

    /// Euclidean distance to another block position.
    pub fn distance(self, other: VoxelPos) -> f64 {
        (self - other).magnitude()
    }

    /// Waypoint for this block: the horizontal block center, with x and
    /// z offset by +0.5 and y unchanged.
    pub fn block_center(self) -> Point3<f32> {
        Point3::new(self.x as f32 + 0.5, self.y as f32, self.z as f32 + 0.5)
    }
}

impl Add for VoxelPos {
    type Output = VoxelPos;

    fn add(self, rhs: VoxelPos) -> VoxelPos {
        VoxelPos::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for VoxelPos {
    type Output = VoxelPos;

    fn sub(self, rhs: VoxelPos) -> VoxelPos {
        VoxelPos::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for VoxelPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
