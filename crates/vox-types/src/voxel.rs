//! Voxel coordinate type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A discrete 3D coordinate in voxel space.
///
/// Components are `u32`: the normalization stage translates the point cloud
/// so every axis starts at zero, so negative coordinates cannot occur and
/// the unsigned type encodes that invariant. Coordinates compare and hash
/// by value, which makes them directly usable as grouping keys.
///
/// # Example
///
/// ```
/// use vox_types::VoxelCoord;
///
/// let coord = VoxelCoord::new(1, 2, 3);
/// assert_eq!(coord.as_tuple(), (1, 2, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VoxelCoord {
    /// X coordinate (width axis).
    pub x: u32,
    /// Y coordinate (height axis).
    pub y: u32,
    /// Z coordinate (length/depth axis).
    pub z: u32,
}

impl VoxelCoord {
    /// Creates a new voxel coordinate.
    #[must_use]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Creates a coordinate at the origin (0, 0, 0).
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0, 0)
    }

    /// Returns the coordinate as a tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (u32, u32, u32) {
        (self.x, self.y, self.z)
    }

    /// Returns the coordinate as an array.
    #[must_use]
    pub const fn as_array(self) -> [u32; 3] {
        [self.x, self.y, self.z]
    }

    /// Component-wise maximum of two coordinates.
    ///
    /// Used when deriving grid dimensions from observed coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use vox_types::VoxelCoord;
    ///
    /// let a = VoxelCoord::new(1, 7, 2);
    /// let b = VoxelCoord::new(4, 3, 2);
    /// assert_eq!(a.component_max(b), VoxelCoord::new(4, 7, 2));
    /// ```
    #[must_use]
    pub fn component_max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }
}

impl From<(u32, u32, u32)> for VoxelCoord {
    fn from((x, y, z): (u32, u32, u32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[u32; 3]> for VoxelCoord {
    fn from([x, y, z]: [u32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<VoxelCoord> for (u32, u32, u32) {
    fn from(coord: VoxelCoord) -> Self {
        coord.as_tuple()
    }
}
