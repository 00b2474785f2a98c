use bevy::prelude::*;

use crate::axis::Axis;

/// An axis-aligned box in block-local space,
/// where a full block spans [0,1] on every axis.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Volume {
    /// Inclusive Minimum.
    pub min: Vec3,

    /// Inclusive Maximum.
    pub max: Vec3,
}

impl Volume {
    /// The unit cube.
    pub const FULL: Self = Self::new(Vec3::ZERO, Vec3::ONE);

    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Construct from a min and max expressed in sixteenths of a block.
    pub const fn from_pixels(min: [f32; 3], max: [f32; 3]) -> Self {
        Self {
            min: vec3(min[0] / 16.0, min[1] / 16.0, min[2] / 16.0),
            max: vec3(max[0] / 16.0, max[1] / 16.0, max[2] / 16.0),
        }
    }

    /// The half of the unit cube on the `axis` side of the center.
    /// `half(Axis::PosY)` is the upper half, `half(Axis::NegX)` the west half.
    pub const fn half(axis: Axis) -> Self {
        match axis {
            Axis::PosX => Self::from_pixels([8.0, 0.0, 0.0], [16.0, 16.0, 16.0]),
            Axis::NegX => Self::from_pixels([0.0, 0.0, 0.0], [8.0, 16.0, 16.0]),
            Axis::PosY => Self::from_pixels([0.0, 8.0, 0.0], [16.0, 16.0, 16.0]),
            Axis::NegY => Self::from_pixels([0.0, 0.0, 0.0], [16.0, 8.0, 16.0]),
            Axis::PosZ => Self::from_pixels([0.0, 0.0, 8.0], [16.0, 16.0, 16.0]),
            Axis::NegZ => Self::from_pixels([0.0, 0.0, 0.0], [16.0, 16.0, 8.0]),
        }
    }

    /// Returns the X, Y and Z extent.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Product of the extents.
    pub fn volume(&self) -> f32 {
        let size = self.size();
        size.x * size.y * size.z
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, pt: Vec3) -> bool {
        pt.cmpge(self.min).all() && pt.cmple(self.max).all()
    }

    /// Whether self and other share a region of nonzero volume.
    pub fn intersects(&self, other: &Self) -> bool {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        min.cmplt(max).all()
    }

    /// Translate into world space at a block position.
    pub fn offset(self, pos: IVec3) -> Self {
        let pos = pos.as_vec3();
        Self {
            min: self.min + pos,
            max: self.max + pos,
        }
    }
}
