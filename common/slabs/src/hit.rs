use bevy::prelude::*;
use math::{axis::Axis, space::volume::Volume};

/// How far a hit point is pushed into the struck block when
/// deciding which half of it was targeted.
const NUDGE: f32 = 1.0e-3;

/// Result of a raycast against a block.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct BlockHit {
    /// Position of the struck block.
    pub pos: IVec3,

    /// The face of the block that was struck.
    pub side: Axis,

    /// World-space location of the hit.
    pub location: Vec3,
}

impl BlockHit {
    pub const fn new(pos: IVec3, side: Axis, location: Vec3) -> Self {
        Self {
            pos,
            side,
            location,
        }
    }

    /// Location of the hit relative to `cell`, clamped to [0,1].
    pub fn fraction_in(&self, cell: IVec3) -> Vec3 {
        (self.location - cell.as_vec3()).clamp(Vec3::ZERO, Vec3::ONE)
    }

    /// Location of the hit relative to the struck block,
    /// pushed slightly inside it.
    pub fn inner_fraction(&self) -> Vec3 {
        (self.location - self.side.as_vec3() * NUDGE - self.pos.as_vec3())
            .clamp(Vec3::ZERO, Vec3::ONE)
    }
}

/// The entity looking at a block.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Viewer {
    /// World-space eye position.
    pub eye: Vec3,

    /// Direction the viewer is facing. Need not be normalized.
    pub look: Vec3,

    pub sneaking: bool,
}

impl Viewer {
    pub const fn new(eye: Vec3, look: Vec3, sneaking: bool) -> Self {
        Self {
            eye,
            look,
            sneaking,
        }
    }

    /// Cast the viewer's gaze at the block at `pos`, up to `reach` blocks.
    pub fn raycast(&self, pos: IVec3, reach: f32) -> Option<BlockHit> {
        raycast_volume(self.eye, self.look, reach, &Volume::FULL.offset(pos))
            .map(|(side, location)| BlockHit::new(pos, side, location))
    }
}

/// Intersect a ray with a world-space volume using the slab method.
///
/// Returns the entered face and the hit location. A ray starting
/// inside the volume does not hit it.
pub fn raycast_volume(origin: Vec3, dir: Vec3, reach: f32, volume: &Volume) -> Option<(Axis, Vec3)> {
    let dir = dir.try_normalize()?;
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut entered = None;

    for c in 0..3 {
        if dir[c] == 0.0 {
            if origin[c] < volume.min[c] || origin[c] > volume.max[c] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / dir[c];
        let mut t0 = (volume.min[c] - origin[c]) * inv;
        let mut t1 = (volume.max[c] - origin[c]) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        if t0 > t_enter {
            t_enter = t0;
            entered = Some(Axis::entered_from(c, dir[c]));
        }
        t_exit = t_exit.min(t1);
    }

    if t_enter > t_exit || t_enter < 0.0 || t_enter > reach {
        return None;
    }

    entered.map(|side| (side, origin + dir * t_enter))
}
