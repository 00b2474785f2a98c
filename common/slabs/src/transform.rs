use math::rotation::{Mirror, Rotation};

use crate::state::{SlabState, VerticalType};

/// Rotate a slab around the vertical axis.
///
/// Single slabs move to the rotated half, split doubles swap their
/// split axis on quarter turns, and stacked slabs never change.
pub fn rotate(state: SlabState, rotation: Rotation) -> SlabState {
    match state.occupied_side() {
        Some(side) => SlabState::half(rotation.rotate(side)),
        None => match state.vertical.axis() {
            Some(axis) => state.with_vertical(VerticalType::along(rotation.rotate(axis))),
            None => state,
        },
    }
}

/// Reflect a slab across a vertical plane.
pub fn mirror(state: SlabState, mirror: Mirror) -> SlabState {
    match state.occupied_side() {
        Some(side) => SlabState::half(mirror.mirror(side)),
        None => state,
    }
}
