use bevy::prelude::*;
use math::{axis::Axis, space::volume::Volume};

use crate::{
    hit::{BlockHit, Viewer},
    state::{SlabState, VerticalType},
};

/// A collision or outline box in block-local space.
pub type Shape = Volume;

/// Outline of every state, in the order of `SlabState::ALL`.
static OUTLINES: [Shape; 9] = {
    let mut shapes = [Volume::FULL; 9];
    let mut i = 0;
    while i < shapes.len() {
        if let Some(side) = SlabState::ALL[i].occupied_side() {
            shapes[i] = Volume::half(side);
        }
        i += 1;
    }
    shapes
};

const fn index_of(state: SlabState) -> usize {
    let kind = state.kind as usize;
    let vertical = match state.vertical {
        VerticalType::None => 0,
        VerticalType::NorthSouth => 1,
        VerticalType::EastWest => 2,
    };
    vertical * 3 + kind
}

/// The static outline of a slab.
pub fn outline_shape(state: SlabState) -> Shape {
    OUTLINES[index_of(state)]
}

/// The half of a double slab that contains the hit point.
/// None if the state isn't double.
pub fn targeted_half(state: SlabState, hit: &BlockHit) -> Option<Axis> {
    if !state.is_double() {
        return None;
    }
    let axis = state.split_axis();
    let p = hit.inner_fraction();
    Some(if p[axis.component()] >= 0.5 {
        axis
    } else {
        axis.invert()
    })
}

/// Outline of a split double slab narrowed to the half under `hit`.
/// Other states keep their static outline.
pub fn dynamic_outline_shape(state: SlabState, hit: &BlockHit) -> Shape {
    if !state.is_split() {
        return outline_shape(state);
    }
    match targeted_half(state, hit) {
        Some(side) => Volume::half(side),
        None => outline_shape(state),
    }
}

/// Outline as seen by `viewer`, looking at the slab at `pos`.
///
/// Only split double slabs are refined, and only for a viewer
/// that isn't sneaking and whose gaze actually lands on the block.
pub fn outline_for_viewer(
    state: SlabState,
    pos: IVec3,
    viewer: Option<&Viewer>,
    reach: f32,
) -> Shape {
    if !(state.is_double() && state.is_split()) {
        return outline_shape(state);
    }
    let Some(viewer) = viewer.filter(|viewer| !viewer.sneaking) else {
        return outline_shape(state);
    };
    match viewer.raycast(pos, reach) {
        Some(hit) => dynamic_outline_shape(state, &hit),
        None => outline_shape(state),
    }
}
