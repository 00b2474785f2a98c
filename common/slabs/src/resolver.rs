//! Decides where a slab goes from where the player is aiming.
//!
//! A face is split into a center region and an edge band. Aiming
//! at the center lays the slab flat against the face; aiming at an
//! edge stands it up (or lays it down) toward that edge.

use bevy::prelude::*;
use math::axis::Axis;

use crate::{
    config::SlabConfig,
    hit::BlockHit,
    mode::PlayerId,
    state::{SlabState, SlabType},
};

/// Everything known about a single placement attempt.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PlacementContext {
    /// The raycast that triggered the placement.
    pub hit: BlockHit,

    /// The cell the slab will be placed in. Either the struck
    /// block itself or its neighbor across the struck face.
    pub target: IVec3,

    /// The slab already in the target cell.
    pub existing: Option<SlabState>,

    /// World-space eye position of the placing entity.
    pub eye: Vec3,

    pub sneaking: bool,

    /// Who is placing, if anyone.
    pub player: Option<PlayerId>,
}

impl PlacementContext {
    /// A placement into the neighbor of the struck block.
    pub fn new(hit: BlockHit, eye: Vec3) -> Self {
        Self {
            hit,
            target: hit.side + hit.pos,
            existing: None,
            eye,
            sneaking: false,
            player: None,
        }
    }

    pub fn with_player(mut self, player: PlayerId) -> Self {
        self.player = Some(player);
        self
    }

    pub fn with_existing(mut self, existing: SlabState) -> Self {
        self.existing = Some(existing);
        self
    }

    /// Place into the struck block instead of its neighbor.
    pub fn replacing_clicked(mut self) -> Self {
        self.target = self.hit.pos;
        self
    }
}

/// Whether `existing` can take the slab being placed, making a double.
///
/// `existing` is the slab in `ctx.target`. Only a single slab whose
/// empty half is exactly where the new slab would go can be replaced.
pub fn can_replace(existing: Option<SlabState>, ctx: &PlacementContext, config: &SlabConfig) -> bool {
    let Some(complement) = existing.and_then(SlabState::complement) else {
        return false;
    };
    let incoming = classify(&ctx.hit, ctx.target, ctx.eye, config);
    incoming == complement
}

/// The state a placement results in.
///
/// A single slab already in the target cell becomes a double with
/// the same split axis. Otherwise the aim decides.
pub fn placement_state(ctx: &PlacementContext, default: SlabState, config: &SlabConfig) -> SlabState {
    if let Some(existing) = ctx.existing
        && !existing.is_double()
    {
        return existing.with_kind(SlabType::Double);
    }

    let state = classify(&ctx.hit, ctx.target, ctx.eye, config);
    debug!("Resolved {:?} on the {} face to {state:?}.", ctx.hit.pos, ctx.hit.side.as_dir_str());
    default.with_kind(state.kind).with_vertical(state.vertical)
}

/// Pick the single slab a hit asks for in `cell`.
pub fn classify(hit: &BlockHit, cell: IVec3, eye: Vec3, config: &SlabConfig) -> SlabState {
    let p = hit.fraction_in(cell);
    let eye = eye - cell.as_vec3();
    let [u, v] = hit.side.face_components();
    let du = (p[u] - 0.5).abs();
    let dv = (p[v] - 0.5).abs();
    let center = config.center_extent();

    if du < center && dv < center {
        return SlabState::half(against_face(hit.side, p[hit.side.component()]));
    }

    // v is the vertical component on side faces and z on the top
    // and bottom, so ties go to it.
    let c = if du > dv + config.tie_epsilon { u } else { v };
    SlabState::half(toward(c, p[c], eye[c], config.tie_epsilon))
}

/// The half of a cell touching a face at `depth` along the face normal,
/// on the side the normal points to.
fn against_face(side: Axis, depth: f32) -> Axis {
    let high = if side.is_positive() {
        depth > 0.25
    } else {
        depth > 0.75
    };
    if high == side.is_positive() {
        side
    } else {
        side.invert()
    }
}

/// The half of a cell on the `value` side of the center along a component.
///
/// A value on the midline goes to the side the eye is on.
fn toward(component: usize, value: f32, eye: f32, tie_epsilon: f32) -> Axis {
    let positive = [Axis::PosX, Axis::PosY, Axis::PosZ][component];
    let high = if (value - 0.5).abs() <= tie_epsilon {
        eye >= 0.5
    } else {
        value > 0.5
    };
    if high { positive } else { positive.invert() }
}

#[cfg(test)]
mod tests {
    use bevy::math::{IVec3, Vec3, ivec3, vec3};
    use math::axis::Axis;

    use super::{PlacementContext, can_replace, classify, placement_state};
    use crate::{
        config::SlabConfig,
        hit::BlockHit,
        state::{SlabState, SlabType, VerticalType},
    };

    const EYE: Vec3 = vec3(0.5, 1.6, -2.0);

    fn place(side: Axis, location: Vec3) -> SlabState {
        let ctx = PlacementContext::new(BlockHit::new(IVec3::ZERO, side, location), EYE);
        placement_state(&ctx, SlabState::default(), &SlabConfig::default())
    }

    #[test]
    fn center_of_top_face_places_bottom() {
        assert_eq!(place(Axis::PosY, vec3(0.5, 1.0, 0.5)), SlabState::BOTTOM);
        assert_eq!(place(Axis::PosY, vec3(0.3, 1.0, 0.6)), SlabState::BOTTOM);
        assert_eq!(place(Axis::NegY, vec3(0.5, 0.0, 0.5)), SlabState::TOP);
    }

    #[test]
    fn center_of_side_face_places_vertical() {
        // struck the north face, slab goes into the south half of the next cell.
        let state = place(Axis::PosZ, vec3(0.7, 0.5, 1.0));
        assert_eq!(state, SlabState::new(SlabType::Bottom, VerticalType::NorthSouth));

        let state = place(Axis::NegX, vec3(0.0, 0.4, 0.5));
        assert_eq!(state, SlabState::new(SlabType::Top, VerticalType::EastWest));
    }

    #[test]
    fn edges_place_toward_edge() {
        // near the north edge of a top face.
        let state = place(Axis::PosY, vec3(0.5, 1.0, 0.9));
        assert_eq!(state, SlabState::new(SlabType::Top, VerticalType::NorthSouth));

        // near the west edge of a top face.
        let state = place(Axis::PosY, vec3(0.05, 1.0, 0.4));
        assert_eq!(state, SlabState::new(SlabType::Bottom, VerticalType::EastWest));

        // upper part of a side face.
        assert_eq!(place(Axis::PosZ, vec3(0.5, 0.9, 1.0)), SlabState::TOP);
        assert_eq!(place(Axis::PosZ, vec3(0.5, 0.1, 1.0)), SlabState::BOTTOM);

        // east edge of a side face.
        let state = place(Axis::PosZ, vec3(0.95, 0.5, 1.0));
        assert_eq!(state, SlabState::new(SlabType::Top, VerticalType::EastWest));
    }

    #[test]
    fn corner_ties_prefer_vertical_component() {
        assert_eq!(place(Axis::PosZ, vec3(0.9, 0.9, 1.0)), SlabState::TOP);
        let state = place(Axis::PosY, vec3(0.1, 1.0, 0.1));
        assert_eq!(state, SlabState::new(SlabType::Bottom, VerticalType::NorthSouth));
    }

    #[test]
    fn midline_tie_uses_eye_height() {
        let config = SlabConfig {
            edge_margin: 0.5,
            ..SlabConfig::default()
        };
        let hit = BlockHit::new(IVec3::ZERO, Axis::PosZ, vec3(0.5, 0.5, 1.0));
        let target = ivec3(0, 0, 1);

        let above = classify(&hit, target, vec3(0.5, 1.6, 3.0), &config);
        assert_eq!(above, SlabState::TOP);
        let below = classify(&hit, target, vec3(0.5, -0.6, 3.0), &config);
        assert_eq!(below, SlabState::BOTTOM);

        // same input, same answer.
        for _ in 0..8 {
            assert_eq!(classify(&hit, target, vec3(0.5, 1.6, 3.0), &config), above);
        }
    }

    #[test]
    fn merge_keeps_split_axis() {
        let existing = SlabState::new(SlabType::Bottom, VerticalType::EastWest);
        let hit = BlockHit::new(IVec3::ZERO, Axis::PosX, vec3(0.5, 0.5, 0.5));
        let ctx = PlacementContext::new(hit, EYE)
            .replacing_clicked()
            .with_existing(existing);
        let state = placement_state(&ctx, SlabState::default(), &SlabConfig::default());
        assert_eq!(state, SlabState::new(SlabType::Double, VerticalType::EastWest));

        let ctx = ctx.with_existing(SlabState::BOTTOM);
        let state = placement_state(&ctx, SlabState::default(), &SlabConfig::default());
        assert_eq!(state, SlabState::DOUBLE);
    }

    #[test]
    fn can_replace_from_inner_face() {
        let config = SlabConfig::default();

        // the top face of a bottom slab sits at y=0.5.
        let hit = BlockHit::new(IVec3::ZERO, Axis::PosY, vec3(0.5, 0.5, 0.5));
        let ctx = PlacementContext::new(hit, EYE).replacing_clicked();
        assert!(can_replace(Some(SlabState::BOTTOM), &ctx, &config));
        assert!(!can_replace(Some(SlabState::TOP), &ctx, &config));
        assert!(!can_replace(Some(SlabState::DOUBLE), &ctx, &config));
        assert!(!can_replace(None, &ctx, &config));

        // the east face of a west half sits at x=0.5.
        let west = SlabState::half(Axis::NegX);
        let hit = BlockHit::new(IVec3::ZERO, Axis::PosX, vec3(0.5, 0.5, 0.5));
        let ctx = PlacementContext::new(hit, EYE).replacing_clicked();
        assert!(can_replace(Some(west), &ctx, &config));
    }

    #[test]
    fn can_replace_rejects_same_half() {
        let config = SlabConfig::default();
        // the outer top face of a top slab.
        let hit = BlockHit::new(IVec3::ZERO, Axis::PosY, vec3(0.5, 1.0, 0.5));
        let ctx = PlacementContext::new(hit, EYE).replacing_clicked();
        assert!(!can_replace(Some(SlabState::TOP), &ctx, &config));

        // aiming at the inner face's edge asks for a vertical slab instead.
        let hit = BlockHit::new(IVec3::ZERO, Axis::PosY, vec3(0.5, 0.5, 0.95));
        let ctx = PlacementContext::new(hit, EYE).replacing_clicked();
        assert!(!can_replace(Some(SlabState::BOTTOM), &ctx, &config));

        for state in SlabState::ALL {
            let hit = BlockHit::new(IVec3::ZERO, Axis::PosY, vec3(0.5, 1.0, 0.5));
            let ctx = PlacementContext::new(hit, EYE).replacing_clicked();
            let incoming = classify(&ctx.hit, ctx.target, ctx.eye, &config);
            if incoming == state {
                assert!(!can_replace(Some(state), &ctx, &config));
            }
        }
    }

    #[test]
    fn can_replace_in_neighbor_cell() {
        let config = SlabConfig::default();
        // top face of the block below a top slab.
        let hit = BlockHit::new(IVec3::ZERO, Axis::PosY, vec3(0.5, 1.0, 0.5));
        let ctx = PlacementContext::new(hit, EYE);
        assert_eq!(ctx.target, ivec3(0, 1, 0));
        assert!(can_replace(Some(SlabState::TOP), &ctx, &config));
        assert!(!can_replace(Some(SlabState::BOTTOM), &ctx, &config));

        let ctx = ctx.with_existing(SlabState::TOP);
        let state = placement_state(&ctx, SlabState::default(), &config);
        assert_eq!(state, SlabState::DOUBLE);
    }

    #[test]
    fn hit_inside_target_uses_target_fraction() {
        // 0.1 above the floor of the cell above the struck block.
        assert_eq!(place(Axis::PosY, vec3(0.5, 1.1, 0.5)), SlabState::BOTTOM);
        assert_eq!(place(Axis::PosY, vec3(0.5, 1.9, 0.5)), SlabState::TOP);
    }

    #[test]
    fn side_face_near_center_boundary() {
        let config = SlabConfig::default();
        let target = ivec3(0, 0, 1);
        let south = SlabState::half(Axis::NegZ);

        let hit = BlockHit::new(IVec3::ZERO, Axis::PosZ, vec3(0.5, 0.7499, 1.0));
        assert_eq!(classify(&hit, target, EYE, &config), south);
        let hit = BlockHit::new(IVec3::ZERO, Axis::PosZ, vec3(0.5, 0.7501, 1.0));
        assert_eq!(classify(&hit, target, EYE, &config), SlabState::TOP);

        // exactly on the boundary belongs to the edge band, whatever the eye height.
        let hit = BlockHit::new(IVec3::ZERO, Axis::PosZ, vec3(0.5, 0.75, 1.0));
        for eye in [vec3(0.5, 3.0, 3.0), vec3(0.5, -2.0, 3.0), EYE] {
            assert_eq!(classify(&hit, target, eye, &config), SlabState::TOP);
        }
        let hit = BlockHit::new(IVec3::ZERO, Axis::PosZ, vec3(0.5, 0.25, 1.0));
        for eye in [vec3(0.5, 3.0, 3.0), vec3(0.5, -2.0, 3.0), EYE] {
            assert_eq!(classify(&hit, target, eye, &config), SlabState::BOTTOM);
        }
    }

    #[test]
    fn placement_keeps_default_fields() {
        let ctx = PlacementContext::new(
            BlockHit::new(ivec3(3, 4, 5), Axis::PosY, vec3(3.5, 5.0, 5.5)),
            EYE,
        );
        assert_eq!(ctx.target, ivec3(3, 5, 5));
        let state = placement_state(&ctx, SlabState::TOP, &SlabConfig::default());
        assert_eq!(state, SlabState::BOTTOM);
    }
}
