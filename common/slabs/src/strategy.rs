use bevy::prelude::*;
use math::rotation::{Mirror, Rotation};

use crate::{
    breaking::{self, BreakOutcome},
    config::SlabConfig,
    hit::{BlockHit, Viewer},
    mode::{PlacementMode, PlacementModes},
    resolver::{self, PlacementContext},
    shape::{self, Shape},
    state::SlabState,
    transform,
};

/// The slab behavior a host installs into its placement pipeline.
pub trait PlacementStrategy: Send + Sync + 'static {
    fn can_replace(&self, existing: Option<SlabState>, ctx: &PlacementContext) -> bool;

    fn placement_state(&self, ctx: &PlacementContext, default: SlabState) -> SlabState;

    fn outline_shape(&self, state: SlabState) -> Shape;

    fn outline_for_viewer(&self, state: SlabState, pos: IVec3, viewer: Option<&Viewer>) -> Shape;

    fn rotate(&self, state: SlabState, rotation: Rotation) -> SlabState;

    fn mirror(&self, state: SlabState, mirror: Mirror) -> SlabState;

    fn after_break(&self, state: SlabState, sneaking: bool) -> SlabState;

    fn break_slab(&self, state: SlabState, sneaking: bool, hit: Option<&BlockHit>) -> BreakOutcome;
}

/// Aim-driven slab placement.
#[derive(Clone, Default, Debug)]
pub struct AutoSlabs {
    pub config: SlabConfig,
}

impl AutoSlabs {
    pub fn new(config: SlabConfig) -> Self {
        Self { config }
    }
}

impl PlacementStrategy for AutoSlabs {
    fn can_replace(&self, existing: Option<SlabState>, ctx: &PlacementContext) -> bool {
        resolver::can_replace(existing, ctx, &self.config)
    }

    fn placement_state(&self, ctx: &PlacementContext, default: SlabState) -> SlabState {
        resolver::placement_state(ctx, default, &self.config)
    }

    fn outline_shape(&self, state: SlabState) -> Shape {
        shape::outline_shape(state)
    }

    fn outline_for_viewer(&self, state: SlabState, pos: IVec3, viewer: Option<&Viewer>) -> Shape {
        shape::outline_for_viewer(state, pos, viewer, self.config.reach)
    }

    fn rotate(&self, state: SlabState, rotation: Rotation) -> SlabState {
        transform::rotate(state, rotation)
    }

    fn mirror(&self, state: SlabState, mirror: Mirror) -> SlabState {
        transform::mirror(state, mirror)
    }

    fn after_break(&self, state: SlabState, sneaking: bool) -> SlabState {
        breaking::after_break(state, sneaking)
    }

    fn break_slab(&self, state: SlabState, sneaking: bool, hit: Option<&BlockHit>) -> BreakOutcome {
        breaking::break_slab(state, sneaking, hit)
    }
}

/// Result of a gated decision.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Decision<T> {
    /// Let the host's built-in logic decide.
    Vanilla,
    /// Use this value instead.
    Custom(T),
}

impl<T> Decision<T> {
    /// Resolve against the host's own answer.
    pub fn or_else(self, vanilla: impl FnOnce() -> T) -> T {
        match self {
            Self::Vanilla => (vanilla)(),
            Self::Custom(v) => v,
        }
    }

    pub fn is_vanilla(&self) -> bool {
        matches!(self, Self::Vanilla)
    }
}

/// Routes a host's slab hooks through a strategy, honoring
/// each player's placement mode.
///
/// Only placement is gated. Outlines, transforms and breaking
/// always go through the strategy.
#[derive(Resource)]
pub struct SlabPlacement<S: PlacementStrategy = AutoSlabs> {
    strategy: S,
    modes: PlacementModes,
}

impl<S: PlacementStrategy> SlabPlacement<S> {
    pub fn new(strategy: S, modes: PlacementModes) -> Self {
        Self { strategy, modes }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn modes(&self) -> &PlacementModes {
        &self.modes
    }

    /// Whether the placement in `ctx` is handled by the strategy.
    pub fn is_active(&self, ctx: &PlacementContext) -> bool {
        ctx.player
            .is_some_and(|player| self.modes.get(player) == PlacementMode::Auto)
    }

    pub fn can_replace(&self, existing: Option<SlabState>, ctx: &PlacementContext) -> Decision<bool> {
        if !self.is_active(ctx) {
            return Decision::Vanilla;
        }
        Decision::Custom(self.strategy.can_replace(existing, ctx))
    }

    pub fn placement_state(&self, ctx: &PlacementContext, default: SlabState) -> Decision<SlabState> {
        if !self.is_active(ctx) {
            return Decision::Vanilla;
        }
        Decision::Custom(self.strategy.placement_state(ctx, default))
    }

    pub fn outline_shape(&self, state: SlabState) -> Shape {
        self.strategy.outline_shape(state)
    }

    pub fn outline_for_viewer(&self, state: SlabState, pos: IVec3, viewer: Option<&Viewer>) -> Shape {
        self.strategy.outline_for_viewer(state, pos, viewer)
    }

    pub fn rotate(&self, state: SlabState, rotation: Rotation) -> SlabState {
        self.strategy.rotate(state, rotation)
    }

    pub fn mirror(&self, state: SlabState, mirror: Mirror) -> SlabState {
        self.strategy.mirror(state, mirror)
    }

    pub fn after_break(&self, state: SlabState, sneaking: bool) -> SlabState {
        self.strategy.after_break(state, sneaking)
    }

    pub fn break_slab(&self, state: SlabState, sneaking: bool, hit: Option<&BlockHit>) -> BreakOutcome {
        self.strategy.break_slab(state, sneaking, hit)
    }
}

#[cfg(test)]
mod tests {
    use bevy::math::{IVec3, vec3};
    use math::{axis::Axis, rotation::Rotation, space::volume::Volume};

    use super::{AutoSlabs, Decision, SlabPlacement};
    use crate::{
        hit::BlockHit,
        mode::{PlacementMode, PlacementModes, PlayerId},
        resolver::PlacementContext,
        state::{SlabState, SlabType, VerticalType},
    };

    fn top_face_ctx() -> PlacementContext {
        let hit = BlockHit::new(IVec3::ZERO, Axis::PosY, vec3(0.5, 1.0, 0.5));
        PlacementContext::new(hit, vec3(0.5, 2.6, -1.0))
    }

    #[test]
    fn gate_defers_without_player() {
        let gate = SlabPlacement::new(AutoSlabs::default(), PlacementModes::default());
        let ctx = top_face_ctx();
        assert!(gate.placement_state(&ctx, SlabState::TOP).is_vanilla());
        assert_eq!(gate.can_replace(Some(SlabState::BOTTOM), &ctx), Decision::Vanilla);
        assert_eq!(
            gate.placement_state(&ctx, SlabState::TOP).or_else(|| SlabState::TOP),
            SlabState::TOP
        );
    }

    #[test]
    fn gate_follows_player_mode() {
        let modes = PlacementModes::default();
        let gate = SlabPlacement::new(AutoSlabs::default(), modes.clone());
        let player = PlayerId(42);
        let ctx = top_face_ctx().with_player(player);

        assert_eq!(
            gate.placement_state(&ctx, SlabState::TOP),
            Decision::Custom(SlabState::BOTTOM)
        );

        modes.set(player, PlacementMode::Vanilla);
        assert!(gate.placement_state(&ctx, SlabState::TOP).is_vanilla());
        assert!(gate.can_replace(None, &ctx).is_vanilla());
    }

    #[test]
    fn ungated_hooks_ignore_mode() {
        let modes = PlacementModes::new(PlacementMode::Vanilla);
        let gate = SlabPlacement::new(AutoSlabs::default(), modes);
        let north = SlabState::new(SlabType::Top, VerticalType::NorthSouth);

        assert_eq!(gate.outline_shape(SlabState::DOUBLE), Volume::FULL);
        assert_eq!(
            gate.rotate(north, Rotation::Clockwise90),
            SlabState::new(SlabType::Top, VerticalType::EastWest)
        );
        assert_eq!(gate.after_break(SlabState::DOUBLE, false).drop_count(), 1);
        assert_eq!(gate.outline_for_viewer(north, IVec3::ZERO, None), Volume::half(Axis::PosZ));
    }
}
