use bevy::prelude::*;

use crate::{
    hit::BlockHit,
    shape::targeted_half,
    state::{SlabState, SlabType},
};

/// What is left behind when a slab is broken, and what it drops.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct BreakOutcome {
    /// The slab that stays in the world, if any.
    pub remaining: Option<SlabState>,

    /// The state handed to the host's drop logic.
    pub dropped: SlabState,
}

impl BreakOutcome {
    pub const fn drop_count(&self) -> u32 {
        self.dropped.drop_count()
    }
}

/// The state passed on to the host's drop logic after a break.
///
/// Sneaking breaks the whole block as it is, so a double drops both
/// halves. Otherwise a single slab's worth is dropped.
pub const fn after_break(state: SlabState, sneaking: bool) -> SlabState {
    if sneaking {
        state
    } else {
        state.with_kind(SlabType::Top)
    }
}

/// Break a slab.
///
/// A player who isn't sneaking only removes the half of a double slab
/// they are looking at. Without a hit, the whole block goes.
pub fn break_slab(state: SlabState, sneaking: bool, hit: Option<&BlockHit>) -> BreakOutcome {
    if !sneaking && let Some(side) = hit.and_then(|hit| targeted_half(state, hit)) {
        let remaining = SlabState::half(side.invert());
        debug!("Broke the {} half of {state:?}, {remaining:?} remains.", side.as_dir_str());
        return BreakOutcome {
            remaining: Some(remaining),
            dropped: after_break(state, false),
        };
    }

    BreakOutcome {
        remaining: None,
        dropped: if state.is_double() {
            state
        } else {
            after_break(state, sneaking)
        },
    }
}
