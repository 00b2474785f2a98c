use bevy::prelude::*;

use crate::{
    config::SlabConfig,
    events::{PlayerLeft, SessionEnded, SetPlacementMode},
    mode::PlacementModes,
    strategy::{AutoSlabs, SlabPlacement},
};

pub mod breaking;
pub mod config;
pub mod error;
pub mod events;
pub mod hit;
pub mod mode;
pub mod resolver;
pub mod shape;
pub mod state;
pub mod strategy;
pub mod transform;

/// Installs aim-driven slab placement into an App.
///
/// Inserts the `SlabConfig`, the shared `PlacementModes` table and a
/// `SlabPlacement` gate the host's block hooks can call into.
#[derive(Default)]
pub struct AutoSlabsPlugin {
    pub config: SlabConfig,
}

impl AutoSlabsPlugin {
    pub fn new(config: SlabConfig) -> Self {
        Self { config }
    }
}

impl Plugin for AutoSlabsPlugin {
    #[rustfmt::skip]
    fn build(&self, app: &mut App) {
        let modes = PlacementModes::new(self.config.default_mode);
        info!("AutoSlabs enabled, default placement mode: '{}'.", self.config.default_mode);
        app
            // initialize resources
            .insert_resource(self.config.clone())
            .insert_resource(modes.clone())
            .insert_resource(SlabPlacement::new(AutoSlabs::new(self.config.clone()), modes))
            // register messages
            .add_message::<SetPlacementMode>()
            .add_message::<PlayerLeft>()
            .add_message::<SessionEnded>()
            // mode bookkeeping
            .add_systems(Update, (
                mode::apply_mode_changes,
                mode::forget_departed_players,
                mode::clear_modes_on_session_end,
            ).chain())
        ;
    }
}
