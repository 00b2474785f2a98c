use std::{fmt, str::FromStr, sync::Arc};

use bevy::prelude::*;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use serde::Deserialize;

use crate::{
    error::SlabError,
    events::{PlayerLeft, SessionEnded, SetPlacementMode},
};

/// Identifies a player to the placement mode table.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct PlayerId(pub u64);

/// Whether a player's slab placements go through the resolver
/// or are left to the host's built-in behavior.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    #[default]
    Auto,
    Vanilla,
}

impl PlacementMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Auto => Self::Vanilla,
            Self::Vanilla => Self::Auto,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Vanilla => "vanilla",
        }
    }
}

impl FromStr for PlacementMode {
    type Err = SlabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "autoslabs" | "on" => Ok(Self::Auto),
            "vanilla" | "off" => Ok(Self::Vanilla),
            _ => Err(SlabError::UnknownMode(s.to_owned())),
        }
    }
}

impl fmt::Display for PlacementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-player placement modes for the current session.
///
/// Cloning yields another handle to the same table, so the
/// placement gate and the ECS resource always agree.
#[derive(Resource, Clone, Default)]
pub struct PlacementModes(Arc<Inner>);

#[derive(Default)]
struct Inner {
    fallback: PlacementMode,
    modes: RwLock<FxHashMap<PlayerId, PlacementMode>>,
}

impl PlacementModes {
    /// An empty table where unknown players resolve to `fallback`.
    pub fn new(fallback: PlacementMode) -> Self {
        Self(Arc::new(Inner {
            fallback,
            modes: RwLock::default(),
        }))
    }

    /// The player's mode, or the fallback if they never picked one.
    pub fn get(&self, player: PlayerId) -> PlacementMode {
        self.0
            .modes
            .read()
            .get(&player)
            .copied()
            .unwrap_or(self.0.fallback)
    }

    /// Set the player's mode, returning the previous one.
    pub fn set(&self, player: PlayerId, mode: PlacementMode) -> PlacementMode {
        self.0
            .modes
            .write()
            .insert(player, mode)
            .unwrap_or(self.0.fallback)
    }

    /// Flip the player's mode and return the new one.
    pub fn toggle(&self, player: PlayerId) -> PlacementMode {
        let mut modes = self.0.modes.write();
        let mode = modes.entry(player).or_insert(self.0.fallback);
        *mode = mode.toggled();
        *mode
    }

    /// Drop the player's entry, e.g. when they leave.
    pub fn forget(&self, player: PlayerId) -> Option<PlacementMode> {
        self.0.modes.write().remove(&player)
    }

    /// Drop every entry at the end of a session.
    pub fn clear(&self) {
        self.0.modes.write().clear();
    }

    pub fn len(&self) -> usize {
        self.0.modes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn fallback(&self) -> PlacementMode {
        self.0.fallback
    }
}

pub fn apply_mode_changes(mut evs: MessageReader<SetPlacementMode>, modes: Res<PlacementModes>) {
    for ev in evs.read() {
        let mode = match ev.mode {
            Some(mode) => {
                modes.set(ev.player, mode);
                mode
            }
            None => modes.toggle(ev.player),
        };
        info!("Placement mode for player {:?} set to '{mode}'.", ev.player);
    }
}

pub fn forget_departed_players(mut evs: MessageReader<PlayerLeft>, modes: Res<PlacementModes>) {
    for ev in evs.read() {
        if modes.forget(ev.player).is_some() {
            debug!("Dropped placement mode of player {:?}.", ev.player);
        }
    }
}

pub fn clear_modes_on_session_end(mut evs: MessageReader<SessionEnded>, modes: Res<PlacementModes>) {
    if evs.read().count() > 0 {
        info!("Session ended, clearing {} placement modes.", modes.len());
        modes.clear();
    }
}
