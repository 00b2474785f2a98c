use bevy::prelude::*;

use crate::{
    error::SlabError,
    mode::{PlacementMode, PlayerId},
};

/// A player changed their placement mode, e.g. through a
/// settings command or a keybind.
#[derive(Message, Copy, Clone, Debug)]
pub struct SetPlacementMode {
    pub player: PlayerId,

    /// The mode to switch to. None toggles the current mode.
    pub mode: Option<PlacementMode>,
}

impl SetPlacementMode {
    /// Build from the argument of a settings command.
    /// An empty argument or "toggle" flips the current mode.
    pub fn from_command(player: PlayerId, arg: &str) -> Result<Self, SlabError> {
        let mode = match arg.trim() {
            "" | "toggle" => None,
            other => Some(other.parse()?),
        };
        Ok(Self { player, mode })
    }
}

#[derive(Message, Copy, Clone, Debug)]
pub struct PlayerLeft {
    pub player: PlayerId,
}

/// The world or session closed, every player's mode is dropped.
#[derive(Message, Copy, Clone, Debug)]
pub struct SessionEnded;
