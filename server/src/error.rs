use thiserror::Error;

use tilebound_shared::{ActorId, AuthorityError};

use crate::world::{SlotIndex, TileId};

/// Errors that prevent a session from being bootstrapped at all
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The board has no tiles to move across
    #[error("Board configuration is malformed: the board has no tiles")]
    EmptyBoard,

    /// The session has no participant slots
    #[error("Game configuration is malformed: slot_count must be at least 1")]
    NoSlots,

    /// The die cannot produce a roll
    #[error("Game configuration is malformed: die_faces must be at least 1")]
    NoDieFaces,
}

/// Errors raised by the fixed-capacity holdings set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HoldingsError {
    /// Every holdings slot is in use
    #[error("Holdings are full ({capacity} tiles)")]
    Full { capacity: usize },

    /// The tile is already in the holdings set
    #[error("Tile {tile_id} is already held")]
    AlreadyHeld { tile_id: TileId },
}

/// Errors surfaced by the game core's entry points.
///
/// None of these are fatal to the session: each aborts the single operation
/// that raised it, with no mutation published to other parties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A join arrived while no slot was vacant
    #[error("Cannot seat {actor}: every participant slot is taken")]
    SlotsExhausted { actor: ActorId },

    /// Write-authority over an entity the operation needed could not be obtained
    #[error("Authority transfer failed: {0}")]
    AuthorityTransferFailed(#[from] AuthorityError),

    /// A purchase was attempted by a participant whose holdings are at capacity
    #[error("Slot {slot} cannot hold more than {capacity} tiles")]
    HoldingsFull { slot: SlotIndex, capacity: usize },

    /// A slot index outside `0..slot_count`
    #[error("Slot index {slot} is out of range (slot count {slot_count})")]
    InvalidSlotReference { slot: SlotIndex, slot_count: usize },

    /// A tile id outside `0..tile_count`
    #[error("Tile id {tile} is out of range (tile count {tile_count})")]
    InvalidTileReference { tile: TileId, tile_count: usize },

    /// The operation needs an occupant but the slot is vacant or disconnected
    #[error("Slot {slot} has no connected occupant")]
    SlotNotOccupied { slot: SlotIndex },

    /// A tile was assigned while another participant already owns it
    #[error("Tile {tile} is already owned by slot {owner}")]
    TileAlreadyOwned { tile: TileId, owner: SlotIndex },

    /// A turn operation was invoked outside of an active game
    #[error("No game in progress (round {round})")]
    GameNotInProgress { round: u32 },

    /// A move was requested with a step count the die cannot produce
    #[error("A roll of {steps} is not possible on a {faces}-faced die")]
    InvalidRoll { steps: usize, faces: usize },

    /// A roll arrived for a slot whose turn it is not
    #[error("It is slot {expected}'s turn, not slot {actual}'s")]
    NotYourTurn { expected: SlotIndex, actual: SlotIndex },

    /// The lobby does not yet have enough occupied slots to start
    #[error("At least {required} players are needed to start, {present} present")]
    NotEnoughPlayers { required: usize, present: usize },
}

impl GameError {
    /// Text suitable for showing to the player who triggered the error.
    pub fn user_message(&self) -> String {
        match self {
            GameError::SlotsExhausted { .. } => "session full".to_string(),
            GameError::NotEnoughPlayers { required, present } => {
                format!("waiting for players ({}/{})", present, required)
            }
            GameError::NotYourTurn { .. } => "not your turn".to_string(),
            GameError::InvalidRoll { .. } => "that roll is not possible".to_string(),
            GameError::GameNotInProgress { .. } => "the game has not started".to_string(),
            GameError::AuthorityTransferFailed(_) => {
                "could not reach the other players, try again".to_string()
            }
            GameError::HoldingsFull { capacity, .. } => {
                format!("you cannot own more than {} tiles", capacity)
            }
            other => other.to_string(),
        }
    }

    pub(crate) fn from_holdings(slot: SlotIndex, error: HoldingsError) -> Self {
        match error {
            HoldingsError::Full { capacity } => GameError::HoldingsFull { slot, capacity },
            // unreachable while tile ownership and holdings stay consistent
            HoldingsError::AlreadyHeld { tile_id } => GameError::TileAlreadyOwned {
                tile: tile_id,
                owner: slot,
            },
        }
    }
}
