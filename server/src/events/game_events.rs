use std::mem;

use log::warn;

use tilebound_shared::ActorId;

use crate::{
    error::GameError,
    lifecycle::Standings,
    world::{Money, SlotIndex, TileId},
};

/// Something the presentation layer may want to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Joined {
        slot: SlotIndex,
        actor: ActorId,
    },
    /// `retained` is true when the slot kept its data as disconnected
    Left {
        slot: SlotIndex,
        actor: ActorId,
        retained: bool,
    },
    Rejoined {
        slot: SlotIndex,
        actor: ActorId,
    },
    GameStarted {
        participants: usize,
    },
    TurnStarted {
        slot: SlotIndex,
        round: u32,
    },
    TurnSkipped {
        slot: SlotIndex,
    },
    RoundAdvanced {
        round: u32,
    },
    Rolled {
        slot: SlotIndex,
        roll: usize,
        from: usize,
        to: usize,
    },
    LoopBonus {
        slot: SlotIndex,
        amount: Money,
    },
    Purchased {
        slot: SlotIndex,
        tile: TileId,
        price: Money,
    },
    Declined {
        slot: SlotIndex,
        tile: TileId,
    },
    TollPaid {
        from: SlotIndex,
        to: SlotIndex,
        tile: TileId,
        amount: Money,
    },
    SettlementAborted {
        slot: SlotIndex,
        tile: TileId,
        error: GameError,
    },
    NoActiveParticipants,
    GameOver(Standings),
}

/// Queue of [`GameEvent`]s in the order they happened.
pub struct GameEvents {
    events: Vec<GameEvent>,
}

impl GameEvents {
    pub(crate) fn new() -> Self {
        Self { events: Vec::new() }
    }

    // Public

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    pub fn take(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    // Crate-public

    pub(crate) fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

impl Drop for GameEvents {
    fn drop(&mut self) {
        let aborted = self
            .events
            .iter()
            .filter(|event| matches!(event, GameEvent::SettlementAborted { .. }))
            .count();
        if aborted > 0 {
            warn!("Dropped {} unread SettlementAborted event(s)! Make sure to handle these through `Game::take_events()`.", aborted);
        }
    }
}
