use tilebound_shared::{FieldSet, FieldValue, Replicate};

use crate::world::SlotIndex;

/// Stage of a session, derived from its round count.
///
/// Advancing the round is not a phase of its own: it happens inside
/// `Game::end_turn` when the turn wraps past the last slot, and is announced
/// with `GameEvent::RoundAdvanced` before the next turn starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Round 0, players are gathering
    Lobby,
    TurnActive,
    /// The round count went past the configured maximum
    GameOver,
}

// Session
/// Turn and round state of one game instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    current_turn_slot: SlotIndex,
    round_count: u32,
    max_rounds: u32,
}

impl Session {
    pub(crate) fn new(max_rounds: u32) -> Self {
        Self {
            current_turn_slot: 0,
            round_count: 0,
            max_rounds,
        }
    }

    pub fn current_turn_slot(&self) -> SlotIndex {
        self.current_turn_slot
    }

    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn phase(&self) -> Phase {
        if self.round_count == 0 {
            Phase::Lobby
        } else if self.round_count > self.max_rounds {
            Phase::GameOver
        } else {
            Phase::TurnActive
        }
    }

    pub fn is_lobby(&self) -> bool {
        self.round_count == 0
    }

    pub fn in_progress(&self) -> bool {
        self.round_count > 0
    }

    pub fn is_over(&self) -> bool {
        self.phase() == Phase::GameOver
    }

    pub(crate) fn start(&mut self) {
        self.round_count = 1;
        self.current_turn_slot = 0;
    }

    /// Moves the turn to the next slot index, wrapping to slot 0 and
    /// counting a new round past the last slot. Returns whether it wrapped.
    pub(crate) fn advance_turn(&mut self, slot_count: usize) -> bool {
        self.current_turn_slot += 1;
        if self.current_turn_slot >= slot_count {
            self.current_turn_slot = 0;
            self.round_count += 1;
            return true;
        }
        false
    }
}

impl Replicate for Session {
    fn fields(&self) -> FieldSet {
        FieldSet::new()
            .with("current_turn_slot", FieldValue::Int(self.current_turn_slot as i64))
            .with("round_count", FieldValue::Int(i64::from(self.round_count)))
    }
}
