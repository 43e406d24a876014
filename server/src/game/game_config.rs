use std::default::Default;

use crate::world::Money;

/// Contains Config properties which will be used by the Game
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Number of participant slots, fixed for the session's lifetime
    pub slot_count: usize,
    /// The game ends once the round count goes past this
    pub max_rounds: u32,
    /// Capacity of each participant's holdings
    pub max_holdings: usize,
    /// Balance given on join and on game start
    pub starting_balance: Money,
    /// Credit for every completed loop of the board
    pub loop_bonus: Money,
    /// Number of faces on the die; rolls are uniform in `1..=die_faces`
    pub die_faces: usize,
    /// Occupied slots required before the game may start
    pub min_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            slot_count: 8,
            max_rounds: 20,
            max_holdings: 16,
            starting_balance: 1000,
            loop_bonus: 200,
            die_faces: 6,
            min_players: 4,
        }
    }
}
