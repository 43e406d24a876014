use log::{debug, info, warn};

use tilebound_shared::ReplicationChannel;

use crate::{
    error::GameError,
    events::GameEvent,
    game::{transact, Game},
    lifecycle::{settle, Standings},
    settlement::TileOutcome,
    world::{GameEntity, Money, Phase, SlotIndex},
};

/// Where the session stands after a turn transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Waiting for the occupant of `slot` to roll
    AwaitingRoll { slot: SlotIndex, round: u32 },
    GameOver(Standings),
    /// No slot is occupied, so there is nobody to hand the turn to
    NoActiveParticipants,
}

/// One move across the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Movement {
    pub roll: usize,
    pub from: usize,
    pub to: usize,
    /// Number of times the move passed the last tile
    pub loops: usize,
    pub bonus: Money,
}

/// Everything one roll did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub slot: SlotIndex,
    /// `None` when the turn was ended without moving
    pub movement: Option<Movement>,
    pub settlement: Option<Result<TileOutcome, GameError>>,
    pub next: TurnOutcome,
}

impl<C: ReplicationChannel<GameEntity>> Game<C> {
    /// Enter the turn of the current slot, skipping it if nobody occupies it.
    pub fn begin_turn(&mut self) -> Result<TurnOutcome, GameError> {
        match self.phase() {
            Phase::Lobby => return Err(self.not_in_progress()),
            Phase::GameOver => return self.finish_game(),
            Phase::TurnActive => {}
        }
        if self.store.occupied_count() == 0 {
            return Ok(self.no_active_participants());
        }

        let slot = self.current_turn_slot();
        if self.store.participant(slot)?.is_occupied() {
            return Ok(self.await_roll(slot));
        }

        debug!("slot {} is not occupied, skipping", slot);
        self.events.push(GameEvent::TurnSkipped { slot });
        self.end_turn()
    }

    /// Hand the turn to the next occupied slot in ascending order, counting
    /// a round each time slot 0 is passed.
    ///
    /// Walks at most one full cycle of slots. Ends the game once the round
    /// count passes the maximum.
    pub fn end_turn(&mut self) -> Result<TurnOutcome, GameError> {
        match self.phase() {
            Phase::Lobby => return Err(self.not_in_progress()),
            Phase::GameOver => return self.finish_game(),
            Phase::TurnActive => {}
        }
        if self.store.occupied_count() == 0 {
            return Ok(self.no_active_participants());
        }

        let slot_count = self.store.slot_count();
        let transitions = transact(
            &mut self.authority,
            &mut self.store,
            &[GameEntity::Session],
            |store| {
                let mut transitions = Vec::new();
                for _ in 0..slot_count {
                    let session = store.session_mut();
                    if session.advance_turn(slot_count) {
                        transitions.push(GameEvent::RoundAdvanced {
                            round: session.round_count(),
                        });
                    }
                    if session.is_over() {
                        break;
                    }
                    let slot = session.current_turn_slot();
                    if store.participant(slot)?.is_occupied() {
                        break;
                    }
                    transitions.push(GameEvent::TurnSkipped { slot });
                }
                Ok(transitions)
            },
        )?;

        for event in transitions {
            if let GameEvent::RoundAdvanced { round } = event {
                debug!("round {} begins", round);
            }
            self.events.push(event);
        }

        if self.store.session().is_over() {
            return self.finish_game();
        }
        let slot = self.current_turn_slot();
        Ok(self.await_roll(slot))
    }

    /// Roll the die for `slot` and play out the move.
    ///
    /// If the slot lost its occupant since its turn began, the turn is ended
    /// without moving.
    pub fn roll_and_advance(&mut self, slot: SlotIndex) -> Result<TurnReport, GameError> {
        self.check_turn(slot)?;

        if !self.store.participant(slot)?.is_occupied() {
            debug!("slot {} rolled after leaving, ending its turn", slot);
            let next = self.end_turn()?;
            return Ok(TurnReport {
                slot,
                movement: None,
                settlement: None,
                next,
            });
        }

        let roll = self.dice.roll();
        self.advance_by(slot, roll)
    }

    /// Move `slot` forward by `steps`, resolve the landed tile and end the
    /// turn.
    ///
    /// The move and any loop bonus are committed before the tile is resolved.
    /// A failed resolution is reported in the returned [`TurnReport`] and as
    /// a [`GameEvent::SettlementAborted`]; the turn still ends.
    ///
    /// `steps` must be a value the die can show, `1..=faces`.
    pub fn advance_by(&mut self, slot: SlotIndex, steps: usize) -> Result<TurnReport, GameError> {
        self.check_turn(slot)?;
        let faces = self.dice.faces();
        if !(1..=faces).contains(&steps) {
            return Err(GameError::InvalidRoll { steps, faces });
        }
        if !self.store.participant(slot)?.is_occupied() {
            return Err(GameError::SlotNotOccupied { slot });
        }

        let tile_count = self.store.tile_count();
        let loop_bonus = self.config.loop_bonus;
        let movement = transact(
            &mut self.authority,
            &mut self.store,
            &[GameEntity::Participant(slot)],
            |store| {
                let occupant = store.occupant_mut(slot)?;
                let from = occupant.position();
                let travelled = from + steps;
                let loops = travelled / tile_count;
                let to = travelled % tile_count;
                let bonus = loop_bonus * loops as Money;

                occupant.set_position(to);
                if bonus != 0 {
                    occupant.credit(bonus);
                }

                Ok(Movement {
                    roll: steps,
                    from,
                    to,
                    loops,
                    bonus,
                })
            },
        )?;

        debug!(
            "slot {} rolled {}: {} -> {}",
            slot, movement.roll, movement.from, movement.to
        );
        self.events.push(GameEvent::Rolled {
            slot,
            roll: movement.roll,
            from: movement.from,
            to: movement.to,
        });
        if movement.loops > 0 {
            self.events.push(GameEvent::LoopBonus {
                slot,
                amount: movement.bonus,
            });
        }

        let settlement = self.resolve_tile(slot, movement.to);
        if let Err(error) = &settlement {
            warn!(
                "settlement of tile {} for slot {} aborted: {}",
                movement.to, slot, error
            );
            self.events.push(GameEvent::SettlementAborted {
                slot,
                tile: movement.to,
                error: error.clone(),
            });
        }

        let next = self.end_turn()?;

        Ok(TurnReport {
            slot,
            movement: Some(movement),
            settlement: Some(settlement),
            next,
        })
    }

    // Private

    fn check_turn(&self, slot: SlotIndex) -> Result<(), GameError> {
        if self.phase() != Phase::TurnActive {
            return Err(self.not_in_progress());
        }
        let expected = self.current_turn_slot();
        if slot != expected {
            return Err(GameError::NotYourTurn {
                expected,
                actual: slot,
            });
        }
        Ok(())
    }

    fn not_in_progress(&self) -> GameError {
        GameError::GameNotInProgress {
            round: self.store.session().round_count(),
        }
    }

    fn await_roll(&mut self, slot: SlotIndex) -> TurnOutcome {
        let round = self.store.session().round_count();
        self.events.push(GameEvent::TurnStarted { slot, round });
        TurnOutcome::AwaitingRoll { slot, round }
    }

    fn no_active_participants(&mut self) -> TurnOutcome {
        warn!("no occupied slot to hand the turn to");
        self.events.push(GameEvent::NoActiveParticipants);
        TurnOutcome::NoActiveParticipants
    }

    fn finish_game(&mut self) -> Result<TurnOutcome, GameError> {
        let standings = settle(&self.store)?;
        match &standings.winner {
            Some(winner) => info!(
                "game over: slot {} ({}) wins with {}",
                winner.slot, winner.display_name, winner.wealth
            ),
            None => info!("game over with no participants left"),
        }
        self.events.push(GameEvent::GameOver(standings.clone()));
        Ok(TurnOutcome::GameOver(standings))
    }
}
