use log::info;

use tilebound_shared::ReplicationChannel;

use crate::{
    error::GameError,
    events::GameEvent,
    game::{transact, Game},
    turn::TurnOutcome,
    world::{EntityStore, GameEntity, Money, SlotIndex},
};

// WealthEntry
/// Final wealth of one participant: its balance plus the purchase price of
/// every tile it owns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WealthEntry {
    pub slot: SlotIndex,
    pub display_name: String,
    pub balance: Money,
    pub tile_value: Money,
    pub wealth: Money,
}

// Standings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standings {
    /// Every occupied or disconnected participant, by ascending slot
    pub entries: Vec<WealthEntry>,
    /// Highest wealth; ties go to the lowest slot index
    pub winner: Option<WealthEntry>,
}

impl Standings {
    pub fn entry(&self, slot: SlotIndex) -> Option<&WealthEntry> {
        self.entries.iter().find(|entry| entry.slot == slot)
    }
}

/// Compute the standings without touching any entity.
///
/// A held tile outside the board is reported as
/// [`GameError::InvalidTileReference`].
pub fn settle(store: &EntityStore) -> Result<Standings, GameError> {
    let mut entries = Vec::new();
    for participant in store.participants() {
        let Some(occupant) = participant.occupant() else {
            continue;
        };
        let mut tile_value: Money = 0;
        for tile in occupant.holdings().iter() {
            tile_value += store.tile(tile)?.price();
        }
        entries.push(WealthEntry {
            slot: participant.slot(),
            display_name: occupant.display_name().to_string(),
            balance: occupant.balance(),
            tile_value,
            wealth: occupant.balance() + tile_value,
        });
    }

    let mut winner: Option<&WealthEntry> = None;
    for entry in &entries {
        if winner.map_or(true, |best| entry.wealth > best.wealth) {
            winner = Some(entry);
        }
    }
    let winner = winner.cloned();

    Ok(Standings { entries, winner })
}

impl<C: ReplicationChannel<GameEntity>> Game<C> {
    /// Whether enough connected participants are seated to start.
    pub fn can_start(&self) -> bool {
        self.store.occupied_count() >= self.config.min_players
    }

    /// Reset every occupied participant and the session, then enter the
    /// first turn.
    ///
    /// Vacant and disconnected slots are left untouched. May be called from
    /// any phase to restart.
    pub fn start_game(&mut self) -> Result<TurnOutcome, GameError> {
        let occupied = self.store.occupied_slots();
        if occupied.len() < self.config.min_players {
            return Err(GameError::NotEnoughPlayers {
                required: self.config.min_players,
                present: occupied.len(),
            });
        }

        let mut held = Vec::new();
        for slot in &occupied {
            if let Some(occupant) = self.store.participant(*slot)?.occupant() {
                held.extend(occupant.holdings().iter());
            }
        }

        let mut entities: Vec<GameEntity> = occupied
            .iter()
            .map(|slot| GameEntity::Participant(*slot))
            .collect();
        entities.extend(held.iter().map(|tile| GameEntity::Tile(*tile)));
        entities.push(GameEntity::Session);

        let starting_balance = self.config.starting_balance;
        transact(&mut self.authority, &mut self.store, &entities, |store| {
            for tile in &held {
                store.release_tile(*tile)?;
            }
            for slot in &occupied {
                store.occupant_mut(*slot)?.restart(starting_balance);
            }
            store.session_mut().start();
            Ok(())
        })?;

        info!("game started with {} participants", occupied.len());
        self.events.push(GameEvent::GameStarted {
            participants: occupied.len(),
        });

        self.begin_turn()
    }

    /// Current standings. Read-only; callable in any phase.
    pub fn settle_game(&self) -> Result<Standings, GameError> {
        settle(&self.store)
    }
}
