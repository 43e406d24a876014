use tilebound_shared::{ActorId, FieldSet, Replicate};

use crate::{
    error::{ConfigError, GameError},
    game::GameConfig,
    world::{GameEntity, Occupant, Participant, Session, SlotIndex, Tile, TileId, TileSpec},
};

/// Fixed-capacity arrays of participants and tiles plus the session
/// singleton, all indexed by their stable identity.
///
/// Nothing is ever added or removed after bootstrap. Mutation goes through
/// crate-private setters; the ones that touch tile ownership keep tiles and
/// holdings consistent with each other.
pub struct EntityStore {
    participants: Vec<Participant>,
    tiles: Vec<Tile>,
    session: Session,
    holdings_capacity: usize,
}

impl EntityStore {
    pub fn new(config: &GameConfig, board: Vec<TileSpec>) -> Result<Self, ConfigError> {
        if config.slot_count == 0 {
            return Err(ConfigError::NoSlots);
        }
        if board.is_empty() {
            return Err(ConfigError::EmptyBoard);
        }

        let participants = (0..config.slot_count).map(Participant::vacant).collect();
        let tiles = board
            .into_iter()
            .enumerate()
            .map(|(id, spec)| Tile::from_spec(id, spec))
            .collect();

        Ok(Self {
            participants,
            tiles,
            session: Session::new(config.max_rounds),
            holdings_capacity: config.max_holdings,
        })
    }

    pub fn slot_count(&self) -> usize {
        self.participants.len()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn holdings_capacity(&self) -> usize {
        self.holdings_capacity
    }

    // Participants

    pub fn participant(&self, slot: SlotIndex) -> Result<&Participant, GameError> {
        let slot_count = self.slot_count();
        self.participants
            .get(slot)
            .ok_or(GameError::InvalidSlotReference { slot, slot_count })
    }

    pub(crate) fn participant_mut(&mut self, slot: SlotIndex) -> Result<&mut Participant, GameError> {
        let slot_count = self.slot_count();
        self.participants
            .get_mut(slot)
            .ok_or(GameError::InvalidSlotReference { slot, slot_count })
    }

    /// The data of an occupied or disconnected slot.
    pub(crate) fn occupant_mut(&mut self, slot: SlotIndex) -> Result<&mut Occupant, GameError> {
        self.participant_mut(slot)?
            .occupant_mut()
            .ok_or(GameError::SlotNotOccupied { slot })
    }

    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    pub fn first_vacant(&self) -> Option<SlotIndex> {
        self.participants
            .iter()
            .position(Participant::is_vacant)
    }

    /// The slot `actor` is connected to.
    pub fn occupied_slot_of(&self, actor: ActorId) -> Option<SlotIndex> {
        self.participants
            .iter()
            .position(|participant| participant.connected_actor() == Some(actor))
    }

    /// The slot `actor` left behind mid-game.
    pub fn disconnected_slot_of(&self, actor: ActorId) -> Option<SlotIndex> {
        self.participants.iter().position(|participant| {
            participant.is_disconnected()
                && participant.occupant().map(Occupant::actor) == Some(actor)
        })
    }

    pub fn occupied_slots(&self) -> Vec<SlotIndex> {
        self.participants
            .iter()
            .filter(|participant| participant.is_occupied())
            .map(Participant::slot)
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.participants
            .iter()
            .filter(|participant| participant.is_occupied())
            .count()
    }

    // Tiles

    pub fn tile(&self, tile: TileId) -> Result<&Tile, GameError> {
        let tile_count = self.tile_count();
        self.tiles
            .get(tile)
            .ok_or(GameError::InvalidTileReference { tile, tile_count })
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Record `slot` as the owner of `tile`, on both sides.
    ///
    /// Nothing changes unless the tile is unowned and the slot's holdings
    /// have room.
    pub(crate) fn assign_tile(&mut self, tile: TileId, slot: SlotIndex) -> Result<(), GameError> {
        if let Some(owner) = self.tile(tile)?.owner() {
            return Err(GameError::TileAlreadyOwned { tile, owner });
        }

        self.occupant_mut(slot)?
            .holdings_mut()
            .insert(tile)
            .map_err(|error| GameError::from_holdings(slot, error))?;

        let tile_count = self.tile_count();
        self.tiles
            .get_mut(tile)
            .ok_or(GameError::InvalidTileReference { tile, tile_count })?
            .set_owner(Some(slot));

        Ok(())
    }

    /// Clear the owner of `tile`, on both sides. Returns the previous owner.
    pub(crate) fn release_tile(&mut self, tile: TileId) -> Result<Option<SlotIndex>, GameError> {
        let Some(owner) = self.tile(tile)?.owner() else {
            return Ok(None);
        };

        if let Some(occupant) = self.participant_mut(owner)?.occupant_mut() {
            occupant.holdings_mut().remove(tile);
        }
        if let Some(entry) = self.tiles.get_mut(tile) {
            entry.set_owner(None);
        }

        Ok(Some(owner))
    }

    // Session

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    // Replication

    /// Current field set of `entity`, or `None` for an out-of-range reference.
    pub fn fields(&self, entity: &GameEntity) -> Option<FieldSet> {
        match entity {
            GameEntity::Participant(slot) => self.participants.get(*slot).map(Replicate::fields),
            GameEntity::Tile(tile) => self.tiles.get(*tile).map(Replicate::fields),
            GameEntity::Session => Some(self.session.fields()),
        }
    }

    /// Copy the local state of `entities` so a failed unit of mutations can
    /// be undone.
    pub fn capture(&self, entities: &[GameEntity]) -> Result<StoreSnapshot, GameError> {
        let mut snapshot = StoreSnapshot::default();
        for entity in entities {
            match entity {
                GameEntity::Participant(slot) => {
                    snapshot.participants.push(self.participant(*slot)?.clone())
                }
                GameEntity::Tile(tile) => snapshot.tiles.push(self.tile(*tile)?.clone()),
                GameEntity::Session => snapshot.session = Some(self.session.clone()),
            }
        }
        Ok(snapshot)
    }

    pub(crate) fn restore(&mut self, snapshot: StoreSnapshot) {
        for participant in snapshot.participants {
            let slot = participant.slot();
            if let Some(entry) = self.participants.get_mut(slot) {
                *entry = participant;
            }
        }
        for tile in snapshot.tiles {
            let id = tile.id();
            if let Some(entry) = self.tiles.get_mut(id) {
                *entry = tile;
            }
        }
        if let Some(session) = snapshot.session {
            self.session = session;
        }
    }

    // Invariants

    /// Every owned tile appears in exactly its owner's holdings, and every
    /// held tile names the holder as owner.
    pub fn is_ownership_consistent(&self) -> bool {
        let tiles_agree = self.tiles.iter().all(|tile| {
            let holders: Vec<SlotIndex> = self
                .participants
                .iter()
                .filter(|participant| {
                    participant
                        .occupant()
                        .is_some_and(|occupant| occupant.holdings().contains(tile.id()))
                })
                .map(Participant::slot)
                .collect();
            match tile.owner() {
                None => holders.is_empty(),
                Some(owner) => holders == vec![owner],
            }
        });

        let holdings_agree = self.participants.iter().all(|participant| {
            participant.occupant().map_or(true, |occupant| {
                occupant.holdings().iter().all(|tile| {
                    self.tiles
                        .get(tile)
                        .is_some_and(|entry| entry.owner() == Some(participant.slot()))
                })
            })
        });

        tiles_agree && holdings_agree
    }

    pub fn positions_in_bounds(&self) -> bool {
        let tile_count = self.tile_count();
        self.participants
            .iter()
            .filter_map(Participant::occupant)
            .all(|occupant| occupant.position() < tile_count)
    }
}

/// Local copies of selected entities, taken before a unit of mutations.
#[derive(Clone, Debug, Default)]
pub struct StoreSnapshot {
    participants: Vec<Participant>,
    tiles: Vec<Tile>,
    session: Option<Session>,
}
