use log::info;

use tilebound_shared::{AuthorityManager, ReplicationChannel};

use crate::{
    error::{ConfigError, GameError},
    events::{GameEvent, GameEvents},
    game::{Dice, GameConfig},
    world::{
        EntityStore, GameEntity, Participant, Phase, Session, SlotIndex, Tile, TileId, TileSpec,
    },
};

/// The authoritative core of one game session.
///
/// Owns the entity store, the authority manager wrapping the replication
/// channel, and the session context. Entry points for the presentation
/// layer live in `slots`, `turn`, `settlement` and `lifecycle`.
pub struct Game<C: ReplicationChannel<GameEntity>> {
    pub(crate) config: GameConfig,
    pub(crate) store: EntityStore,
    pub(crate) authority: AuthorityManager<GameEntity, C>,
    pub(crate) dice: Dice,
    pub(crate) events: GameEvents,
}

impl<C: ReplicationChannel<GameEntity>> Game<C> {
    /// Bootstrap a session with every slot vacant.
    ///
    /// A malformed configuration is the only thing that stops a session
    /// from starting.
    pub fn new(config: GameConfig, board: Vec<TileSpec>, channel: C) -> Result<Self, ConfigError> {
        if config.die_faces == 0 {
            return Err(ConfigError::NoDieFaces);
        }
        let store = EntityStore::new(&config, board)?;
        let dice = Dice::new(config.die_faces);

        info!(
            "session bootstrapped with {} slots and {} tiles",
            store.slot_count(),
            store.tile_count()
        );

        Ok(Self {
            config,
            store,
            authority: AuthorityManager::new(channel),
            dice,
            events: GameEvents::new(),
        })
    }

    /// Replace the die, e.g. with a seeded one for a reproducible session.
    pub fn with_dice(mut self, dice: Dice) -> Self {
        self.dice = dice;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn session(&self) -> &Session {
        self.store.session()
    }

    pub fn phase(&self) -> Phase {
        self.store.session().phase()
    }

    pub fn is_lobby(&self) -> bool {
        self.store.session().is_lobby()
    }

    pub fn current_turn_slot(&self) -> SlotIndex {
        self.store.session().current_turn_slot()
    }

    pub fn participant(&self, slot: SlotIndex) -> Result<&Participant, GameError> {
        self.store.participant(slot)
    }

    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.store.participants()
    }

    pub fn tile(&self, tile: TileId) -> Result<&Tile, GameError> {
        self.store.tile(tile)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.store.tiles()
    }

    pub fn events(&self) -> &GameEvents {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.events.take()
    }

    pub fn authority(&self) -> &AuthorityManager<GameEntity, C> {
        &self.authority
    }

    pub fn channel(&self) -> &C {
        self.authority.channel()
    }

    pub fn channel_mut(&mut self) -> &mut C {
        self.authority.channel_mut()
    }
}

/// Run `mutate` as one unit under write-authority over `entities`.
///
/// Authority over every entity is acquired before anything is touched, so a
/// failed transfer leaves the store exactly as it was. If `mutate` fails, or
/// authority is lost before the commit, the local copies of `entities` are
/// restored and nothing is published. `mutate` must only touch `entities`.
pub(crate) fn transact<C, T, F>(
    authority: &mut AuthorityManager<GameEntity, C>,
    store: &mut EntityStore,
    entities: &[GameEntity],
    mutate: F,
) -> Result<T, GameError>
where
    C: ReplicationChannel<GameEntity>,
    F: FnOnce(&mut EntityStore) -> Result<T, GameError>,
{
    let snapshot = store.capture(entities)?;
    let grant = authority.ensure_authority_all(entities)?;

    let value = match mutate(store) {
        Ok(value) => value,
        Err(error) => {
            store.restore(snapshot);
            grant.abandon();
            return Err(error);
        }
    };

    let committed = {
        let view: &EntityStore = store;
        authority.commit_all(grant, |entity| view.fields(entity).unwrap_or_default())
    };
    if let Err(error) = committed {
        store.restore(snapshot);
        return Err(error.into());
    }

    Ok(value)
}
