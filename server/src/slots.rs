use log::{debug, info, warn};

use tilebound_shared::{ActorId, ReplicationChannel};

use crate::{
    error::GameError,
    events::GameEvent,
    game::{transact, Game},
    world::{GameEntity, Occupant, SlotIndex},
};

impl<C: ReplicationChannel<GameEntity>> Game<C> {
    /// Seat `actor` in the first vacant slot, by ascending index.
    ///
    /// An actor that is already seated keeps its slot. Fails with
    /// [`GameError::SlotsExhausted`] when every slot is taken; the session
    /// carries on unaffected.
    pub fn join(
        &mut self,
        actor: ActorId,
        display_name: impl Into<String>,
    ) -> Result<SlotIndex, GameError> {
        if let Some(slot) = self.store.occupied_slot_of(actor) {
            debug!("{} is already seated in slot {}", actor, slot);
            return Ok(slot);
        }

        let Some(slot) = self.store.first_vacant() else {
            warn!("session full, {} could not join", actor);
            return Err(GameError::SlotsExhausted { actor });
        };

        let occupant = Occupant::new(
            actor,
            display_name.into(),
            self.config.starting_balance,
            self.store.holdings_capacity(),
        );
        transact(
            &mut self.authority,
            &mut self.store,
            &[GameEntity::Participant(slot)],
            |store| {
                store.participant_mut(slot)?.occupy(occupant);
                Ok(())
            },
        )?;

        info!(
            "join: {} ({}) -> slot {}",
            self.store.participant(slot)?.display_name(),
            actor,
            slot
        );
        self.events.push(GameEvent::Joined { slot, actor });

        Ok(slot)
    }

    /// Release the slot `actor` is connected to.
    ///
    /// While a game is in progress the slot is marked disconnected and keeps
    /// its data for settlement and reconnection. Otherwise it is reset to
    /// vacant, giving up any tiles it held. An actor with no slot is a no-op
    /// returning `Ok(None)`, so duplicate leave notifications are harmless.
    pub fn leave(
        &mut self,
        actor: ActorId,
        in_progress: bool,
    ) -> Result<Option<SlotIndex>, GameError> {
        let Some(slot) = self.store.occupied_slot_of(actor) else {
            debug!("leave for {} ignored: not seated", actor);
            return Ok(None);
        };

        if in_progress {
            transact(
                &mut self.authority,
                &mut self.store,
                &[GameEntity::Participant(slot)],
                |store| {
                    store.participant_mut(slot)?.disconnect();
                    Ok(())
                },
            )?;
            info!("leave in game: {} (slot {}) keeps its data", actor, slot);
        } else {
            let held: Vec<_> = self
                .store
                .participant(slot)?
                .occupant()
                .map(|occupant| occupant.holdings().iter().collect())
                .unwrap_or_default();
            let mut entities = vec![GameEntity::Participant(slot)];
            entities.extend(held.iter().map(|tile| GameEntity::Tile(*tile)));

            transact(&mut self.authority, &mut self.store, &entities, |store| {
                for tile in &held {
                    store.release_tile(*tile)?;
                }
                store.participant_mut(slot)?.reset();
                Ok(())
            })?;
            info!("leave in lobby: slot {} cleared", slot);
        }

        self.events.push(GameEvent::Left {
            slot,
            actor,
            retained: in_progress,
        });

        Ok(Some(slot))
    }

    /// Platform hook for an actor leaving the room; whether a game is in
    /// progress is read from the session.
    pub fn disconnect(&mut self, actor: ActorId) -> Result<Option<SlotIndex>, GameError> {
        let in_progress = self.store.session().in_progress();
        self.leave(actor, in_progress)
    }

    /// Return `actor` to the slot it left mid-game, with its data intact.
    ///
    /// An actor with no disconnected slot, or one already seated elsewhere,
    /// is a no-op returning `Ok(None)`.
    pub fn rejoin(&mut self, actor: ActorId) -> Result<Option<SlotIndex>, GameError> {
        if self.store.occupied_slot_of(actor).is_some() {
            debug!("rejoin for {} ignored: already seated", actor);
            return Ok(None);
        }
        let Some(slot) = self.store.disconnected_slot_of(actor) else {
            debug!("rejoin for {} ignored: no disconnected slot", actor);
            return Ok(None);
        };

        transact(
            &mut self.authority,
            &mut self.store,
            &[GameEntity::Participant(slot)],
            |store| {
                store.participant_mut(slot)?.reconnect();
                Ok(())
            },
        )?;

        info!("rejoin: {} -> slot {}", actor, slot);
        self.events.push(GameEvent::Rejoined { slot, actor });

        Ok(Some(slot))
    }
}
