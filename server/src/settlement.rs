use log::{debug, info};

use tilebound_shared::ReplicationChannel;

use crate::{
    error::GameError,
    events::GameEvent,
    game::{transact, Game},
    world::{GameEntity, Money, SlotIndex, TileId},
};

/// What landing on a tile did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileOutcome {
    Purchased {
        tile: TileId,
        price: Money,
    },
    /// Not enough currency to buy; nothing changed
    Declined {
        tile: TileId,
        price: Money,
        balance: Money,
    },
    TollPaid {
        tile: TileId,
        owner: SlotIndex,
        amount: Money,
    },
    OwnTile {
        tile: TileId,
    },
}

impl<C: ReplicationChannel<GameEntity>> Game<C> {
    /// Apply the tile rules for the participant in `slot` landing on `tile`.
    ///
    /// Every entity a branch touches is brought under authority before any
    /// of them is mutated; multi-entity branches apply fully or not at all.
    pub fn resolve_tile(&mut self, slot: SlotIndex, tile: TileId) -> Result<TileOutcome, GameError> {
        let participant = self.store.participant(slot)?;
        if !participant.is_occupied() {
            return Err(GameError::SlotNotOccupied { slot });
        }
        let balance = participant.balance();
        let holdings_full = participant
            .occupant()
            .is_some_and(|occupant| occupant.holdings().is_full());

        let target = self.store.tile(tile)?;
        let price = target.price();
        let toll = target.toll();

        match target.owner() {
            None => {
                if balance < price {
                    debug!(
                        "slot {} declines tile {}: balance {} < price {}",
                        slot, tile, balance, price
                    );
                    self.events.push(GameEvent::Declined { slot, tile });
                    return Ok(TileOutcome::Declined {
                        tile,
                        price,
                        balance,
                    });
                }
                if holdings_full {
                    return Err(GameError::HoldingsFull {
                        slot,
                        capacity: self.store.holdings_capacity(),
                    });
                }

                transact(
                    &mut self.authority,
                    &mut self.store,
                    &[GameEntity::Participant(slot), GameEntity::Tile(tile)],
                    |store| {
                        store.assign_tile(tile, slot)?;
                        store.occupant_mut(slot)?.debit(price);
                        Ok(())
                    },
                )?;

                info!("slot {} bought tile {} for {}", slot, tile, price);
                self.events.push(GameEvent::Purchased { slot, tile, price });
                Ok(TileOutcome::Purchased { tile, price })
            }
            Some(owner) if owner == slot => {
                debug!("slot {} landed on its own tile {}", slot, tile);
                Ok(TileOutcome::OwnTile { tile })
            }
            Some(owner) => {
                if self.store.participant(owner)?.occupant().is_none() {
                    return Err(GameError::InvalidSlotReference {
                        slot: owner,
                        slot_count: self.store.slot_count(),
                    });
                }

                transact(
                    &mut self.authority,
                    &mut self.store,
                    &[GameEntity::Participant(slot), GameEntity::Participant(owner)],
                    |store| {
                        store.occupant_mut(slot)?.debit(toll);
                        store.occupant_mut(owner)?.credit(toll);
                        Ok(())
                    },
                )?;

                info!("slot {} paid {} to slot {} on tile {}", slot, toll, owner, tile);
                self.events.push(GameEvent::TollPaid {
                    from: slot,
                    to: owner,
                    tile,
                    amount: toll,
                });
                Ok(TileOutcome::TollPaid {
                    tile,
                    owner,
                    amount: toll,
                })
            }
        }
    }
}
