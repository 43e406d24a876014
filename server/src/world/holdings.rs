use crate::{error::HoldingsError, world::TileId};

/// The tiles a participant owns, kept as a fixed-capacity slot array.
///
/// Entries are pairwise distinct. Insertion takes the first empty slot and
/// fails once every slot is in use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Holdings {
    slots: Vec<Option<TileId>>,
}

impl Holdings {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn contains(&self, tile: TileId) -> bool {
        self.slots.contains(&Some(tile))
    }

    /// Inserts `tile` into the first empty slot and returns that slot's index.
    pub fn insert(&mut self, tile: TileId) -> Result<usize, HoldingsError> {
        if self.contains(tile) {
            return Err(HoldingsError::AlreadyHeld { tile_id: tile });
        }

        let Some(index) = self.slots.iter().position(Option::is_none) else {
            return Err(HoldingsError::Full {
                capacity: self.capacity(),
            });
        };
        self.slots[index] = Some(tile);

        Ok(index)
    }

    /// Returns whether `tile` was held.
    pub fn remove(&mut self, tile: TileId) -> bool {
        match self.slots.iter_mut().find(|slot| **slot == Some(tile)) {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
    }

    /// Held tiles in slot order.
    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }

    pub fn slots(&self) -> &[Option<TileId>] {
        &self.slots
    }
}
