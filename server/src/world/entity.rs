use crate::world::{SlotIndex, TileId};

/// Key of a replicated entity of the game, the unit write-authority is
/// granted over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameEntity {
    Participant(SlotIndex),
    Tile(TileId),
    Session,
}
