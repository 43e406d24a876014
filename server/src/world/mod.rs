mod entity;
mod entity_store;
mod holdings;
mod participant;
mod session;
mod tile;

pub use entity::GameEntity;
pub use entity_store::{EntityStore, StoreSnapshot};
pub use holdings::Holdings;
pub use participant::{Occupant, Participant, SlotState};
pub use session::{Phase, Session};
pub use tile::{Tile, TileSpec};

/// Index of a participant slot, `0..slot_count`.
pub type SlotIndex = usize;
/// Identity of a tile; equal to its position on the board.
pub type TileId = usize;
/// Signed currency amount. Balances may go negative.
pub type Money = i64;
