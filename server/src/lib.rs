//! # Tilebound Server
//! The authoritative core of a turn-based property board game whose state
//! is replicated between parties. Participants, tiles and the session are
//! only ever mutated under write-authority obtained from a
//! [`ReplicationChannel`](shared::ReplicationChannel), and published back to
//! it once per logical unit of change.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub mod shared {
    pub use tilebound_shared::{
        ActorId, AuthorityError, AuthorityGrant, AuthorityManager, AuthorityToken,
        AuthorityTransfer, ChannelError, FieldSet, FieldValue, LocalChannel, PartyId,
        Publication, Replicate, ReplicationChannel,
    };
}

mod error;
mod events;
mod game;
mod lifecycle;
mod settlement;
mod slots;
mod turn;
mod world;

pub use error::{ConfigError, GameError, HoldingsError};
pub use events::{GameEvent, GameEvents};
pub use game::{Dice, Game, GameConfig};
pub use lifecycle::{settle, Standings, WealthEntry};
pub use settlement::TileOutcome;
pub use turn::{Movement, TurnOutcome, TurnReport};
pub use world::{
    EntityStore, GameEntity, Holdings, Money, Occupant, Participant, Phase, Session, SlotIndex,
    SlotState, StoreSnapshot, Tile, TileId, TileSpec,
};
