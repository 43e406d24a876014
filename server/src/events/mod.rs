pub(crate) mod game_events;

pub use game_events::{GameEvent, GameEvents};
