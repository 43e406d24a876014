mod dice;
mod game;
mod game_config;

pub use dice::Dice;
pub use game::Game;
pub use game_config::GameConfig;

pub(crate) use game::transact;
