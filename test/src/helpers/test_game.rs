use tilebound_server::{Dice, Game, GameConfig, GameEntity, TileSpec};
use tilebound_shared::{ActorId, LocalChannel, PartyId};

use super::BoardBuilder;

/// A game running over an in-process channel
pub type TestGame = Game<LocalChannel<GameEntity>>;

pub const LOCAL_PARTY: PartyId = PartyId::new(1);
pub const REMOTE_PARTY: PartyId = PartyId::new(2);

/// Install a test logger once per test binary
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Actor id used for the `index`th player added through the builder
pub fn actor(index: u64) -> ActorId {
    ActorId::new(100 + index)
}

/// Fluent builder for test games
///
/// Defaults to the standard rules with a start gate of one player, a ten
/// tile board and a seeded die.
pub struct TestGameBuilder {
    config: GameConfig,
    board: Vec<TileSpec>,
    seed: u64,
    players: usize,
}

impl TestGameBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig {
                min_players: 1,
                ..GameConfig::default()
            },
            board: BoardBuilder::default().build(),
            seed: 42,
            players: 0,
        }
    }

    pub fn slots(mut self, slot_count: usize) -> Self {
        self.config.slot_count = slot_count;
        self
    }

    pub fn max_rounds(mut self, max_rounds: u32) -> Self {
        self.config.max_rounds = max_rounds;
        self
    }

    pub fn max_holdings(mut self, max_holdings: usize) -> Self {
        self.config.max_holdings = max_holdings;
        self
    }

    pub fn min_players(mut self, min_players: usize) -> Self {
        self.config.min_players = min_players;
        self
    }

    pub fn board(mut self, board: Vec<TileSpec>) -> Self {
        self.board = board;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Join `players` actors, in order, once the game is built
    pub fn players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    pub fn build(self) -> TestGame {
        init_logger();

        let faces = self.config.die_faces;
        let mut game = Game::new(self.config, self.board, LocalChannel::new(LOCAL_PARTY))
            .expect("test game configuration is valid")
            .with_dice(Dice::with_seed(faces, self.seed));

        for index in 0..self.players as u64 {
            game.join(actor(index), format!("player-{}", index))
                .expect("test game has room for every player");
        }

        game
    }
}

impl Default for TestGameBuilder {
    fn default() -> Self {
        Self::new()
    }
}
