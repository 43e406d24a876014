//! INTEGRATION TESTS: starting, restarting and settling a game

use tilebound_server::{GameError, GameEvent, Phase, TurnOutcome};
use tilebound_test::{actor, assert_ownership_consistent, BoardBuilder, TestGameBuilder};

#[test]
fn settlement_right_after_start_is_starting_balance() {
    let mut game = TestGameBuilder::new().players(5).build();
    game.start_game().unwrap();

    let standings = game.settle_game().unwrap();

    assert_eq!(standings.entries.len(), 5);
    assert!(standings.entries.iter().all(|entry| entry.wealth == 1000));
}

#[test]
fn tie_goes_to_the_lower_slot() {
    let board = BoardBuilder::new()
        .tile("start", 0, 0)
        .tile("gate", 500, 0)
        .tile("bridge", 500, 0)
        .build();
    let mut game = TestGameBuilder::new().board(board).players(3).build();
    game.start_game().unwrap();
    game.resolve_tile(1, 1).unwrap();
    game.resolve_tile(2, 2).unwrap();

    let standings = game.settle_game().unwrap();

    // 500 in hand plus a 500 tile, against an untouched 1000
    assert_eq!(standings.entry(1).unwrap().wealth, 1000);
    assert_eq!(standings.winner.unwrap().slot, 0);
}

#[test]
fn tie_at_1500_goes_to_the_lower_slot() {
    let board = BoardBuilder::new()
        .tile("start", 0, 0)
        .tile("toll road", 1000, 500)
        .tile("canal", 1000, 500)
        .build();
    let mut game = TestGameBuilder::new().board(board).players(4).build();
    game.start_game().unwrap();
    // slots 1 and 3 each buy a tile and collect one toll
    game.resolve_tile(1, 1).unwrap();
    game.resolve_tile(3, 2).unwrap();
    game.resolve_tile(0, 1).unwrap();
    game.resolve_tile(2, 2).unwrap();

    let standings = game.settle_game().unwrap();

    assert_eq!(standings.entry(1).unwrap().wealth, 1500);
    assert_eq!(standings.entry(3).unwrap().wealth, 1500);
    assert_eq!(standings.winner.unwrap().slot, 1);
}

#[test]
fn disconnected_participants_still_count() {
    let board = BoardBuilder::new().tile("start", 0, 0).tile("mine", 100, 900).build();
    let mut game = TestGameBuilder::new().board(board).players(2).build();
    game.start_game().unwrap();
    game.resolve_tile(1, 1).unwrap();
    game.resolve_tile(0, 1).unwrap();
    game.disconnect(actor(1)).unwrap();

    let standings = game.settle_game().unwrap();

    assert_eq!(standings.entry(1).unwrap().wealth, 1900);
    assert_eq!(standings.winner.unwrap().slot, 1);
}

#[test]
fn start_gate_counts_connected_participants() {
    let mut game = TestGameBuilder::new().min_players(4).players(3).build();
    assert!(!game.can_start());
    assert_eq!(
        game.start_game(),
        Err(GameError::NotEnoughPlayers {
            required: 4,
            present: 3
        })
    );

    game.join(tilebound_shared::ActorId::new(60), "fourth").unwrap();

    assert!(game.can_start());
    assert_eq!(
        game.start_game(),
        Ok(TurnOutcome::AwaitingRoll { slot: 0, round: 1 })
    );
    assert_eq!(game.phase(), Phase::TurnActive);
}

#[test]
fn restart_from_game_over_resets_occupied_participants() {
    let mut game = TestGameBuilder::new().max_rounds(1).players(2).build();
    let mut outcome = game.start_game().unwrap();
    while let TurnOutcome::AwaitingRoll { slot, .. } = outcome {
        outcome = game.roll_and_advance(slot).unwrap().next;
    }
    assert_eq!(game.phase(), Phase::GameOver);

    let outcome = game.start_game().unwrap();

    assert_eq!(outcome, TurnOutcome::AwaitingRoll { slot: 0, round: 1 });
    assert!(game.participants().filter(|p| p.is_occupied()).all(|p| {
        p.balance() == 1000 && p.position() == 0
    }));
    assert!(game.tiles().all(|tile| tile.owner().is_none()));
    assert_ownership_consistent!(game);
    assert!(game
        .take_events()
        .iter()
        .any(|event| matches!(event, GameEvent::GameStarted { participants: 2 })));
}
