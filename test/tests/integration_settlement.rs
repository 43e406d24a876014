//! INTEGRATION TESTS: purchase, toll and decline
//!
//! Every branch either applies to all the entities it touches or to none.

use tilebound_server::{GameEntity, GameError, GameEvent, TileOutcome, TileSpec};
use tilebound_test::{
    assert_ownership_consistent, assert_published_int, BoardBuilder, TestGameBuilder,
};

fn board() -> Vec<TileSpec> {
    BoardBuilder::new()
        .tile("start", 0, 0)
        .tile("orchard", 150, 30)
        .tile("quarry", 400, 120)
        .tile("lighthouse", 900, 1500)
        .tile("mill", 80, 10)
        .build()
}

#[test]
fn insufficient_funds_changes_nothing() {
    let mut game = TestGameBuilder::new().board(board()).players(1).build();
    game.resolve_tile(0, 3).unwrap();
    assert_eq!(game.participant(0).unwrap().balance(), 100);
    let publications = game.channel().publications().len();

    let outcome = game.resolve_tile(0, 1).unwrap();

    assert_eq!(
        outcome,
        TileOutcome::Declined {
            tile: 1,
            price: 150,
            balance: 100
        }
    );
    assert_eq!(game.participant(0).unwrap().balance(), 100);
    assert_eq!(game.tile(1).unwrap().owner(), None);
    assert_eq!(game.channel().publications().len(), publications);
}

#[test]
fn purchase_publishes_buyer_and_tile() {
    let mut game = TestGameBuilder::new().board(board()).players(1).build();

    game.resolve_tile(0, 2).unwrap();

    assert_published_int!(game, GameEntity::Participant(0), "balance", 600);
    assert_published_int!(game, GameEntity::Tile(2), "owner", 0);
    assert_ownership_consistent!(game);
    assert!(game.take_events().contains(&GameEvent::Purchased {
        slot: 0,
        tile: 2,
        price: 400
    }));
}

#[test]
fn holdings_full_is_reported_before_debit() {
    let mut game = TestGameBuilder::new()
        .board(board())
        .max_holdings(2)
        .players(1)
        .build();
    game.resolve_tile(0, 1).unwrap();
    game.resolve_tile(0, 4).unwrap();
    let balance = game.participant(0).unwrap().balance();

    let result = game.resolve_tile(0, 2);

    assert_eq!(
        result,
        Err(GameError::HoldingsFull {
            slot: 0,
            capacity: 2
        })
    );
    assert_eq!(game.participant(0).unwrap().balance(), balance);
    assert_eq!(game.tile(2).unwrap().owner(), None);
    assert_ownership_consistent!(game);
}

#[test]
fn toll_is_paid_to_owner_even_into_debt() {
    let mut game = TestGameBuilder::new().board(board()).players(2).build();
    game.resolve_tile(0, 3).unwrap();

    let outcome = game.resolve_tile(1, 3).unwrap();

    assert_eq!(
        outcome,
        TileOutcome::TollPaid {
            tile: 3,
            owner: 0,
            amount: 1500
        }
    );
    assert_eq!(game.participant(1).unwrap().balance(), -500);
    assert_eq!(game.participant(0).unwrap().balance(), 1600);
}

#[test]
fn toll_is_paid_to_a_disconnected_owner() {
    let mut game = TestGameBuilder::new().board(board()).players(2).build();
    game.start_game().unwrap();
    game.resolve_tile(0, 1).unwrap();
    game.disconnect(tilebound_test::actor(0)).unwrap();

    game.resolve_tile(1, 1).unwrap();

    assert_eq!(game.participant(0).unwrap().balance(), 880);
    assert_eq!(game.participant(1).unwrap().balance(), 970);
}

#[test]
fn landing_on_own_tile_does_nothing() {
    let mut game = TestGameBuilder::new().board(board()).players(1).build();
    game.resolve_tile(0, 1).unwrap();
    let publications = game.channel().publications().len();

    assert_eq!(game.resolve_tile(0, 1), Ok(TileOutcome::OwnTile { tile: 1 }));
    assert_eq!(game.participant(0).unwrap().balance(), 850);
    assert_eq!(game.channel().publications().len(), publications);
}

#[test]
fn vacant_slot_cannot_settle() {
    let mut game = TestGameBuilder::new().board(board()).players(1).build();

    assert_eq!(
        game.resolve_tile(5, 1),
        Err(GameError::SlotNotOccupied { slot: 5 })
    );
    assert_eq!(
        game.resolve_tile(8, 1),
        Err(GameError::InvalidSlotReference {
            slot: 8,
            slot_count: 8
        })
    );
}
