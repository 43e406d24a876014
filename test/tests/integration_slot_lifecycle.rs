//! INTEGRATION TESTS: seating, leaving and rejoining
//!
//! Slots are handed out first-fit by ascending index, leaving is idempotent,
//! and a mid-game departure keeps the slot's data for settlement and rejoin.

use tilebound_server::{GameEntity, GameError, GameEvent, SlotState};
use tilebound_shared::ActorId;
use tilebound_test::{actor, assert_ownership_consistent, assert_published_int, TestGameBuilder};

#[test]
fn eight_slots_then_session_full() {
    let mut game = TestGameBuilder::new().players(8).build();

    let result = game.join(ActorId::new(999), "late");

    assert_eq!(
        result,
        Err(GameError::SlotsExhausted {
            actor: ActorId::new(999)
        })
    );
    assert_eq!(result.unwrap_err().user_message(), "session full");
    assert_eq!(game.store().occupied_count(), 8);
}

#[test]
fn freed_slot_is_reused_lowest_first() {
    let mut game = TestGameBuilder::new().slots(4).players(4).build();
    game.leave(actor(2), false).unwrap();
    game.leave(actor(0), false).unwrap();

    assert_eq!(game.join(ActorId::new(50), "fifth"), Ok(0));
    assert_eq!(game.join(ActorId::new(51), "sixth"), Ok(2));
}

#[test]
fn joined_slot_starts_fresh() {
    let mut game = TestGameBuilder::new().build();

    let slot = game.join(ActorId::new(7), "ada").unwrap();

    let participant = game.participant(slot).unwrap();
    let occupant = participant.occupant().unwrap();
    assert_eq!(occupant.display_name(), "ada");
    assert_eq!(occupant.balance(), 1000);
    assert_eq!(occupant.position(), 0);
    assert!(occupant.holdings().is_empty());
    assert_published_int!(game, GameEntity::Participant(slot), "balance", 1000);
}

#[test]
fn leave_twice_equals_leave_once() {
    let mut game = TestGameBuilder::new().slots(3).players(2).build();
    game.start_game().unwrap();

    let first = game.leave(actor(1), true).unwrap();
    let state_after_first = game.participant(1).unwrap().clone();
    let publications = game.channel().publications().len();
    let second = game.leave(actor(1), true).unwrap();

    assert_eq!(first, Some(1));
    assert_eq!(second, None);
    assert_eq!(game.participant(1).unwrap(), &state_after_first);
    assert_eq!(game.channel().publications().len(), publications);
}

#[test]
fn lobby_leave_gives_up_tiles() {
    let mut game = TestGameBuilder::new().players(2).build();
    game.resolve_tile(1, 4).unwrap();
    assert_eq!(game.tile(4).unwrap().owner(), Some(1));

    game.leave(actor(1), false).unwrap();

    assert!(game.participant(1).unwrap().is_vacant());
    assert_eq!(game.tile(4).unwrap().owner(), None);
    assert_ownership_consistent!(game);
}

#[test]
fn disconnect_mid_game_keeps_balance_and_tiles() {
    let mut game = TestGameBuilder::new().players(2).build();
    game.start_game().unwrap();
    game.resolve_tile(1, 3).unwrap();

    game.disconnect(actor(1)).unwrap();

    match game.participant(1).unwrap().state() {
        SlotState::Disconnected(occupant) => {
            assert_eq!(occupant.balance(), 900);
            assert!(occupant.holdings().contains(3));
        }
        other => panic!("expected a disconnected slot, got {:?}", other),
    }
    assert_eq!(game.tile(3).unwrap().owner(), Some(1));
    assert_ownership_consistent!(game);
}

#[test]
fn rejoin_puts_the_actor_back_in_its_slot() {
    let mut game = TestGameBuilder::new().players(3).build();
    game.start_game().unwrap();
    game.disconnect(actor(1)).unwrap();

    // a newcomer does not take the retained slot
    assert_eq!(game.join(ActorId::new(77), "newcomer"), Ok(3));
    assert_eq!(game.rejoin(actor(1)), Ok(Some(1)));
    assert_eq!(game.rejoin(actor(1)), Ok(None));

    let events = game.take_events();
    assert!(events.contains(&GameEvent::Left {
        slot: 1,
        actor: actor(1),
        retained: true
    }));
    assert!(events.contains(&GameEvent::Rejoined {
        slot: 1,
        actor: actor(1)
    }));
}
