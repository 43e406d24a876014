/// Assert that every owned tile sits in exactly its owner's holdings and
/// every held tile names its holder as owner
#[macro_export]
macro_rules! assert_ownership_consistent {
    ($game:expr) => {
        assert!(
            $game.store().is_ownership_consistent(),
            "Tile ownership and holdings disagree: {:?}",
            $game
                .tiles()
                .map(|tile| (tile.id(), tile.owner()))
                .collect::<Vec<_>>()
        );
    };
}

/// Assert that every seated or disconnected participant stands on the board
#[macro_export]
macro_rules! assert_positions_in_bounds {
    ($game:expr) => {
        assert!(
            $game.store().positions_in_bounds(),
            "Participant position out of bounds: {:?}",
            $game
                .participants()
                .map(|participant| participant.position())
                .collect::<Vec<_>>()
        );
    };
}

/// Assert that the last field set published for `$entity` carries `$value`
/// under `$field`
#[macro_export]
macro_rules! assert_published_int {
    ($game:expr, $entity:expr, $field:expr, $value:expr) => {
        let fields = $game
            .channel()
            .last_published(&$entity)
            .unwrap_or_else(|| panic!("Nothing was published for {:?}", $entity));
        assert_eq!(
            fields.int($field),
            Some($value),
            "Unexpected {} published for {:?}",
            $field,
            $entity
        );
    };
}
