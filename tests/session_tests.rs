//! Session lifecycle: setup, turn order, terminal states, reset.

use tui_connect::core::{MoveError, Outcome, Session, SetupError};
use tui_connect::types::{GridError, Owner};

#[test]
fn setup_validates_dimensions_and_roster() {
    assert!(Session::new(6, 7, 2).is_ok());
    assert!(Session::new(15, 15, 10).is_ok());

    assert_eq!(
        Session::new(5, 7, 2),
        Err(SetupError::Grid(GridError::InvalidDimensions {
            rows: 5,
            cols: 7
        }))
    );
    assert_eq!(Session::new(6, 7, 1), Err(SetupError::InvalidPlayerCount(1)));
    assert_eq!(Session::new(6, 7, 11), Err(SetupError::InvalidPlayerCount(11)));
}

#[test]
fn turns_rotate_through_the_roster() {
    let mut session = Session::new(6, 7, 3).unwrap();
    for expected in [0, 1, 2, 0, 1, 2, 0] {
        assert_eq!(session.current_player(), Owner::new(expected));
        session.try_drop(1 + expected).unwrap();
    }
}

#[test]
fn winning_drop_freezes_the_session() {
    let mut session = Session::new(6, 7, 2).unwrap();
    for column in [1, 7, 2, 7, 3, 7] {
        session.try_drop(column).unwrap();
    }
    session.try_drop(4).unwrap();

    assert_eq!(session.outcome(), Some(Outcome::Winner(Owner::new(0))));
    assert!(session.is_terminal());
    assert_eq!(session.try_drop(5), Err(MoveError::GameOver));
    assert!(session.legal_columns().is_empty());
}

#[test]
fn rejected_move_keeps_the_turn() {
    let mut session = Session::new(6, 7, 2).unwrap();
    for _ in 0..6 {
        session.try_drop(1).unwrap();
    }
    let mover = session.current_player();

    assert_eq!(session.try_drop(1), Err(MoveError::ColumnFull));
    assert_eq!(session.try_drop(0), Err(MoveError::InvalidColumn));
    assert_eq!(session.try_drop(8), Err(MoveError::InvalidColumn));

    assert_eq!(session.current_player(), mover);
    assert_eq!(session.legal_columns().as_slice(), &[2, 3, 4, 5, 6, 7]);
}

#[test]
fn full_board_without_a_run_is_a_draw() {
    // Fill column pairs so values alternate by column: no axis ever
    // reaches four in a row.
    let pair_script = [0u8, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1];

    let mut session = Session::new(6, 6, 2).unwrap();
    for base in [1, 3, 5] {
        for offset in pair_script {
            assert!(!session.is_terminal());
            session.try_drop(base + offset).unwrap();
        }
    }

    assert!(session.grid().is_board_full());
    assert_eq!(session.outcome(), Some(Outcome::Draw));
    assert_eq!(session.try_drop(1), Err(MoveError::GameOver));
}

#[test]
fn reset_starts_a_fresh_game_with_the_same_setup() {
    let mut session = Session::new(7, 9, 4).unwrap();
    for column in [1, 2, 3, 4, 5] {
        session.try_drop(column).unwrap();
    }

    session.reset();

    assert_eq!(session.grid().rows(), 7);
    assert_eq!(session.grid().cols(), 9);
    assert_eq!(session.player_count(), 4);
    assert_eq!(session.current_player(), Owner::new(0));
    assert_eq!(session.outcome(), None);
    assert!(session.grid().iter().all(|(_, cell)| cell.is_none()));
}
