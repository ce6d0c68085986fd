//! Tests for the engine's core play, jump and terminal behavior.

use strictly_timetravel::{
    GameEngine, GameStatus, HistoryError, Player, PlayOutcome, Position, Rejection, Square,
};

fn cell(engine: &GameEngine, index: usize) -> Square {
    engine.current_board().cell(index).unwrap()
}

#[test]
fn test_initial_state() {
    let engine = GameEngine::new();
    assert!(engine.current_board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(engine.status().to_string(), "Next player: X");
    assert_eq!(engine.history_len(), 1);
}

#[test]
fn test_moves_alternate_turns() {
    let mut engine = GameEngine::new();
    let expected = [
        (0, "X", "Next player: O"),
        (1, "O", "Next player: X"),
        (2, "X", "Next player: O"),
        (3, "O", "Next player: X"),
    ];
    for (index, mark, status) in expected {
        assert!(engine.play(index).is_placed());
        assert_eq!(cell(&engine, index).symbol(), mark);
        assert_eq!(engine.status().to_string(), status);
    }
}

#[test]
fn test_top_row_win() {
    let engine = GameEngine::replay([0, 3, 1, 4, 2]);
    assert_eq!(engine.winner(), Some(Player::X));
    assert_eq!(
        engine.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
}

#[test]
fn test_draw_game() {
    let engine = GameEngine::replay([0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert!(engine.current_board().squares().iter().all(|s| *s != Square::Empty));
    assert_eq!(engine.winner(), None);
    assert!(engine.is_draw());
    assert_eq!(engine.status(), GameStatus::Draw);
    assert!(!engine.status().to_string().contains("Winner"));
}

#[test]
fn test_draw_game_rejects_further_moves() {
    let mut engine = GameEngine::replay([0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(engine.play(0), PlayOutcome::Ignored(Rejection::GameOver));
    assert_eq!(cell(&engine, 0), Square::Occupied(Player::X));
    assert_eq!(engine.history_len(), 10);
}

#[test]
fn test_branch_after_jump_truncates_future() {
    let mut engine = GameEngine::replay([0, 1, 2, 3]);
    engine.jump_to(1).unwrap();
    engine.play(4);

    assert_eq!(engine.history_len(), 3);
    assert_eq!(cell(&engine, 4), Square::Occupied(Player::O));
    assert_eq!(cell(&engine, 3), Square::Empty);
    assert_eq!(cell(&engine, 1), Square::Empty);
}

#[test]
fn test_occupied_square_is_noop() {
    let mut engine = GameEngine::new();
    engine.play(0);
    let before = engine.clone();

    let outcome = engine.play(0);

    assert_eq!(
        outcome,
        PlayOutcome::Ignored(Rejection::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(engine, before);
    assert_eq!(engine.status().to_string(), "Next player: O");
}

#[test]
fn test_no_moves_after_win() {
    let mut engine = GameEngine::replay([0, 3, 1, 4, 2]);
    let before = engine.clone();
    for index in [5, 6, 7, 8] {
        assert_eq!(engine.play(index), PlayOutcome::Ignored(Rejection::GameOver));
        assert_eq!(cell(&engine, index), Square::Empty);
    }
    assert_eq!(engine, before);
    assert_eq!(engine.status().to_string(), "Winner: X");
}

#[test]
fn test_jump_out_of_range_is_an_error() {
    let mut engine = GameEngine::replay([0, 1]);
    let before = engine.clone();
    let err = engine.jump_to(5).unwrap_err();
    assert_eq!(err, HistoryError::OutOfRange { index: 5, len: 3 });
    assert!(err.to_string().contains("out of range"));
    assert_eq!(engine, before);
}

#[test]
fn test_jump_to_latest_is_allowed() {
    let mut engine = GameEngine::replay([0, 1, 2]);
    engine.jump_to(0).unwrap();
    engine.jump_to(3).unwrap();
    assert!(engine.is_at_latest());
    assert_eq!(cell(&engine, 2), Square::Occupied(Player::X));
}

#[test]
fn test_truncated_future_cannot_be_reached() {
    let mut engine = GameEngine::replay([0, 1, 2, 3, 4]);
    engine.jump_to(2).unwrap();
    engine.play(8);
    assert_eq!(engine.history_len(), 4);
    assert!(engine.jump_to(4).is_err());
    assert!(engine.jump_to(5).is_err());
}

#[test]
fn test_play_at_matches_play() {
    let mut by_index = GameEngine::new();
    let mut by_position = GameEngine::new();
    by_index.play(4);
    by_position.play_at(Position::Center);
    assert_eq!(by_index, by_position);
}

#[test]
fn test_replay_ignores_illegal_entries() {
    let engine = GameEngine::replay([4, 4, 12, 0]);
    assert_eq!(engine.history_len(), 3);
    assert_eq!(cell(&engine, 4), Square::Occupied(Player::X));
    assert_eq!(cell(&engine, 0), Square::Occupied(Player::O));
}
