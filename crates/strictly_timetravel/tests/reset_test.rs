//! Tests for resetting the engine.

use strictly_timetravel::{GameEngine, Player, Square};

fn assert_fresh(engine: &GameEngine) {
    assert!(engine.current_board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(engine.status().to_string(), "Next player: X");
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.history_len(), 1);
    assert_eq!(engine.pointer(), 0);
}

#[test]
fn test_reset_from_finished_and_unfinished_games() {
    let scenarios: [&[usize]; 4] = [
        &[0, 1, 2, 3],
        &[0, 3, 1, 4, 2],
        &[0, 1, 3, 4, 5, 7],
        &[0, 1, 2, 4, 3, 5, 7, 6, 8],
    ];

    for moves in scenarios {
        let mut engine = GameEngine::replay(moves.iter().copied());
        engine.reset();
        assert_fresh(&engine);

        engine.play(4);
        assert_eq!(engine.current_board().cell(4), Some(Square::Occupied(Player::X)));
        assert_eq!(engine.status().to_string(), "Next player: O");
    }
}

#[test]
fn test_o_wins_middle_column() {
    let engine = GameEngine::replay([0, 1, 3, 4, 5, 7]);
    assert_eq!(engine.winner(), Some(Player::O));
}

#[test]
fn test_reset_from_historical_position() {
    let mut engine = GameEngine::replay([0, 1, 2, 3, 4]);
    engine.jump_to(2).unwrap();
    engine.reset();
    assert_fresh(&engine);
}

#[test]
fn test_reset_after_branch() {
    let mut engine = GameEngine::replay([0, 1, 2, 3]);
    engine.jump_to(2).unwrap();
    engine.play(4);
    engine.reset();
    assert_fresh(&engine);

    engine.play(0);
    assert_eq!(engine.status().to_string(), "Next player: O");
    assert_eq!(engine.history_len(), 2);
}

#[test]
fn test_repeated_resets() {
    let mut engine = GameEngine::new();
    for _ in 0..3 {
        for cell in [0, 1, 2] {
            engine.play(cell);
        }
        engine.reset();
        assert_fresh(&engine);
    }
    engine.reset();
    assert_fresh(&engine);
    assert_eq!(engine, GameEngine::new());
}

#[test]
fn test_reset_between_single_moves() {
    let mut engine = GameEngine::new();
    for cell in 0..5 {
        engine.play(cell);
        engine.reset();
        assert_fresh(&engine);
    }
}
