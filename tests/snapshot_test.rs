use tui_2048::core::{Board, GameSnapshot, GameState, MemoryStore, SimpleRng};
use tui_2048::types::Direction;

#[test]
fn snapshot_mirrors_engine_state() {
    let board = Board::from_rows(&[[2u32, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    let mut game = GameState::from_board(board, SimpleRng::new(3), MemoryStore::with_value(2));
    assert!(game.apply_move(Direction::Left));

    let snap = game.snapshot();
    assert_eq!(snap.size, 4);
    assert_eq!(snap.grid, game.board().cells());
    assert_eq!(snap.score, 4);
    assert_eq!(snap.high_score, 4);
    assert_eq!(snap.moves, 1);
    assert!(!snap.game_over);
    assert_eq!(snap.last_spawn, game.last_spawn());
    assert_eq!(snap.tile(0, 0), 4);
    assert_eq!(snap.tile(9, 9), 0);
    assert_eq!(snap.max_tile(), 4);
}

#[test]
fn snapshot_into_reuses_buffer() {
    let mut game = GameState::seeded(4, 8).unwrap();
    let mut snap = GameSnapshot::default();
    game.snapshot_into(&mut snap);
    let first = snap.clone();

    let moved = Direction::ALL.iter().any(|&d| game.apply_move(d));
    assert!(moved);
    game.snapshot_into(&mut snap);
    assert_eq!(snap.grid.len(), 16);
    assert_ne!(snap, first);
    assert_eq!(snap, game.snapshot());
}

#[test]
fn snapshot_serializes_to_json() {
    let game = GameState::seeded(3, 1).unwrap();
    let json = serde_json::to_string(&game.snapshot()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["size"], 3);
    assert_eq!(v["grid"].as_array().unwrap().len(), 9);
    assert_eq!(v["score"], 0);
    assert_eq!(v["game_over"], false);
    assert!(v["last_spawn"]["value"].is_u64());
}
