//! Session behaviour: scoring, best score, win and game-over latches.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_2048::{Direction, Grid, Score};
use strictly_2048_tui::{BestScoreStore, GameSession, MemoryStore, StoreError};

fn session(best: Score) -> GameSession<MemoryStore, StdRng> {
    GameSession::new(MemoryStore::new(best), StdRng::seed_from_u64(11))
}

fn two_merges() -> Grid {
    Grid::from_rows([
        [2, 2, 0, 0],
        [4, 4, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ])
}

fn checkerboard() -> Grid {
    Grid::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ])
}

/// Store whose every operation fails.
struct BrokenStore;

impl BestScoreStore for BrokenStore {
    fn load_best_score(&self) -> Result<Score, StoreError> {
        Err(StoreError::new("disk unavailable"))
    }

    fn save_best_score(&mut self, _score: Score) -> Result<(), StoreError> {
        Err(StoreError::new("disk unavailable"))
    }
}

#[test]
fn test_merge_points_accumulate() {
    let mut s = session(0);
    s.set_grid(two_merges());

    let report = s.apply_move(Direction::Left);

    assert!(report.moved);
    assert_eq!(report.points, 12);
    assert_eq!(s.score(), 12);
    assert_eq!(s.moves(), 1);
    assert!(report.spawned.is_some());
    // two merged tiles plus one spawn
    assert_eq!(s.grid().tile_count(), 3);
    assert_eq!(s.grid().row(0)[0], 4);
    assert_eq!(s.grid().row(1)[0], 8);
}

#[test]
fn test_best_score_saved_on_improvement() {
    let mut s = session(0);
    s.set_grid(two_merges());

    let report = s.apply_move(Direction::Left);

    assert!(report.new_best);
    assert_eq!(s.best_score(), 12);
    assert_eq!(s.store().saves(), 1);
    assert_eq!(s.store().load_best_score().unwrap(), 12);
}

#[test]
fn test_best_score_untouched_below_record() {
    let mut s = session(100);
    s.set_grid(two_merges());

    let report = s.apply_move(Direction::Left);

    assert!(!report.new_best);
    assert_eq!(s.score(), 12);
    assert_eq!(s.best_score(), 100);
    assert_eq!(s.store().saves(), 0);
}

#[test]
fn test_move_without_merge_scores_nothing() {
    let mut s = session(0);
    s.set_grid(Grid::from_rows([
        [0, 0, 0, 2],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]));

    let report = s.apply_move(Direction::Left);

    assert!(report.moved);
    assert_eq!(report.points, 0);
    assert!(!report.new_best);
    assert_eq!(s.store().saves(), 0);
    assert_eq!(s.grid().tile_count(), 2);
}

#[test]
fn test_win_is_reported_once() {
    let mut s = session(0);
    s.set_grid(Grid::from_rows([
        [1024, 1024, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]));

    let report = s.apply_move(Direction::Left);
    assert!(report.just_won);
    assert!(s.won());
    assert_eq!(s.score(), 2048);
    assert_eq!(s.grid().row(0)[0], 2048);

    s.keep_playing();
    assert!(!s.won());
    assert_eq!(s.score(), 2048);

    // row 0 holds the 2048 and at most one spawned tile, so Right moves it
    let report = s.apply_move(Direction::Right);
    assert!(report.moved);
    assert!(!report.just_won);
    assert!(!s.won());
}

#[test]
fn test_terminal_board_is_game_over() {
    let mut s = session(0);
    s.set_grid(checkerboard());
    assert!(s.game_over());

    for direction in Direction::ALL {
        let report = s.apply_move(direction);
        assert!(!report.moved);
        assert!(report.game_over);
    }
    assert_eq!(*s.grid(), checkerboard());
    assert_eq!(s.score(), 0);
}

#[test]
fn test_restart_keeps_best_score() {
    let mut s = session(0);
    s.set_grid(two_merges());
    s.apply_move(Direction::Left);

    s.restart();

    assert_eq!(s.score(), 0);
    assert_eq!(s.best_score(), 12);
    assert_eq!(s.moves(), 0);
    assert_eq!(s.grid().tile_count(), 2);
    assert!(!s.game_over());
    assert!(!s.won());
}

#[test]
fn test_restart_clears_game_over() {
    let mut s = session(0);
    s.set_grid(checkerboard());
    assert!(s.game_over());

    s.restart();
    assert!(!s.game_over());
}

#[test]
fn test_broken_store_does_not_block_play() {
    let mut s = GameSession::new(BrokenStore, StdRng::seed_from_u64(5));
    assert_eq!(s.best_score(), 0);

    s.set_grid(two_merges());
    let report = s.apply_move(Direction::Left);

    assert!(report.moved);
    assert!(report.new_best);
    assert_eq!(s.score(), 12);
    assert_eq!(s.best_score(), 12);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = session(0);
    let mut b = session(0);
    assert_eq!(a.grid(), b.grid());

    for direction in [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ] {
        assert_eq!(a.apply_move(direction), b.apply_move(direction));
        assert_eq!(a.grid(), b.grid());
    }
    assert_eq!(a.score(), b.score());
}
