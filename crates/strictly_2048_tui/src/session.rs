//! Game session: the canonical state the engine is applied to.
//!
//! One key press becomes exactly one [`GameSession::apply_move`]: a slide,
//! a spawn if anything moved, and a single commit of score, best score and
//! the win and game-over flags.

use crate::store::BestScoreStore;
use rand::Rng;
use strictly_2048::{
    Direction, Grid, MoveContract, Score, has_won, initialize_grid, is_terminal, slide,
    spawn_random_tile,
};
use tracing::{debug, info, instrument, warn};

/// What a single move did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// Direction requested.
    pub direction: Direction,
    /// Whether the board changed.
    pub moved: bool,
    /// Points scored by this move.
    pub points: Score,
    /// Cell that received the new tile.
    pub spawned: Option<(usize, usize)>,
    /// The score passed the previous best on this move.
    pub new_best: bool,
    /// The winning tile appeared for the first time on this move.
    pub just_won: bool,
    /// The board is stuck after this move.
    pub game_over: bool,
}

impl MoveReport {
    fn ignored(direction: Direction, game_over: bool) -> Self {
        Self {
            direction,
            moved: false,
            points: 0,
            spawned: None,
            new_best: false,
            just_won: false,
            game_over,
        }
    }
}

/// Single-player session state.
///
/// Owns the grid, the running and best scores, the win and game-over
/// latches, the best-score store and the random source used for spawns.
#[derive(Debug)]
pub struct GameSession<S, R> {
    grid: Grid,
    score: Score,
    best_score: Score,
    won: bool,
    keep_playing: bool,
    game_over: bool,
    moves: u64,
    store: S,
    rng: R,
}

impl<S: BestScoreStore, R: Rng> GameSession<S, R> {
    /// Starts a session on a fresh board.
    ///
    /// The best score is read from `store` once; a failing store counts as 0.
    #[instrument(skip_all)]
    pub fn new(store: S, mut rng: R) -> Self {
        let best_score = store.load_best_score().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load best score, starting from 0");
            0
        });
        let grid = initialize_grid(&mut rng);
        info!(best_score, "Session started");

        Self {
            grid,
            score: 0,
            best_score,
            won: false,
            keep_playing: false,
            game_over: is_terminal(&grid),
            moves: 0,
            store,
            rng,
        }
    }

    /// Applies one move and commits the result.
    ///
    /// After game over this is a no-op that reports `moved = false`.
    #[instrument(skip(self), fields(score = self.score))]
    pub fn apply_move(&mut self, direction: Direction) -> MoveReport {
        if self.game_over {
            debug!("Move ignored, game is over");
            return MoveReport::ignored(direction, true);
        }

        let outcome = slide(&self.grid, direction);
        debug_assert!(
            MoveContract::post(&self.grid, &outcome).is_ok(),
            "slide broke its contract"
        );
        if !outcome.moved {
            debug!("Nothing moved");
            return MoveReport::ignored(direction, false);
        }

        let mut grid = outcome.grid;
        let spawned = spawn_random_tile(&mut grid, &mut self.rng);
        self.grid = grid;
        self.moves += 1;
        self.score += outcome.points;

        let new_best = self.score > self.best_score;
        if new_best {
            self.best_score = self.score;
            if let Err(e) = self.store.save_best_score(self.best_score) {
                warn!(error = %e, "Failed to save best score");
            }
        }

        let just_won = !self.won && !self.keep_playing && has_won(&self.grid);
        if just_won {
            info!(score = self.score, moves = self.moves, "Winning tile reached");
            self.won = true;
        }

        self.game_over = is_terminal(&self.grid);
        if self.game_over {
            info!(score = self.score, moves = self.moves, "Game over");
        }

        debug!(points = outcome.points, ?spawned, "Move committed");
        MoveReport {
            direction,
            moved: true,
            points: outcome.points,
            spawned,
            new_best,
            just_won,
            game_over: self.game_over,
        }
    }

    /// Starts a new board. The best score is kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(final_score = self.score, "Restarting session");
        self.grid = initialize_grid(&mut self.rng);
        self.score = 0;
        self.won = false;
        self.keep_playing = false;
        self.game_over = is_terminal(&self.grid);
        self.moves = 0;
    }

    /// Dismisses the win banner without touching grid or score.
    ///
    /// The win is not announced again for this board.
    #[instrument(skip(self))]
    pub fn keep_playing(&mut self) {
        if self.won {
            debug!("Win dismissed");
            self.won = false;
            self.keep_playing = true;
        }
    }
}

impl<S, R> GameSession<S, R> {
    /// Current board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Running score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Best score across sessions.
    pub fn best_score(&self) -> Score {
        self.best_score
    }

    /// Winning tile reached and not yet dismissed.
    pub fn won(&self) -> bool {
        self.won
    }

    /// No move can change the board.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Moves that changed the board since the last (re)start.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// The best-score store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replaces the board, for resuming or scripted positions.
    ///
    /// Flags are recomputed from the new board; the score is left alone.
    pub fn set_grid(&mut self, grid: Grid) {
        strictly_2048::assert_grid_invariants(&grid);
        self.grid = grid;
        self.game_over = is_terminal(&grid);
    }
}
