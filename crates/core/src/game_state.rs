//! Game state module - the engine
//!
//! Ties together board, pieces, randomness and progression. Every mutator is
//! a silent no-op once the game is over.

use std::mem;

use rand::rngs::StdRng;

use crate::board::Board;
use crate::piece::{rotate, Piece};
use crate::rng::{self, RandomSource};
use crate::scoring::{
    fall_interval_ms, level_for_lines, line_clear_score, points_to_next_milestone,
};
use crate::shapes::Shape;
use crate::types::GameAction;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    board: Board,
    current: Piece,
    next: Piece,
    score: u32,
    lines_cleared: u32,
    level: u32,
    fall_interval_ms: u32,
    game_over: bool,
    /// Clock reading of the last automatic downward move
    last_fall_ms: u64,
    rng: R,
}

impl GameState<StdRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_source(rng::seeded(seed))
    }

    /// Create a new game seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_source(rng::from_entropy())
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game on an empty board drawing pieces from `rng`
    pub fn with_source(rng: R) -> Self {
        Self::with_board(Board::new(), rng)
    }

    /// Create a new game on a prepared board
    ///
    /// The first piece is not checked against the board; only promotions
    /// can end the game.
    pub fn with_board(board: Board, mut rng: R) -> Self {
        let current = Piece::random(&mut rng);
        let next = Piece::random(&mut rng);
        let level = level_for_lines(0);

        Self {
            board,
            current,
            next,
            score: 0,
            lines_cleared: 0,
            level,
            fall_interval_ms: fall_interval_ms(level),
            game_over: false,
            last_fall_ms: 0,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Points left to the next 200-point milestone (HUD statistic)
    pub fn points_to_next_milestone(&self) -> u32 {
        points_to_next_milestone(self.score)
    }

    /// Whether the current piece, moved by (dx, dy) and optionally given
    /// another shape, would collide
    pub fn check_collision(&self, dx: i8, dy: i8, shape: Option<&Shape>) -> bool {
        self.board.check_collision(&self.current, dx, dy, shape)
    }

    /// Write the current piece into the board at its position
    pub fn freeze_piece(&mut self) {
        if self.game_over {
            return;
        }
        self.board.freeze(&self.current);
    }

    /// Remove full rows and award their score
    pub fn clear_lines(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }

        let cleared = self.board.clear_lines();
        self.lines_cleared += cleared;
        self.score += line_clear_score(cleared);
        self.update_level();
        cleared
    }

    /// Promote the next piece and draw a fresh one
    ///
    /// Ends the game if the promoted piece collides at its spawn position.
    pub fn new_piece(&mut self) {
        if self.game_over {
            return;
        }

        let fresh = Piece::random(&mut self.rng);
        self.current = mem::replace(&mut self.next, fresh);

        if self.check_collision(0, 0, None) {
            self.game_over = true;
        }
    }

    /// Freeze, clear and promote: the tail of every landing
    fn lock_piece(&mut self) {
        self.freeze_piece();
        self.clear_lines();
        self.new_piece();
    }

    /// Try to move the current piece
    ///
    /// A blocked downward move locks the piece; a blocked sideways move is
    /// ignored. Returns true if the piece moved.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over {
            return false;
        }

        if !self.check_collision(dx, dy, None) {
            self.current.x += dx;
            self.current.y += dy;
            return true;
        }

        if dy != 0 {
            self.lock_piece();
        }
        false
    }

    /// Hard drop the current piece to the bottom and lock it
    ///
    /// Returns the number of rows dropped.
    pub fn drop_piece_to_bottom(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }

        let mut drop_distance = 0;
        while !self.check_collision(0, 1, None) {
            self.current.y += 1;
            drop_distance += 1;
        }

        self.lock_piece();
        drop_distance
    }

    /// Rotate the current piece clockwise if the result fits
    ///
    /// No wall kicks: a colliding rotation is discarded.
    pub fn rotate_piece(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let rotated = rotate(&self.current.shape);
        if self.check_collision(0, 0, Some(&rotated)) {
            return false;
        }
        self.current.shape = rotated;
        true
    }

    /// Recompute level and fall interval from the cleared-line count
    pub fn update_level(&mut self) {
        self.level = level_for_lines(self.lines_cleared);
        self.fall_interval_ms = fall_interval_ms(self.level);
    }

    /// Advance the fall timer to `now_ms` (monotonic milliseconds)
    ///
    /// Moves the piece down one row when more than the fall interval has
    /// passed since the last automatic move. Returns true if it did.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.game_over {
            return false;
        }

        let mut fell = false;
        if now_ms.saturating_sub(self.last_fall_ms) > u64::from(self.fall_interval_ms) {
            self.move_piece(0, 1);
            self.last_fall_ms = now_ms;
            fell = true;
        }

        self.update_level();
        fell
    }

    /// End the game at the player's request
    pub fn quit(&mut self) {
        self.game_over = true;
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1, 0),
            GameAction::MoveRight => self.move_piece(1, 0),
            GameAction::SoftDrop => self.move_piece(0, 1),
            GameAction::Rotate => self.rotate_piece(),
            GameAction::HardDrop => {
                if self.game_over {
                    return false;
                }
                self.drop_piece_to_bottom();
                true
            }
            GameAction::Quit => {
                self.quit();
                true
            }
        }
    }
}

impl Default for GameState<StdRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
