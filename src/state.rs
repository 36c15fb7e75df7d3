//! Game state and move application

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, winner_of};

/// Progress of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Won(Player),
    Draw,
}

/// Complete state of one game: the board, whose turn it is, and whether the
/// game has ended.
///
/// Exactly one of {winner set, draw, in progress} holds at any time. The
/// state is mutated only by [`apply_move`](GameState::apply_move) and
/// [`reset`](GameState::reset); invalid moves are silent no-ops rather than
/// errors, mirroring a forgiving UI control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    winner: Option<Player>,
    is_draw: bool,
}

impl GameState {
    /// Create a fresh game: empty board, X to move
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::X,
            winner: None,
            is_draw: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player who moves next. Meaningless once the game is terminal.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    pub fn status(&self) -> Status {
        if let Some(winner) = self.winner {
            Status::Won(winner)
        } else if self.is_draw {
            Status::Draw
        } else {
            Status::InProgress
        }
    }

    /// Check whether the game has ended in a win or a draw
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }

    /// Apply the current player's mark at `pos`.
    ///
    /// Returns `true` if the move was accepted. A move is silently declined,
    /// leaving the state untouched, when `pos` is out of range, the cell is
    /// occupied, or the game is already over. The return value lets the
    /// shell decide whether to schedule the opponent; it is not an error
    /// signal.
    pub fn apply_move(&mut self, pos: usize) -> bool {
        if pos >= 9 || !self.board.is_empty(pos) || self.is_terminal() {
            return false;
        }

        self.board = self.board.place(pos, self.current_player);
        self.current_player = self.current_player.opponent();

        if let Some(winner) = winner_of(&self.board) {
            self.winner = Some(winner);
        } else if self.board.is_full() {
            self.is_draw = true;
        }

        true
    }

    /// Return the game to its exact initial state
    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    /// Human-readable status: `Winner: X`, `Draw!`, or `Next player: O`
    pub fn status_line(&self) -> String {
        match self.status() {
            Status::Won(winner) => format!("Winner: {winner}"),
            Status::Draw => "Draw!".to_string(),
            Status::InProgress => format!("Next player: {}", self.current_player),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
