//! Board representation and basic operations

pub mod lines;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use lines::{WINNING_LINES, has_won, winner_of};

/// A cell on the 3x3 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player whose mark occupies this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

/// A player's mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opposing player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to the cell holding their mark
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

/// The 3x3 grid as a flat, row-major sequence of 9 cells.
///
/// Indices 0-2 are the top row, 3-5 the middle row, 6-8 the bottom row.
/// `Board` is a 9-byte value type; operations that change it return a new
/// board and leave the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board([Cell; 9]);

/// Index of the center cell, the third tier of the opponent heuristic
pub const CENTER: usize = 4;

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board([Cell::Empty; 9])
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.0[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.0[pos] == Cell::Empty
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.0.contains(&Cell::Empty)
    }

    /// Get all empty positions in ascending index order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place a mark and return the new board.
    ///
    /// The caller guarantees `pos` is in range and empty; this is the raw
    /// write used by [`GameState`](crate::state::GameState) after its own
    /// occupancy check and by the policy for scratch evaluation.
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, pos: usize, player: Player) -> Board {
        let mut next = *self;
        next.0[pos] = player.to_cell();
        next
    }

    /// Access the raw cells
    pub fn cells(&self) -> &[Cell; 9] {
        &self.0
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain 9 cell characters after whitespace is
    /// filtered out. `.`, `_`, and space denote an empty cell; `X`/`x` and
    /// `O`/`o` denote marks.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 9 non-whitespace characters remain or
    /// any character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board(cells))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Render the board as three rows of cell characters
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                write!(f, "{}", self.0[row * 3 + col].to_char())?;
                if col < 2 {
                    write!(f, " ")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
