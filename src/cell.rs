//! Cell values, players and game results.
//!
//! Cells form a closed enumeration: `Empty` is the sentinel and can never be
//! confused with a player. The characters used to draw them are configurable
//! through [`Tokens`], which only affects rendering and parsing.

use crate::constants::{CIRCLE_TOKEN, CROSS_TOKEN, EMPTY_TOKEN};
use crate::error::{Error, Result};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Circle,
    Cross,
}

impl Player {
    /// Both players in the order used for win scans.
    pub const ALL: [Player; 2] = [Player::Circle, Player::Cross];

    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::Circle => Player::Cross,
            Player::Cross => Player::Circle,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Circle => Cell::Circle,
            Player::Cross => Cell::Cross,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Player::Circle => 0,
            Player::Cross => 1,
        }
    }
}

/// A cell on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Circle,
    Cross,
}

impl Cell {
    /// The player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Circle => Some(Player::Circle),
            Cell::Cross => Some(Player::Cross),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.to_cell()
    }
}

/// A finished game: either someone won or nobody can.
///
/// Games report `Option<Winner>`, where `None` means still in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    Won(Player),
    Draw,
}

impl Winner {
    /// The winning player, or `None` for a draw.
    pub fn player(self) -> Option<Player> {
        match self {
            Winner::Won(player) => Some(player),
            Winner::Draw => None,
        }
    }
}

/// Characters used to draw cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokens {
    empty: char,
    circle: char,
    cross: char,
}

impl Default for Tokens {
    fn default() -> Self {
        Self {
            empty: EMPTY_TOKEN,
            circle: CIRCLE_TOKEN,
            cross: CROSS_TOKEN,
        }
    }
}

impl Tokens {
    /// Create a token set. The three characters must be pairwise distinct.
    pub fn new(empty: char, circle: char, cross: char) -> Result<Self> {
        if empty == circle || empty == cross {
            return Err(Error::DuplicateToken { token: empty });
        }
        if circle == cross {
            return Err(Error::DuplicateToken { token: circle });
        }
        Ok(Self {
            empty,
            circle,
            cross,
        })
    }

    pub fn empty(&self) -> char {
        self.empty
    }

    pub fn circle(&self) -> char {
        self.circle
    }

    pub fn cross(&self) -> char {
        self.cross
    }

    /// The character drawn for a cell.
    pub fn symbol(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::Circle => self.circle,
            Cell::Cross => self.cross,
        }
    }

    /// The character drawn for a player's marks.
    pub fn player_symbol(&self, player: Player) -> char {
        self.symbol(player.to_cell())
    }

    /// Reverse of [`Tokens::symbol`].
    pub fn cell_for(&self, c: char) -> Option<Cell> {
        if c == self.empty {
            Some(Cell::Empty)
        } else if c == self.circle {
            Some(Cell::Circle)
        } else if c == self.cross {
            Some(Cell::Cross)
        } else {
            None
        }
    }
}
