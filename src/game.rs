//! A single Tic-Tac-Toe game over a board of any size.
//!
//! This module provides:
//! - Move legality (in bounds and empty)
//! - Move application
//! - Win and draw detection over rows, columns and diagonals
//! - Rendering through configurable tokens, and parsing that rendering back
//!
//! Turn order is not enforced here: any player may be passed to
//! [`SimpleGame::make_move`]. Whoever drives the game decides whose turn it is.

use std::fmt;

use tracing::trace;

use crate::board::{Board, Point};
use crate::cell::{Cell, Player, Tokens, Winner};
use crate::constants::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::error::{Error, Result};
use crate::lines::{find_owner, winning_combinations};

/// A Tic-Tac-Toe game on a `rows × columns` board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleGame {
    board: Board<Cell>,
    tokens: Tokens,
    lines: Vec<Vec<Point>>,
}

impl SimpleGame {
    /// Create an empty game. Both dimensions must be positive.
    pub fn new(rows: usize, columns: usize, tokens: Tokens) -> Result<Self> {
        let board = Board::new(rows, columns, Cell::Empty)?;
        Ok(Self::from_board(board, tokens))
    }

    /// The classic 3×3 game with default tokens.
    pub fn classic() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS, Tokens::default())
            .expect("default dimensions are positive")
    }

    fn from_board(board: Board<Cell>, tokens: Tokens) -> Self {
        let lines = winning_combinations(board.rows(), board.columns());
        Self {
            board,
            tokens,
            lines,
        }
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn columns(&self) -> usize {
        self.board.columns()
    }

    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    pub fn board(&self) -> &Board<Cell> {
        &self.board
    }

    /// The cell at `(x, y)`.
    pub fn cell(&self, x: usize, y: usize) -> Result<Cell> {
        self.board.get(x, y).copied()
    }

    /// Check if a move is legal: in bounds and on an empty cell.
    ///
    /// Out-of-range coordinates are simply illegal; this never fails.
    pub fn is_legal_move(&self, x: usize, y: usize) -> bool {
        matches!(self.board.get(x, y), Ok(Cell::Empty))
    }

    /// Place `player`'s mark at `(x, y)`.
    ///
    /// Returns `false` and leaves the board untouched if the move is illegal.
    pub fn make_move(&mut self, player: Player, x: usize, y: usize) -> bool {
        match self.board.get_mut(x, y) {
            Ok(cell) if cell.is_empty() => {
                *cell = player.to_cell();
                true
            }
            _ => {
                trace!(?player, x, y, "rejected move");
                false
            }
        }
    }

    /// All empty coordinates in row-major order.
    pub fn legal_moves(&self) -> impl Iterator<Item = Point> + '_ {
        self.board
            .points()
            .filter(|&(x, y)| self.is_legal_move(x, y))
    }

    pub fn has_legal_move(&self) -> bool {
        self.board.iter().any(|cell| cell.is_empty())
    }

    /// Get the result of the game.
    ///
    /// Returns the player owning a complete row, column or diagonal (circle is
    /// checked first), otherwise `Draw` once no legal move remains, otherwise
    /// `None` while the game is in progress.
    pub fn winner(&self) -> Option<Winner> {
        let owner = find_owner(&self.lines, |(x, y)| {
            self.board.get(x, y).ok().and_then(|cell| cell.player())
        });
        match owner {
            Some(player) => Some(Winner::Won(player)),
            None if !self.has_legal_move() => Some(Winner::Draw),
            None => None,
        }
    }

    /// Rebuild a game from its rendering.
    ///
    /// Expects one line per row with cells separated by whitespace, each cell
    /// being exactly one of the three tokens. Blank lines are ignored.
    pub fn from_layout(text: &str, tokens: Tokens) -> Result<Self> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let x = rows.len();
            let row = line
                .split_whitespace()
                .enumerate()
                .map(|(y, token)| parse_token(token, &tokens, x, y))
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }

        let columns = rows.first().map(Vec::len).ok_or_else(|| Error::InvalidLayout {
            reason: "no rows".to_string(),
        })?;
        if let Some((x, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
            return Err(Error::InvalidLayout {
                reason: format!("row {x} has {} cells, expected {columns}", row.len()),
            });
        }

        let board = Board::from_fn(rows.len(), columns, |(x, y)| rows[x][y])?;
        Ok(Self::from_board(board, tokens))
    }
}

fn parse_token(token: &str, tokens: &Tokens, row: usize, column: usize) -> Result<Cell> {
    let unknown = || Error::UnknownToken {
        token: token.to_string(),
        row,
        column,
    };
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => tokens.cell_for(c).ok_or_else(unknown),
        _ => Err(unknown()),
    }
}

impl fmt::Display for SimpleGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens = self.tokens;
        write!(f, "{}", self.board.display_with(|&cell| tokens.symbol(cell)))
    }
}
