//! Super-TicTacToe: a generalized Tic-Tac-Toe rules engine.
//!
//! This crate provides single games on boards of any size and the nested
//! ("super") variant, where every cell of the outer board is itself a game and
//! each move decides which sub-board the opponent plays in next.
//!
//! ## Modules
//!
//! - [`board`] - Bounds-checked rectangular grid and coordinate parsing
//! - [`cell`] - Cells, players, results and display tokens
//! - [`lines`] - Winning combinations (rows, columns, diagonals)
//! - [`game`] - A single game: legality, moves, win/draw detection
//! - [`nested`] - The nested game with forced moves and tie-breaks
//! - [`session`] - Text prompt loop for interactive play
//! - [`playout`] - Random playouts
//! - [`constants`] - Default dimensions and tokens
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use super_tictactoe::cell::Player;
//! use super_tictactoe::nested::NestedGame;
//!
//! let mut game = NestedGame::classic();
//!
//! // Cross plays the middle-right square of the top-left sub-board...
//! assert!(game.make_move(Player::Cross, (1, 2), (0, 0)));
//! game.cycle_players();
//!
//! // ...so circle must answer in the middle-right sub-board.
//! assert!(!game.is_legal_move((0, 0)));
//! assert!(game.is_legal_move((1, 2)));
//! assert_eq!(game.winner(), None);
//! ```

pub mod board;
pub mod cell;
pub mod constants;
pub mod error;
pub mod game;
pub mod lines;
pub mod nested;
pub mod playout;
pub mod session;

pub use error::{Error, Result};
