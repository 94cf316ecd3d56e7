//! Interactive play over a line-based text stream.
//!
//! A [`Session`] prompts the player to move for comma-separated coordinates,
//! re-prompts on malformed or illegal input and prints the board after every
//! accepted move. Coordinates outside the board being asked about count as
//! malformed, not as an illegal move. It works over any `BufRead`/`Write` pair, so the binary
//! wires it to stdin/stdout and tests drive it from strings.
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use super_tictactoe::game::SimpleGame;
//! use super_tictactoe::session::Session;
//!
//! let input = Cursor::new("0,0\n1,0\n0,1\n1,1\n0,2\n");
//! let mut output = Vec::new();
//! let mut game = SimpleGame::classic();
//! let result = Session::new(input, &mut output).play_simple(&mut game).unwrap();
//! assert!(result.is_some());
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::board::{Point, parse_point};
use crate::cell::{Player, Tokens, Winner};
use crate::game::SimpleGame;
use crate::nested::NestedGame;

const INVALID_COORDINATES: &str = "Invalid coordinates. Try again.";
const INVALID_GRID: &str = "Invalid grid. Try again.";
const INVALID_SQUARE: &str = "Invalid square. Try again.";

/// A prompt/response loop over a reader and a writer.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Play a single game to the end, cross first.
    ///
    /// Returns `Ok(None)` if the input ends before the game does.
    pub fn play_simple(&mut self, game: &mut SimpleGame) -> Result<Option<Winner>> {
        info!(rows = game.rows(), columns = game.columns(), "starting simple game");
        let tokens = *game.tokens();
        self.show(&*game)?;

        let mut player = Player::Cross;
        while game.winner().is_none() {
            let prompt = square_prompt(&tokens, player);
            let bounds = (game.rows(), game.columns());
            let Some((x, y)) = self.read_legal(&prompt, bounds, INVALID_SQUARE, |(x, y)| {
                game.is_legal_move(x, y)
            })?
            else {
                return Ok(None);
            };
            game.make_move(player, x, y);
            self.show(&*game)?;
            player = player.opponent();
        }

        self.finish(game.winner(), &tokens)
    }

    /// Play a nested game to the end.
    ///
    /// When the forced-move rule names a sub-board the grid prompt is skipped.
    /// Returns `Ok(None)` if the input ends before the game does.
    pub fn play_nested(&mut self, game: &mut NestedGame) -> Result<Option<Winner>> {
        info!(
            rows = game.rows(),
            columns = game.columns(),
            inner_rows = game.inner_rows(),
            inner_columns = game.inner_columns(),
            "starting nested game"
        );
        let tokens = *game.tokens();
        self.show(&*game)?;

        while game.winner().is_none() {
            let player = game.current_player();
            let outer = match game.required_board() {
                Some(outer) => outer,
                None => {
                    let prompt = format!(
                        "{} | choose a grid to play in (x, y):",
                        tokens.player_symbol(player)
                    );
                    let bounds = (game.rows(), game.columns());
                    match self.read_legal(&prompt, bounds, INVALID_GRID, |outer| {
                        game.is_legal_move(outer)
                    })? {
                        Some(outer) => outer,
                        None => return Ok(None),
                    }
                }
            };

            let prompt = square_prompt(&tokens, player);
            let bounds = (game.inner_rows(), game.inner_columns());
            let Some(inner) = self.read_legal(&prompt, bounds, INVALID_SQUARE, |inner| {
                game.is_legal(outer, inner)
            })?
            else {
                return Ok(None);
            };

            game.make_move(player, inner, outer);
            self.show(&*game)?;
            game.cycle_players();
        }

        self.finish(game.winner(), &tokens)
    }

    /// Prompt until a coordinate inside `bounds` (rows, columns) and passing
    /// `is_legal` is entered.
    fn read_legal(
        &mut self,
        prompt: &str,
        bounds: (usize, usize),
        rejection: &str,
        is_legal: impl Fn(Point) -> bool,
    ) -> Result<Option<Point>> {
        loop {
            let Some(point) = self.read_point(prompt)? else {
                return Ok(None);
            };
            if point.0 >= bounds.0 || point.1 >= bounds.1 {
                debug!(?point, ?bounds, "coordinate outside the board");
                writeln!(self.output, "{INVALID_COORDINATES}")?;
                continue;
            }
            if is_legal(point) {
                return Ok(Some(point));
            }
            debug!(?point, "illegal coordinate");
            writeln!(self.output, "{rejection}")?;
        }
    }

    /// Prompt until a well-formed coordinate is entered.
    fn read_point(&mut self, prompt: &str) -> Result<Option<Point>> {
        loop {
            write!(self.output, "{prompt} ")?;
            self.output.flush()?;

            let mut line = String::new();
            let n = self
                .input
                .read_line(&mut line)
                .context("failed to read coordinates")?;
            if n == 0 {
                info!("input closed before the game finished");
                return Ok(None);
            }
            match parse_point(&line) {
                Ok(point) => return Ok(Some(point)),
                Err(err) => {
                    debug!(%err, "rejected input");
                    writeln!(self.output, "{INVALID_COORDINATES}")?;
                }
            }
        }
    }

    fn show(&mut self, board: &impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{board}\n").context("failed to write board")
    }

    fn finish(&mut self, result: Option<Winner>, tokens: &Tokens) -> Result<Option<Winner>> {
        match result {
            Some(Winner::Won(player)) => {
                writeln!(self.output, "{} wins!", tokens.player_symbol(player))?
            }
            Some(Winner::Draw) => writeln!(self.output, "Draw!")?,
            None => {}
        }
        info!(?result, "game over");
        Ok(result)
    }
}

fn square_prompt(tokens: &Tokens, player: Player) -> String {
    format!(
        "{} | choose a square to play in (x, y):",
        tokens.player_symbol(player)
    )
}
