//! Super-TicTacToe: play generalized and nested Tic-Tac-Toe in the terminal.
//!
//! ## Usage
//!
//! - `super-tictactoe` - Play a classic nested game
//! - `super-tictactoe play --simple` - Play a single game
//! - `super-tictactoe demo --seed 7` - Watch one random playout
//!
//! Set `RUST_LOG=debug` to log moves to stderr.

use std::io;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use super_tictactoe::cell::{Tokens, Winner};
use super_tictactoe::constants::{
    CIRCLE_TOKEN, CROSS_TOKEN, DEFAULT_COLUMNS, DEFAULT_ROWS, EMPTY_TOKEN,
};
use super_tictactoe::game::SimpleGame;
use super_tictactoe::nested::NestedGame;
use super_tictactoe::playout::{nested_playout, simple_playout};
use super_tictactoe::session::Session;

/// Super-TicTacToe: generalized and nested Tic-Tac-Toe
#[derive(Parser)]
#[command(name = "super-tictactoe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively, reading "x,y" coordinates from stdin
    Play(GameArgs),
    /// Play one game with random moves for both sides and print the result
    Demo {
        /// Seed for the random number generator
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        game: GameArgs,
    },
}

/// Board shape and tokens.
#[derive(Args, Clone)]
struct GameArgs {
    /// Play a single game instead of the nested variant
    #[arg(long)]
    simple: bool,
    /// Rows of the (outer) board
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    /// Columns of the (outer) board
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,
    /// Rows of each sub-board
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    inner_rows: usize,
    /// Columns of each sub-board
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    inner_columns: usize,
    /// Token for empty cells
    #[arg(long, default_value_t = EMPTY_TOKEN)]
    empty: char,
    /// Token for the circle player
    #[arg(long, default_value_t = CIRCLE_TOKEN)]
    circle: char,
    /// Token for the cross player
    #[arg(long, default_value_t = CROSS_TOKEN)]
    cross: char,
}

impl Default for GameArgs {
    fn default() -> Self {
        Self {
            simple: false,
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            inner_rows: DEFAULT_ROWS,
            inner_columns: DEFAULT_COLUMNS,
            empty: EMPTY_TOKEN,
            circle: CIRCLE_TOKEN,
            cross: CROSS_TOKEN,
        }
    }
}

/// A game built from the command line.
enum AnyGame {
    Simple(SimpleGame),
    Nested(NestedGame),
}

impl GameArgs {
    fn build(&self) -> Result<AnyGame> {
        let tokens =
            Tokens::new(self.empty, self.circle, self.cross).context("invalid tokens")?;
        let game = if self.simple {
            AnyGame::Simple(
                SimpleGame::new(self.rows, self.columns, tokens).context("invalid board size")?,
            )
        } else {
            AnyGame::Nested(
                NestedGame::new(
                    self.rows,
                    self.columns,
                    self.inner_rows,
                    self.inner_columns,
                    tokens,
                )
                .context("invalid board size")?,
            )
        };
        Ok(game)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play(args)) => run_play(&args),
        Some(Commands::Demo { seed, game }) => run_demo(seed, &game),
        None => run_play(&GameArgs::default()),
    }
}

fn run_play(args: &GameArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());
    match args.build()? {
        AnyGame::Simple(mut game) => session.play_simple(&mut game)?,
        AnyGame::Nested(mut game) => session.play_nested(&mut game)?,
    };
    Ok(())
}

fn run_demo(seed: Option<u64>, args: &GameArgs) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let (board, result, tokens) = match args.build()? {
        AnyGame::Simple(mut game) => {
            let result = simple_playout(&mut game, &mut rng);
            (game.to_string(), result, *game.tokens())
        }
        AnyGame::Nested(mut game) => {
            let result = nested_playout(&mut game, &mut rng);
            (game.to_string(), result, *game.tokens())
        }
    };

    println!("{board}\n");
    match result {
        Winner::Won(player) => println!("{} wins!", tokens.player_symbol(player)),
        Winner::Draw => println!("Draw!"),
    }
    Ok(())
}
