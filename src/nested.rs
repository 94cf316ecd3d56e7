//! Nested ("super") Tic-Tac-Toe.
//!
//! Every cell of the outer board holds a complete [`SimpleGame`]. A full move
//! names the sub-board (outer coordinate) and the cell inside it (inner
//! coordinate).
//!
//! ## Rules
//!
//! - The first move may go in any sub-board.
//! - After that, the inner coordinate of a player's last move names the
//!   sub-board the opponent must play in next.
//! - A drawn sub-board is closed for good. If the sub-board a player is sent to
//!   cannot take a move (drawn, or won and full) the player picks any playable
//!   sub-board instead.
//! - A won sub-board counts as that player's mark on the outer board. Drawn and
//!   unfinished sub-boards belong to nobody.
//! - When every sub-board is finished and no outer line is complete, the
//!   player who won more sub-boards wins. Equal counts are a draw.
//!
//! Turns are not switched automatically: the driver calls
//! [`NestedGame::cycle_players`] once per accepted move.

use std::fmt;

use tracing::{debug, trace};

use crate::board::{Board, Point, check_dimension};
use crate::cell::{Cell, Player, Tokens, Winner};
use crate::constants::{DEFAULT_COLUMNS, DEFAULT_ROWS, OUTER_ROW_RULE, SUB_BOARD_SEPARATOR};
use crate::error::Result;
use crate::game::SimpleGame;
use crate::lines::{find_owner, winning_combinations};

/// A nested game: an outer board of independent sub-games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedGame {
    grid: Board<SimpleGame>,
    tokens: Tokens,
    lines: Vec<Vec<Point>>,
    inner_rows: usize,
    inner_columns: usize,
    /// Most recent inner coordinate played by each player
    last_inner: [Option<Point>; 2],
    current: Player,
    previous: Player,
}

impl NestedGame {
    /// Create a `rows × columns` grid of empty `inner_rows × inner_columns`
    /// games. All four dimensions must be positive. Cross moves first.
    pub fn new(
        rows: usize,
        columns: usize,
        inner_rows: usize,
        inner_columns: usize,
        tokens: Tokens,
    ) -> Result<Self> {
        check_dimension("inner rows", inner_rows)?;
        check_dimension("inner columns", inner_columns)?;
        let inner = SimpleGame::new(inner_rows, inner_columns, tokens)?;
        let grid = Board::new(rows, columns, inner)?;
        Ok(Self {
            inner_rows,
            inner_columns,
            lines: winning_combinations(rows, columns),
            grid,
            tokens,
            last_inner: [None; 2],
            current: Player::Cross,
            previous: Player::Circle,
        })
    }

    /// The classic 3×3 grid of 3×3 games with default tokens.
    pub fn classic() -> Self {
        Self::new(
            DEFAULT_ROWS,
            DEFAULT_COLUMNS,
            DEFAULT_ROWS,
            DEFAULT_COLUMNS,
            Tokens::default(),
        )
        .expect("default dimensions are positive")
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn inner_rows(&self) -> usize {
        self.inner_rows
    }

    pub fn inner_columns(&self) -> usize {
        self.inner_columns
    }

    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    /// The player expected to move next.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// The player who moved last (circle before the first move).
    pub fn previous_player(&self) -> Player {
        self.previous
    }

    /// Hand the turn to the other player.
    pub fn cycle_players(&mut self) {
        std::mem::swap(&mut self.current, &mut self.previous);
        trace!(current = ?self.current, "cycled players");
    }

    /// The sub-board at an outer coordinate.
    pub fn sub_board_at(&self, outer: Point) -> Result<&SimpleGame> {
        self.grid.get(outer.0, outer.1)
    }

    /// The cell at `inner` inside the sub-board at `outer`.
    pub fn cell_at(&self, outer: Point, inner: Point) -> Result<Cell> {
        self.sub_board_at(outer)?.cell(inner.0, inner.1)
    }

    /// The most recent inner coordinate played by `player`.
    pub fn last_inner_move(&self, player: Player) -> Option<Point> {
        self.last_inner[player.index()]
    }

    /// The sub-board the forced-move rule points at, whether or not it can
    /// take a move.
    ///
    /// `None` before anyone has moved, and `None` while the previous player
    /// has no move of their own yet.
    pub fn forced_target(&self) -> Option<Point> {
        self.last_inner_move(self.previous)
    }

    /// Whether the sub-board at `outer` can take a move at all.
    pub fn is_playable(&self, outer: Point) -> bool {
        match self.sub_board_at(outer) {
            Ok(game) => game.winner() != Some(Winner::Draw) && game.has_legal_move(),
            Err(_) => false,
        }
    }

    /// The sub-board the current player must play in, or `None` for a free
    /// choice.
    ///
    /// A forced target that cannot take a move releases the player.
    pub fn required_board(&self) -> Option<Point> {
        self.forced_target()
            .filter(|&target| self.is_playable(target))
    }

    /// Check if the current player may play in the sub-board at `outer`.
    pub fn is_legal_move(&self, outer: Point) -> bool {
        if !self.is_playable(outer) {
            return false;
        }
        match self.required_board() {
            Some(target) => target == outer,
            None => true,
        }
    }

    /// Check a full move: the sub-board is open to the current player and the
    /// cell inside it is empty.
    pub fn is_legal(&self, outer: Point, inner: Point) -> bool {
        self.is_legal_move(outer)
            && self
                .sub_board_at(outer)
                .is_ok_and(|game| game.is_legal_move(inner.0, inner.1))
    }

    /// Play `player`'s mark at `inner` inside the sub-board at `outer`.
    ///
    /// Returns `false` without touching anything when the sub-board is not
    /// open or the cell is taken. Whose turn it is is not checked.
    pub fn make_move(&mut self, player: Player, inner: Point, outer: Point) -> bool {
        if !self.is_legal_move(outer) {
            trace!(?player, ?outer, "sub-board not open");
            return false;
        }
        let Ok(game) = self.grid.get_mut(outer.0, outer.1) else {
            return false;
        };
        if !game.make_move(player, inner.0, inner.1) {
            return false;
        }
        debug!(?player, ?outer, ?inner, sub_board = ?game.winner(), "move accepted");
        self.last_inner[player.index()] = Some(inner);
        true
    }

    /// Every full move the current player could make, as `(outer, inner)`.
    pub fn legal_moves(&self) -> Vec<(Point, Point)> {
        self.grid
            .points()
            .filter(|&outer| self.is_legal_move(outer))
            .flat_map(|outer| {
                self.grid
                    .get(outer.0, outer.1)
                    .into_iter()
                    .flat_map(move |game| game.legal_moves().map(move |inner| (outer, inner)))
            })
            .collect()
    }

    /// Number of sub-boards won outright by `player`. Draws earn nothing.
    pub fn earned_squares(&self, player: Player) -> usize {
        self.grid
            .iter()
            .filter(|game| game.winner() == Some(Winner::Won(player)))
            .count()
    }

    /// Whether every sub-board has a result (won or drawn).
    pub fn all_finished(&self) -> bool {
        self.grid.iter().all(|game| game.winner().is_some())
    }

    /// Get the result of the outer game.
    ///
    /// An outer line counts when every sub-board on it was won by the same
    /// player. Without one, the game ends only when every sub-board is
    /// finished, and then goes to whoever earned more sub-boards.
    pub fn winner(&self) -> Option<Winner> {
        let results = Board::from_fn(self.rows(), self.columns(), |(x, y)| {
            self.grid
                .get(x, y)
                .ok()
                .and_then(SimpleGame::winner)
                .and_then(Winner::player)
        })
        .ok()?;
        let owner = find_owner(&self.lines, |(x, y)| results.get(x, y).ok().copied().flatten());
        if let Some(player) = owner {
            return Some(Winner::Won(player));
        }
        if !self.all_finished() {
            return None;
        }

        let circle = self.earned_squares(Player::Circle);
        let cross = self.earned_squares(Player::Cross);
        trace!(circle, cross, "all sub-boards finished, comparing earned squares");
        Some(match circle.cmp(&cross) {
            std::cmp::Ordering::Greater => Winner::Won(Player::Circle),
            std::cmp::Ordering::Less => Winner::Won(Player::Cross),
            std::cmp::Ordering::Equal => Winner::Draw,
        })
    }
}

impl fmt::Display for NestedGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut width = 0;
        for (x, row) in self.grid.rows_iter().enumerate() {
            let rendered: Vec<String> = row.iter().map(ToString::to_string).collect();
            let split: Vec<Vec<&str>> = rendered.iter().map(|s| s.lines().collect()).collect();

            if x > 0 {
                writeln!(f)?;
                let rule: String = std::iter::repeat_n(OUTER_ROW_RULE, width).collect();
                writeln!(f, "{rule}")?;
            }
            for k in 0..self.inner_rows() {
                if k > 0 {
                    writeln!(f)?;
                }
                let line = split
                    .iter()
                    .map(|lines| lines.get(k).copied().unwrap_or_default())
                    .collect::<Vec<_>>()
                    .join(SUB_BOARD_SEPARATOR);
                width = line.chars().count();
                f.write_str(&line)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// Play a full move for the current player and pass the turn.
    fn turn(game: &mut NestedGame, outer: Point, inner: Point) {
        let player = game.current_player();
        assert!(
            game.make_move(player, inner, outer),
            "{player:?} at {outer:?}/{inner:?} should be legal"
        );
        game.cycle_players();
    }

    #[test]
    fn test_initial_state() {
        let game = NestedGame::classic();
        assert_eq!(game.current_player(), Player::Cross);
        assert_eq!(game.previous_player(), Player::Circle);
        assert_eq!(game.forced_target(), None);
        assert_eq!(game.winner(), None);
        assert_eq!(game.legal_moves().len(), 81);
        assert_eq!(game.inner_rows(), 3);
        assert_eq!(game.inner_columns(), 3);
    }

    #[test]
    fn test_invalid_dimensions() {
        let tokens = Tokens::default();
        assert!(matches!(
            NestedGame::new(0, 3, 3, 3, tokens),
            Err(Error::InvalidDimension { name: "rows", .. })
        ));
        assert!(matches!(
            NestedGame::new(3, 0, 3, 3, tokens),
            Err(Error::InvalidDimension { name: "columns", .. })
        ));
        assert!(matches!(
            NestedGame::new(3, 3, 0, 3, tokens),
            Err(Error::InvalidDimension {
                name: "inner rows",
                ..
            })
        ));
        assert!(matches!(
            NestedGame::new(3, 3, 3, 0, tokens),
            Err(Error::InvalidDimension {
                name: "inner columns",
                ..
            })
        ));

        let err = NestedGame::new(3, 3, 0, 0, tokens).unwrap_err();
        assert_eq!(err.to_string(), "inner rows must be greater than 0 (got 0)");
    }

    #[test]
    fn test_forced_target_follows_inner_coordinate() {
        let mut game = NestedGame::classic();
        turn(&mut game, (0, 0), (1, 2));

        assert_eq!(game.forced_target(), Some((1, 2)));
        assert_eq!(game.required_board(), Some((1, 2)));
        for outer in game.grid.points() {
            assert_eq!(game.is_legal_move(outer), outer == (1, 2), "outer {outer:?}");
        }
        assert!(!game.make_move(Player::Circle, (0, 0), (0, 0)));
        assert!(game.make_move(Player::Circle, (0, 0), (1, 2)));
    }

    #[test]
    fn test_forced_target_before_cycle_is_free() {
        let mut game = NestedGame::classic();
        assert!(game.make_move(Player::Cross, (1, 2), (0, 0)));
        // circle has not moved, so nothing is forced yet
        assert_eq!(game.forced_target(), None);
        assert!(game.is_legal_move((2, 2)));
    }

    #[test]
    fn test_out_of_bounds_outer_is_illegal() {
        let game = NestedGame::classic();
        assert!(!game.is_legal_move((3, 0)));
        assert!(!game.is_legal_move((0, 3)));
        assert!(!game.is_legal((0, 0), (0, 3)));
        assert!(game.sub_board_at((3, 3)).is_err());
        assert!(game.cell_at((0, 0), (3, 0)).is_err());
    }

    #[test]
    fn test_cell_at_reaches_inner_cell() {
        let mut game = NestedGame::classic();
        turn(&mut game, (2, 1), (0, 2));
        assert_eq!(game.cell_at((2, 1), (0, 2)), Ok(Cell::Cross));
        assert_eq!(game.cell_at((0, 2), (2, 1)), Ok(Cell::Empty));
        assert_eq!(game.last_inner_move(Player::Cross), Some((0, 2)));
    }

    #[test]
    fn test_single_cell_sub_boards() {
        // With 1x1 sub-boards every move wins its sub-board outright.
        let mut game = NestedGame::new(2, 2, 1, 1, Tokens::default()).unwrap();
        turn(&mut game, (0, 0), (0, 0));
        // forced to (0,0), which is now won and full: free choice
        assert_eq!(game.forced_target(), Some((0, 0)));
        assert_eq!(game.required_board(), None);
        assert!(!game.is_legal_move((0, 0)));
        turn(&mut game, (1, 1), (0, 0));
        assert_eq!(game.winner(), None);
        turn(&mut game, (0, 1), (0, 0));
        assert_eq!(game.winner(), Some(Winner::Won(Player::Cross)));
    }

    const CROSS_WIN: &str = "x x x\n- - -\n- - -";
    const CIRCLE_WIN: &str = "o o o\n- - -\n- - -";
    const DRAWN: &str = "x o x\nx o o\no x x";

    /// Build a classic game whose sub-boards are given as layouts, row-major.
    fn with_sub_boards(layouts: [&str; 9]) -> NestedGame {
        let mut game = NestedGame::classic();
        for (i, layout) in layouts.into_iter().enumerate() {
            let sub = SimpleGame::from_layout(layout, Tokens::default()).unwrap();
            game.grid.set(sub, i / 3, i % 3).unwrap();
        }
        game
    }

    #[test]
    fn test_drawn_forced_target_gives_free_choice() {
        let empty = "- - -\n- - -\n- - -";
        let mut layouts = [empty; 9];
        layouts[5] = DRAWN; // outer (1,2)
        let mut game = with_sub_boards(layouts);

        turn(&mut game, (0, 0), (1, 2));
        assert_eq!(game.forced_target(), Some((1, 2)));
        assert_eq!(game.required_board(), None);
        assert!(!game.is_legal_move((1, 2)));
        for outer in game.grid.points().filter(|&p| p != (1, 2)) {
            assert!(game.is_legal_move(outer), "outer {outer:?}");
        }
    }

    #[test]
    fn test_won_sub_board_with_space_stays_forced() {
        let empty = "- - -\n- - -\n- - -";
        let mut layouts = [empty; 9];
        layouts[4] = "x x x\n- - -\n- - -"; // outer (1,1), won by cross
        let mut game = with_sub_boards(layouts);

        // circle's inner (1,1) sends cross back to the won sub-board
        turn(&mut game, (0, 0), (2, 2));
        turn(&mut game, (2, 2), (1, 1));
        assert_eq!(game.forced_target(), Some((1, 1)));
        assert_eq!(game.required_board(), Some((1, 1)));
        assert!(game.is_legal_move((1, 1)));
        assert!(!game.is_legal_move((0, 0)));

        turn(&mut game, (1, 1), (2, 2));
        assert_eq!(game.cell_at((1, 1), (2, 2)), Ok(Cell::Cross));
        assert_eq!(
            game.sub_board_at((1, 1)).unwrap().winner(),
            Some(Winner::Won(Player::Cross))
        );
    }

    #[test]
    fn test_outer_line_of_won_sub_boards() {
        let empty = "- - -\n- - -\n- - -";
        let game = with_sub_boards([
            CROSS_WIN, empty, CIRCLE_WIN, //
            empty, CROSS_WIN, CIRCLE_WIN, //
            DRAWN, empty, CROSS_WIN,
        ]);
        assert_eq!(game.winner(), Some(Winner::Won(Player::Cross)));
    }

    #[test]
    fn test_drawn_sub_board_breaks_line() {
        let empty = "- - -\n- - -\n- - -";
        let game = with_sub_boards([
            CROSS_WIN, CROSS_WIN, DRAWN, //
            empty, empty, empty, //
            empty, empty, empty,
        ]);
        assert_eq!(game.winner(), None);
        assert_eq!(game.earned_squares(Player::Cross), 2);
        assert_eq!(game.earned_squares(Player::Circle), 0);
    }

    #[test]
    fn test_tie_break_more_earned_squares_wins() {
        let game = with_sub_boards([
            CROSS_WIN, CIRCLE_WIN, CROSS_WIN, //
            CROSS_WIN, DRAWN, CIRCLE_WIN, //
            CIRCLE_WIN, CROSS_WIN, DRAWN,
        ]);
        assert!(game.all_finished());
        assert_eq!(game.earned_squares(Player::Cross), 4);
        assert_eq!(game.earned_squares(Player::Circle), 3);
        assert_eq!(game.winner(), Some(Winner::Won(Player::Cross)));
    }

    #[test]
    fn test_tie_break_equal_counts_is_draw() {
        let game = with_sub_boards([
            CROSS_WIN, CIRCLE_WIN, CROSS_WIN, //
            DRAWN, DRAWN, CIRCLE_WIN, //
            CIRCLE_WIN, CROSS_WIN, DRAWN,
        ]);
        assert_eq!(game.earned_squares(Player::Cross), 3);
        assert_eq!(game.earned_squares(Player::Circle), 3);
        assert_eq!(game.winner(), Some(Winner::Draw));
    }

    #[test]
    fn test_display_layout() {
        let mut game = NestedGame::new(2, 2, 2, 2, Tokens::default()).unwrap();
        turn(&mut game, (0, 1), (1, 0));
        let expected = "\
- - | - -
- - | x -
---------
- - | - -
- - | - -";
        assert_eq!(game.to_string(), expected);
    }
}
