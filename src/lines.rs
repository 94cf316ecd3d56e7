//! Winning combinations.
//!
//! A combination is a full row, a full column, or one of the two diagonals.
//! Diagonals only span the first `min(rows, columns)` positions, so on a
//! rectangular board diagonal wins live in the top-left square region (main
//! diagonal) or the top-right one (anti-diagonal).

use crate::board::Point;
use crate::cell::Player;

/// All combinations for a `rows × columns` board, in scan order: rows, then
/// columns, then the main diagonal, then the anti-diagonal.
pub fn winning_combinations(rows: usize, columns: usize) -> Vec<Vec<Point>> {
    let side = rows.min(columns);
    let mut lines = Vec::with_capacity(rows + columns + 2);

    // Rows
    for x in 0..rows {
        lines.push((0..columns).map(|y| (x, y)).collect());
    }
    // Columns
    for y in 0..columns {
        lines.push((0..rows).map(|x| (x, y)).collect());
    }
    // Main diagonal
    lines.push((0..side).map(|i| (i, i)).collect());
    // Anti-diagonal
    lines.push((0..side).map(|i| (i, columns - i - 1)).collect());

    lines
}

/// The first player (circle before cross) owning every point of some line.
///
/// `occupant` reports who holds a point; `None` means nobody does.
pub fn find_owner(
    lines: &[Vec<Point>],
    occupant: impl Fn(Point) -> Option<Player>,
) -> Option<Player> {
    Player::ALL.into_iter().find(|&player| {
        lines
            .iter()
            .any(|line| line.iter().all(|&pt| occupant(pt) == Some(player)))
    })
}
