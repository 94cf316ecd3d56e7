//! Random playouts.
//!
//! A playout plays uniformly random legal moves for both sides until the game
//! has a result. It drives the `demo` command and the randomized tests; it
//! does not evaluate positions.

use tracing::debug;

use crate::cell::{Player, Winner};
use crate::game::SimpleGame;
use crate::nested::NestedGame;

/// Play random moves on a single game, cross first, until it finishes.
pub fn simple_playout(game: &mut SimpleGame, rng: &mut fastrand::Rng) -> Winner {
    let mut player = Player::Cross;
    loop {
        if let Some(result) = game.winner() {
            debug!(?result, "simple playout finished");
            return result;
        }
        let moves: Vec<_> = game.legal_moves().collect();
        // winner() is Draw whenever no legal move remains
        let (x, y) = moves[rng.usize(..moves.len())];
        game.make_move(player, x, y);
        player = player.opponent();
    }
}

/// Play random moves on a nested game, respecting the forced-move rule, until
/// the outer game finishes.
pub fn nested_playout(game: &mut NestedGame, rng: &mut fastrand::Rng) -> Winner {
    let mut n_moves = 0usize;
    loop {
        if let Some(result) = game.winner() {
            debug!(?result, n_moves, "nested playout finished");
            return result;
        }
        let moves = game.legal_moves();
        let (outer, inner) = moves[rng.usize(..moves.len())];
        let player = game.current_player();
        if game.make_move(player, inner, outer) {
            game.cycle_players();
            n_moves += 1;
        }
    }
}
