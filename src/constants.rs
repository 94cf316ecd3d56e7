//! Default dimensions and tokens.
//!
//! Every value here can be overridden at runtime: games take their dimensions
//! and tokens as constructor arguments, and the binary exposes them as
//! command-line options.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default number of rows on a board (outer or inner).
pub const DEFAULT_ROWS: usize = 3;

/// Default number of columns on a board (outer or inner).
pub const DEFAULT_COLUMNS: usize = 3;

// =============================================================================
// Tokens
// =============================================================================

/// Token rendered for an empty cell.
pub const EMPTY_TOKEN: char = '-';

/// Token rendered for the circle player.
pub const CIRCLE_TOKEN: char = 'o';

/// Token rendered for the cross player.
pub const CROSS_TOKEN: char = 'x';

// =============================================================================
// Rendering
// =============================================================================

/// Separator between cells on the same rendered row.
pub const CELL_SEPARATOR: &str = " ";

/// Separator between sub-boards placed side by side.
pub const SUB_BOARD_SEPARATOR: &str = " | ";

/// Character repeated to separate outer rows of sub-boards.
pub const OUTER_ROW_RULE: char = '-';

/// Separator between the two numbers of a typed coordinate.
pub const COORD_SEPARATOR: char = ',';
