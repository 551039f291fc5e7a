//! Canonical checkers-rule constants.
//!
//! Board geometry, home rows, terminal scores, and the starting diagram used
//! to initialize and validate board setup.

/// Board edge length.
pub const BOARD_SIZE: i8 = 8;

/// Row Light pieces start nearest to (Dark men promote here).
pub const LIGHT_HOME_ROW: i8 = 7;

/// Row Dark pieces start nearest to (Light men promote here).
pub const DARK_HOME_ROW: i8 = 0;

/// Rows initially filled by each side.
pub const LIGHT_START_ROWS: std::ops::RangeInclusive<i8> = 5..=7;
pub const DARK_START_ROWS: std::ops::RangeInclusive<i8> = 0..=2;

/// Score of a position where the opponent has no pieces left.
pub const WIN_SCORE: i32 = 10_000;

/// Score of a terminal position where pieces remain but a side cannot move.
pub const STALEMATE_SCORE: i32 = 0;

/// Standard starting position. `x`/`X` are dark man/king, `o`/`O` light.
pub const STARTING_POSITION_DIAGRAM: &str = "\
.x.x.x.x
x.x.x.x.
.x.x.x.x
........
........
o.o.o.o.
.o.o.o.o
o.o.o.o.";
