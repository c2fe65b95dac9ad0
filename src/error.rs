//! The errors of this crate.
//!
//! A running Search never fails. An unreachable Goal is a regular
//! [`StepResult::Exhausted`](crate::StepResult::Exhausted), not an error.

use crate::{CellKind, Position};
use thiserror::Error;

/// Why painting a Cell was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The Position is not on the Grid.
    #[error("{pos:?} is outside of the {rows}x{columns} Grid")]
    OutOfBounds {
        /// the rejected Position
        pos: Position,
        /// rows of the Grid
        rows: usize,
        /// columns of the Grid
        columns: usize,
    },

    /// The Cell is already a Start, Goal or Wall.
    #[error("{pos:?} is already taken by {kind:?}")]
    Occupied {
        /// the rejected Position
        pos: Position,
        /// what is already there
        kind: CellKind,
    },

    /// The Grid already has a Start.
    #[error("the Grid already has a Start at {0:?}")]
    DuplicateStart(Position),

    /// The Grid already has a Goal.
    #[error("the Grid already has a Goal at {0:?}")]
    DuplicateGoal(Position),

    /// Start and Goal cannot move while a Search is running.
    #[error("cannot move Start or Goal while a Search is running")]
    SearchActive,
}

/// A strategy identifier that does not name BFS, DFS or A*.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy {0:?}, expected one of bfs, dfs or astar")]
pub struct UnknownStrategy(pub String);

/// Why a text Grid could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    /// The text contained no rows.
    #[error("a Grid needs at least one row and one column")]
    Empty,

    /// Rows have different lengths.
    #[error("row {row} has {found} columns, expected {expected}")]
    InconsistentRow {
        /// index of the offending row
        row: usize,
        /// length of the first row
        expected: usize,
        /// length of the offending row
        found: usize,
    },

    /// A character that is not one of the Cell glyphs.
    #[error("invalid glyph {glyph:?} at {pos:?}")]
    InvalidGlyph {
        /// the character
        glyph: char,
        /// where it was found
        pos: Position,
    },

    /// Placing a glyph broke the one-Start/one-Goal rule.
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Everything a [`Session`](crate::Session) can refuse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A Search needs a Start.
    #[error("place a Start before searching")]
    MissingStart,

    /// A Search needs a Goal.
    #[error("place a Goal before searching")]
    MissingGoal,

    /// A Search is already running.
    #[error("a Search is already running, reset it first")]
    SearchActive,

    /// There is no Search to step, for example because the Session was reset.
    #[error("there is no Search to play, start one first")]
    NoSearch,

    /// See [`PlacementError`].
    #[error(transparent)]
    Placement(#[from] PlacementError),

    /// See [`UnknownStrategy`].
    #[error(transparent)]
    UnknownStrategy(#[from] UnknownStrategy),
}

/// A shorthand for results of [`Session`](crate::Session) operations.
pub type Result<T> = std::result::Result<T, SessionError>;
