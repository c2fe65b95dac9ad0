#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to watch Paths being found on a Grid, one step at a time.
//!
//! ## Introduction
//! Pathfinding libraries usually run a search to completion and hand back the Path. A
//! visualizer needs the opposite: it wants to render every intermediate state, at a speed the
//! user controls, and be able to throw the search away at any moment.
//!
//! This crate provides such a steppable search. A [`Search`] is an explicit state machine that
//! holds its Frontier, visited set and predecessors between calls. Every call to
//! [`Search::step`] expands exactly one Position and paints the result onto the [`Grid`] as
//! Visited, Frontier and Path Cells. Three [Strategies](strategy) decide the order of
//! expansion: breadth-first, depth-first and A*.
//!
//! Around the Search, a [`Session`] owns the Grid the user paints on and keeps edits
//! consistent with the current run, and a [`Driver`] calls `step` at a cadence derived from
//! a speed.
//!
//! ## Examples
//! Searching a Grid directly:
//! ```
//! use stepwise_pathfinding::{CellKind, Grid, PathOrigin, Search, StepResult, StrategyKind};
//!
//! let mut grid: Grid = "
//!     S.#..
//!     ..#.#
//!     ....G
//! ".parse().unwrap();
//!
//! let mut search = Search::with_kind(&grid, StrategyKind::Bfs, PathOrigin::Target).unwrap();
//!
//! // the first step expands one neighbor of the Start and paints the Frontier
//! assert_eq!(search.step(&mut grid), StepResult::Continue);
//! assert_eq!(grid.kind((1, 0)), Some(CellKind::Visited));
//! assert_eq!(grid.kind((0, 1)), Some(CellKind::Frontier));
//!
//! while search.step(&mut grid) == StepResult::Continue {}
//!
//! let path = search.path().unwrap();
//! assert_eq!(path.cost(), 6);
//! assert_eq!(grid.kind((2, 3)), Some(CellKind::Path));
//! ```
//!
//! Through a Session, the way a user interface would:
//! ```
//! use stepwise_pathfinding::{Session, SessionConfig, StepResult};
//!
//! let mut session = Session::new(SessionConfig::with_size(3, 3));
//! session.set_start((0, 0)).unwrap();
//! session.set_goal((2, 2)).unwrap();
//! session.toggle_wall((1, 1)).unwrap();
//!
//! // fail fast on strategy names that do not exist
//! assert!(session.select_strategy("teleport").is_err());
//! session.select_strategy("dfs").unwrap();
//!
//! session.start_search().unwrap();
//! let mut last = None;
//! while let Some(result) = session.step() {
//!     last = Some(result);
//!     if result.is_terminal() {
//!         break;
//!     }
//! }
//! assert_eq!(last, Some(StepResult::Found));
//! ```
//!
//! ### Unreachable Goals
//! A Goal that cannot be reached is not an error: the Search ends with
//! [`StepResult::Exhausted`] once the Frontier runs dry.
//! ```
//! # use stepwise_pathfinding::{Grid, PathOrigin, Search, StepResult, StrategyKind};
//! let mut grid: Grid = "
//!     S.#
//!     .##
//!     #.G
//! ".parse().unwrap();
//! # let mut search = Search::with_kind(&grid, StrategyKind::AStar, PathOrigin::Target).unwrap();
//! # while search.step(&mut grid) == StepResult::Continue {}
//! // ...
//! assert_eq!(search.state(), stepwise_pathfinding::SearchState::Exhausted);
//! assert!(search.path().is_none());
//! ```
//!
//! ### Configuration
//! The [`SessionConfig`] sets the Grid size, the initial Strategy, the playback speed and where
//! A* traces its Paths from. [`SessionConfig::REFERENCE`] reproduces the classic visualizer.
//!
//! ### Features
//! - `parallel` (default): [`compare::compare_strategies`] runs the Strategies on the rayon
//!   thread pool.
//! - `generate` (default): random Wall layouts through [`terrain`].

/// A shorthand for Positions on the Grid: `(row, column)`
pub type Position = (usize, usize);

/// A [`HashMap`](hashbrown::HashMap) keyed by [`Position`]
pub type PositionMap<V> = hashbrown::HashMap<Position, V>;
/// A [`HashSet`](hashbrown::HashSet) of [`Position`]s
pub type PositionSet = hashbrown::HashSet<Position>;

mod cell_id;
pub use self::cell_id::{CellId, CellIdHasher, CellIdMap, CellIdSet};

mod config;
pub use self::config::SessionConfig;

pub mod error;
pub use self::error::{PlacementError, SessionError, UnknownStrategy};

mod grid;
pub use self::grid::{Cell, CellKind, Grid};

pub mod neighbors;

mod path;
pub use self::path::{Cost, Path};

pub mod strategy;
pub use self::strategy::{PathOrigin, Strategy, StrategyKind};

mod search;
pub use self::search::{Expansion, Search, SearchState, SearchStats, StepResult};

mod session;
pub use self::session::Session;

pub mod driver;
pub use self::driver::{Driver, Playback};

pub mod compare;

#[cfg(feature = "generate")]
pub mod terrain;

/// The most commonly used types
pub mod prelude {
    pub use crate::{
        Driver, Grid, PathOrigin, Position, Search, Session, SessionConfig, StepResult,
        StrategyKind,
    };
}
