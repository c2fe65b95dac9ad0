//! Runs several Strategies on copies of the same Grid and reports how they did.
//!
//! With the `parallel` feature, the Strategies run on the rayon thread pool, one Search per
//! thread. Each Search on its own stays single-threaded.

use crate::error::SessionError;
use crate::path::Path;
use crate::search::{Search, SearchStats, StepResult};
use crate::strategy::{PathOrigin, StrategyKind};
use crate::Grid;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How one Strategy did on a Grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// the Strategy that ran
    pub strategy: StrategyKind,
    /// [`StepResult::Found`] or [`StepResult::Exhausted`]
    pub result: StepResult,
    /// the Path, if one was found
    pub path: Option<Path>,
    /// the counters at the end of the run
    pub stats: SearchStats,
    /// the Grid as the Search left it
    pub grid: Grid,
}

/// Runs one Search to the end on a copy of `grid`.
pub fn run_to_completion(
    grid: &Grid,
    strategy: StrategyKind,
    origin: PathOrigin,
) -> Result<Outcome, SessionError> {
    let mut grid = grid.clone();
    let mut search = Search::with_kind(&grid, strategy, origin)?;
    // every Continue expands a different Cell
    let budget = grid.rows() * grid.columns() + 1;
    let result = search.run_to_end(&mut grid, budget);
    debug_assert!(result.is_terminal());
    Ok(Outcome {
        strategy,
        result,
        path: search.path().cloned(),
        stats: search.stats(),
        grid,
    })
}

/// Runs every Strategy in `strategies` to the end on its own copy of `grid`.
///
/// The Outcomes are in the same order as `strategies`.
///
/// ## Examples
/// ```
/// use stepwise_pathfinding::compare::compare_strategies;
/// use stepwise_pathfinding::{Grid, PathOrigin, StrategyKind};
///
/// let grid: Grid = "
///     S..#....
///     .#.#.##.
///     .#...#.G
/// ".parse().unwrap();
///
/// let outcomes = compare_strategies(&grid, &StrategyKind::ALL, PathOrigin::Target).unwrap();
///
/// let bfs = outcomes[0].path.as_ref().unwrap().cost();
/// let a_star = outcomes[2].path.as_ref().unwrap().cost();
/// assert_eq!(bfs, a_star);
/// assert!(outcomes[1].path.as_ref().unwrap().cost() >= bfs);
/// ```
pub fn compare_strategies(
    grid: &Grid,
    strategies: &[StrategyKind],
    origin: PathOrigin,
) -> Result<Vec<Outcome>, SessionError> {
    grid.start().ok_or(SessionError::MissingStart)?;
    grid.goal().ok_or(SessionError::MissingGoal)?;

    #[cfg(feature = "parallel")]
    let outcomes = strategies
        .par_iter()
        .map(|&strategy| run_to_completion(grid, strategy, origin))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let outcomes = strategies
        .iter()
        .map(|&strategy| run_to_completion(grid, strategy, origin))
        .collect();

    outcomes
}
