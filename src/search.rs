use crate::error::SessionError;
use crate::path::{Cost, Path};
use crate::strategy::{Frontier, PathOrigin, Strategy, StrategyKind};
use crate::{CellId, CellIdMap, CellIdSet, CellKind, Grid, Position};

use log::{debug, trace, warn};

/// What a single call to [`Search::step`] achieved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepResult {
    /// One Position was expanded, the Search goes on.
    Continue,
    /// The Goal was reached and the Path is painted. Terminal.
    Found,
    /// The Frontier ran dry without reaching the Goal. Terminal.
    Exhausted,
}

impl StepResult {
    /// `true` for [`Found`](StepResult::Found) and [`Exhausted`](StepResult::Exhausted).
    pub fn is_terminal(self) -> bool {
        !matches!(self, StepResult::Continue)
    }
}

/// Lifecycle of a [`Search`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchState {
    /// created, nothing expanded yet
    NotStarted,
    /// at least one step was taken
    Running,
    /// the Goal was reached
    Found,
    /// the Goal is unreachable
    Exhausted,
}

impl SearchState {
    /// `true` while more steps can make progress.
    pub fn is_active(self) -> bool {
        matches!(self, SearchState::NotStarted | SearchState::Running)
    }
}

/// The work done by one step: which Position was expanded and which neighbors were queued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expansion {
    /// the expanded Position
    pub node: Position,
    /// neighbors pushed onto the Frontier, in the order they were pushed
    pub pushed: Vec<Position>,
}

/// Counters of a [`Search`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// calls to `step` that did work (terminal no-op calls are not counted)
    pub steps: usize,
    /// Positions expanded
    pub expansions: usize,
    /// the largest the Frontier has been
    pub peak_frontier: usize,
    /// the Cost of the Path, once found
    pub path_cost: Option<Cost>,
}

/// A single resumable search run from the Start to the Goal of a [`Grid`].
///
/// Every call to [`step`](Search::step) expands at most one Position and paints the result onto
/// the Grid, so a driver can render every intermediate state. The Search does not hold on to
/// the Grid between steps. It does however assume that Start, Goal and Walls do not change for
/// the duration of the run: if they do, drop the Search and start a new one.
///
/// ## Examples
/// ```
/// use stepwise_pathfinding::{Grid, PathOrigin, Search, StepResult, StrategyKind};
///
/// let mut grid: Grid = "
///     S.#.
///     .##.
///     ...G
/// ".parse().unwrap();
///
/// let mut search = Search::new(&grid, StrategyKind::Bfs.build(PathOrigin::Target)).unwrap();
/// while search.step(&mut grid) == StepResult::Continue {}
///
/// assert_eq!(search.path().unwrap().cost(), 5);
/// // stepping a finished Search does nothing
/// assert_eq!(search.step(&mut grid), StepResult::Found);
/// ```
#[derive(Debug)]
pub struct Search {
    rows: usize,
    columns: usize,
    start: Position,
    goal: Position,
    strategy: Box<dyn Strategy>,
    frontier: Frontier,
    visited: CellIdSet,
    predecessors: CellIdMap<Position>,
    state: SearchState,
    expanded: Vec<Position>,
    last_expansion: Option<Expansion>,
    live_path: Vec<Position>,
    path: Option<Path>,
    steps: usize,
    peak_frontier: usize,
    neighbor_buf: Vec<Position>,
}

fn cell_id(grid: &Grid, pos: Position) -> CellId {
    grid.id(pos)
        .expect("Internal Error in Search: Position left the Grid. Please report this")
}

impl Search {
    /// Prepares a Search over `grid` using `strategy`.
    ///
    /// The Start is marked as visited and its non-Wall neighbors become the initial Frontier.
    /// Nothing is painted until the first [`step`](Search::step).
    ///
    /// Fails if the Grid has no Start or no Goal.
    pub fn new(grid: &Grid, mut strategy: Box<dyn Strategy>) -> Result<Search, SessionError> {
        let start = grid.start().ok_or(SessionError::MissingStart)?;
        let goal = grid.goal().ok_or(SessionError::MissingGoal)?;

        strategy.initialize(start, goal);

        let mut visited = CellIdSet::default();
        visited.insert(cell_id(grid, start));

        let mut frontier = Frontier::new();
        let mut predecessors = CellIdMap::default();
        for neighbor in grid.neighbors(start) {
            if grid.kind(neighbor) == Some(CellKind::Wall) {
                continue;
            }
            if strategy.relax(start, neighbor) {
                frontier.push_back(neighbor);
                predecessors.insert(cell_id(grid, neighbor), start);
            }
        }

        debug!(
            "{} search from {:?} to {:?} on a {}x{} Grid, {} seeds",
            strategy.kind(),
            start,
            goal,
            grid.rows(),
            grid.columns(),
            frontier.len()
        );

        Ok(Search {
            rows: grid.rows(),
            columns: grid.columns(),
            start,
            goal,
            strategy,
            peak_frontier: frontier.len(),
            frontier,
            visited,
            predecessors,
            state: SearchState::NotStarted,
            expanded: vec![],
            last_expansion: None,
            live_path: vec![],
            path: None,
            steps: 0,
            neighbor_buf: Vec::with_capacity(4),
        })
    }

    /// Shorthand for `Search::new(grid, kind.build(origin))`.
    pub fn with_kind(
        grid: &Grid,
        kind: StrategyKind,
        origin: PathOrigin,
    ) -> Result<Search, SessionError> {
        Search::new(grid, kind.build(origin))
    }

    /// Expands one Position and paints the outcome onto `grid`.
    ///
    /// Positions taken from the Frontier that are Walls, the Start or already visited are
    /// skipped within the same call, so every `Continue` corresponds to exactly one expansion.
    ///
    /// Once [`Found`](StepResult::Found) or [`Exhausted`](StepResult::Exhausted) was returned,
    /// further calls return the same result without touching the Grid.
    ///
    /// `grid` must be the Grid the Search was created on. A Grid of another size, or with the
    /// Start or Goal elsewhere, ends the Search as [`Exhausted`](StepResult::Exhausted)
    /// without being touched.
    pub fn step(&mut self, grid: &mut Grid) -> StepResult {
        match self.state {
            SearchState::Found => return StepResult::Found,
            SearchState::Exhausted => return StepResult::Exhausted,
            SearchState::NotStarted | SearchState::Running => {}
        }
        if !self.fits(grid) {
            warn!(
                "{} search built for a {}x{} Grid from {:?} to {:?} was given another Grid, stopping",
                self.strategy.kind(),
                self.rows,
                self.columns,
                self.start,
                self.goal
            );
            self.live_path.clear();
            self.state = SearchState::Exhausted;
            return StepResult::Exhausted;
        }
        self.steps += 1;

        let (current, current_id) = loop {
            let Some(pos) = self.strategy.select_next(&mut self.frontier, self.goal) else {
                return self.exhaust(grid);
            };
            let id = cell_id(grid, pos);
            if pos == self.start
                || grid.kind(pos) == Some(CellKind::Wall)
                || self.visited.contains(&id)
            {
                continue;
            }
            break (pos, id);
        };

        self.state = SearchState::Running;
        self.visited.insert(current_id);
        self.expanded.push(current);

        if current == self.goal {
            return self.finish(grid);
        }

        grid.mark(current, CellKind::Visited);
        if self.strategy.draws_live_path() {
            self.redraw_live_path(grid, current);
        }

        let mut neighbors = std::mem::take(&mut self.neighbor_buf);
        grid.neighbors_into(current, &mut neighbors);
        let mut pushed = vec![];
        for &neighbor in neighbors.iter() {
            let id = cell_id(grid, neighbor);
            if self.visited.contains(&id) || grid.kind(neighbor) == Some(CellKind::Wall) {
                continue;
            }
            if self.strategy.relax(current, neighbor) {
                self.frontier.push_back(neighbor);
                self.predecessors.insert(id, current);
                pushed.push(neighbor);
            }
        }
        self.neighbor_buf = neighbors;
        self.peak_frontier = self.peak_frontier.max(self.frontier.len());

        if !self.strategy.draws_live_path() {
            for &pos in self.frontier.iter() {
                if grid.kind(pos) != Some(CellKind::Visited) {
                    grid.mark(pos, CellKind::Frontier);
                }
            }
        }

        trace!(
            "expanded {:?}, pushed {:?}, frontier {}",
            current,
            pushed,
            self.frontier.len()
        );
        self.last_expansion = Some(Expansion {
            node: current,
            pushed,
        });
        StepResult::Continue
    }

    /// Calls [`step`](Search::step) until the Search ends or `max_steps` calls were made.
    ///
    /// Returns the result of the last call.
    pub fn run_to_end(&mut self, grid: &mut Grid, max_steps: usize) -> StepResult {
        let mut result = self.current_result();
        for _ in 0..max_steps {
            result = self.step(grid);
            if result.is_terminal() {
                break;
            }
        }
        result
    }

    /// `true` if `grid` has the size, Start and Goal this Search was created with.
    fn fits(&self, grid: &Grid) -> bool {
        grid.rows() == self.rows
            && grid.columns() == self.columns
            && grid.start() == Some(self.start)
            && grid.goal() == Some(self.goal)
    }

    fn current_result(&self) -> StepResult {
        match self.state {
            SearchState::Found => StepResult::Found,
            SearchState::Exhausted => StepResult::Exhausted,
            SearchState::NotStarted | SearchState::Running => StepResult::Continue,
        }
    }

    fn exhaust(&mut self, grid: &mut Grid) -> StepResult {
        self.clear_live_path(grid);
        self.state = SearchState::Exhausted;
        debug!(
            "{} search exhausted after {} expansions, no Path to {:?}",
            self.strategy.kind(),
            self.expanded.len(),
            self.goal
        );
        StepResult::Exhausted
    }

    fn finish(&mut self, grid: &mut Grid) -> StepResult {
        self.clear_live_path(grid);
        let steps = self
            .strategy
            .reconstruct_path(self.goal)
            .unwrap_or_else(|| self.trace_back(grid, self.goal));
        for &pos in steps.iter() {
            grid.mark(pos, CellKind::Path);
        }
        let path = Path::new(steps);
        debug!(
            "{} search found {} after {} expansions",
            self.strategy.kind(),
            path,
            self.expanded.len()
        );
        self.path = Some(path);
        self.state = SearchState::Found;
        StepResult::Found
    }

    /// Walks the predecessors back from `target` to the Start.
    fn trace_back(&self, grid: &Grid, target: Position) -> Vec<Position> {
        let mut steps = vec![target];
        let mut current = target;
        while current != self.start {
            match self.predecessors.get(&cell_id(grid, current)) {
                Some(&prev) => {
                    current = prev;
                    steps.push(prev);
                }
                None => break,
            }
        }
        steps.reverse();
        steps
    }

    fn clear_live_path(&mut self, grid: &mut Grid) {
        for pos in self.live_path.drain(..) {
            if grid.kind(pos) != Some(CellKind::Path) {
                continue;
            }
            let restored = if self.visited.contains(&cell_id(grid, pos)) {
                CellKind::Visited
            } else {
                CellKind::Empty
            };
            grid.mark(pos, restored);
        }
    }

    fn redraw_live_path(&mut self, grid: &mut Grid, current: Position) {
        self.clear_live_path(grid);
        if let Some(steps) = self.strategy.reconstruct_path(current) {
            for &pos in steps.iter() {
                if grid.mark(pos, CellKind::Path) {
                    self.live_path.push(pos);
                }
            }
        }
    }

    /// The Start of this Search
    pub fn start(&self) -> Position {
        self.start
    }

    /// The Goal of this Search
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Which Strategy drives this Search
    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// The current lifecycle state
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// `true` once the Search reached a terminal state.
    pub fn is_finished(&self) -> bool {
        !self.state.is_active()
    }

    /// The Positions waiting to be expanded. May contain duplicates and already visited
    /// Positions; those are skipped when they come up.
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// `true` if the Cell with `id` was expanded (or is the Start).
    pub fn is_visited(&self, id: CellId) -> bool {
        self.visited.contains(&id)
    }

    /// Number of visited Cells, including the Start.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// All expanded Positions, in expansion order.
    pub fn expanded(&self) -> &[Position] {
        &self.expanded
    }

    /// What the most recent expanding step did. `None` before the first expansion; the step
    /// that reaches the Goal queues nothing and leaves it untouched.
    pub fn last_expansion(&self) -> Option<&Expansion> {
        self.last_expansion.as_ref()
    }

    /// The Position that most recently queued the Cell with `id`.
    pub fn predecessor(&self, id: CellId) -> Option<Position> {
        self.predecessors.get(&id).copied()
    }

    /// The Path, once the Search returned [`Found`](StepResult::Found).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// Counters describing the run so far.
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            steps: self.steps,
            expansions: self.expanded.len(),
            peak_frontier: self.peak_frontier,
            path_cost: self.path.as_ref().map(Path::cost),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(grid: &Grid, kind: StrategyKind) -> Search {
        Search::with_kind(grid, kind, PathOrigin::Target).unwrap()
    }

    #[test]
    fn needs_start_and_goal() {
        let grid: Grid = "S..".parse().unwrap();
        assert_eq!(
            Search::with_kind(&grid, StrategyKind::Bfs, PathOrigin::Target).unwrap_err(),
            SessionError::MissingGoal
        );
        let grid: Grid = "..G".parse().unwrap();
        assert_eq!(
            Search::with_kind(&grid, StrategyKind::Bfs, PathOrigin::Target).unwrap_err(),
            SessionError::MissingStart
        );
    }

    #[test]
    fn other_grid_stops_the_search() {
        let mut grid: Grid = "S...\n....\n...G".parse().unwrap();

        let mut bfs = search(&grid, StrategyKind::Bfs);
        let mut smaller: Grid = "SG".parse().unwrap();
        assert_eq!(bfs.step(&mut smaller), StepResult::Exhausted);
        assert_eq!(bfs.state(), SearchState::Exhausted);
        assert_eq!(smaller.to_string(), "SG");
        assert!(bfs.expanded().is_empty());

        // same size, but the Goal moved
        let mut a_star = search(&grid, StrategyKind::AStar);
        let mut moved: Grid = "S..G\n....\n....".parse().unwrap();
        assert_eq!(a_star.step(&mut moved), StepResult::Exhausted);
        assert!(!moved.has_search_marks());

        let mut dfs = search(&grid, StrategyKind::Dfs);
        assert_eq!(dfs.step(&mut grid), StepResult::Continue);
    }

    #[test]
    fn seeds_neighbors_of_start() {
        let grid: Grid = "
            .#.
            .S.
            ..G
        "
        .parse()
        .unwrap();
        let search = search(&grid, StrategyKind::Bfs);
        assert_eq!(search.state(), SearchState::NotStarted);
        assert_eq!(search.frontier(), &[(2, 1), (1, 0), (1, 2)]);
        assert!(search.is_visited(grid.id((1, 1)).unwrap()));
        assert_eq!(search.visited_count(), 1);
        for pos in [(2, 1), (1, 0), (1, 2)] {
            assert_eq!(search.predecessor(grid.id(pos).unwrap()), Some((1, 1)));
        }
    }

    #[test]
    fn bfs_paints_visited_and_frontier() {
        let mut grid: Grid = "
            S...
            ....
            ...G
        "
        .parse()
        .unwrap();
        let mut search = search(&grid, StrategyKind::Bfs);
        assert_eq!(search.step(&mut grid), StepResult::Continue);
        assert_eq!(search.state(), SearchState::Running);
        assert_eq!(
            search.last_expansion(),
            Some(&Expansion {
                node: (1, 0),
                pushed: vec![(2, 0), (1, 1)],
            })
        );
        assert_eq!(grid.to_string(), "S+..\no+..\n+..G");
    }

    #[test]
    fn skipped_positions_do_not_cost_a_step() {
        // (1, 1) is queued by both (1, 0) and (0, 1) and comes up twice
        let mut grid: Grid = "
            S.
            ..
            .G
        "
        .parse()
        .unwrap();
        let mut search = search(&grid, StrategyKind::Bfs);
        let mut expansions = 0;
        while search.step(&mut grid) == StepResult::Continue {
            expansions += 1;
            assert_eq!(search.expanded().len(), expansions);
        }
        assert_eq!(search.state(), SearchState::Found);
        assert_eq!(search.expanded(), &[(1, 0), (0, 1), (2, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn start_boxed_in_is_exhausted_immediately() {
        let mut grid: Grid = "
            S#.
            #..
            ..G
        "
        .parse()
        .unwrap();
        let mut search = search(&grid, StrategyKind::Dfs);
        assert!(search.frontier().is_empty());
        assert_eq!(search.step(&mut grid), StepResult::Exhausted);
        assert!(search.expanded().is_empty());
        assert!(!grid.has_search_marks());
    }

    #[test]
    fn dfs_follows_latest_discovery() {
        let mut grid: Grid = "
            S...
            ....
            ...G
        "
        .parse()
        .unwrap();
        let mut search = search(&grid, StrategyKind::Dfs);
        search.step(&mut grid);
        // seeds are [(1, 0), (0, 1)], the last one is expanded first
        assert_eq!(search.expanded(), &[(0, 1)]);
        search.step(&mut grid);
        // (0, 1) pushed [(1, 1), (0, 2)]
        assert_eq!(search.expanded(), &[(0, 1), (0, 2)]);
        assert_eq!(search.run_to_end(&mut grid, 100), StepResult::Found);
        let path = search.path().unwrap();
        assert_eq!(path[0], (0, 0));
        assert_eq!(path[path.len() - 1], (2, 3));
    }

    #[test]
    fn a_star_draws_live_path() {
        let mut grid: Grid = "
            S....
            .....
            ....G
        "
        .parse()
        .unwrap();
        let mut search = search(&grid, StrategyKind::AStar);
        search.step(&mut grid);
        search.step(&mut grid);
        let live = grid.positions_of(CellKind::Path);
        assert!(!live.is_empty());
        let last = search.expanded()[1];
        assert_eq!(grid.kind(last), Some(CellKind::Path));
        // A* does not paint its Frontier
        assert!(grid.positions_of(CellKind::Frontier).is_empty());

        assert_eq!(search.run_to_end(&mut grid, 100), StepResult::Found);
        assert_eq!(search.path().unwrap().cost(), 6);
        assert_eq!(grid.positions_of(CellKind::Path).len(), 5);
    }

    #[test]
    fn a_star_clears_live_path_when_exhausted() {
        let mut grid: Grid = "
            S...#.
            ....#G
        "
        .parse()
        .unwrap();
        let mut search = search(&grid, StrategyKind::AStar);
        assert_eq!(search.run_to_end(&mut grid, 100), StepResult::Exhausted);
        assert!(grid.positions_of(CellKind::Path).is_empty());
        assert_eq!(grid.positions_of(CellKind::Visited).len(), 7);
    }

    #[test]
    fn last_inserted_origin_paints_a_connected_chain() {
        let mut grid: Grid = "
            S....
            .....
            ....G
        "
        .parse()
        .unwrap();
        let mut search = Search::with_kind(&grid, StrategyKind::AStar, PathOrigin::LastInserted)
            .unwrap();
        assert_eq!(search.run_to_end(&mut grid, 100), StepResult::Found);
        let path = search.path().unwrap();
        assert_eq!(path[0], (0, 0));
        for pair in path.positions().windows(2) {
            assert_eq!(grid.distance(pair[0], pair[1]), 1);
        }
    }

    #[test]
    fn stats_count_work() {
        let mut grid: Grid = "S.G".parse().unwrap();
        let mut search = search(&grid, StrategyKind::Bfs);
        assert_eq!(search.run_to_end(&mut grid, 10), StepResult::Found);
        search.step(&mut grid);
        assert_eq!(
            search.stats(),
            SearchStats {
                steps: 2,
                expansions: 2,
                peak_frontier: 1,
                path_cost: Some(2),
            }
        );
    }
}
