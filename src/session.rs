use crate::error::{PlacementError, Result, SessionError};
use crate::search::{Search, SearchState, StepResult};
use crate::strategy::StrategyKind;
use crate::{CellKind, Grid, Position, SessionConfig};

use log::debug;

/// The state of one visualizer session: the Grid, the selected Strategy and the current run.
///
/// All edits to the Grid go through the Session, which keeps them consistent with the run:
/// - Start and Goal cannot be placed or erased while a Search is active.
/// - Toggling a Wall while a Search is active cancels the Search first.
/// - Any edit after a Search ended clears that Search's marks first.
///
/// ## Examples
/// ```
/// use stepwise_pathfinding::{CellKind, Session, SessionConfig, StepResult};
///
/// let mut session = Session::new(SessionConfig::with_size(5, 5));
/// session.set_start((0, 0)).unwrap();
/// session.set_goal((0, 4)).unwrap();
/// session.select_strategy("astar").unwrap();
///
/// session.start_search().unwrap();
/// while session.step() == Some(StepResult::Continue) {}
///
/// assert_eq!(session.search().unwrap().path().unwrap().cost(), 4);
/// assert_eq!(session.grid().kind((0, 2)), Some(CellKind::Path));
///
/// // cancelling keeps the layout
/// session.reset();
/// assert_eq!(session.grid().kind((0, 2)), Some(CellKind::Empty));
/// assert_eq!(session.grid().start(), Some((0, 0)));
/// ```
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    strategy: StrategyKind,
    search: Option<Search>,
}

impl Session {
    /// Creates a Session with an empty Grid of the configured size.
    pub fn new(config: SessionConfig) -> Session {
        Session {
            grid: Grid::new(config.rows, config.columns),
            strategy: config.strategy,
            search: None,
            config,
        }
    }

    /// Creates a Session around an existing Grid. Any Search marks on it are cleared.
    pub fn with_grid(mut grid: Grid, config: SessionConfig) -> Session {
        grid.clear_search_marks();
        Session {
            config: SessionConfig {
                rows: grid.rows(),
                columns: grid.columns(),
                ..config
            },
            strategy: config.strategy,
            search: None,
            grid,
        }
    }

    /// The Grid, including the marks of the current Search
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The config this Session was created with, updated by [`resize`](Session::resize).
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The Strategy the next Search will use
    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    /// The current or most recent Search, if it was not reset since.
    pub fn search(&self) -> Option<&Search> {
        self.search.as_ref()
    }

    /// The state of the current Search, if there is one.
    pub fn search_state(&self) -> Option<SearchState> {
        self.search.as_ref().map(Search::state)
    }

    /// `true` while a Search exists and has not ended.
    pub fn is_searching(&self) -> bool {
        self.search_state().map_or(false, SearchState::is_active)
    }

    /// Drops a Search that already ended, along with its marks.
    fn clear_finished(&mut self) {
        if self.search.is_some() && !self.is_searching() {
            self.reset();
        }
    }

    fn refuse_while_searching(&self, pos: Position) -> Result<()> {
        if self.is_searching() {
            debug!("rejected placement at {:?}: a Search is running", pos);
            return Err(PlacementError::SearchActive.into());
        }
        Ok(())
    }

    /// Places the Start. Refused while a Search is active, if a Start already exists, or if
    /// `pos` is off the Grid or already taken.
    pub fn set_start(&mut self, pos: Position) -> Result<()> {
        self.refuse_while_searching(pos)?;
        self.clear_finished();
        self.grid.set_start(pos).map_err(|err| {
            debug!("rejected Start at {:?}: {}", pos, err);
            err.into()
        })
    }

    /// Places the Goal. Refused while a Search is active, if a Goal already exists, or if
    /// `pos` is off the Grid or already taken.
    pub fn set_goal(&mut self, pos: Position) -> Result<()> {
        self.refuse_while_searching(pos)?;
        self.clear_finished();
        self.grid.set_goal(pos).map_err(|err| {
            debug!("rejected Goal at {:?}: {}", pos, err);
            err.into()
        })
    }

    /// Toggles a Wall at `pos`, cancelling an active Search first.
    ///
    /// Returns `true` if `pos` is a Wall afterwards.
    pub fn toggle_wall(&mut self, pos: Position) -> Result<bool> {
        if matches!(
            self.grid.kind(pos),
            None | Some(CellKind::Start) | Some(CellKind::Goal)
        ) {
            // refused by the Grid without touching anything
            return self.grid.toggle_wall(pos).map_err(SessionError::from);
        }
        if self.is_searching() {
            debug!("Wall toggled at {:?} during a Search, cancelling it", pos);
        }
        if self.search.is_some() {
            self.reset();
        }
        Ok(self.grid.toggle_wall(pos)?)
    }

    /// Erases whatever was painted at `pos`.
    ///
    /// Erasing the Start or Goal is refused while a Search is active, erasing a Wall cancels
    /// the Search first. Any other Cell only shows marks of the active Search and is left
    /// alone while it runs.
    pub fn erase(&mut self, pos: Position) -> Result<()> {
        match self.grid.kind(pos) {
            None => return self.grid.erase(pos).map_err(SessionError::from),
            Some(CellKind::Start) | Some(CellKind::Goal) => {
                self.refuse_while_searching(pos)?;
                self.clear_finished();
            }
            Some(CellKind::Wall) => {
                if self.is_searching() {
                    debug!("Wall erased at {:?} during a Search, cancelling it", pos);
                }
                if self.search.is_some() {
                    self.reset();
                }
            }
            Some(_) if self.is_searching() => return Ok(()),
            Some(_) => self.clear_finished(),
        }
        Ok(self.grid.erase(pos)?)
    }

    /// Selects the Strategy by its identifier. See [`StrategyKind`] for accepted names.
    ///
    /// Unknown identifiers leave the selection unchanged.
    pub fn select_strategy(&mut self, name: &str) -> Result<StrategyKind> {
        let kind = name.parse()?;
        self.set_strategy(kind);
        Ok(kind)
    }

    /// Selects the Strategy for the next Search, cancelling an active Search.
    pub fn set_strategy(&mut self, kind: StrategyKind) {
        if kind == self.strategy {
            return;
        }
        if self.is_searching() {
            debug!("Strategy switched to {} during a Search, cancelling it", kind);
            self.reset();
        }
        self.strategy = kind;
    }

    /// Starts a new Search with the selected Strategy. Marks of a finished Search are cleared.
    ///
    /// Fails if a Search is already active or the Grid lacks a Start or Goal.
    pub fn start_search(&mut self) -> Result<()> {
        if self.is_searching() {
            return Err(SessionError::SearchActive);
        }
        self.clear_finished();
        let search = Search::new(
            &self.grid,
            self.strategy.build(self.config.a_star_path_origin),
        )?;
        self.search = Some(search);
        Ok(())
    }

    /// Advances the current Search by one step. `None` if there is no Search.
    pub fn step(&mut self) -> Option<StepResult> {
        let grid = &mut self.grid;
        self.search.as_mut().map(|search| search.step(grid))
    }

    /// Drops the current Search and its marks. Start, Goal and Walls stay.
    pub fn reset(&mut self) {
        if let Some(search) = self.search.take() {
            debug!(
                "reset {} search in state {:?}",
                search.strategy_kind(),
                search.state()
            );
        }
        self.grid.clear_search_marks();
    }

    /// Drops the current Search and rebuilds an empty Grid of the same size.
    pub fn clear(&mut self) {
        self.search = None;
        self.grid = Grid::new(self.config.rows, self.config.columns);
    }

    /// Rebuilds an empty Grid with new dimensions, dropping the current Search.
    pub fn resize(&mut self, rows: usize, columns: usize) {
        self.config.rows = rows;
        self.config.columns = columns;
        self.clear();
    }

    /// Replaces all Walls with generated terrain, cancelling any Search first.
    /// Start and Goal stay in place.
    ///
    /// Returns the number of Walls.
    #[cfg(feature = "generate")]
    pub fn generate_terrain(&mut self, config: &crate::terrain::TerrainConfig) -> usize {
        self.reset();
        crate::terrain::generate(&mut self.grid, config)
    }
}
