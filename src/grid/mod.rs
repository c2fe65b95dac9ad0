//! The Grid the user paints on and the Search paints over.

mod cell;
pub use cell::{Cell, CellKind};

use crate::error::{ParseGridError, PlacementError};
use crate::neighbors::{manhattan_distance, ManhattanNeighborhood, Neighborhood};
use crate::{CellId, Position};

use std::fmt;
use std::str::FromStr;

/// A dense `rows x columns` Grid of [`Cell`]s, addressed by `(row, column)`.
///
/// The Grid keeps track of its Start and Goal and enforces that there is at most one of each.
/// Painting user Cells goes through [`set_start`](Grid::set_start),
/// [`set_goal`](Grid::set_goal), [`toggle_wall`](Grid::toggle_wall) and [`erase`](Grid::erase).
/// A [`Search`](crate::Search) only ever paints Visited, Frontier and Path over it.
///
/// ## Examples
/// ```
/// use stepwise_pathfinding::{CellKind, Grid};
///
/// let grid: Grid = "
///     S.#
///     ..#
///     ..G
/// ".parse().unwrap();
///
/// assert_eq!((grid.rows(), grid.columns()), (3, 3));
/// assert_eq!(grid.start(), Some((0, 0)));
/// assert_eq!(grid.goal(), Some((2, 2)));
/// assert_eq!(grid.kind((1, 2)), Some(CellKind::Wall));
/// assert_eq!(grid.neighbors((0, 0)), vec![(1, 0), (0, 1)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    neighborhood: ManhattanNeighborhood,
    start: Option<Position>,
    goal: Option<Position>,
}

impl Grid {
    /// Creates a Grid where every Cell is Empty.
    pub fn new(rows: usize, columns: usize) -> Grid {
        let cells = (0..rows * columns)
            .map(|i| Cell::new(CellId::new(i as u32)))
            .collect();
        Grid {
            rows,
            columns,
            cells,
            neighborhood: ManhattanNeighborhood::new(rows, columns),
            start: None,
            goal: None,
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `true` if `pos` lies on the Grid.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.0 < self.rows && pos.1 < self.columns
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some(pos.0 * self.columns + pos.1)
        } else {
            None
        }
    }

    /// The Cell at `pos`, if `pos` is on the Grid.
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// The kind of the Cell at `pos`, if `pos` is on the Grid.
    pub fn kind(&self, pos: Position) -> Option<CellKind> {
        self.cell(pos).map(|cell| cell.kind)
    }

    /// The id of the Cell at `pos`, if `pos` is on the Grid.
    pub fn id(&self, pos: Position) -> Option<CellId> {
        self.cell(pos).map(|cell| cell.id)
    }

    /// The Position of the Start, if one was placed.
    pub fn start(&self) -> Option<Position> {
        self.start
    }

    /// The Position of the Goal, if one was placed.
    pub fn goal(&self) -> Option<Position> {
        self.goal
    }

    /// The in-range neighbors of `pos`, in the order up, down, left, right.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut all = Vec::with_capacity(4);
        self.neighbors_into(pos, &mut all);
        all
    }

    /// Like [`neighbors`](Grid::neighbors), but reuses `target`. `target` is cleared first.
    pub fn neighbors_into(&self, pos: Position, target: &mut Vec<Position>) {
        target.clear();
        self.neighborhood.get_all_neighbors(pos, target);
    }

    /// The Manhattan distance between two Positions.
    pub fn distance(&self, a: Position, b: Position) -> usize {
        manhattan_distance(a, b)
    }

    /// Iterates over all Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / columns, i % columns), cell))
    }

    /// All Positions currently showing `kind`, in row-major order.
    pub fn positions_of(&self, kind: CellKind) -> Vec<Position> {
        self.iter()
            .filter(|(_, cell)| cell.kind == kind)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Paints a Search mark (or clears one with [`CellKind::Empty`]).
    ///
    /// Start, Goal and Wall are never overwritten. Returns `true` if the Cell changed.
    pub(crate) fn mark(&mut self, pos: Position, kind: CellKind) -> bool {
        debug_assert!(!kind.is_reserved());
        let Some(i) = self.index(pos) else {
            return false;
        };
        let cell = &mut self.cells[i];
        if cell.kind.is_reserved() || cell.kind == kind {
            return false;
        }
        cell.kind = kind;
        true
    }

    /// Turns every Visited, Frontier and Path Cell back into an Empty one.
    ///
    /// Start, Goal and Walls stay where they are.
    pub fn clear_search_marks(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.kind.is_search_mark() {
                cell.kind = CellKind::Empty;
            }
        }
    }

    /// `true` if any Cell shows a Search mark.
    pub fn has_search_marks(&self) -> bool {
        self.cells.iter().any(|cell| cell.kind.is_search_mark())
    }

    fn check_free(&self, pos: Position) -> Result<usize, PlacementError> {
        let i = self.index(pos).ok_or(PlacementError::OutOfBounds {
            pos,
            rows: self.rows,
            columns: self.columns,
        })?;
        let kind = self.cells[i].kind;
        if kind.is_reserved() {
            return Err(PlacementError::Occupied { pos, kind });
        }
        Ok(i)
    }

    /// Places the Start at `pos`.
    ///
    /// Fails if the Grid already has a Start, or if `pos` is off the Grid or already a Start,
    /// Goal or Wall.
    pub fn set_start(&mut self, pos: Position) -> Result<(), PlacementError> {
        let i = self.check_free(pos)?;
        if let Some(existing) = self.start {
            return Err(PlacementError::DuplicateStart(existing));
        }
        self.cells[i].kind = CellKind::Start;
        self.start = Some(pos);
        Ok(())
    }

    /// Places the Goal at `pos`.
    ///
    /// Fails if the Grid already has a Goal, or if `pos` is off the Grid or already a Start,
    /// Goal or Wall.
    pub fn set_goal(&mut self, pos: Position) -> Result<(), PlacementError> {
        let i = self.check_free(pos)?;
        if let Some(existing) = self.goal {
            return Err(PlacementError::DuplicateGoal(existing));
        }
        self.cells[i].kind = CellKind::Goal;
        self.goal = Some(pos);
        Ok(())
    }

    /// Turns a Wall into an Empty Cell and anything else except Start and Goal into a Wall.
    ///
    /// Returns `true` if `pos` is a Wall afterwards.
    pub fn toggle_wall(&mut self, pos: Position) -> Result<bool, PlacementError> {
        let i = self.index(pos).ok_or(PlacementError::OutOfBounds {
            pos,
            rows: self.rows,
            columns: self.columns,
        })?;
        let cell = &mut self.cells[i];
        match cell.kind {
            CellKind::Start | CellKind::Goal => Err(PlacementError::Occupied {
                pos,
                kind: cell.kind,
            }),
            CellKind::Wall => {
                cell.kind = CellKind::Empty;
                Ok(false)
            }
            _ => {
                cell.kind = CellKind::Wall;
                Ok(true)
            }
        }
    }

    /// Sets the Cell at `pos` to Empty, removing a Start or Goal if there was one.
    pub fn erase(&mut self, pos: Position) -> Result<(), PlacementError> {
        let i = self.index(pos).ok_or(PlacementError::OutOfBounds {
            pos,
            rows: self.rows,
            columns: self.columns,
        })?;
        match self.cells[i].kind {
            CellKind::Start => self.start = None,
            CellKind::Goal => self.goal = None,
            _ => {}
        }
        self.cells[i].kind = CellKind::Empty;
        Ok(())
    }

    /// Sets a non-Start, non-Goal Cell to Wall or Empty. Used by terrain generation.
    #[cfg_attr(not(feature = "generate"), allow(dead_code))]
    pub(crate) fn set_wall(&mut self, pos: Position, wall: bool) {
        if let Some(i) = self.index(pos) {
            let cell = &mut self.cells[i];
            if matches!(cell.kind, CellKind::Start | CellKind::Goal) {
                return;
            }
            cell.kind = if wall { CellKind::Wall } else { CellKind::Empty };
        }
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses the text form of a Grid.
    ///
    /// Every non-blank line is one row, leading and trailing whitespace is ignored. See
    /// [`CellKind::glyph`] for the characters.
    fn from_str(text: &str) -> Result<Grid, ParseGridError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let columns = lines.first().map_or(0, |line| line.chars().count());
        if columns == 0 {
            return Err(ParseGridError::Empty);
        }

        let mut grid = Grid::new(lines.len(), columns);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != columns {
                return Err(ParseGridError::InconsistentRow {
                    row,
                    expected: columns,
                    found,
                });
            }
            for (column, glyph) in line.chars().enumerate() {
                let pos = (row, column);
                let kind =
                    CellKind::from_glyph(glyph).ok_or(ParseGridError::InvalidGlyph { glyph, pos })?;
                match kind {
                    CellKind::Start => grid.set_start(pos)?,
                    CellKind::Goal => grid.set_goal(pos)?,
                    CellKind::Wall => {
                        grid.toggle_wall(pos)?;
                    }
                    CellKind::Empty => {}
                    mark => {
                        grid.mark(pos, mark);
                    }
                }
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(fmt)?;
            }
            for cell in &self.cells[row * self.columns..(row + 1) * self.columns] {
                write!(fmt, "{}", cell.kind.glyph())?;
            }
        }
        Ok(())
    }
}
