//! How a Search may move across the Grid

use crate::Position;
use std::fmt::Debug;

/// Defines how a Search can move along the Grid.
///
/// It provides a function to query all neighboring Positions of an existing Position.
///
/// The only implementation used by the [`Grid`](crate::Grid) is [`ManhattanNeighborhood`],
/// for Searches that move up, down, left or right.
pub trait Neighborhood: Clone + Debug {
    /// Appends all Neighbors of a Position to `target`.
    ///
    /// Note that it is not necessary to check whether the Cell at a Position is a Wall or not.
    /// That check is done by the Search.
    fn get_all_neighbors(&self, pos: Position, target: &mut Vec<Position>);
}

/// A Neighborhood for Searches moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// Neighbors are always listed in the order up, down, left, right, where "up" is the previous
/// row and "left" the previous column. Neighbors outside of the Grid are skipped.
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanNeighborhood {
    rows: usize,
    columns: usize,
}

impl ManhattanNeighborhood {
    /// Creates a new ManhattanNeighborhood.
    ///
    /// `rows` and `columns` are the size of the Grid to move on.
    pub fn new(rows: usize, columns: usize) -> ManhattanNeighborhood {
        ManhattanNeighborhood { rows, columns }
    }
}

impl Neighborhood for ManhattanNeighborhood {
    fn get_all_neighbors(&self, pos: Position, target: &mut Vec<Position>) {
        let (row, column) = pos;
        if row >= self.rows || column >= self.columns {
            return;
        }
        if row > 0 {
            target.push((row - 1, column));
        }
        if row + 1 < self.rows {
            target.push((row + 1, column));
        }
        if column > 0 {
            target.push((row, column - 1));
        }
        if column + 1 < self.columns {
            target.push((row, column + 1));
        }
    }
}

/// The Manhattan distance `|a.row - b.row| + |a.column - b.column|` between two Positions.
///
/// ```
/// # use stepwise_pathfinding::neighbors::manhattan_distance;
/// assert_eq!(manhattan_distance((3, 1), (0, 0)), 4);
/// ```
pub fn manhattan_distance(a: Position, b: Position) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors_of(neighborhood: &ManhattanNeighborhood, pos: Position) -> Vec<Position> {
        let mut all = vec![];
        neighborhood.get_all_neighbors(pos, &mut all);
        all
    }

    #[test]
    fn order_is_up_down_left_right() {
        let neighborhood = ManhattanNeighborhood::new(5, 5);
        assert_eq!(
            neighbors_of(&neighborhood, (2, 2)),
            vec![(1, 2), (3, 2), (2, 1), (2, 3)],
        );
    }

    #[test]
    fn edges_are_skipped() {
        let neighborhood = ManhattanNeighborhood::new(5, 5);
        assert_eq!(neighbors_of(&neighborhood, (0, 2)), vec![(1, 2), (0, 1), (0, 3)]);
        assert_eq!(neighbors_of(&neighborhood, (4, 4)), vec![(3, 4), (4, 3)]);
        assert_eq!(neighbors_of(&neighborhood, (0, 0)), vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let neighborhood = ManhattanNeighborhood::new(1, 1);
        assert!(neighbors_of(&neighborhood, (0, 0)).is_empty());
    }

    #[test]
    fn out_of_range_has_no_neighbors() {
        let neighborhood = ManhattanNeighborhood::new(3, 3);
        assert!(neighbors_of(&neighborhood, (3, 0)).is_empty());
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(manhattan_distance((3, 1), (0, 4)), 3 + 3);
        assert_eq!(manhattan_distance((0, 4), (3, 1)), 3 + 3);
        assert_eq!(manhattan_distance((2, 2), (2, 2)), 0);
    }
}
