use crate::Position;

/// a Type to represent the Cost of a Path
pub type Cost = usize;

/// A Path found by a [`Search`](crate::Search)
///
/// Stores the sequence of Positions from the Start to the Goal, both included. Every step moves
/// to an orthogonal neighbor and costs 1, so the Cost is the number of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    path: Vec<Position>,
}

impl Path {
    /// creates a new Path with the given sequence of Positions
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use stepwise_pathfinding::Path;
    /// let path = Path::new(vec![(0, 0), (0, 1), (1, 1)]);
    ///
    /// assert_eq!(path.cost(), 2);
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path.to_string(), "Path[Cost = 2]: (0, 0) -> (0, 1) -> (1, 1)");
    /// ```
    pub fn new(path: Vec<Position>) -> Path {
        Path { path }
    }

    /// The number of steps on the Path
    pub fn cost(&self) -> Cost {
        self.path.len().saturating_sub(1)
    }

    /// The number of Positions on the Path, including Start and Goal
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path contains no Positions
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The Positions of the Path, Start first
    pub fn positions(&self) -> &[Position] {
        &self.path
    }

    /// Returns an Iterator over the Path
    pub fn iter(&self) -> std::slice::Iter<Position> {
        self.path.iter()
    }
}

use std::ops::Index;

impl Index<usize> for Path {
    type Output = Position;
    fn index(&self, index: usize) -> &Position {
        &self.path[index]
    }
}

impl PartialEq<Vec<Position>> for Path {
    fn eq(&self, rhs: &Vec<Position>) -> bool {
        &self.path == rhs
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.iter()
    }
}

use std::fmt;
impl fmt::Display for Path {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost())?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{:?}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {:?}", p)?;
            }
            Ok(())
        }
    }
}
