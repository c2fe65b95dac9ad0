use super::{Frontier, Strategy, StrategyKind};
use crate::Position;

/// Breadth-first search: expands the oldest discovered Position first.
///
/// On a Grid where every step costs the same, the first Path to reach the Goal is a shortest one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BreadthFirst;

impl Strategy for BreadthFirst {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Bfs
    }

    fn initialize(&mut self, _start: Position, _goal: Position) {}

    fn select_next(&mut self, frontier: &mut Frontier, _goal: Position) -> Option<Position> {
        frontier.pop_front()
    }

    fn relax(&mut self, _current: Position, _neighbor: Position) -> bool {
        true
    }
}
