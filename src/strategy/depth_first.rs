use super::{Frontier, Strategy, StrategyKind};
use crate::Position;

/// Depth-first search: expands the most recently discovered Position first.
///
/// Finds a Path if there is one, but usually not a short one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DepthFirst;

impl Strategy for DepthFirst {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Dfs
    }

    fn initialize(&mut self, _start: Position, _goal: Position) {}

    fn select_next(&mut self, frontier: &mut Frontier, _goal: Position) -> Option<Position> {
        frontier.pop_back()
    }

    fn relax(&mut self, _current: Position, _neighbor: Position) -> bool {
        true
    }
}
