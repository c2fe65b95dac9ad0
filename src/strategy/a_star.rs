use super::{Frontier, Strategy, StrategyKind};
use crate::neighbors::manhattan_distance;
use crate::path::Cost;
use crate::{Position, PositionMap};

/// Where [`AStar::reconstruct_path`](Strategy::reconstruct_path) begins its walk back to the
/// Start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PathOrigin {
    /// Walk back from the requested Position: the Goal once it is found, the Position that was
    /// just expanded while searching. Always yields a connected Path ending there.
    #[default]
    Target,
    /// Walk back from the Position that was most recently given a predecessor for the first
    /// time, whatever was requested.
    ///
    /// This is how the classic visualizer draws its A* Paths. The result is connected, but it
    /// usually ends at a Frontier Position next to the Goal instead of the Goal itself.
    LastInserted,
}

/// A* with unit step costs and the Manhattan distance as heuristic.
///
/// Selection scans the whole Frontier for the lowest `g + h`, where a Position without a known
/// `g` counts as 0. Ties go to the Position that was queued first.
#[derive(Clone, Debug)]
pub struct AStar {
    origin: PathOrigin,
    start: Position,
    g_score: PositionMap<Cost>,
    came_from: PositionMap<Position>,
    last_inserted: Option<Position>,
}

impl AStar {
    /// Creates an AStar that reconstructs Paths from `origin`.
    pub fn new(origin: PathOrigin) -> AStar {
        AStar {
            origin,
            start: (0, 0),
            g_score: PositionMap::default(),
            came_from: PositionMap::default(),
            last_inserted: None,
        }
    }

    /// The best known cost from the Start to `pos`, if `pos` was reached yet.
    pub fn g_score(&self, pos: Position) -> Option<Cost> {
        self.g_score.get(&pos).copied()
    }

    /// The predecessor of `pos` on its best known Path.
    pub fn came_from(&self, pos: Position) -> Option<Position> {
        self.came_from.get(&pos).copied()
    }
}

impl Strategy for AStar {
    fn kind(&self) -> StrategyKind {
        StrategyKind::AStar
    }

    fn initialize(&mut self, start: Position, _goal: Position) {
        self.start = start;
        self.g_score.clear();
        self.came_from.clear();
        self.last_inserted = None;
        self.g_score.insert(start, 0);
    }

    fn select_next(&mut self, frontier: &mut Frontier, goal: Position) -> Option<Position> {
        let mut best: Option<(usize, Cost)> = None;
        for (i, &pos) in frontier.iter().enumerate() {
            let f = self.g_score(pos).unwrap_or(0) + manhattan_distance(pos, goal);
            if best.map_or(true, |(_, best_f)| f < best_f) {
                best = Some((i, f));
            }
        }
        let (i, _) = best?;
        frontier.remove(i)
    }

    fn relax(&mut self, current: Position, neighbor: Position) -> bool {
        let tentative = self.g_score(current).unwrap_or(0) + 1;
        if self.g_score(neighbor).map_or(false, |g| g <= tentative) {
            return false;
        }
        self.g_score.insert(neighbor, tentative);
        if self.came_from.insert(neighbor, current).is_none() {
            self.last_inserted = Some(neighbor);
        }
        true
    }

    fn reconstruct_path(&self, target: Position) -> Option<Vec<Position>> {
        let origin = match self.origin {
            PathOrigin::Target => target,
            PathOrigin::LastInserted => self.last_inserted.unwrap_or(target),
        };

        let mut steps = vec![origin];
        let mut current = origin;
        while current != self.start {
            current = *self.came_from.get(&current)?;
            steps.push(current);
        }
        steps.reverse();
        Some(steps)
    }

    fn draws_live_path(&self) -> bool {
        true
    }
}
