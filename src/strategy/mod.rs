//! The policies deciding which discovered Position a [`Search`](crate::Search) expands next.
//!
//! A [`Strategy`] owns everything that differs between the algorithms: the order in which the
//! Frontier is drained and whether a newly seen neighbor is worth (re)queueing. The Search owns
//! everything they share.

mod a_star;
pub use a_star::{AStar, PathOrigin};

mod breadth_first;
pub use breadth_first::BreadthFirst;

mod depth_first;
pub use depth_first::DepthFirst;

use crate::error::UnknownStrategy;
use crate::Position;

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// The discovered but not yet expanded Positions of a Search, in insertion order.
pub type Frontier = VecDeque<Position>;

/// Frontier selection and relaxation policy of a Search.
pub trait Strategy: fmt::Debug {
    /// Which algorithm this is
    fn kind(&self) -> StrategyKind;

    /// Resets all state kept between calls. Called once before a Search begins.
    fn initialize(&mut self, start: Position, goal: Position);

    /// Removes and returns the next Position to expand, or `None` if `frontier` is empty.
    fn select_next(&mut self, frontier: &mut Frontier, goal: Position) -> Option<Position>;

    /// Decides whether `neighbor`, seen from `current`, should be pushed onto the Frontier.
    ///
    /// The Search only asks about neighbors that are neither visited nor Walls.
    fn relax(&mut self, current: Position, neighbor: Position) -> bool;

    /// The best known Path ending at `target`, Start first.
    ///
    /// Strategies that keep no Path information of their own return `None`, and the Search
    /// falls back to its own predecessors.
    fn reconstruct_path(&self, target: Position) -> Option<Vec<Position>> {
        let _ = target;
        None
    }

    /// `true` if the best known Path should be redrawn after every expansion.
    fn draws_live_path(&self) -> bool {
        false
    }
}

/// Identifies one of the available Strategies.
///
/// ```
/// # use stepwise_pathfinding::StrategyKind;
/// assert_eq!("bfs".parse(), Ok(StrategyKind::Bfs));
/// assert_eq!("Depth-First".parse(), Ok(StrategyKind::Dfs));
/// assert_eq!("A*".parse(), Ok(StrategyKind::AStar));
/// assert!("dijkstra".parse::<StrategyKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum StrategyKind {
    /// Breadth-first search. Finds a shortest Path.
    #[default]
    Bfs,
    /// Depth-first search. Finds some Path.
    Dfs,
    /// A* with the Manhattan distance as heuristic. Finds a shortest Path.
    AStar,
}

impl StrategyKind {
    /// All Strategies, in the order they are offered to the user.
    pub const ALL: [StrategyKind; 3] = [StrategyKind::Bfs, StrategyKind::Dfs, StrategyKind::AStar];

    /// The canonical identifier, accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Bfs => "bfs",
            StrategyKind::Dfs => "dfs",
            StrategyKind::AStar => "astar",
        }
    }

    /// Creates a fresh Strategy of this kind.
    ///
    /// `origin` only affects [`AStar`].
    pub fn build(self, origin: PathOrigin) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Bfs => Box::new(BreadthFirst),
            StrategyKind::Dfs => Box::new(DepthFirst),
            StrategyKind::AStar => Box::new(AStar::new(origin)),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(name: &str) -> Result<StrategyKind, UnknownStrategy> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadth_first" | "breadthfirst" => Ok(StrategyKind::Bfs),
            "dfs" | "depth-first" | "depth_first" | "depthfirst" => Ok(StrategyKind::Dfs),
            "astar" | "a*" | "a-star" | "a_star" => Ok(StrategyKind::AStar),
            _ => Err(UnknownStrategy(name.to_owned())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.name())
    }
}
