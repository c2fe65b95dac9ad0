use crate::strategy::{PathOrigin, StrategyKind};

/// Options for configuring a [`Session`](crate::Session)
///
/// Default options:
/// ```
/// # use stepwise_pathfinding::{PathOrigin, SessionConfig, StrategyKind};
/// assert_eq!(
///     SessionConfig {
///         rows: 20,
///         columns: 40,
///         strategy: StrategyKind::Bfs,
///         speed: 50.0,
///         a_star_path_origin: PathOrigin::Target,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    /// Number of rows of the Grid (defaults to `20`)
    pub rows: usize,
    /// Number of columns of the Grid (defaults to `40`)
    pub columns: usize,
    /// The Strategy selected when the Session starts (defaults to [`StrategyKind::Bfs`])
    pub strategy: StrategyKind,
    /// Playback speed for the [`Driver`](crate::Driver), in steps per second (defaults to `50`).
    ///
    /// Clamped to [`MIN_SPEED`](crate::driver::MIN_SPEED)..=[`MAX_SPEED`](crate::driver::MAX_SPEED).
    pub speed: f64,
    /// [`PathOrigin::Target`] (default): A* Paths are traced back from the Goal, and the live
    /// Path while searching from the Position that was just expanded.
    ///
    /// [`PathOrigin::LastInserted`]: A* Paths are traced back from the Position that most
    /// recently got its first predecessor. This reproduces the Paths of the classic visualizer,
    /// which often stop one Position short of the Goal.
    pub a_star_path_origin: PathOrigin,
}

impl SessionConfig {
    /// Creates the default config with a Grid of `rows x columns`.
    ///
    /// ```
    /// # use stepwise_pathfinding::SessionConfig;
    /// let config = SessionConfig::with_size(5, 7);
    /// assert_eq!((config.rows, config.columns), (5, 7));
    /// assert_eq!(config.speed, SessionConfig::default().speed);
    /// ```
    pub fn with_size(rows: usize, columns: usize) -> SessionConfig {
        SessionConfig {
            rows,
            columns,
            ..Default::default()
        }
    }

    /// a SessionConfig that behaves like the classic visualizer
    ///
    /// Values:
    /// ```
    /// # use stepwise_pathfinding::{PathOrigin, SessionConfig, StrategyKind};
    /// assert_eq!(
    ///     SessionConfig {
    ///         rows: 20,
    ///         columns: 40,
    ///         strategy: StrategyKind::Bfs,
    ///         speed: 50.0,
    ///         a_star_path_origin: PathOrigin::LastInserted,
    ///     },
    ///     SessionConfig::REFERENCE
    /// );
    /// ```
    pub const REFERENCE: SessionConfig = SessionConfig {
        rows: 20,
        columns: 40,
        strategy: StrategyKind::Bfs,
        speed: 50.0,
        a_star_path_origin: PathOrigin::LastInserted,
    };

    /// a small, fast SessionConfig, handy for terminals and tests
    ///
    /// Values:
    /// ```
    /// # use stepwise_pathfinding::{PathOrigin, SessionConfig, StrategyKind};
    /// assert_eq!(
    ///     SessionConfig {
    ///         rows: 10,
    ///         columns: 10,
    ///         strategy: StrategyKind::Bfs,
    ///         speed: 100.0,
    ///         a_star_path_origin: PathOrigin::Target,
    ///     },
    ///     SessionConfig::SMALL
    /// );
    /// ```
    pub const SMALL: SessionConfig = SessionConfig {
        rows: 10,
        columns: 10,
        strategy: StrategyKind::Bfs,
        speed: 100.0,
        a_star_path_origin: PathOrigin::Target,
    };
}

impl Default for SessionConfig {
    fn default() -> SessionConfig {
        SessionConfig {
            rows: 20,
            columns: 40,
            strategy: StrategyKind::Bfs,
            speed: 50.0,
            a_star_path_origin: PathOrigin::Target,
        }
    }
}
