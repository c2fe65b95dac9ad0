//! Random Wall layouts from value noise.
//!
//! Random values are placed on a coarse lattice every `scale` Cells and smoothly interpolated
//! in between, which gives connected blobs of Walls instead of salt-and-pepper noise.

use crate::{CellKind, Grid};
use nanorand::{Rng, WyRand};

/// Options for [`generate`]
///
/// Default options:
/// ```
/// # use stepwise_pathfinding::terrain::TerrainConfig;
/// assert_eq!(
///     TerrainConfig {
///         seed: 0,
///         scale: 4,
///         threshold: 0.3,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainConfig {
    /// The same seed always produces the same layout on a Grid of the same size.
    pub seed: u64,
    /// Distance between lattice points in Cells (defaults to `4`). Larger values give larger
    /// blobs. `0` is treated as `1`.
    pub scale: usize,
    /// Cells whose noise value is below this become Walls (defaults to `0.3`).
    /// `0.0` produces no Walls, `1.0` only Walls.
    pub threshold: f32,
}

impl TerrainConfig {
    /// The default config with a different seed.
    pub fn with_seed(seed: u64) -> TerrainConfig {
        TerrainConfig {
            seed,
            ..Default::default()
        }
    }
}

impl Default for TerrainConfig {
    fn default() -> TerrainConfig {
        TerrainConfig {
            seed: 0,
            scale: 4,
            threshold: 0.3,
        }
    }
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Overwrites every Cell except Start and Goal with either a Wall or an Empty Cell.
///
/// Search marks are discarded as well. Returns the number of Walls.
///
/// ## Examples
/// ```
/// use stepwise_pathfinding::terrain::{generate, TerrainConfig};
/// use stepwise_pathfinding::{CellKind, Grid};
///
/// let mut grid = Grid::new(16, 32);
/// grid.set_start((0, 0)).unwrap();
///
/// let walls = generate(&mut grid, &TerrainConfig::with_seed(7));
///
/// assert_eq!(walls, grid.positions_of(CellKind::Wall).len());
/// assert_eq!(grid.kind((0, 0)), Some(CellKind::Start));
/// ```
pub fn generate(grid: &mut Grid, config: &TerrainConfig) -> usize {
    let scale = config.scale.max(1);
    let lattice_rows = grid.rows() / scale + 2;
    let lattice_columns = grid.columns() / scale + 2;

    let mut rng = WyRand::new_seed(config.seed);
    let lattice: Vec<f32> = (0..lattice_rows * lattice_columns)
        .map(|_| rng.generate::<u32>() as f32 / u32::MAX as f32)
        .collect();
    let at = |row: usize, column: usize| lattice[row * lattice_columns + column];

    let mut walls = 0;
    for row in 0..grid.rows() {
        let (lr, tr) = (row / scale, smoothstep((row % scale) as f32 / scale as f32));
        for column in 0..grid.columns() {
            let (lc, tc) = (
                column / scale,
                smoothstep((column % scale) as f32 / scale as f32),
            );
            let top = lerp(at(lr, lc), at(lr, lc + 1), tc);
            let bottom = lerp(at(lr + 1, lc), at(lr + 1, lc + 1), tc);
            let value = lerp(top, bottom, tr);

            let pos = (row, column);
            let wall = value < config.threshold;
            grid.set_wall(pos, wall);
            if wall && grid.kind(pos) == Some(CellKind::Wall) {
                walls += 1;
            }
        }
    }
    walls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_layout() {
        let mut a = Grid::new(20, 30);
        let mut b = Grid::new(20, 30);
        generate(&mut a, &TerrainConfig::with_seed(42));
        generate(&mut b, &TerrainConfig::with_seed(42));
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = Grid::new(20, 30);
        let mut b = Grid::new(20, 30);
        generate(&mut a, &TerrainConfig::with_seed(1));
        generate(&mut b, &TerrainConfig::with_seed(2));
        assert_ne!(a, b);
    }

    #[test]
    fn thresholds_bound_the_walls() {
        let mut grid = Grid::new(10, 10);
        let none = TerrainConfig {
            threshold: 0.0,
            ..Default::default()
        };
        assert_eq!(generate(&mut grid, &none), 0);

        let all = TerrainConfig {
            threshold: 1.1,
            ..Default::default()
        };
        assert_eq!(generate(&mut grid, &all), 100);
    }

    #[test]
    fn start_and_goal_survive() {
        let mut grid: Grid = "
            S...
            o+*.
            ...G
        "
        .parse()
        .unwrap();
        let all = TerrainConfig {
            threshold: 1.1,
            scale: 0,
            ..Default::default()
        };
        assert_eq!(generate(&mut grid, &all), 10);
        assert_eq!(grid.start(), Some((0, 0)));
        assert_eq!(grid.goal(), Some((2, 3)));
        assert!(!grid.has_search_marks());
    }
}
