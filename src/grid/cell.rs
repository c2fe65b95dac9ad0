use crate::CellId;

/// What a Cell currently shows.
///
/// `Start`, `Goal` and `Wall` are painted by the user. `Visited`, `Frontier` and `Path` are
/// painted by a running Search and never replace one of the former.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    /// nothing here
    #[default]
    Empty,
    /// where every Search begins. At most one per Grid
    Start,
    /// what every Search is looking for. At most one per Grid
    Goal,
    /// blocks movement
    Wall,
    /// expanded by the Search
    Visited,
    /// discovered, waiting to be expanded
    Frontier,
    /// part of the (best known) Path
    Path,
}

impl CellKind {
    /// `true` for the kinds the user paints: Start, Goal and Wall.
    pub fn is_reserved(self) -> bool {
        matches!(self, CellKind::Start | CellKind::Goal | CellKind::Wall)
    }

    /// `true` for the kinds a Search paints: Visited, Frontier and Path.
    pub fn is_search_mark(self) -> bool {
        matches!(self, CellKind::Visited | CellKind::Frontier | CellKind::Path)
    }

    /// The character used for this kind in the text form of a Grid.
    ///
    /// ```
    /// # use stepwise_pathfinding::CellKind;
    /// assert_eq!(CellKind::Wall.glyph(), '#');
    /// assert_eq!(CellKind::from_glyph('#'), Some(CellKind::Wall));
    /// ```
    pub fn glyph(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Start => 'S',
            CellKind::Goal => 'G',
            CellKind::Wall => '#',
            CellKind::Visited => 'o',
            CellKind::Frontier => '+',
            CellKind::Path => '*',
        }
    }

    /// The inverse of [`glyph`](CellKind::glyph).
    pub fn from_glyph(glyph: char) -> Option<CellKind> {
        Some(match glyph {
            '.' => CellKind::Empty,
            'S' => CellKind::Start,
            'G' => CellKind::Goal,
            '#' => CellKind::Wall,
            'o' => CellKind::Visited,
            '+' => CellKind::Frontier,
            '*' => CellKind::Path,
            _ => return None,
        })
    }
}

/// A single Cell of a [`Grid`](crate::Grid)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// identity of the Cell, unrelated to its Position
    pub id: CellId,
    /// what the Cell currently shows
    pub kind: CellKind,
}

impl Cell {
    pub(crate) fn new(id: CellId) -> Cell {
        Cell {
            id,
            kind: CellKind::Empty,
        }
    }
}
