//! The closed set of maze cell types.

/// One grid location's terrain or feature.
///
/// The transition-cost rules are total matches over this enum, so adding a
/// variant forces every rule site to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Plain walkable ground.
    #[default]
    Empty,
    /// The search origin, fixed at the top-left corner.
    Start,
    /// The search goal, fixed at the bottom-right corner.
    End,
    /// Costs -1 to step into; moves that would go below zero are forbidden.
    Monster,
    /// Costs 2 to step into.
    Trap,
    /// Teleports to its paired portal when exactly two portals exist.
    Portal,
}

impl Cell {
    /// Single-character glyph used for rendering and parsing.
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Start => 'S',
            Cell::End => 'E',
            Cell::Monster => 'M',
            Cell::Trap => 'T',
            Cell::Portal => 'P',
        }
    }

    /// Inverse of [`glyph`](Self::glyph). Returns `None` for unknown
    /// characters.
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Cell::Empty),
            'S' => Some(Cell::Start),
            'E' => Some(Cell::End),
            'M' => Some(Cell::Monster),
            'T' => Some(Cell::Trap),
            'P' => Some(Cell::Portal),
            _ => None,
        }
    }
}
