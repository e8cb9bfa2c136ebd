//! Core geometry types shared by the maze and pathfinding crates.

mod geom;

pub use geom::{Point, Range, RangeIter};
