//! Random placement of special cells into a maze.

use mazebound_core::Point;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::cell::Cell;
use crate::maze::{Maze, MazeError};

/// How many of each special cell to place.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub monsters: usize,
    pub traps: usize,
    pub portals: usize,
}

impl Placement {
    /// Total number of cells the placement needs.
    pub fn total(&self) -> usize {
        self.monsters + self.traps + self.portals
    }
}

/// Maze generator with an injected randomness source.
///
/// Placement samples without replacement: all empty coordinates are
/// shuffled once and dealt out, so generation is bounded and fails fast
/// when the request exceeds the available space instead of retrying
/// forever.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator using the given rng.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Build a `width` × `height` maze and place `placement.monsters`
    /// monsters, then traps, then portals into randomly chosen empty
    /// cells. Start and End are never overwritten.
    ///
    /// Portal coordinates are recorded in placement order. Returns
    /// [`MazeError::InsufficientSpace`] when the request does not fit and
    /// [`MazeError::InvalidDimensions`] for degenerate dimensions. No
    /// solvability guarantee: the result may have no path from Start to
    /// End.
    pub fn generate(
        &mut self,
        width: i32,
        height: i32,
        placement: &Placement,
    ) -> Result<Maze, MazeError> {
        let mut maze = Maze::new(width, height)?;

        let mut empty: Vec<Point> = maze
            .bounds()
            .iter()
            .filter(|&p| maze.at(p) == Some(Cell::Empty))
            .collect();
        let requested = placement.total();
        if requested > empty.len() {
            return Err(MazeError::InsufficientSpace {
                requested,
                available: empty.len(),
            });
        }

        empty.shuffle(&mut self.rng);
        let mut deck = empty.into_iter();
        for p in deck.by_ref().take(placement.monsters) {
            maze.set(p, Cell::Monster);
        }
        for p in deck.by_ref().take(placement.traps) {
            maze.set(p, Cell::Trap);
        }
        for p in deck.by_ref().take(placement.portals) {
            maze.set(p, Cell::Portal);
            maze.record_portal(p);
        }

        log::debug!(
            "generated {}x{} maze: {} monsters, {} traps, portals at {:?}",
            width,
            height,
            placement.monsters,
            placement.traps,
            maze.portals()
        );
        Ok(maze)
    }
}
