//! Randomized grid mazes with monsters, traps, and paired portals.
//!
//! A [`Maze`] is a rectangular grid of [`Cell`] values with a fixed start
//! at the top-left corner and a fixed end at the bottom-right corner.
//! Mazes are built either by [`MazeGen`] (random placement of special
//! cells) or parsed from glyph text via [`Maze::parse`].
//!
//! `Maze` implements [`TransitionPather`](mazebound_paths::TransitionPather),
//! so the minimum path cost is a
//! [`CostSearch::min_cost`](mazebound_paths::CostSearch::min_cost) query:
//!
//! ```
//! use mazebound_maze::Maze;
//! use mazebound_paths::CostSearch;
//!
//! let maze = Maze::parse("S . .\n. T .\n. . E").unwrap();
//! let mut search = CostSearch::new(maze.bounds());
//! assert_eq!(search.min_cost(&maze, maze.start()), Some(4));
//! ```

mod cell;
mod generator;
mod maze;

pub use cell::Cell;
pub use generator::{MazeGen, Placement};
pub use maze::{Maze, MazeError};
