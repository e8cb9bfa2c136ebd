//! Mazebound — generate a random maze, then find the cheapest way through.

use mazebound_maze::{MazeGen, Placement};
use mazebound_paths::CostSearch;

pub const MAZE_WIDTH: i32 = 10;
pub const MAZE_HEIGHT: i32 = 8;

const PLACEMENT: Placement = Placement {
    monsters: 6,
    traps: 6,
    portals: 2,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut mazegen = MazeGen::new(rand::rng());
    let maze = mazegen.generate(MAZE_WIDTH, MAZE_HEIGHT, &PLACEMENT)?;
    println!("{maze}");

    let mut search = CostSearch::new(maze.bounds());
    let cost = search.min_cost(&maze, maze.start());
    // -1 is the reported sentinel for an unsolvable maze.
    println!("Minimum cost: {}", cost.unwrap_or(-1));
    Ok(())
}
