//! Maze grid state and the transition-cost rules.

use std::fmt;

use mazebound_core::{Point, Range};
use mazebound_paths::{Transition, TransitionPather};

use crate::cell::Cell;

/// A rectangular grid of [`Cell`] values with a fixed start and end.
///
/// The start corner is (0, 0) and the end corner is (width-1, height-1);
/// generation never overwrites them. Cells are only written during
/// construction (generation or parsing); afterwards the maze is immutable
/// and safe to search repeatedly.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
    /// Portal coordinates in placement order. Exactly two entries enable
    /// teleporting; any other count degrades portals to ordinary ground.
    portals: Vec<Point>,
}

impl Maze {
    /// Create a maze of the given dimensions, all [`Cell::Empty`] except
    /// Start at (0, 0) and End at (width-1, height-1).
    ///
    /// In a 1×1 maze the two corners coincide and End wins.
    pub fn new(width: i32, height: i32) -> Result<Self, MazeError> {
        if width < 1 || height < 1 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        let mut maze = Self {
            cells: vec![Cell::Empty; (width * height) as usize],
            width,
            height,
            portals: Vec::new(),
        };
        maze.set(Point::ZERO, Cell::Start);
        maze.set(Point::new(width - 1, height - 1), Cell::End);
        Ok(maze)
    }

    /// Parse a maze from glyph rows, the same format [`Display`](fmt::Display)
    /// produces. Spaces are ignored, so both `"S.E"` and `"S . E"` work.
    ///
    /// All rows must have the same width and every non-space character must
    /// be a known glyph. Portal cells are recorded in row-major order.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let mut cells = Vec::new();
        let mut portals = Vec::new();
        let mut width: i32 = -1;
        let mut height = 0;

        for line in s.trim().lines() {
            let mut x = 0;
            for ch in line.chars() {
                if ch == ' ' {
                    continue;
                }
                let Some(cell) = Cell::from_glyph(ch) else {
                    return Err(MazeError::UnknownGlyph {
                        ch,
                        pos: Point::new(x, height),
                    });
                };
                if cell == Cell::Portal {
                    portals.push(Point::new(x, height));
                }
                cells.push(cell);
                x += 1;
            }
            if width >= 0 && x != width {
                return Err(MazeError::InconsistentSize(s.trim().to_string()));
            }
            width = x;
            height += 1;
        }

        if width < 1 || height < 1 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Self {
            cells,
            width,
            height,
            portals,
        })
    }

    /// Width in cells.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width = x, height = y).
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The bounding range of the grid.
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether `p` is inside the grid.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// The fixed start corner, (0, 0).
    pub fn start(&self) -> Point {
        Point::ZERO
    }

    /// The fixed end corner, (width-1, height-1).
    pub fn end(&self) -> Point {
        Point::new(self.width - 1, self.height - 1)
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Portal coordinates in placement order.
    pub fn portals(&self) -> &[Point] {
        &self.portals
    }

    /// Where a portal at `p` leads: the paired portal's coordinate when the
    /// maze holds exactly two portals and `p` is one of them, else `None`.
    pub fn portal_exit(&self, p: Point) -> Option<Point> {
        match self.portals[..] {
            [a, b] if p == a => Some(b),
            [a, b] if p == b => Some(a),
            _ => None,
        }
    }

    /// Count cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Write a cell. Restricted to the construction phase (generator).
    pub(crate) fn set(&mut self, p: Point, cell: Cell) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.cells[idx] = cell;
    }

    /// Record a placed portal's coordinate.
    pub(crate) fn record_portal(&mut self, p: Point) {
        self.portals.push(p);
    }

    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }
}

/// The cost rule table, applied to the cell being stepped *into*:
///
/// - Empty/Start/End: +1
/// - Trap: +2
/// - Monster: -1, rejected outright if the total would go negative
/// - Portal with exactly two portals in the maze: the move lands at the
///   *other* portal at no cost
/// - Portal otherwise: ordinary +1 move
impl TransitionPather for Maze {
    fn transitions(&self, p: Point, cost: i32, buf: &mut Vec<Transition>) {
        for np in p.neighbors_4() {
            let Some(cell) = self.at(np) else {
                continue;
            };
            match cell {
                Cell::Empty | Cell::Start | Cell::End => buf.push(Transition {
                    target: np,
                    cost: cost + 1,
                }),
                Cell::Trap => buf.push(Transition {
                    target: np,
                    cost: cost + 2,
                }),
                Cell::Monster => {
                    if cost - 1 >= 0 {
                        buf.push(Transition {
                            target: np,
                            cost: cost - 1,
                        });
                    }
                }
                Cell::Portal => match self.portal_exit(np) {
                    Some(exit) => buf.push(Transition {
                        target: exit,
                        cost,
                    }),
                    None => buf.push(Transition {
                        target: np,
                        cost: cost + 1,
                    }),
                },
            }
        }
    }

    fn is_goal(&self, p: Point) -> bool {
        self.at(p) == Some(Cell::End)
    }
}

/// Rows of space-separated glyphs, matching the [`parse`](Maze::parse)
/// input format.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[(y * self.width + x) as usize].glyph())?;
            }
        }
        Ok(())
    }
}

/// Errors from maze construction.
#[derive(Debug, Clone)]
pub enum MazeError {
    /// Width or height below 1.
    InvalidDimensions { width: i32, height: i32 },
    /// A placement request asked for more special cells than there are
    /// empty cells to hold them.
    InsufficientSpace { requested: usize, available: usize },
    /// A character that maps to no [`Cell`] was found while parsing.
    UnknownGlyph { ch: char, pos: Point },
    /// Parsed rows have inconsistent widths.
    InconsistentSize(String),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "maze dimensions must be at least 1x1, got {width}x{height}")
            }
            Self::InsufficientSpace {
                requested,
                available,
            } => {
                write!(
                    f,
                    "cannot place {requested} special cells in {available} empty cells"
                )
            }
            Self::UnknownGlyph { ch, pos } => {
                write!(f, "maze contains unknown glyph \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::InconsistentSize(s) => write!(f, "maze rows have inconsistent widths:\n{s}"),
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use mazebound_paths::{CostSearch, manhattan};

    fn min_cost(maze: &Maze) -> Option<i32> {
        let mut search = CostSearch::new(maze.bounds());
        search.min_cost(maze, maze.start())
    }

    // -----------------------------------------------------------------------
    // Construction and parsing
    // -----------------------------------------------------------------------

    #[test]
    fn new_places_corners() {
        let maze = Maze::new(4, 3).unwrap();
        assert_eq!(maze.at(Point::ZERO), Some(Cell::Start));
        assert_eq!(maze.at(Point::new(3, 2)), Some(Cell::End));
        assert_eq!(maze.count(Cell::Empty), 10);
        assert_eq!(maze.at(Point::new(4, 0)), None);
    }

    #[test]
    fn new_rejects_bad_dimensions() {
        assert!(matches!(
            Maze::new(0, 5),
            Err(MazeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Maze::new(3, -1),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn one_by_one_holds_end() {
        let maze = Maze::new(1, 1).unwrap();
        assert_eq!(maze.at(Point::ZERO), Some(Cell::End));
        assert_eq!(maze.start(), maze.end());
    }

    #[test]
    fn parse_round_trips_with_display() {
        let text = "S . M\nT . P\nP . E";
        let maze = Maze::parse(text).unwrap();
        assert_eq!(maze.size(), Point::new(3, 3));
        assert_eq!(maze.to_string(), text);
        assert_eq!(Maze::parse(&maze.to_string()).unwrap().to_string(), text);
    }

    #[test]
    fn parse_accepts_unspaced_glyphs() {
        let maze = Maze::parse("S.E").unwrap();
        assert_eq!(maze.size(), Point::new(3, 1));
        assert_eq!(maze.at(Point::new(1, 0)), Some(Cell::Empty));
    }

    #[test]
    fn parse_records_portals_row_major() {
        let maze = Maze::parse("S P .\n. . P\n. . E").unwrap();
        assert_eq!(maze.portals(), &[Point::new(1, 0), Point::new(2, 1)]);
    }

    #[test]
    fn parse_rejects_unknown_glyph() {
        assert!(matches!(
            Maze::parse("S # E"),
            Err(MazeError::UnknownGlyph { ch: '#', .. })
        ));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert!(matches!(
            Maze::parse("S . .\n. E"),
            Err(MazeError::InconsistentSize(_))
        ));
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(
            Maze::parse(""),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }

    // -----------------------------------------------------------------------
    // Portal pairing
    // -----------------------------------------------------------------------

    #[test]
    fn portal_exit_pairs_exactly_two() {
        let maze = Maze::parse("S P P E").unwrap();
        let a = Point::new(1, 0);
        let b = Point::new(2, 0);
        assert_eq!(maze.portal_exit(a), Some(b));
        assert_eq!(maze.portal_exit(b), Some(a));
        assert_eq!(maze.portal_exit(Point::ZERO), None);
    }

    #[test]
    fn portal_exit_disabled_for_other_counts() {
        let one = Maze::parse("S P . E").unwrap();
        assert_eq!(one.portal_exit(Point::new(1, 0)), None);

        let three = Maze::parse("S P P P E").unwrap();
        for &p in three.portals() {
            assert_eq!(three.portal_exit(p), None);
        }
    }

    // -----------------------------------------------------------------------
    // Search scenarios
    // -----------------------------------------------------------------------

    #[test]
    fn two_by_one_costs_one() {
        let maze = Maze::parse("S E").unwrap();
        assert_eq!(min_cost(&maze), Some(1));
    }

    #[test]
    fn one_by_one_costs_zero() {
        let maze = Maze::new(1, 1).unwrap();
        assert_eq!(min_cost(&maze), Some(0));
    }

    #[test]
    fn trap_corridor_costs_three() {
        let maze = Maze::parse("S T E").unwrap();
        assert_eq!(min_cost(&maze), Some(3));
    }

    #[test]
    fn monster_blocking_only_path_means_no_path() {
        // Stepping into the monster from cost 0 would go negative, so the
        // transition is rejected and nothing else leads to the end.
        let maze = Maze::parse("S M E").unwrap();
        assert_eq!(min_cost(&maze), None);
    }

    #[test]
    fn monster_discount_applies_when_affordable() {
        // S . M E: 0 -> 1 -> 0 -> 1.
        let maze = Maze::parse("S . M E").unwrap();
        assert_eq!(min_cost(&maze), Some(1));
    }

    #[test]
    fn portal_pair_teleports_for_free() {
        // Moving toward a paired portal lands at the other portal with the
        // cumulative cost unchanged; only the final step to End is paid.
        let maze = Maze::parse("S P P E").unwrap();
        assert_eq!(min_cost(&maze), Some(1));

        let corridor = Maze::parse("S P . . P E").unwrap();
        assert_eq!(min_cost(&corridor), Some(1));
    }

    #[test]
    fn portal_teleport_is_symmetric() {
        let paired = Maze::parse("S P . . P E").unwrap();
        // Entering from the start side exits at the far portal, and the
        // reverse entry exits at the near one, both at zero added cost.
        let mut buf = Vec::new();
        paired.transitions(Point::ZERO, 0, &mut buf);
        assert!(buf.contains(&Transition {
            target: Point::new(4, 0),
            cost: 0
        }));
        buf.clear();
        paired.transitions(Point::new(5, 0), 7, &mut buf);
        assert!(buf.contains(&Transition {
            target: Point::new(1, 0),
            cost: 7
        }));
    }

    #[test]
    fn lone_portal_is_ordinary_ground() {
        let maze = Maze::parse("S P E").unwrap();
        assert_eq!(min_cost(&maze), Some(2));
    }

    #[test]
    fn empty_maze_costs_manhattan_distance() {
        let maze = Maze::new(7, 5).unwrap();
        assert_eq!(
            min_cost(&maze),
            Some(manhattan(maze.start(), maze.end()))
        );
    }

    #[test]
    fn single_trap_beats_the_detour() {
        // Through the trap: 2 + 1 = 3. Around it: 4 plain steps.
        let maze = Maze::parse("S T E\n. . .").unwrap();
        assert_eq!(min_cost(&maze), Some(3));
    }

    #[test]
    fn trap_corridor_is_avoided_when_detour_is_cheaper() {
        // Straight through three traps costs 2+2+2+1 = 7; the detour along
        // the bottom row costs 6 plain steps.
        let maze = Maze::parse("S T T T E\n. . . . .").unwrap();
        assert_eq!(min_cost(&maze), Some(6));
    }

    #[test]
    fn search_is_idempotent() {
        let maze = Maze::parse("S T P\nM . P\n. . E").unwrap();
        let mut search = CostSearch::new(maze.bounds());
        let first = search.min_cost(&maze, maze.start());
        let second = search.min_cost(&maze, maze.start());
        assert_eq!(first, second);
    }

    // -----------------------------------------------------------------------
    // Transition rule invariants
    // -----------------------------------------------------------------------

    /// Forwards to a maze while recording every produced transition.
    struct Probe<'a> {
        maze: &'a Maze,
        seen: std::cell::RefCell<Vec<Transition>>,
    }

    impl TransitionPather for Probe<'_> {
        fn transitions(&self, p: Point, cost: i32, buf: &mut Vec<Transition>) {
            self.maze.transitions(p, cost, buf);
            self.seen.borrow_mut().extend_from_slice(buf);
        }

        fn is_goal(&self, p: Point) -> bool {
            self.maze.is_goal(p)
        }
    }

    #[test]
    fn frontier_costs_never_negative() {
        let maze = Maze::parse("S . M .\nM M . .\n. . M E").unwrap();
        let probe = Probe {
            maze: &maze,
            seen: std::cell::RefCell::new(Vec::new()),
        };
        let mut search = CostSearch::new(maze.bounds());
        search.min_cost(&probe, maze.start());
        let seen = probe.seen.borrow();
        assert!(!seen.is_empty());
        assert!(seen.iter().all(|t| t.cost >= 0));
    }

    #[test]
    fn degraded_portals_never_redirect() {
        // With three portals every transition lands on an adjacent cell.
        let maze = Maze::parse("S P .\n. P .\nP . E").unwrap();
        let mut buf = Vec::new();
        for p in maze.bounds().iter() {
            buf.clear();
            maze.transitions(p, 10, &mut buf);
            for t in &buf {
                assert_eq!(manhattan(p, t.target), 1);
            }
        }
    }

    #[test]
    fn monster_transition_rejected_at_zero_cost() {
        let maze = Maze::parse("S M E").unwrap();
        let mut buf = Vec::new();
        maze.transitions(maze.start(), 0, &mut buf);
        assert!(buf.is_empty());
        buf.clear();
        maze.transitions(maze.start(), 3, &mut buf);
        assert_eq!(
            buf,
            vec![Transition {
                target: Point::new(1, 0),
                cost: 2
            }]
        );
    }
}
