//! # robot_navigation
//!
//! A robot on a rectangular grid with rectangular walls has to reach one of several goal
//! cells. This crate explores that grid with a family of classical search strategies:
//! [breadth-first](solver::bfs), [depth-first](solver::dfs),
//! [greedy best-first](solver::gbfs), a [best-first variant](solver::best_first),
//! [A*](solver::astar), [iterative deepening](solver::iddfs),
//! [bidirectional A*](solver::bidirectional) and
//! [Jump Point Search](https://en.wikipedia.org/wiki/Jump_point_search) restricted to
//! 4-directional movement ([jps](solver::jps)). All moves cost 1.
//!
//! Every strategy implements [SearchStrategy](solver::SearchStrategy) and reports each node
//! expansion to a [StepObserver](observer::StepObserver), which lets callers animate a search
//! without the search itself knowing anything about timing.
mod astar_jps;
pub mod driver;
pub mod environment;
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod observer;
pub mod solver;

pub use environment::Environment;
pub use error::{NavigationError, Result};
pub use grid::Grid;
pub use heuristic::Heuristic;
pub use solver::{Algorithm, SearchOutcome, SearchStrategy};

use core::fmt;
use core::ops::Add;

/// A grid coordinate. `x` is the column and `y` the row, with `y` growing downwards.
///
/// The derived ordering is lexicographic on `(x, y)`; priority-ordered strategies rely on it
/// to break ties between equally ranked cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }
    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
    /// The direction of a straight unit step from `self` towards `other`, or [None] if the
    /// two cells are equal or not on a common row or column.
    pub fn dir_to(&self, other: &Cell) -> Option<Direction> {
        match ((other.x - self.x).signum(), (other.y - self.y).signum()) {
            (1, 0) => Some(Direction::Right),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (0, -1) => Some(Direction::Up),
            _ => None,
        }
    }
}

impl Add<Direction> for Cell {
    type Output = Cell;
    fn add(self, dir: Direction) -> Cell {
        let (dx, dy) = dir.delta();
        Cell::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Cell {
        Cell::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four unit moves. Doubles as the move label reported by the [driver].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    /// Neighbour enumeration order. Changing it changes exploration order and node counts.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
        }
    }
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Down | Direction::Up)
    }
    /// The two directions at right angles to `self`, in [Direction::ALL] order.
    pub fn perpendicular(self) -> [Direction; 2] {
        if self.is_vertical() {
            [Direction::Right, Direction::Left]
        } else {
            [Direction::Down, Direction::Up]
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Up => "up",
        };
        f.write_str(label)
    }
}

/// An axis-aligned wall rectangle with its top-left corner at `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Wall {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Wall {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Wall {
        Wall {
            x,
            y,
            width,
            height,
        }
    }
    /// The unit cells covered by the rectangle inside `[0, cols) x [0, rows)`, row by row.
    /// The rectangle is clipped before it is expanded, so a huge wall over a small grid costs
    /// no more than the grid itself. Empty for non-positive extents.
    pub fn cells_within(&self, cols: i32, rows: i32) -> impl Iterator<Item = Cell> + '_ {
        let clip = |from: i32, extent: i32, limit: i32| {
            let lo = i64::from(from).max(0);
            let hi = (i64::from(from) + i64::from(extent)).min(i64::from(limit));
            // lo >= 0 and hi.max(lo) <= max(limit, from), both in i32 range.
            (lo as i32)..(hi.max(lo) as i32)
        };
        let xs = clip(self.x, self.width, cols);
        let ys = clip(self.y, self.height, rows);
        ys.flat_map(move |y| xs.clone().map(move |x| Cell::new(x, y)))
    }
}

/// Turns waypoints into a path on the grid which can be followed step by step. Consecutive
/// waypoints are expected to share a row or a column, as jump points do; otherwise the
/// horizontal leg is walked first.
pub fn waypoints_to_path(waypoints: Vec<Cell>) -> Vec<Cell> {
    let mut waypoints = waypoints.into_iter();
    let mut path: Vec<Cell> = Vec::new();
    let Some(mut current) = waypoints.next() else {
        return path;
    };
    path.push(current);
    for next in waypoints {
        while current != next {
            current = if current.x != next.x {
                Cell::new(current.x + (next.x - current.x).signum(), current.y)
            } else {
                Cell::new(current.x, current.y + (next.y - current.y).signum())
            };
            path.push(current);
        }
    }
    path
}

/// Shorthand for writing expected traces in tests.
#[cfg(test)]
pub(crate) fn cells(coords: &[(i32, i32)]) -> Vec<Cell> {
    coords.iter().map(|&(x, y)| Cell::new(x, y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_order_by_column_then_row() {
        assert!(Cell::new(0, 5) < Cell::new(1, 0));
        assert!(Cell::new(1, 0) < Cell::new(1, 1));
    }

    #[test]
    fn wall_expansion() {
        let cells: Vec<Cell> = Wall::new(2, 1, 2, 2).cells_within(5, 5).collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(2, 1),
                Cell::new(3, 1),
                Cell::new(2, 2),
                Cell::new(3, 2)
            ]
        );
        assert_eq!(Wall::new(0, 0, 0, 3).cells_within(5, 5).count(), 0);
    }

    #[test]
    fn walls_clip_to_bounds() {
        let wide = Wall::new(1, 1, i32::MAX, 1);
        let clipped: Vec<Cell> = wide.cells_within(3, 3).collect();
        assert_eq!(clipped, vec![Cell::new(1, 1), Cell::new(2, 1)]);
        assert_eq!(Wall::new(0, 0, 100_000, 100_000).cells_within(3, 3).count(), 9);
        let corner: Vec<Cell> = Wall::new(-5, -5, 6, 6).cells_within(3, 3).collect();
        assert_eq!(corner, vec![Cell::new(0, 0)]);
        assert_eq!(Wall::new(i32::MIN, 0, 2, 1).cells_within(3, 3).count(), 0);
        assert_eq!(Wall::new(5, 0, 1, 1).cells_within(3, 3).count(), 0);
    }

    #[test]
    fn interpolates_straight_waypoints() {
        let path = waypoints_to_path(vec![Cell::new(0, 0), Cell::new(0, 2), Cell::new(3, 2)]);
        assert_eq!(path.len(), 6);
        assert_eq!(path[2], Cell::new(0, 2));
        assert_eq!(path[5], Cell::new(3, 2));
        assert!(waypoints_to_path(Vec::new()).is_empty());
    }

    #[test]
    fn direction_to_neighbour() {
        let c = Cell::new(1, 1);
        for dir in Direction::ALL {
            assert_eq!(c.dir_to(&(c + dir)), Some(dir));
            assert_eq!(dir.opposite().opposite(), dir);
        }
        assert_eq!(c.dir_to(&Cell::new(2, 2)), None);
    }
}
