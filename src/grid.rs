use core::fmt;
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::IndexSet;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::{Cell, Direction, NavigationError, Result, Wall};

/// [Grid] is the immutable world a search runs in: `cols` wide and `rows` tall, a start cell,
/// one or more goal cells and the set of cells covered by walls. Connected components are
/// computed once with a [UnionFind] structure so reachability questions can be answered
/// without searching.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: i32,
    cols: i32,
    start: Cell,
    goals: IndexSet<Cell, FxBuildHasher>,
    blocked: FxHashSet<Cell>,
    components: UnionFind<usize>,
}

impl Grid {
    /// Builds a grid, expanding every wall into the unit cells it covers. Walls are clipped to
    /// the grid first. Duplicate goals collapse, keeping the order they are listed in.
    ///
    /// Fails if the grid is empty, no goal is given, or the start or a goal is outside the
    /// grid or covered by a wall.
    pub fn new<G>(rows: i32, cols: i32, start: Cell, goals: G, walls: &[Wall]) -> Result<Grid>
    where
        G: IntoIterator<Item = Cell>,
    {
        if rows <= 0 || cols <= 0 || rows.checked_mul(cols).is_none() {
            return Err(NavigationError::InvalidDimensions { rows, cols });
        }
        let mut grid = Grid {
            rows,
            cols,
            start,
            goals: goals.into_iter().collect(),
            blocked: FxHashSet::default(),
            components: UnionFind::new(0),
        };
        grid.blocked = walls
            .iter()
            .flat_map(|wall| wall.cells_within(cols, rows))
            .collect();
        if grid.goals.is_empty() {
            return Err(NavigationError::NoGoals);
        }
        grid.check_placement("start", start)?;
        for &goal in &grid.goals {
            grid.check_placement("goal", goal)?;
        }
        grid.generate_components();
        debug!(
            "Built {}x{} grid with {} wall cells and {} goals",
            cols,
            rows,
            grid.blocked.len(),
            grid.goals.len()
        );
        Ok(grid)
    }

    fn check_placement(&self, role: &'static str, cell: Cell) -> Result<()> {
        if !self.in_bounds(&cell) {
            Err(NavigationError::OutOfBounds { role, cell })
        } else if self.is_blocked(&cell) {
            Err(NavigationError::Blocked { role, cell })
        } else {
            Ok(())
        }
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }
    pub fn cols(&self) -> i32 {
        self.cols
    }
    pub fn start(&self) -> Cell {
        self.start
    }
    /// Goal cells in the order they were first listed.
    pub fn goals(&self) -> impl ExactSizeIterator<Item = &Cell> + Clone + '_ {
        self.goals.iter()
    }
    pub fn first_goal(&self) -> Cell {
        // Construction guarantees at least one goal.
        self.goals[0]
    }
    pub fn is_goal(&self, cell: &Cell) -> bool {
        self.goals.contains(cell)
    }
    pub fn blocked(&self) -> &FxHashSet<Cell> {
        &self.blocked
    }
    pub fn in_bounds(&self, cell: &Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.cols && cell.y < self.rows
    }
    pub fn is_blocked(&self, cell: &Cell) -> bool {
        self.blocked.contains(cell)
    }
    /// A cell the robot can stand on: inside the grid and not a wall.
    pub fn is_valid(&self, cell: &Cell) -> bool {
        self.in_bounds(cell) && !self.is_blocked(cell)
    }

    /// Valid cells one step away, in the fixed [Direction::ALL] order.
    pub fn neighbors(&self, cell: &Cell) -> SmallVec<[Cell; 4]> {
        Direction::ALL
            .iter()
            .map(|&dir| *cell + dir)
            .filter(|n| self.is_valid(n))
            .collect()
    }

    /// Number of cells, rows times columns. Construction rejects sizes that overflow `i32`.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    fn get_ix(&self, cell: &Cell) -> usize {
        cell.y as usize * self.cols as usize + cell.x as usize
    }

    /// Checks if both cells are valid and on the same component.
    pub fn reachable(&self, a: &Cell, b: &Cell) -> bool {
        self.is_valid(a)
            && self.is_valid(b)
            && self.components.equiv(self.get_ix(a), self.get_ix(b))
    }

    /// Checks if any goal shares a component with the start.
    pub fn solvable(&self) -> bool {
        self.goals.iter().any(|goal| self.reachable(&self.start, goal))
    }

    /// Number of valid cells on the component of `cell`, zero for walls and outside cells.
    pub fn component_size(&self, cell: &Cell) -> usize {
        if !self.is_valid(cell) {
            return 0;
        }
        let root = self.components.find(self.get_ix(cell));
        self.cells()
            .filter(|c| self.is_valid(c) && self.components.find(self.get_ix(c)) == root)
            .count()
    }

    /// All cells of the grid, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows).flat_map(move |y| (0..cols).map(move |x| Cell::new(x, y)))
    }

    /// Links up every valid cell with its valid right and lower neighbour.
    fn generate_components(&mut self) {
        let mut components = UnionFind::new(self.cell_count());
        for cell in self.cells().filter(|c| self.is_valid(c)) {
            let ix = self.get_ix(&cell);
            for dir in [Direction::Right, Direction::Down] {
                let n = cell + dir;
                if self.is_valid(&n) {
                    components.union(ix, self.get_ix(&n));
                }
            }
        }
        self.components = components;
    }

    /// Text picture of the grid, one line per row. Cells on `path` are drawn as `*`, other
    /// `visited` cells as `o`; start `S`, goals `G`, walls `#` and free cells `.`.
    pub fn render(&self, visited: &[Cell], path: &[Cell]) -> String {
        let visited: FxHashSet<&Cell> = visited.iter().collect();
        let path: FxHashSet<&Cell> = path.iter().collect();
        let mut out = String::with_capacity((self.cols as usize + 1) * self.rows as usize);
        for y in 0..self.rows {
            for x in 0..self.cols {
                let c = Cell::new(x, y);
                let ch = if c == self.start {
                    'S'
                } else if self.is_goal(&c) {
                    'G'
                } else if self.is_blocked(&c) {
                    '#'
                } else if path.contains(&c) {
                    '*'
                } else if visited.contains(&c) {
                    'o'
                } else {
                    '.'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render(&[], &[]))
    }
}
