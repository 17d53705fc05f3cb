//! The textual environment description and its parser.
//!
//! ```text
//! (5,11)
//! (0,1)
//! (7,0) | (10,3)
//! (2,0,2,2)
//! (8,0,1,2)
//! ```
//! Line 1 holds `(rows,cols)`, line 2 the start cell, line 3 the goal cells separated by `|`
//! and every further non-blank line one wall rectangle `(x,y,width,height)`. Square brackets
//! are accepted in place of parentheses.
use core::str::FromStr;
use log::debug;
use std::fs;
use std::path::Path;

use crate::{Cell, Grid, NavigationError, Result, Wall};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Environment {
    pub rows: i32,
    pub cols: i32,
    pub start: Cell,
    pub goals: Vec<Cell>,
    pub walls: Vec<Wall>,
}

impl Environment {
    /// Reads and parses an environment file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Environment> {
        let text = fs::read_to_string(path.as_ref())?;
        debug!("Loaded environment from {}", path.as_ref().display());
        text.parse()
    }

    /// Builds the validated [Grid] for this environment.
    pub fn to_grid(&self) -> Result<Grid> {
        Grid::new(self.rows, self.cols, self.start, self.goals.iter().copied(), &self.walls)
    }
}

/// Parses `(a,b,...)` into exactly `N` integers. `line` is 1-based and only used for errors.
fn parse_tuple<const N: usize>(text: &str, line: usize) -> Result<[i32; N]> {
    let text = text.trim();
    let inner = text
        .strip_prefix(['(', '['])
        .and_then(|t| t.strip_suffix([')', ']']))
        .ok_or_else(|| NavigationError::parse(line, format!("expected a bracketed tuple, found `{text}`")))?;
    let fields = inner.split(',').map(str::trim).collect::<Vec<&str>>();
    if fields.len() != N {
        return Err(NavigationError::parse(
            line,
            format!("expected {N} fields, found {}", fields.len()),
        ));
    }
    let mut values = [0; N];
    for (value, field) in values.iter_mut().zip(&fields) {
        *value = field
            .parse()
            .map_err(|_| NavigationError::parse(line, format!("`{field}` is not an integer")))?;
    }
    Ok(values)
}

impl FromStr for Environment {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Environment> {
        let lines = s.lines().collect::<Vec<&str>>();
        if lines.len() < 3 {
            return Err(NavigationError::parse(
                lines.len() + 1,
                "an environment needs dimensions, a start and goals",
            ));
        }
        let [rows, cols] = parse_tuple::<2>(lines[0], 1)?;
        let [sx, sy] = parse_tuple::<2>(lines[1], 2)?;
        let goals = lines[2]
            .split('|')
            .map(|goal| parse_tuple::<2>(goal, 3).map(|[x, y]| Cell::new(x, y)))
            .collect::<Result<Vec<Cell>>>()?;
        let walls = lines
            .iter()
            .enumerate()
            .skip(3)
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(ix, line)| parse_tuple::<4>(line, ix + 1).map(|[x, y, w, h]| Wall::new(x, y, w, h)))
            .collect::<Result<Vec<Wall>>>()?;
        Ok(Environment {
            rows,
            cols,
            start: Cell::new(sx, sy),
            goals,
            walls,
        })
    }
}
