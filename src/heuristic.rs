//! Distance estimates between cells. On a 4-connected grid with unit moves all of them are
//! admissible; [Manhattan](Heuristic::Manhattan) is the tightest and the default.
use core::fmt;
use core::str::FromStr;
use ordered_float::OrderedFloat;

use crate::{Cell, NavigationError};

/// Path costs and priorities. Integral for every path cost, fractional only for some
/// heuristic estimates.
pub type Cost = OrderedFloat<f64>;

pub fn manhattan(a: &Cell, b: &Cell) -> f64 {
    a.manhattan_distance(b) as f64
}

pub fn euclidean(a: &Cell, b: &Cell) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

pub fn chebyshev(a: &Cell, b: &Cell) -> f64 {
    (a.x - b.x).abs().max((a.y - b.y).abs()) as f64
}

/// Cost of taking as many diagonal steps (length sqrt 2) as possible before going straight.
pub fn octile(a: &Cell, b: &Cell) -> f64 {
    let dx = (a.x - b.x).abs() as f64;
    let dy = (a.y - b.y).abs() as f64;
    (dx + dy) + (std::f64::consts::SQRT_2 - 2.0) * dx.min(dy)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
    Chebyshev,
    Octile,
}

impl Heuristic {
    pub fn distance(self, a: &Cell, b: &Cell) -> f64 {
        match self {
            Heuristic::Manhattan => manhattan(a, b),
            Heuristic::Euclidean => euclidean(a, b),
            Heuristic::Chebyshev => chebyshev(a, b),
            Heuristic::Octile => octile(a, b),
        }
    }
    /// Estimate towards the closest of `goals`; zero when there are none.
    pub fn to_nearest<'a, I>(self, cell: &Cell, goals: I) -> Cost
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        goals
            .into_iter()
            .map(|goal| OrderedFloat(self.distance(cell, goal)))
            .min()
            .unwrap_or_default()
    }
}

impl FromStr for Heuristic {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Heuristic, NavigationError> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Heuristic::Manhattan),
            "euclidean" => Ok(Heuristic::Euclidean),
            "chebyshev" => Ok(Heuristic::Chebyshev),
            "octile" => Ok(Heuristic::Octile),
            _ => Err(NavigationError::UnknownHeuristic(s.to_owned())),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
            Heuristic::Chebyshev => "chebyshev",
            Heuristic::Octile => "octile",
        };
        f.write_str(name)
    }
}
