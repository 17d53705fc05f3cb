//! Hooks for watching a search as it expands nodes.
//!
//! A strategy calls [StepObserver::on_step] exactly once per expansion, synchronously and before
//! testing the expanded cell against the goals, passing the cumulative expansion order so far.
//! Observers cannot reach back into the search, so whatever they do (draw, sleep, count) leaves
//! the trace and the returned path unchanged.
use log::warn;
use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::{Cell, Grid};

pub trait StepObserver {
    fn on_step(&mut self, moves: &[Cell]);
}

impl<F> StepObserver for F
where
    F: FnMut(&[Cell]),
{
    fn on_step(&mut self, moves: &[Cell]) {
        self(moves)
    }
}

/// Ignores every step.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _moves: &[Cell]) {}
}

/// Forwards to another observer, then blocks for a fixed delay. Pacing for animation belongs
/// here rather than in the search loop.
#[derive(Clone, Debug)]
pub struct Paced<O> {
    pub inner: O,
    pub delay: Duration,
}

impl<O: StepObserver> Paced<O> {
    pub fn new(inner: O, delay: Duration) -> Paced<O> {
        Paced { inner, delay }
    }
}

impl<O: StepObserver> StepObserver for Paced<O> {
    fn on_step(&mut self, moves: &[Cell]) {
        self.inner.on_step(moves);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

/// Writes a text frame of the grid with all expanded cells marked after every step.
pub struct Animator<'a, W> {
    grid: &'a Grid,
    out: W,
    failed: bool,
}

impl<'a, W: Write> Animator<'a, W> {
    pub fn new(grid: &'a Grid, out: W) -> Animator<'a, W> {
        Animator {
            grid,
            out,
            failed: false,
        }
    }
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StepObserver for Animator<'_, W> {
    fn on_step(&mut self, moves: &[Cell]) {
        if self.failed {
            return;
        }
        let current = moves.last().map(|c| c.to_string()).unwrap_or_default();
        let frame = self.grid.render(moves, &[]);
        let written = writeln!(self.out, "step {} {}\n{}", moves.len(), current, frame)
            .and_then(|_| self.out.flush());
        if let Err(e) = written {
            // The search keeps running; only the drawing stops.
            warn!("Stopping animation: {}", e);
            self.failed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_observe() {
        let mut seen = Vec::new();
        {
            let mut observer = |moves: &[Cell]| seen.push(moves.len());
            observer.on_step(&[Cell::new(0, 0)]);
            observer.on_step(&[Cell::new(0, 0), Cell::new(1, 0)]);
        }
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn paced_forwards_steps() {
        let mut count = 0;
        {
            let mut paced = Paced::new(|_: &[Cell]| count += 1, Duration::ZERO);
            paced.on_step(&[Cell::new(0, 0)]);
        }
        assert_eq!(count, 1);
    }

    #[test]
    fn animator_draws_frames() {
        let grid = Grid::new(1, 3, Cell::new(0, 0), [Cell::new(2, 0)], &[]).unwrap();
        let mut animator = Animator::new(&grid, Vec::new());
        animator.on_step(&[Cell::new(0, 0), Cell::new(1, 0)]);
        let text = String::from_utf8(animator.into_inner()).unwrap();
        assert_eq!(text, "step 2 (1, 0)\nSoG\n\n");
    }
}
