mod random_walk;
mod tremaux;

use std::fmt;

use crate::{dims::Dims, gameboard::Maze, random::RandomSource};

pub use random_walk::RandomWalk;
pub use tremaux::{Tremaux, TremauxMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The walker stands on the exit.
    Reached,
    /// No way forward from this cell; the walker holds position there.
    Stuck(Dims),
    /// The step ceiling was hit first.
    StepLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Move { from: Dims, to: Dims },
    Backtrack { from: Dims, to: Dims },
    Stuck(Dims),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveOptions {
    pub max_steps: Option<usize>,
    pub record_trace: bool,
}

impl SolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_steps(mut self, value: usize) -> Self {
        self.max_steps = Some(value);
        self
    }

    pub fn record_trace(mut self, value: bool) -> Self {
        self.record_trace = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    /// Moves and backtracks taken.
    pub steps: usize,
    pub outcome: Outcome,
    /// Where the walker ended.
    pub position: Dims,
    /// Every step, if requested in [`SolveOptions`].
    pub trace: Vec<Step>,
}

impl SolveReport {
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Reached
    }
}

/// Strategy that walks a maze from its entrance to its exit, leaving visit marks behind.
pub trait Solver: fmt::Debug {
    fn name(&self) -> &'static str;

    fn solve(
        &self,
        maze: &mut Maze,
        rng: &mut dyn RandomSource,
        options: SolveOptions,
    ) -> SolveReport;
}

/// Position, step count and trace of a running walker.
struct Walk {
    options: SolveOptions,
    position: Dims,
    steps: usize,
    trace: Vec<Step>,
}

impl Walk {
    fn new(start: Dims, options: SolveOptions) -> Self {
        Self {
            options,
            position: start,
            steps: 0,
            trace: Vec::new(),
        }
    }

    fn limit_reached(&self) -> bool {
        self.options
            .max_steps
            .is_some_and(|max_steps| self.steps >= max_steps)
    }

    fn record(&mut self, step: Step) {
        match step {
            Step::Move { to, .. } | Step::Backtrack { to, .. } => {
                self.position = to;
                self.steps += 1;
            }
            Step::Stuck(_) => {}
        }

        log::trace!("{:?}", step);
        if self.options.record_trace {
            self.trace.push(step);
        }
    }

    fn finish(self, solver: &str, outcome: Outcome) -> SolveReport {
        log::debug!(
            "{} finished after {} steps: {:?}",
            solver,
            self.steps,
            outcome
        );

        SolveReport {
            steps: self.steps,
            outcome,
            position: self.position,
            trace: self.trace,
        }
    }
}
