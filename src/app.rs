use std::io;

use cpmaze::{
    algorithms::{GenerationError, MazeAlgorithm, RndPrims},
    gameboard::Maze,
    random::seeded,
    solvers::{Outcome, RandomWalk, SolveOptions, SolveReport, Solver, Step, Tremaux},
};
use thiserror::Error;

use crate::{
    render,
    settings::{Settings, SettingsError, SolverKind},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("logger already set")]
    Logger(#[from] log::SetLoggerError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl SolverKind {
    pub fn solver(self) -> Box<dyn Solver> {
        match self {
            SolverKind::RandomWalk => Box::new(RandomWalk),
            SolverKind::Tremaux => Box::new(Tremaux::backtracking()),
            SolverKind::TremauxStall => Box::new(Tremaux::stalling()),
        }
    }
}

/// Everything one run needs, settings already merged with the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub rows: i32,
    pub columns: i32,
    pub seed: Option<u64>,
    pub solver: SolverKind,
    pub max_steps: Option<usize>,
    pub trace: bool,
    pub color: bool,
    pub show_codes: bool,
}

impl From<&Settings> for RunConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            rows: settings.rows,
            columns: settings.columns,
            seed: None,
            solver: settings.solver,
            max_steps: settings.max_steps,
            trace: false,
            color: settings.color,
            show_codes: settings.show_codes,
        }
    }
}

#[derive(Debug)]
pub struct RunOutput {
    pub seed: u64,
    pub solver: &'static str,
    pub generated: Maze,
    pub walked: Maze,
    pub report: SolveReport,
}

pub fn run(config: &RunConfig) -> Result<RunOutput, AppError> {
    let (mut rng, seed) = seeded(config.seed);
    log::info!("seed {}", seed);

    let generated = RndPrims::new().generate(config.rows, config.columns, &mut rng)?;

    let solver = config.solver.solver();
    let mut options = SolveOptions::new().record_trace(config.trace);
    options.max_steps = config.max_steps;

    let mut walked = generated.clone();
    let report = solver.solve(&mut walked, &mut rng, options);

    match report.outcome {
        Outcome::Reached => log::info!("{} reached the exit", solver.name()),
        Outcome::Stuck(pos) => log::warn!("{} got stuck at {:?}", solver.name(), pos),
        Outcome::StepLimit => log::warn!("{} gave up after {} steps", solver.name(), report.steps),
    }

    Ok(RunOutput {
        seed,
        solver: solver.name(),
        generated,
        walked,
        report,
    })
}

fn describe_step(step: &Step) -> String {
    match step {
        Step::Move { from, to } => format!(
            "move {} -> {}",
            render::format_pos(*from),
            render::format_pos(*to)
        ),
        Step::Backtrack { from, to } => format!(
            "back {} -> {}",
            render::format_pos(*from),
            render::format_pos(*to)
        ),
        Step::Stuck(pos) => format!("stuck at {}", render::format_pos(*pos)),
    }
}

/// Text printed to stdout for a finished run.
pub fn report(config: &RunConfig, output: &RunOutput) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}x{} maze, seed {}\n",
        config.rows, config.columns, output.seed
    ));
    out.push_str(&render::render_maze(&output.generated, config.color));
    if config.show_codes {
        out.push_str(&render::render_codes(&output.generated));
    }

    out.push('\n');
    for step in &output.report.trace {
        out.push_str(&describe_step(step));
        out.push('\n');
    }

    out.push_str(&format!("{}:\n", output.solver));
    out.push_str(&render::render_maze(&output.walked, config.color));
    if config.show_codes {
        out.push_str(&render::render_codes(&output.walked));
    }

    let result = match output.report.outcome {
        Outcome::Reached => "reached the exit".to_string(),
        Outcome::Stuck(pos) => format!("stuck at {}", render::format_pos(pos)),
        Outcome::StepLimit => "step limit reached".to_string(),
    };
    out.push_str(&format!(
        "Total steps: {} ({})\n",
        output.report.steps, result
    ));

    out
}
