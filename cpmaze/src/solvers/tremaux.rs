use crate::{dims::Dims, gameboard::Maze, random::RandomSource};

use super::{Outcome, SolveOptions, SolveReport, Solver, Step, Walk};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TremauxMode {
    /// Stops at the first dead end and reports it as stuck.
    Stall,
    /// Marks the dead end twice and retreats one cell, then tries again.
    #[default]
    Backtrack,
}

/// Trémaux's algorithm over cell marks.
///
/// Directions are tried up, down, left, right; the walker only enters unmarked
/// cells and marks each cell once as it leaves it. With [`TremauxMode::Backtrack`]
/// every cell marked exactly once at the end, plus the exit, lies on the solution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tremaux {
    pub mode: TremauxMode,
}

impl Tremaux {
    pub fn stalling() -> Self {
        Self {
            mode: TremauxMode::Stall,
        }
    }

    pub fn backtracking() -> Self {
        Self {
            mode: TremauxMode::Backtrack,
        }
    }

    fn unmarked_passage(maze: &Maze, pos: Dims) -> Option<Dims> {
        maze.get_passable_neighbors(pos)
            .into_iter()
            .map(|(_, neighbor)| neighbor)
            .find(|&neighbor| !maze.cells[neighbor].is_visited())
    }
}

impl Solver for Tremaux {
    fn name(&self) -> &'static str {
        match self.mode {
            TremauxMode::Stall => "tremaux (stalling)",
            TremauxMode::Backtrack => "tremaux",
        }
    }

    fn solve(
        &self,
        maze: &mut Maze,
        _rng: &mut dyn RandomSource,
        options: SolveOptions,
    ) -> SolveReport {
        let exit = maze.exit();
        let mut walk = Walk::new(maze.entrance(), options);
        let mut path = Vec::new();

        while walk.position != exit {
            if walk.limit_reached() {
                return walk.finish(self.name(), Outcome::StepLimit);
            }

            let current = walk.position;
            if let Some(next) = Self::unmarked_passage(maze, current) {
                let cell = &mut maze.cells[current];
                if !cell.is_visited() {
                    cell.visit();
                }

                path.push(current);
                walk.record(Step::Move {
                    from: current,
                    to: next,
                });
                continue;
            }

            if self.mode == TremauxMode::Backtrack {
                if let Some(previous) = path.pop() {
                    let cell = &mut maze.cells[current];
                    if !cell.is_visited() {
                        cell.visit();
                    }
                    cell.visit();

                    walk.record(Step::Backtrack {
                        from: current,
                        to: previous,
                    });
                    continue;
                }
            }

            // holding position would repeat this scan forever
            walk.record(Step::Stuck(current));
            return walk.finish(self.name(), Outcome::Stuck(current));
        }

        walk.finish(self.name(), Outcome::Reached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        algorithms::{MazeAlgorithm as _, RndPrims},
        random::{seeded, ScriptedRandom},
        solvers::tests::{dead_end_maze, solution_path},
    };

    fn solve(solver: Tremaux, maze: &mut Maze, options: SolveOptions) -> SolveReport {
        solver.solve(maze, &mut ScriptedRandom::default(), options)
    }

    #[test]
    fn stalling_reports_dead_end() {
        let mut maze = dead_end_maze();
        let report = solve(
            Tremaux::stalling(),
            &mut maze,
            SolveOptions::new().record_trace(true),
        );

        assert_eq!(report.outcome, Outcome::Stuck(Dims(0, 1)));
        assert_eq!(report.position, Dims(0, 1));
        assert_eq!(report.steps, 1);
        assert_eq!(
            report.trace,
            vec![
                Step::Move {
                    from: Dims(0, 0),
                    to: Dims(0, 1)
                },
                Step::Stuck(Dims(0, 1)),
            ]
        );
        // only the cell left behind is marked
        assert_eq!(
            maze.codes().to_rows(),
            vec![vec![27, 5, 6], vec![8, 3, 12], vec![1, 13, 6]]
        );
    }

    #[test]
    fn backtracking_escapes_dead_ends() {
        let mut maze = dead_end_maze();
        let report = solve(
            Tremaux::backtracking(),
            &mut maze,
            SolveOptions::new().record_trace(true),
        );

        assert!(report.is_solved());
        assert_eq!(report.steps, 10);
        assert_eq!(
            report.trace[1],
            Step::Backtrack {
                from: Dims(0, 1),
                to: Dims(0, 0)
            }
        );
        assert_eq!(
            report
                .trace
                .iter()
                .filter(|step| matches!(step, Step::Backtrack { .. }))
                .count(),
            2
        );
        assert_eq!(
            maze.codes().to_rows(),
            vec![vec![27, 21, 22], vec![40, 19, 28], vec![33, 29, 6]]
        );
    }

    #[test]
    fn backtracking_solves_generated_mazes() {
        let (mut rng, _) = seeded(Some(2024));
        for (rows, columns) in [(1, 1), (1, 8), (8, 1), (5, 5), (16, 9), (25, 25)] {
            let mut maze = RndPrims::new().generate(rows, columns, &mut rng).unwrap();
            let mut expected = solution_path(&maze);
            let report = solve(Tremaux::backtracking(), &mut maze, SolveOptions::new());
            assert!(report.is_solved());

            let exit = maze.exit();
            let mut once = maze
                .get_cells()
                .iter_pos()
                .filter(|&pos| pos == exit || maze.get_cell(pos).unwrap().visits() == 1)
                .collect::<Vec<_>>();
            expected.sort();
            once.sort();
            assert_eq!(once, expected);
            assert!(maze.get_cells().iter().all(|cell| cell.visits() <= 2));
        }
    }

    #[test]
    fn stalling_never_loops() {
        let (mut rng, _) = seeded(Some(31));
        for _ in 0..20 {
            let mut maze = RndPrims::new().generate(10, 10, &mut rng).unwrap();
            let report = solve(Tremaux::stalling(), &mut maze, SolveOptions::new());
            match report.outcome {
                Outcome::Reached => assert_eq!(report.position, maze.exit()),
                Outcome::Stuck(pos) => assert_eq!(report.position, pos),
                Outcome::StepLimit => panic!("no ceiling was set"),
            }
            // each move enters a new cell
            assert!(report.steps < 100);
        }
    }

    #[test]
    fn step_ceiling() {
        let mut maze = dead_end_maze();
        let report = solve(
            Tremaux::backtracking(),
            &mut maze,
            SolveOptions::new().max_steps(3),
        );
        assert_eq!(report.outcome, Outcome::StepLimit);
        assert_eq!(report.steps, 3);
        assert_eq!(report.position, Dims(1, 0));
    }

    #[test]
    fn unreachable_exit_is_stuck_at_entrance() {
        // entrance and its neighbor form a closed pocket
        let mut maze = Maze::from_codes(vec![vec![9, 4], vec![0, 2]]).unwrap();
        let report = solve(Tremaux::backtracking(), &mut maze, SolveOptions::new());
        assert_eq!(report.outcome, Outcome::Stuck(Dims(0, 0)));
        assert_eq!(report.steps, 2);
    }

    #[test]
    fn names() {
        assert_eq!(Tremaux::default().mode, TremauxMode::Backtrack);
        assert_ne!(Tremaux::stalling().name(), Tremaux::backtracking().name());
    }
}
