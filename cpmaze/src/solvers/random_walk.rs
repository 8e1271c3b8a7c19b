use crate::{
    gameboard::{CellWall, Maze},
    random::RandomSource,
};

use super::{Outcome, SolveOptions, SolveReport, Solver, Step, Walk};

/// Unguided random mouse.
///
/// Marks the cells of its current loop-free route: stepping into a marked cell
/// unmarks the cell it leaves, so in a perfect maze the marks always trace the
/// way back to the entrance.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomWalk;

impl Solver for RandomWalk {
    fn name(&self) -> &'static str {
        "random walk"
    }

    fn solve(
        &self,
        maze: &mut Maze,
        rng: &mut dyn RandomSource,
        options: SolveOptions,
    ) -> SolveReport {
        let exit = maze.exit();
        let mut walk = Walk::new(maze.entrance(), options);
        maze.cells[walk.position].visit();

        while walk.position != exit {
            if walk.limit_reached() {
                return walk.finish(self.name(), Outcome::StepLimit);
            }

            let current = walk.position;
            if maze.get_passable_neighbors(current).is_empty() {
                walk.record(Step::Stuck(current));
                return walk.finish(self.name(), Outcome::Stuck(current));
            }

            let wall = loop {
                let wall = CellWall::from_draw(rng.below(4));
                if maze.can_move(current, wall) {
                    break wall;
                }
            };

            let next = current + wall.to_coord();
            if maze.cells[next].is_visited() {
                maze.cells[current].unvisit();
            } else {
                maze.cells[next].visit();
            }

            walk.record(Step::Move {
                from: current,
                to: next,
            });
        }

        walk.finish(self.name(), Outcome::Reached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        algorithms::{MazeAlgorithm as _, RndPrims},
        dims::Dims,
        random::{seeded, ScriptedRandom},
        solvers::tests::{dead_end_maze, solution_path},
    };

    const CEILING: usize = 5_000_000;

    fn marked(maze: &Maze) -> Vec<Dims> {
        maze.get_cells()
            .iter_pos()
            .filter(|&pos| maze.get_cell(pos).unwrap().is_visited())
            .collect()
    }

    #[test]
    fn reaches_exit_of_generated_mazes() {
        let (mut rng, _) = seeded(Some(1234));
        for (rows, columns) in [(1, 1), (1, 6), (6, 1), (4, 4), (8, 12)] {
            let mut maze = RndPrims::new().generate(rows, columns, &mut rng).unwrap();
            let report =
                RandomWalk.solve(&mut maze, &mut rng, SolveOptions::new().max_steps(CEILING));

            assert_eq!(report.outcome, Outcome::Reached);
            assert_eq!(report.position, maze.exit());
        }
    }

    #[test]
    fn marks_trace_the_solution_path() {
        let (mut rng, _) = seeded(Some(77));
        for _ in 0..10 {
            let mut maze = RndPrims::new().generate(7, 9, &mut rng).unwrap();
            let mut expected = solution_path(&maze);
            let report =
                RandomWalk.solve(&mut maze, &mut rng, SolveOptions::new().max_steps(CEILING));
            assert!(report.is_solved());

            let mut marked = marked(&maze);
            expected.sort();
            marked.sort();
            assert_eq!(marked, expected);
            assert!(maze.get_cells().iter().all(|cell| cell.visits() <= 1));
        }
    }

    #[test]
    fn dead_end_maze_is_walked_out() {
        let mut maze = dead_end_maze();
        let (mut rng, _) = seeded(Some(5));
        let report =
            RandomWalk.solve(&mut maze, &mut rng, SolveOptions::new().max_steps(CEILING));

        assert!(report.is_solved());
        assert!(report.steps >= 6);
        assert_eq!(
            maze.codes().to_rows(),
            vec![vec![27, 21, 22], vec![8, 19, 28], vec![1, 29, 22]]
        );
    }

    #[test]
    fn single_cell_needs_no_steps() {
        let mut maze = Maze::from_codes(vec![vec![10]]).unwrap();
        let report = RandomWalk.solve(
            &mut maze,
            &mut ScriptedRandom::default(),
            SolveOptions::new(),
        );
        assert_eq!(report.steps, 0);
        assert!(report.is_solved());
        assert_eq!(maze.codes().to_rows(), vec![vec![26]]);
    }

    #[test]
    fn step_ceiling_stops_the_walk() {
        let (mut rng, _) = seeded(Some(8));
        let mut maze = RndPrims::new().generate(30, 30, &mut rng).unwrap();
        let report = RandomWalk.solve(&mut maze, &mut rng, SolveOptions::new().max_steps(5));

        assert_eq!(report.outcome, Outcome::StepLimit);
        assert_eq!(report.steps, 5);
    }

    #[test]
    fn walled_in_entrance_is_stuck() {
        let mut maze = Maze::from_codes(vec![vec![8, 0], vec![0, 2]]).unwrap();
        let report = RandomWalk.solve(
            &mut maze,
            &mut ScriptedRandom::default(),
            SolveOptions::new().record_trace(true),
        );

        assert_eq!(report.outcome, Outcome::Stuck(Dims(0, 0)));
        assert_eq!(report.steps, 0);
        assert_eq!(report.trace, vec![Step::Stuck(Dims(0, 0))]);
    }

    #[test]
    fn scripted_walk_unmarks_when_turning_back() {
        let mut maze = Maze::from_codes(vec![vec![11, 4], vec![9, 6]]).unwrap();
        // down, up, right, left, down, right
        let mut rng = ScriptedRandom::new([1, 0, 3, 2, 1, 3]);
        let report = RandomWalk.solve(&mut maze, &mut rng, SolveOptions::new().record_trace(true));

        assert!(report.is_solved());
        assert_eq!(report.steps, 6);
        assert_eq!(
            report.trace[..2],
            [
                Step::Move {
                    from: Dims(0, 0),
                    to: Dims(0, 1)
                },
                Step::Move {
                    from: Dims(0, 1),
                    to: Dims(0, 0)
                },
            ]
        );
        assert_eq!(maze.codes().to_rows(), vec![vec![27, 4], vec![25, 22]]);
    }
}
