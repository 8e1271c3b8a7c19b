use crate::{
    array::Array2D,
    dims::Dims,
    gameboard::{CellWall, Maze},
    random::RandomSource,
};

use super::{FrontierCapacity, FrontierSet, GenerationError, MazeAlgorithm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Membership {
    Unvisited,
    Frontier,
    Tree,
}

/// Randomized Prim's: grows a spanning tree from a random seed cell by absorbing
/// random frontier cells, each joined to one random tree neighbor.
#[derive(Debug, Clone, Default)]
pub struct RndPrims {
    pub frontier_capacity: FrontierCapacity,
}

impl RndPrims {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frontier_capacity(frontier_capacity: FrontierCapacity) -> Self {
        Self { frontier_capacity }
    }

    fn mark_frontier(
        maze: &Maze,
        state: &mut Array2D<Membership>,
        frontier: &mut FrontierSet,
        cell: Dims,
    ) -> Result<(), GenerationError> {
        for (_, neighbor) in maze.get_neighbors_pos(cell) {
            if state[neighbor] == Membership::Unvisited {
                state[neighbor] = Membership::Frontier;
                frontier.push(neighbor)?;
            }
        }

        Ok(())
    }

    /// Rejection samples directions until one points at a tree cell.
    fn random_tree_neighbor(
        state: &Array2D<Membership>,
        cell: Dims,
        rng: &mut dyn RandomSource,
    ) -> CellWall {
        loop {
            let wall = CellWall::from_draw(rng.below(4));
            if state.get(cell + wall.to_coord()) == Some(&Membership::Tree) {
                return wall;
            }
        }
    }
}

impl MazeAlgorithm for RndPrims {
    fn generate_individual(
        &self,
        size: Dims,
        rng: &mut dyn RandomSource,
    ) -> Result<Maze, GenerationError> {
        let invalid = || GenerationError::InvalidDimensions {
            rows: size.1,
            columns: size.0,
        };

        let mut maze = Maze::enclosed(size).ok_or_else(invalid)?;
        let mut state = Array2D::new_dims(Membership::Unvisited, size).ok_or_else(invalid)?;
        let mut frontier = FrontierSet::new(self.frontier_capacity.limit(size));

        let row = rng.below(size.1 as usize) as i32;
        let column = rng.below(size.0 as usize) as i32;
        let seed = Dims(column, row);
        log::debug!("growing maze from seed cell {:?}", seed);

        state[seed] = Membership::Tree;
        Self::mark_frontier(&maze, &mut state, &mut frontier, seed)?;

        let mut absorbed = 0;
        while let Some(cell) = frontier.take_random(rng) {
            // every frontier cell was marked by a tree neighbor, so this terminates
            let wall = Self::random_tree_neighbor(&state, cell, rng);

            state[cell] = Membership::Tree;
            maze.remove_wall(cell, wall);
            Self::mark_frontier(&maze, &mut state, &mut frontier, cell)?;

            absorbed += 1;
        }

        debug_assert_eq!(absorbed + 1, size.product());
        log::debug!(
            "absorbed {} cells, frontier peaked at {}",
            absorbed,
            frontier.peak()
        );

        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        algorithms::tests::assert_perfect,
        random::{seeded, ScriptedRandom},
    };

    #[test]
    fn generate_individual_keeps_boundary_closed() {
        let (mut rng, _) = seeded(Some(11));
        let maze = RndPrims::new()
            .generate_individual(Dims(6, 4), &mut rng)
            .unwrap();
        assert!(maze.get_cell(maze.entrance()).unwrap().is_closed(CellWall::Top));
        assert!(maze.get_cell(maze.exit()).unwrap().is_closed(CellWall::Bottom));
        assert_eq!(maze.passage_count(), 23);
    }

    #[test]
    fn fixed_capacity_overflow_aborts() {
        // seed in the middle of a 3x3 grid has four frontier neighbors
        let mut rng = ScriptedRandom::new([1, 1]);
        let result = RndPrims::with_frontier_capacity(FrontierCapacity::Fixed(3)).generate(
            3,
            3,
            &mut rng,
        );
        assert_eq!(
            result,
            Err(GenerationError::FrontierOverflow { capacity: 3 })
        );
    }

    #[test]
    fn perimeter_capacity_is_enough_for_small_squares() {
        let (mut rng, _) = seeded(Some(5));
        let maze = RndPrims::with_frontier_capacity(FrontierCapacity::Perimeter)
            .generate(10, 10, &mut rng)
            .unwrap();
        assert_perfect(&maze);
    }

    #[test]
    fn seed_is_drawn_row_first() {
        // 1 row, 3 columns: the row draw is always 0 and the column draw picks the seed
        let mut rng = ScriptedRandom::new([0, 2]);
        let maze = RndPrims::new()
            .generate_individual(Dims(3, 1), &mut rng)
            .unwrap();
        // seed (2, 0), then (1, 0) joins it, then (0, 0) joins (1, 0)
        assert_eq!(maze.codes().to_rows(), vec![vec![1, 5, 4]]);
    }
}
