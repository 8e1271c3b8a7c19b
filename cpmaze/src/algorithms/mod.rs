mod frontier;
mod rnd_prims;

use std::fmt;

use thiserror::Error;

use crate::{dims::Dims, gameboard::Maze, random::RandomSource};

pub use frontier::{FrontierCapacity, FrontierSet};
pub use rnd_prims::RndPrims;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid maze dimensions {rows}x{columns}, both must be positive")]
    InvalidDimensions { rows: i32, columns: i32 },
    #[error("frontier set overflowed its capacity of {capacity} cells")]
    FrontierOverflow { capacity: usize },
}

pub trait MazeAlgorithm: fmt::Debug {
    /// Generates a perfect maze with `rows` x `columns` cells and opens its entrance and exit.
    ///
    /// Dimensions are checked before anything is allocated. On error no maze is returned.
    fn generate(
        &self,
        rows: i32,
        columns: i32,
        rng: &mut dyn RandomSource,
    ) -> Result<Maze, GenerationError> {
        if rows <= 0 || columns <= 0 {
            return Err(GenerationError::InvalidDimensions { rows, columns });
        }

        let mut maze = self.generate_individual(Dims(columns, rows), rng)?;
        maze.open_entrance_and_exit();

        log::debug!(
            "generated {}x{} maze with {} passages",
            rows,
            columns,
            maze.passage_count()
        );

        Ok(maze)
    }

    /// Builds the spanning tree only, without touching the outer boundary.
    fn generate_individual(
        &self,
        size: Dims,
        rng: &mut dyn RandomSource,
    ) -> Result<Maze, GenerationError>;
}
