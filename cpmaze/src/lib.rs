//! Perfect maze generation by randomized frontier expansion, and two walkers
//! (random mouse, Trémaux) that solve the result.
//!
//! ```
//! use cpmaze::{
//!     algorithms::{MazeAlgorithm, RndPrims},
//!     random::seeded,
//!     solvers::{SolveOptions, Solver, Tremaux},
//! };
//!
//! let (mut rng, _seed) = seeded(Some(42));
//! let mut maze = RndPrims::new().generate(5, 5, &mut rng).unwrap();
//! let report = Tremaux::backtracking().solve(&mut maze, &mut rng, SolveOptions::new());
//! assert!(report.is_solved());
//! ```

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod gameboard;
pub mod random;
pub mod solvers;
