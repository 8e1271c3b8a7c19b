use crate::{dims::Dims, random::RandomSource};

use super::GenerationError;

/// How many frontier cells may be pending at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FrontierCapacity {
    /// Grows as needed, never overflows.
    #[default]
    Growable,
    /// `3 * (rows + columns)`, enough for typical shapes but not for every maze.
    Perimeter,
    Fixed(usize),
}

impl FrontierCapacity {
    pub fn limit(self, size: Dims) -> Option<usize> {
        match self {
            FrontierCapacity::Growable => None,
            FrontierCapacity::Perimeter => Some(3 * (size.0 as usize + size.1 as usize)),
            FrontierCapacity::Fixed(capacity) => Some(capacity),
        }
    }
}

/// Unordered set of cells adjacent to the growing tree.
///
/// Callers guarantee a cell is pushed at most once.
#[derive(Debug, Clone)]
pub struct FrontierSet {
    cells: Vec<Dims>,
    capacity: Option<usize>,
    peak: usize,
}

impl FrontierSet {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            cells: Vec::with_capacity(capacity.unwrap_or_default()),
            capacity,
            peak: 0,
        }
    }

    pub fn push(&mut self, pos: Dims) -> Result<(), GenerationError> {
        debug_assert!(!self.cells.contains(&pos), "{:?} is already a frontier cell", pos);

        if let Some(capacity) = self.capacity {
            if self.cells.len() >= capacity {
                return Err(GenerationError::FrontierOverflow { capacity });
            }
        }

        self.cells.push(pos);
        self.peak = self.peak.max(self.cells.len());
        Ok(())
    }

    /// Removes a uniformly drawn cell; the last cell fills the gap.
    pub fn take_random(&mut self, rng: &mut dyn RandomSource) -> Option<Dims> {
        if self.cells.is_empty() {
            return None;
        }

        let index = rng.below(self.cells.len());
        Some(self.cells.swap_remove(index))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Largest size reached so far.
    pub fn peak(&self) -> usize {
        self.peak
    }
}
