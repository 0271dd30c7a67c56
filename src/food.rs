use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::grid::{Cell, Grid};

/// The creature covers every cell of the grid, so there is nowhere left to
/// place food.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no free cell left on the grid to place food")]
pub struct NoFreeCellError;

/// A single piece of food. Relocation picks uniformly among the cells not in
/// the excluded set, so it always terminates and never lands on the creature.
pub struct Food {
    cell: Cell,
}

impl Food {
    pub fn at(cell: Cell) -> Self {
        Food { cell }
    }

    /// Constructs the food directly on a free cell.
    pub fn spawn<R: Rng>(grid: &Grid, excluded: &[Cell], rng: &mut R) -> Result<Self, NoFreeCellError> {
        let mut food = Food::at(grid.center());
        food.relocate(grid, excluded, rng)?;
        Ok(food)
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn relocate<R: Rng>(
        &mut self,
        grid: &Grid,
        excluded: &[Cell],
        rng: &mut R,
    ) -> Result<(), NoFreeCellError> {
        let free: Vec<Cell> = grid.cells().filter(|cell| !excluded.contains(cell)).collect();
        match free.choose(rng) {
            Some(&cell) => {
                self.cell = cell;
                Ok(())
            }
            None => Err(NoFreeCellError),
        }
    }
}
