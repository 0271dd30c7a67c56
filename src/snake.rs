use rand::Rng;

use crate::grid::{Cell, Grid};
use Heading::*;

/// Direction of travel, one of the four cardinal unit vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub fn delta(self) -> (i16, i16) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Heading {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Heading {
        match rng.gen_range(0..4) {
            0 => Up,
            1 => Down,
            2 => Left,
            _ => Right,
        }
    }
}

/// Outcome of one movement step: the new head cell, and the tail cell that
/// was vacated (if any) so the renderer can erase it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub head: Cell,
    pub vacated: Option<Cell>,
}

/// The player-controlled creature: occupied cells with the head at index 0,
/// a current heading, and the length it is growing toward.
pub struct Snake {
    cells: Vec<Cell>,
    target_len: usize,
    heading: Heading,
}

impl Snake {
    pub fn new(start: Cell, heading: Heading) -> Self {
        Snake { cells: vec![start], target_len: 1, heading }
    }

    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn body_excluding_head(&self) -> &[Cell] {
        &self.cells[1..]
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn target_len(&self) -> usize {
        self.target_len
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Moves one cell in `heading`, wrapping at the grid edges. A heading
    /// that is the direct opposite of the current one is ignored; the input
    /// table already filters those, this is the last line of defense against
    /// turning the snake into its own neck.
    pub fn advance(&mut self, grid: &Grid, heading: Heading) -> Step {
        if heading != self.heading.opposite() {
            self.heading = heading;
        }

        let (dx, dy) = self.heading.delta();
        let old_head = self.head();
        let head = grid.wrap(old_head.x + dx, old_head.y + dy);

        self.cells.insert(0, head);
        let vacated = if self.cells.len() > self.target_len {
            self.cells.pop()
        } else {
            None
        };

        Step { head, vacated }
    }

    pub fn grow_by(&mut self, n: usize) {
        self.target_len += n;
    }

    /// Back to the initial state: a single cell at `center`, growing toward
    /// nothing, pointed in a random direction.
    pub fn reset<R: Rng>(&mut self, center: Cell, rng: &mut R) {
        self.cells.clear();
        self.cells.push(center);
        self.target_len = 1;
        self.heading = Heading::random(rng);
    }
}
