/// One discrete position on the playfield, in cell units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub fn new(x: i16, y: i16) -> Self {
        Cell { x, y }
    }
}

/// The toroidal coordinate space. Pure geometry, no game state: moving off
/// one edge re-enters on the opposite edge via `wrap`.
pub struct Grid {
    width: i16,
    height: i16,
}

impl Grid {
    pub fn new(width: i16, height: i16) -> Self {
        assert!(width > 0 && height > 0);
        Grid { width, height }
    }

    pub fn width(&self) -> i16 {
        self.width
    }

    pub fn height(&self) -> i16 {
        self.height
    }

    /// Maps any integer pair onto canonical grid coordinates.
    pub fn wrap(&self, x: i16, y: i16) -> Cell {
        Cell::new(x.rem_euclid(self.width), y.rem_euclid(self.height))
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// All cells of the grid, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_is_identity_in_bounds() {
        let grid = Grid::new(32, 24);
        assert_eq!(grid.wrap(0, 0), Cell::new(0, 0));
        assert_eq!(grid.wrap(31, 23), Cell::new(31, 23));
        assert_eq!(grid.wrap(15, 7), Cell::new(15, 7));
    }

    #[test]
    fn wrap_handles_both_overflows() {
        let grid = Grid::new(32, 24);
        assert_eq!(grid.wrap(32, 0), Cell::new(0, 0));
        assert_eq!(grid.wrap(-1, 0), Cell::new(31, 0));
        assert_eq!(grid.wrap(0, 24), Cell::new(0, 0));
        assert_eq!(grid.wrap(0, -1), Cell::new(0, 23));
        assert_eq!(grid.wrap(-33, 49), Cell::new(31, 1));
    }

    #[test]
    fn wrap_is_idempotent() {
        let grid = Grid::new(13, 9);
        for x in -30..30 {
            for y in -30..30 {
                let once = grid.wrap(x, y);
                let twice = grid.wrap(once.x, once.y);
                assert_eq!(once, twice);
                assert!((0..13).contains(&once.x));
                assert!((0..9).contains(&once.y));
            }
        }
    }

    #[test]
    fn cells_covers_the_whole_grid() {
        let grid = Grid::new(4, 3);
        let all: Vec<Cell> = grid.cells().collect();
        assert_eq!(all.len(), grid.area());
        assert_eq!(all[0], Cell::new(0, 0));
        assert_eq!(all[11], Cell::new(3, 2));
    }
}
