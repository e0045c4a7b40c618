use crate::{Coords, PixelInt};

pub const SCREEN_WIDTH: PixelInt = 640;
pub const SCREEN_HEIGHT: PixelInt = 480;
pub const CELL_SIZE: PixelInt = 20;

/// A toroidal board measured in pixels, split into square cells.
/// Every position on it is the pixel coordinate of a cell's top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: PixelInt,
    height: PixelInt,
    cell_size: PixelInt,
}

impl Grid {
    pub fn new(width: PixelInt, height: PixelInt, cell_size: PixelInt) -> Self {
        Grid { width, height, cell_size }
    }

    pub fn cell_size(&self) -> PixelInt {
        self.cell_size
    }

    pub fn columns(&self) -> PixelInt {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> PixelInt {
        self.height / self.cell_size
    }

    pub fn center(&self) -> Coords {
        (self.width / 2, self.height / 2)
    }

    /// Moves `pos` by `delta` cells, wrapping around both edges.
    pub fn step(&self, pos: Coords, delta: (PixelInt, PixelInt)) -> Coords {
        (
            (pos.0 + delta.0 * self.cell_size).rem_euclid(self.width),
            (pos.1 + delta.1 * self.cell_size).rem_euclid(self.height),
        )
    }

    /// Column and row of the cell containing a pixel position.
    pub fn cell_index(&self, pos: Coords) -> (usize, usize) {
        let col = pos.0.rem_euclid(self.width) / self.cell_size;
        let row = pos.1.rem_euclid(self.height) / self.cell_size;
        (col as usize, row as usize)
    }

    pub fn cells(&self) -> impl Iterator<Item = Coords> {
        let Grid { cell_size, .. } = *self;
        let (cols, rows) = (self.columns(), self.rows());

        (0..cols).flat_map(move |x| (0..rows).map(move |y| (x * cell_size, y * cell_size)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(SCREEN_WIDTH, SCREEN_HEIGHT, CELL_SIZE)
    }
}
