use crate::grid::Grid;
use crate::Coords;

pub type Rgb = (u8, u8, u8);

pub const BACKGROUND_COLOR: Rgb = (0, 0, 0);
pub const BORDER_COLOR: Rgb = (93, 216, 228);
pub const APPLE_COLOR: Rgb = (255, 0, 0);
pub const SNAKE_COLOR: Rgb = (0, 255, 0);

/// Anything that paints itself onto the frame buffer.
pub trait Drawable {
    fn draw(&self, frame: &mut Frame);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    Empty(Rgb),
    Filled { body: Rgb, border: Rgb },
}

/// Frame buffer with one tile per grid cell. Nothing reaches the terminal
/// until the frame is presented.
pub struct Frame {
    grid: Grid,
    tiles: Vec<Tile>,
}

impl Frame {
    pub fn new(grid: Grid) -> Self {
        let tiles = vec![Tile::Empty(BACKGROUND_COLOR); grid.columns() as usize * grid.rows() as usize];
        Frame { grid, tiles }
    }

    pub fn clear(&mut self, color: Rgb) {
        self.tiles.iter_mut().for_each(|tile| *tile = Tile::Empty(color));
    }

    /// Fills the cell at a pixel position and outlines it with the border color.
    pub fn draw_rect(&mut self, pos: Coords, body: Rgb) {
        let idx = self.index(self.grid.cell_index(pos));
        self.tiles[idx] = Tile::Filled { body, border: BORDER_COLOR };
    }

    pub fn tile_at(&self, col: usize, row: usize) -> Tile {
        self.tiles[self.index((col, row))]
    }

    pub fn columns(&self) -> usize {
        self.grid.columns() as usize
    }

    pub fn rows(&self) -> usize {
        self.grid.rows() as usize
    }

    fn index(&self, (col, row): (usize, usize)) -> usize {
        row * self.columns() + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_rect_fills_the_snapped_cell() {
        let mut frame = Frame::new(Grid::default());
        frame.draw_rect((340, 240), APPLE_COLOR);

        assert_eq!(frame.tile_at(17, 12), Tile::Filled { body: APPLE_COLOR, border: BORDER_COLOR });
        assert_eq!(frame.tile_at(16, 12), Tile::Empty(BACKGROUND_COLOR));
    }

    #[test]
    fn clear_wipes_every_tile() {
        let mut frame = Frame::new(Grid::default());
        frame.draw_rect((0, 0), SNAKE_COLOR);
        frame.draw_rect((620, 460), SNAKE_COLOR);
        frame.clear((1, 2, 3));

        for row in 0..frame.rows() {
            for col in 0..frame.columns() {
                assert_eq!(frame.tile_at(col, row), Tile::Empty((1, 2, 3)));
            }
        }
    }
}
