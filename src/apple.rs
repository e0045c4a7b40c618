use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::grid::Grid;
use crate::render::{Drawable, Frame, APPLE_COLOR};
use crate::Coords;

/// Every cell of the board is taken, so there is nowhere to put the apple.
#[derive(Debug, PartialEq, Eq)]
pub struct NoFreeCells;

impl fmt::Display for NoFreeCells {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no free cells left for the apple")
    }
}

impl Error for NoFreeCells {}

pub struct Apple {
    position: Coords,
}

impl Apple {
    pub fn new(position: Coords) -> Self {
        Apple { position }
    }

    pub fn position(&self) -> Coords {
        self.position
    }

    /// Moves the apple to a cell picked uniformly among those not in `occupied`.
    pub fn randomize_position<R: Rng>(
        &mut self,
        grid: &Grid,
        occupied: &HashSet<Coords>,
        rng: &mut R,
    ) -> Result<Coords, NoFreeCells> {
        let position = grid
            .cells()
            .filter(|pos| !occupied.contains(pos))
            .choose(rng)
            .ok_or(NoFreeCells)?;

        self.position = position;
        Ok(position)
    }
}

impl Drawable for Apple {
    fn draw(&self, frame: &mut Frame) {
        frame.draw_rect(self.position, APPLE_COLOR);
    }
}
