use std::collections::{HashSet, VecDeque};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::Grid;
use crate::render::{Drawable, Frame, SNAKE_COLOR};
use crate::{Coords, PixelInt};
use Direction::*;
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    pub fn delta(self) -> (PixelInt, PixelInt) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SnakeState {
    Alive,
    Dead,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Coords },
    Crashed
}

/// Body is stored head first. `length` is the target size; the body only
/// reaches it by not dropping its tail on later moves.
pub struct Snake {
    start: Coords,
    body: VecDeque<Coords>,
    direction: Direction,
    length: usize,
    state: SnakeState,
}

impl Snake {
    pub fn new(start: Coords, direction: Direction) -> Self {
        Snake { start, body: VecDeque::from(vec![start]), direction, length: 1, state: SnakeState::Alive }
    }

    pub fn body(&self) -> impl Iterator<Item = &Coords> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn target_length(&self) -> usize {
        self.length
    }

    pub fn occupied(&self) -> HashSet<Coords> {
        self.body.iter().copied().collect()
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn state(&self) -> SnakeState {
        self.state
    }

    pub fn move_step(&mut self, grid: &Grid) -> MoveResult {
        if self.state == SnakeState::Dead {
            return Crashed;
        }

        let new_head = grid.step(self.head(), self.direction.delta());

        if self.body.contains(&new_head) {
            self.state = SnakeState::Dead;
            return Crashed;
        }

        self.body.push_front(new_head);

        if self.body.len() > self.length {
            self.body.pop_back();
        }

        Moved { new_head }
    }

    pub fn set_direction(&mut self, new_direction: Direction) {
        if new_direction != self.direction.opposite() {
            self.direction = new_direction;
        }
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Back to a single cell at the starting point, heading somewhere random.
    /// The game loop ends on a crash instead of calling this.
    #[allow(dead_code)]
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.body = VecDeque::from(vec![self.start]);
        self.length = 1;
        self.state = SnakeState::Alive;
        self.direction = *Direction::ALL.choose(rng).unwrap_or(&Right);
    }

    #[cfg(test)]
    pub fn from_body(body: Vec<Coords>, direction: Direction) -> Self {
        let length = body.len();
        Snake { start: body[0], body: body.into(), direction, length, state: SnakeState::Alive }
    }
}

impl Drawable for Snake {
    fn draw(&self, frame: &mut Frame) {
        for pos in self.body() {
            frame.draw_rect(*pos, SNAKE_COLOR);
        }
    }
}
