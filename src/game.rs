use std::thread::sleep;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, info};
use rand::Rng;

use crate::apple::{Apple, NoFreeCells};
use crate::grid::Grid;
use crate::input::handle_keys;
use crate::render::{Drawable, Frame, BACKGROUND_COLOR};
use crate::snake::{Direction::*, MoveResult::*, Snake, SnakeState};
use crate::term::TermManager;

const TICKS_PER_SECOND: u32 = 20;
const TITLE: &str = "Snake";

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    GameOver { score: usize },
}

#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Moved,
    Ate,
    Crashed,
}

/// Everything that changes from tick to tick, minus the terminal.
pub struct World<R> {
    grid: Grid,
    snake: Snake,
    apple: Apple,
    rng: R,
}

impl<R: Rng> World<R> {
    /// Snake in the middle heading right, apple on some other free cell.
    pub fn new(grid: Grid, rng: R) -> Result<Self, NoFreeCells> {
        let snake = Snake::new(grid.center(), Right);
        let mut world = World { grid, snake, apple: Apple::new(grid.center()), rng };
        world.place_apple()?;
        Ok(world)
    }

    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    pub fn score(&self) -> usize {
        self.snake.target_length() - 1
    }

    pub fn step(&mut self) -> Result<Step, NoFreeCells> {
        match self.snake.move_step(&self.grid) {
            Crashed => {
                debug_assert_eq!(self.snake.state(), SnakeState::Dead);
                debug!("Snake crashed at {:?} heading {:?}", self.snake.head(), self.snake.get_direction());
                Ok(Step::Crashed)
            }
            Moved { new_head, .. } if new_head == self.apple.position() => {
                self.snake.grow();
                debug!("Apple eaten at {:?}, snake length {}", new_head, self.snake.len());
                self.place_apple()?;
                Ok(Step::Ate)
            }
            Moved { .. } => Ok(Step::Moved),
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.apple.draw(frame);
        self.snake.draw(frame);
    }

    fn place_apple(&mut self) -> Result<(), NoFreeCells> {
        let pos = self.apple.randomize_position(&self.grid, &self.snake.occupied(), &mut self.rng)?;
        debug!("Apple placed at {:?}", pos);
        Ok(())
    }

    #[cfg(test)]
    fn with_parts(grid: Grid, snake: Snake, apple: Apple, rng: R) -> Self {
        World { grid, snake, apple, rng }
    }
}

/// Paces the loop at a fixed rate by sleeping off whatever is left of the tick.
pub struct Clock {
    period: Duration,
    last_tick: Option<Instant>,
}

impl Clock {
    pub fn new(ticks_per_second: u32) -> Self {
        Clock { period: Duration::from_secs(1) / ticks_per_second, last_tick: None }
    }

    pub fn tick(&mut self) {
        if let Some(last) = self.last_tick {
            let elapsed = last.elapsed();
            if elapsed < self.period {
                sleep(self.period - elapsed);
            }
        }
        self.last_tick = Some(Instant::now());
    }
}

pub struct SnakeGame {
    term: TermManager,
    clock: Clock,
    frame: Frame,
    grid: Grid,
}

impl SnakeGame {
    pub fn new() -> Result<Self> {
        let grid = Grid::default();
        let term = TermManager::new(TITLE)?;

        info!("Board is {}x{} cells of {}px", grid.columns(), grid.rows(), grid.cell_size());

        Ok(SnakeGame { term, clock: Clock::new(TICKS_PER_SECOND), frame: Frame::new(grid), grid })
    }

    pub fn play(&mut self) -> Result<Outcome> {
        let mut world = World::new(self.grid, rand::thread_rng())?;

        loop {
            self.clock.tick();
            self.frame.clear(BACKGROUND_COLOR);

            let events = self.term.read_key_events_queue()?;
            if handle_keys(&events, world.snake_mut()) {
                return Ok(Outcome::Quit);
            }

            if world.step()? == Step::Crashed {
                return Ok(Outcome::GameOver { score: world.score() });
            }

            world.draw(&mut self.frame);
            self.term.present(&self.frame)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Tile, APPLE_COLOR, SNAKE_COLOR};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    #[test]
    fn new_world_starts_centered_with_apple_elsewhere() {
        let world = World::new(Grid::default(), rng()).unwrap();

        assert_eq!(world.snake.head(), (320, 240));
        assert_eq!(world.snake.get_direction(), Right);
        assert_eq!(world.snake.len(), 1);
        assert_ne!(world.apple.position(), (320, 240));
        assert_eq!(world.score(), 0);
    }

    #[test]
    fn eating_the_apple_grows_and_relocates_it() {
        let grid = Grid::default();
        let snake = Snake::new((320, 240), Right);
        let mut world = World::with_parts(grid, snake, Apple::new((340, 240)), rng());

        assert_eq!(world.step(), Ok(Step::Ate));
        assert_eq!(world.snake.head(), (340, 240));
        assert_eq!(world.snake.target_length(), 2);
        assert_eq!(world.score(), 1);

        let apple = world.apple.position();
        assert_ne!(apple, (340, 240));
        assert!(!world.snake.occupied().contains(&apple));

        assert_eq!(world.step(), if apple == (360, 240) { Ok(Step::Ate) } else { Ok(Step::Moved) });
        assert_eq!(world.snake.len(), 2);
    }

    #[test]
    fn crash_ends_the_round_with_body_untouched() {
        let grid = Grid::default();
        let body = vec![(100, 100), (80, 100), (60, 100), (60, 120)];
        let snake = Snake::from_body(body.clone(), Left);
        let mut world = World::with_parts(grid, snake, Apple::new((300, 300)), rng());

        assert_eq!(world.step(), Ok(Step::Crashed));
        assert_eq!(world.snake.body().copied().collect::<Vec<_>>(), body);
        assert_eq!(world.score(), 3);
    }

    #[test]
    fn filling_the_board_is_fatal() {
        // One row of three cells; the snake eats its way to a full board
        let grid = Grid::new(60, 20, 20);
        let snake = Snake::from_body(vec![(20, 0), (0, 0)], Right);
        let mut world = World::with_parts(grid, snake, Apple::new((40, 0)), rng());

        assert_eq!(world.step(), Ok(Step::Ate));
        assert_eq!(world.apple.position(), (0, 0));
        assert_eq!(world.step(), Err(NoFreeCells));
        assert_eq!(world.snake.len(), 3);
    }

    #[test]
    fn draw_puts_snake_over_apple() {
        let grid = Grid::default();
        let snake = Snake::new((0, 0), Right);
        let world = World::with_parts(grid, snake, Apple::new((20, 0)), rng());
        let mut frame = Frame::new(grid);

        world.draw(&mut frame);
        assert!(matches!(frame.tile_at(0, 0), Tile::Filled { body: SNAKE_COLOR, .. }));
        assert!(matches!(frame.tile_at(1, 0), Tile::Filled { body: APPLE_COLOR, .. }));
    }

    #[test]
    fn clock_paces_ticks() {
        let mut clock = Clock::new(TICKS_PER_SECOND);
        let start = Instant::now();
        for _ in 0..3 {
            clock.tick();
        }
        assert!(start.elapsed() >= Duration::from_millis(100));
    }
}
