use std::thread::sleep;
use std::time::{Duration, Instant};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::food::{Food, NoFreeCellError};
use crate::grid::{Cell, Grid};
use crate::input::{self, Command};
use crate::snake::{Heading, Snake};
use crate::term::{Screen, FOOD_COLOR, SNAKE_COLOR};

/// What happened during one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Plain movement.
    Moved,
    /// The head landed on the food; the snake grew and the food moved.
    Ate,
    /// The head ran into the body; the snake was reset in place.
    Collided,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub head: Cell,
    pub vacated: Option<Cell>,
    pub event: TickEvent,
}

/// The full simulation state, with no rendering attached: one snake, one
/// piece of food, and the RNG that drives spawns and reset headings.
pub struct World {
    grid: Grid,
    snake: Snake,
    food: Food,
    rng: StdRng,
    growth_per_food: usize,
}

impl World {
    pub fn new(config: &GameConfig) -> Result<Self, NoFreeCellError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Seeded variant so tests can run deterministic sequences.
    pub fn with_rng(config: &GameConfig, mut rng: StdRng) -> Result<Self, NoFreeCellError> {
        let grid = Grid::new(config.grid_width, config.grid_height);
        let heading = Heading::random(&mut rng);
        let snake = Snake::new(grid.center(), heading);
        let food = Food::spawn(&grid, snake.cells(), &mut rng)?;

        Ok(World { grid, snake, food, rng, growth_per_food: config.growth_per_food })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    /// Advances the simulation by one tick. `pending` is the heading chosen
    /// by input handling this tick, if any.
    ///
    /// The self-collision check lives here rather than inside the snake so
    /// that the tick report can tell the renderer to wipe the board: after a
    /// reset the old cell positions mean nothing.
    pub fn step(&mut self, pending: Option<Heading>) -> Result<Tick, NoFreeCellError> {
        let heading = pending.unwrap_or_else(|| self.snake.heading());
        let step = self.snake.advance(&self.grid, heading);

        let event = if step.head == self.food.cell() {
            self.snake.grow_by(self.growth_per_food);
            self.food.relocate(&self.grid, self.snake.cells(), &mut self.rng)?;
            TickEvent::Ate
        } else if self.snake.body_excluding_head().contains(&step.head) {
            self.snake.reset(self.grid.center(), &mut self.rng);
            TickEvent::Collided
        } else {
            TickEvent::Moved
        };

        Ok(Tick { head: step.head, vacated: step.vacated, event })
    }
}

/// Fixed-rate frame timer: `tick` blocks until the next frame boundary.
struct Clock {
    interval: Duration,
    next: Instant,
}

impl Clock {
    fn new(tick_rate: u32) -> Self {
        let interval = Duration::from_secs(1) / tick_rate;
        Clock { interval, next: Instant::now() + interval }
    }

    fn tick(&mut self) {
        let now = Instant::now();
        if now < self.next {
            sleep(self.next - now);
            self.next += self.interval;
        } else {
            // Fell behind; reschedule from now instead of bursting.
            self.next = now + self.interval;
        }
    }
}

/// Owns the world, the screen and the clock, and runs the blocking loop:
/// wait for the tick, drain input, step the world, draw the difference.
pub struct Game {
    world: World,
    screen: Screen,
    clock: Clock,
    pending: Option<Heading>,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self> {
        let world = World::new(&config)?;
        let screen = Screen::new(config.grid_width, config.grid_height)?;
        let clock = Clock::new(config.tick_rate);

        Ok(Game { world, screen, clock, pending: None })
    }

    /// Runs until the user quits. A quit is a clean return, not an error.
    pub fn run(&mut self) -> Result<()> {
        self.screen.setup()?;
        self.draw_full()?;

        loop {
            self.clock.tick();

            for ev in self.screen.drain_events()? {
                match input::classify(&ev) {
                    Some(Command::Quit) => return Ok(()),
                    Some(Command::Turn(key)) => {
                        let current = self.pending.unwrap_or_else(|| self.world.snake().heading());
                        self.pending = Some(input::translate(current, key));
                    }
                    None => {}
                }
            }

            let tick = self.world.step(self.pending.take())?;
            self.draw_tick(&tick)?;
        }
    }

    pub fn shutdown(&mut self) -> Result<()> {
        self.screen.restore()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_full(&mut self) -> Result<()> {
        self.screen.clear()?;
        self.screen.draw_border()?;
        for &cell in self.world.snake().cells() {
            self.screen.draw_cell(cell, SNAKE_COLOR)?;
        }
        self.screen.draw_cell(self.world.food().cell(), FOOD_COLOR)?;
        self.screen.present()
    }

    fn draw_tick(&mut self, tick: &Tick) -> Result<()> {
        if tick.event == TickEvent::Collided {
            // The reset invalidated every drawn cell.
            return self.draw_full();
        }

        if tick.event == TickEvent::Ate {
            self.screen.draw_cell(self.world.food().cell(), FOOD_COLOR)?;
        }
        if let Some(tail) = tick.vacated {
            self.screen.erase_cell(tail)?;
        }
        self.screen.draw_cell(tick.head, SNAKE_COLOR)?;
        self.screen.present()
    }
}
