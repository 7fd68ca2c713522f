//! Single-owner game session
//!
//! `SnakeEngine` holds the board, the state and the RNG. It is not
//! synchronized; a threaded host must funnel every call through one owner.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::grid::Grid;
use super::state::{Direction, GamePhase, GameState, Snapshot};
use super::tick::{TickOutcome, tick};
use crate::settings::Settings;

pub struct SnakeEngine {
    grid: Grid,
    state: GameState,
    rng: Pcg32,
    seed: u64,
}

impl SnakeEngine {
    /// Start a game from host settings; `seed` must already be resolved
    pub fn new(settings: &Settings, seed: u64) -> Self {
        Self::with_seed(settings.grid_size, seed)
    }

    /// Start a game: random single-cell snake, random heading, random food
    pub fn with_seed(grid_size: i32, seed: u64) -> Self {
        let grid = Grid::new(grid_size);
        let mut rng = Pcg32::seed_from_u64(seed);

        let head = grid.random_cell(&mut rng);
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        let food = grid.random_cell(&mut rng);

        log::info!(
            "New game on {0}x{0} grid (seed {1}): head {2:?} heading {3}, food {4:?}",
            grid.size(),
            seed,
            head,
            direction.as_str(),
            food
        );

        Self {
            grid,
            state: GameState::new(head, direction, food),
            rng,
            seed,
        }
    }

    /// Resume from an explicit state; `seed` drives later food respawns.
    ///
    /// Returns None if any snake cell or the food lies off `grid`.
    pub fn from_state(grid: Grid, state: GameState, seed: u64) -> Option<Self> {
        if !state.fits(&grid) {
            log::warn!("Rejecting state that does not fit a {0}x{0} grid", grid.size());
            return None;
        }
        Some(Self {
            grid,
            state,
            rng: Pcg32::seed_from_u64(seed),
            seed,
        })
    }

    /// Heading for the next tick. Ignored once the game is over.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.state.phase == GamePhase::GameOver {
            return;
        }
        self.state.direction = direction;
    }

    /// Advance one step
    pub fn tick(&mut self) -> TickOutcome {
        tick(&mut self.state, &self.grid, &mut self.rng)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }
}
