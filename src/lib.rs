//! Wrap Snake - classic snake on a wrap-around grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid geometry, snake engine, game state)
//! - `settings`: Host-facing configuration (grid size, tick cadence, seed)

pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{Cell, Direction, GameState, Grid, SnakeEngine, Snapshot, TickOutcome};

/// Game configuration constants
pub mod consts {
    /// Total number of squares on the board
    pub const NUMBER_OF_SQUARES: i32 = 20 * 20;

    /// Side length of the square board (sqrt of NUMBER_OF_SQUARES)
    pub const GRID_SIZE: i32 = 20;

    /// Smallest board the engine accepts
    pub const MIN_GRID_SIZE: i32 = 2;

    /// Default tick cadence in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 100;
}
