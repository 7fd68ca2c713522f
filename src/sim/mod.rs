//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod engine;
pub mod grid;
pub mod state;
pub mod tick;

pub use autopilot::choose_direction;
pub use collision::{food_is_reached, is_self_overlap};
pub use engine::SnakeEngine;
pub use grid::Grid;
pub use state::{Cell, Direction, GamePhase, GameState, Snapshot};
pub use tick::TickOutcome;
