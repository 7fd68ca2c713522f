//! Fixed-cadence simulation tick
//!
//! Advances the snake by exactly one cell per call.

use rand::Rng;

use super::collision::{food_is_reached, is_self_overlap};
use super::grid::Grid;
use super::state::{GamePhase, GameState};

/// What a single tick did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game already over; nothing changed
    Idle,
    /// Snake moved one cell, length unchanged
    Moved,
    /// Snake ate the food, grew by one, food respawned
    Ate,
    /// Snake ran into itself; game is now over
    Died,
}

/// Advance the game state by one step. `state` must fit `grid`.
pub(crate) fn tick<R: Rng + ?Sized>(state: &mut GameState, grid: &Grid, rng: &mut R) -> TickOutcome {
    if state.phase == GamePhase::GameOver {
        return TickOutcome::Idle;
    }

    let candidate = grid.step(state.head(), state.direction);

    if is_self_overlap(state.snake(), candidate) {
        state.phase = GamePhase::GameOver;
        state.time_ticks += 1;
        log::info!(
            "Game over at {:?} after {} ticks, length {}",
            candidate,
            state.time_ticks,
            state.len()
        );
        return TickOutcome::Died;
    }

    let outcome = if food_is_reached(state, candidate) {
        state.advance(candidate, true);
        state.food = grid.random_cell(rng);
        log::debug!("Ate food, length {}, new food at {:?}", state.len(), state.food);
        TickOutcome::Ate
    } else {
        state.advance(candidate, false);
        TickOutcome::Moved
    };

    state.time_ticks += 1;
    outcome
}
