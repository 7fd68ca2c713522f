//! Idle/demo mode steering
//!
//! Greedy: head for the food along the shorter wrapped axis, never into a
//! cell that would end the game if another option exists.

use super::collision::is_self_overlap;
use super::grid::Grid;
use super::state::{Direction, GameState};

/// Pick a heading for the next tick
pub fn choose_direction(grid: &Grid, state: &GameState) -> Direction {
    let head = state.head();
    let d_row = grid.axis_distance(head.row, state.food.row);
    let d_col = grid.axis_distance(head.col, state.food.col);

    let mut preferred = Vec::with_capacity(4);
    // Close the larger gap first
    let by_col = (d_col != 0).then(|| {
        if d_col > 0 { Direction::PositiveX } else { Direction::NegativeX }
    });
    let by_row = (d_row != 0).then(|| {
        if d_row > 0 { Direction::NegativeY } else { Direction::PositiveY }
    });
    if d_col.abs() >= d_row.abs() {
        preferred.extend(by_col);
        preferred.extend(by_row);
    } else {
        preferred.extend(by_row);
        preferred.extend(by_col);
    }
    preferred.push(state.direction);
    preferred.extend(Direction::ALL);

    let safe = |d: Direction| {
        !is_self_overlap(state.snake(), grid.step(head, d)) && !reverses(state, grid, d)
    };

    preferred
        .into_iter()
        .find(|d| safe(*d))
        .unwrap_or(state.direction)
}

/// Moving straight back onto the neck doubles the body over itself
fn reverses(state: &GameState, grid: &Grid, direction: Direction) -> bool {
    let body = state.snake();
    body.len() >= 2 && grid.step(state.head(), direction) == body[body.len() - 2]
}
