//! Collision predicates for the candidate head cell
//!
//! Both checks run against the body as it was before the move.

use super::state::{Cell, GameState};

/// True if `candidate` lands on the body, ignoring the head and the cell behind it.
///
/// Only indices `0..len-2` of the tail-first body are scanned, so a snake of
/// length 1 or 2 can never overlap itself.
pub fn is_self_overlap(body: &[Cell], candidate: Cell) -> bool {
    let scan = body.len().saturating_sub(2);
    body[..scan].contains(&candidate)
}

/// True if moving to `candidate` eats the food.
///
/// Food sitting under the current head (spawned there) also counts. Food
/// under any other body cell does not; the snake has to come back for it.
pub fn food_is_reached(state: &GameState, candidate: Cell) -> bool {
    candidate == state.food || state.head() == state.food
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Direction;

    fn cells(coords: &[(i32, i32)]) -> Vec<Cell> {
        coords.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_short_snakes_never_overlap() {
        let one = cells(&[(4, 4)]);
        assert!(!is_self_overlap(&one, Cell::new(4, 4)));

        let two = cells(&[(4, 4), (4, 5)]);
        assert!(!is_self_overlap(&two, Cell::new(4, 4)));
        assert!(!is_self_overlap(&two, Cell::new(4, 5)));
    }

    #[test]
    fn test_neck_and_head_are_skipped() {
        let body = cells(&[(0, 0), (0, 1), (0, 2), (0, 3)]);
        // Head (0,3) and neck (0,2) are never checked
        assert!(!is_self_overlap(&body, Cell::new(0, 3)));
        assert!(!is_self_overlap(&body, Cell::new(0, 2)));
        assert!(is_self_overlap(&body, Cell::new(0, 1)));
        assert!(is_self_overlap(&body, Cell::new(0, 0)));
    }

    #[test]
    fn test_miss_elsewhere() {
        let body = cells(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
        assert!(!is_self_overlap(&body, Cell::new(1, 4)));
    }

    #[test]
    fn test_food_on_candidate_or_under_head() {
        let state = GameState::new(Cell::new(5, 5), Direction::PositiveX, Cell::new(5, 6));
        assert!(food_is_reached(&state, Cell::new(5, 6)));
        assert!(!food_is_reached(&state, Cell::new(4, 5)));

        let spawned_on_head = GameState::new(Cell::new(5, 5), Direction::PositiveX, Cell::new(5, 5));
        assert!(food_is_reached(&spawned_on_head, Cell::new(5, 6)));
    }

    #[test]
    fn test_food_under_body_is_not_reached() {
        let state = GameState::with_body(
            cells(&[(0, 0), (0, 1), (0, 2)]),
            Direction::PositiveX,
            Cell::new(0, 1),
        )
        .unwrap();
        assert!(!food_is_reached(&state, Cell::new(0, 3)));
    }
}
