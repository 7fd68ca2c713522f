//! Game state and core simulation types
//!
//! Everything the engine mutates on a tick lives in `GameState`.

use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// A square on the board, addressed by row then column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Cell shifted by a (row, col) delta, without wrapping
    pub fn offset(self, (d_row, d_col): (i32, i32)) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Heading of the snake
///
/// The Y axis points up the screen, so `PositiveY` decreases the row index
/// and `NegativeY` increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
}

impl Direction {
    /// Every direction, in a fixed order (used for uniform sampling)
    pub const ALL: [Direction; 4] = [
        Direction::PositiveX,
        Direction::NegativeX,
        Direction::PositiveY,
        Direction::NegativeY,
    ];

    /// (row, col) delta for one step in this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::PositiveX => (0, 1),
            Direction::NegativeX => (0, -1),
            Direction::PositiveY => (-1, 0),
            Direction::NegativeY => (1, 0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::PositiveX => "positive-x",
            Direction::NegativeX => "negative-x",
            Direction::PositiveY => "positive-y",
            Direction::NegativeY => "negative-y",
        }
    }

    /// Translate a key name (browser `KeyboardEvent.key` style or WASD)
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "arrowup" | "up" | "w" => Some(Direction::PositiveY),
            "arrowdown" | "down" | "s" => Some(Direction::NegativeY),
            "arrowleft" | "left" | "a" => Some(Direction::NegativeX),
            "arrowright" | "right" | "d" => Some(Direction::PositiveX),
            _ => None,
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Snake is moving
    Running,
    /// Snake ran into itself; terminal
    GameOver,
}

/// Complete simulation state for one game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Snake body, tail first, head last. Never empty.
    snake: Vec<Cell>,
    /// Direction applied on the next tick
    pub(crate) direction: Direction,
    /// The single food cell
    pub(crate) food: Cell,
    /// Current phase
    pub(crate) phase: GamePhase,
    /// Number of ticks that advanced the snake (or ended the game)
    pub(crate) time_ticks: u64,
}

impl GameState {
    /// Fresh state with a single-cell snake
    pub fn new(head: Cell, direction: Direction, food: Cell) -> Self {
        Self {
            snake: vec![head],
            direction,
            food,
            phase: GamePhase::Running,
            time_ticks: 0,
        }
    }

    /// State with an explicit body (tail first). Returns None for an empty body.
    pub fn with_body(body: Vec<Cell>, direction: Direction, food: Cell) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        Some(Self {
            snake: body,
            direction,
            food,
            phase: GamePhase::Running,
            time_ticks: 0,
        })
    }

    /// Snake cells, tail first
    pub fn snake(&self) -> &[Cell] {
        &self.snake
    }

    /// Most recently added cell
    pub fn head(&self) -> Cell {
        self.snake[self.snake.len() - 1]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// True if every snake cell and the food lie on `grid`
    pub fn fits(&self, grid: &Grid) -> bool {
        grid.contains(self.food) && self.snake.iter().all(|c| grid.contains(*c))
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Advance the head to `next`, dropping the tail unless `grow` is set.
    ///
    /// Only the tick step calls this; the body is never aliased outside the state.
    pub(crate) fn advance(&mut self, next: Cell, grow: bool) {
        self.snake.push(next);
        if !grow {
            self.snake.remove(0);
        }
    }

    /// Owned copy for the rendering side
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.clone(),
            food: self.food,
            is_game_over: self.is_game_over(),
            length: self.snake.len(),
            ticks: self.time_ticks,
        }
    }
}

/// Read-only view handed to a renderer once per frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub is_game_over: bool,
    pub length: usize,
    pub ticks: u64,
}
