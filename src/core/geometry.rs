//! Positions and rectangular zone bounds in world units.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned rectangle with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Rect {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.x >= self.x_min && pos.x <= self.x_max && pos.y >= self.y_min && pos.y <= self.y_max
    }

    pub fn clamp(&self, pos: Position) -> Position {
        Position::new(
            pos.x.clamp(self.x_min, self.x_max),
            pos.y.clamp(self.y_min, self.y_max),
        )
    }
}
