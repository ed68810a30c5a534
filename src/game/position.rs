//! Positions and directions on the dungeon grid.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A position on the floor grid. No bounds are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (row).
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset from `self` to `other` (`other - self`).
    ///
    /// Widened to `i64` so opposite corners of the grid do not overflow.
    #[must_use]
    pub fn offset_to(self, other: Self) -> (i64, i64) {
        (
            i64::from(other.x) - i64::from(self.x),
            i64::from(other.y) - i64::from(self.y),
        )
    }

    /// Manhattan distance between two positions.
    #[must_use]
    pub fn manhattan(self, other: Self) -> u64 {
        let (dx, dy) = self.offset_to(other);
        dx.unsigned_abs() + dy.unsigned_abs()
    }

    /// One orthogonal step toward `target`.
    ///
    /// Steps along the axis with the larger absolute offset; ties go to the
    /// x axis. Returns `self` unchanged when already on `target`.
    #[must_use]
    pub fn step_toward(self, target: Self) -> Self {
        let (dx, dy) = self.offset_to(target);
        if dx == 0 && dy == 0 {
            return self;
        }
        // The step lands between `self` and `target`, so it stays in range
        if dx.unsigned_abs() >= dy.unsigned_abs() {
            Self::new(self.x + unit(dx), self.y)
        } else {
            Self::new(self.x, self.y + unit(dy))
        }
    }
}

fn unit(offset: i64) -> i32 {
    match offset.cmp(&0) {
        Ordering::Greater => 1,
        Ordering::Less => -1,
        Ordering::Equal => 0,
    }
}

/// Moves saturate at the edge of the `i32` grid.
impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, dir: Direction) -> Position {
        Position::new(self.x.saturating_add(dir.dx), self.y.saturating_add(dir.dy))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A movement vector. The script only uses unit and diagonal steps, but any
/// pair is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    /// Horizontal component.
    pub dx: i32,
    /// Vertical component.
    pub dy: i32,
}

impl Direction {
    /// One tile right.
    pub const RIGHT: Self = Self::new(1, 0);
    /// One tile down.
    pub const DOWN: Self = Self::new(0, 1);
    /// One tile left.
    pub const LEFT: Self = Self::new(-1, 0);
    /// One tile up.
    pub const UP: Self = Self::new(0, -1);
    /// One tile diagonally down and right.
    pub const DOWN_RIGHT: Self = Self::new(1, 1);

    /// Create a new direction.
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}
