//! Grid coordinates and screen-space positions.

use serde::{Deserialize, Serialize};

/// One integer cell coordinate on the map grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point shifted by (dx, dy)
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The 4 orthogonal neighbors, ordered right, left, down, up.
    ///
    /// The order is load-bearing: tile classification builds its neighbor
    /// mask from it, bit by bit.
    pub const fn orthogonal(self) -> [Point; 4] {
        [
            self.offset(1, 0),
            self.offset(-1, 0),
            self.offset(0, 1),
            self.offset(0, -1),
        ]
    }

    /// The 4 diagonal neighbors, ordered down-right, down-left, up-right,
    /// up-left. Probed in this order when classifying junction tiles.
    pub const fn diagonal(self) -> [Point; 4] {
        [
            self.offset(1, 1),
            self.offset(-1, 1),
            self.offset(1, -1),
            self.offset(-1, -1),
        ]
    }
}

/// A position (or extent) in screen space, produced by the isometric
/// projection and consumed by whatever draws the grid
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
