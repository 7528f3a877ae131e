//! Axis-aligned integer rectangles for room footprints.

use serde::{Deserialize, Serialize};

use super::point::Point;
use crate::OVERSIZE_MARGIN;

/// An axis-aligned rectangle of grid cells: origin plus size
///
/// The right and bottom edges are exclusive, so a rect covers cells
/// `origin.x..right()` by `origin.y..bottom()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(origin: Point, width: i32, height: i32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// X coordinate one past the last covered column
    pub const fn right(&self) -> i32 {
        self.origin.x + self.width
    }

    /// Y coordinate one past the last covered row
    pub const fn bottom(&self) -> i32 {
        self.origin.y + self.height
    }

    /// This rectangle grown by the overlap-test margin on every side.
    ///
    /// Used only when testing candidate rooms against each other and the
    /// reserved center, which keeps a buffer of empty cells between
    /// accepted footprints.
    pub const fn oversized(&self) -> Rect {
        Rect::new(
            self.origin.offset(-OVERSIZE_MARGIN, -OVERSIZE_MARGIN),
            self.width + 2 * OVERSIZE_MARGIN,
            self.height + 2 * OVERSIZE_MARGIN,
        )
    }

    /// Check if this rectangle intersects another
    pub const fn intersects(&self, other: &Rect) -> bool {
        !(self.right() <= other.origin.x
            || other.right() <= self.origin.x
            || self.bottom() <= other.origin.y
            || other.bottom() <= self.origin.y)
    }

    /// Check if the point lies inside this rectangle
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x < self.right()
            && point.y >= self.origin.y
            && point.y < self.bottom()
    }

    /// All cells covered by this rectangle, row-major from the origin
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity((self.width * self.height).max(0) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                points.push(self.origin.offset(x, y));
            }
        }
        points
    }
}
