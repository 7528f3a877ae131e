//! One full-map grid of tile types.

use serde::{Deserialize, Serialize};

use super::point::Point;
use super::rect::Rect;
use super::tile::TileType;

/// A full-map tile array, one of the ordered layers a [`super::Grid`]
/// composites bottom to top
///
/// Every cell starts as [`TileType::Empty`]; a cell that still holds it
/// counts as unset when layers are resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    map_size: Point,
    tiles: Vec<Vec<TileType>>,
}

impl Layer {
    /// Create an all-empty layer covering the whole map
    pub fn new(map_size: Point) -> Self {
        let width = map_size.x.max(0) as usize;
        let height = map_size.y.max(0) as usize;
        Self {
            map_size,
            tiles: vec![vec![TileType::Empty; width]; height],
        }
    }

    pub fn map_size(&self) -> Point {
        self.map_size
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0 && point.y >= 0 && point.x < self.map_size.x && point.y < self.map_size.y
    }

    /// The tile at `point`, or None outside the map
    pub fn get(&self, point: Point) -> Option<TileType> {
        if self.in_bounds(point) {
            Some(self.tiles[point.y as usize][point.x as usize])
        } else {
            None
        }
    }

    /// Write `tile` at `point`; writes outside the map are dropped
    pub fn set(&mut self, point: Point, tile: TileType) {
        if self.in_bounds(point) {
            self.tiles[point.y as usize][point.x as usize] = tile;
        }
    }

    /// Write `tile` into every cell covered by `rect` (clipped to the map)
    pub fn fill_rect(&mut self, rect: &Rect, tile: TileType) {
        for point in rect.points() {
            self.set(point, tile);
        }
    }

    /// Replace every still-[`TileType::Empty`] cell with `tile`
    pub fn fill_empty(&mut self, tile: TileType) {
        for row in &mut self.tiles {
            for cell in row {
                if *cell == TileType::Empty {
                    *cell = tile;
                }
            }
        }
    }
}
