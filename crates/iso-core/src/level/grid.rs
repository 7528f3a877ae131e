//! The composed, layered map and its coordinate transforms.

use serde::{Deserialize, Serialize};

use super::errors::LevelError;
use super::generation::generate_rooms;
use super::layer::Layer;
use super::point::{Point, ScreenPoint};
use super::rect::Rect;
use super::room::Room;
use super::tile::TileType;
use crate::rng::LevelRng;
use crate::CENTER_DIVISOR;

/// A generated map: ordered layers (bottom to top), the reserved center,
/// the accepted rooms, and the projection parameters
///
/// Handed out as an immutable snapshot; a cell's effective type is the
/// topmost layer where it is not [`TileType::Empty`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub map_size: Point,
    pub tile_size: ScreenPoint,
    pub center: Rect,
    pub layers: Vec<Layer>,
    pub rooms: Vec<Room>,
    pub seed: u64,
}

impl Grid {
    /// Generate a full map: reserve the center, place rooms, compose the
    /// ground and room layers.
    ///
    /// The same seed and parameters always reproduce the same grid.
    pub fn generate(
        map_size: Point,
        tile_size: ScreenPoint,
        seed: u64,
    ) -> Result<Grid, LevelError> {
        if map_size.x <= 0 || map_size.y <= 0 {
            return Err(LevelError::InvalidMapSize {
                width: map_size.x,
                height: map_size.y,
            });
        }
        if tile_size.x <= 0.0 || tile_size.y <= 0.0 {
            return Err(LevelError::InvalidTileSize {
                width: tile_size.x,
                height: tile_size.y,
            });
        }

        let mut rng = LevelRng::new(seed);
        let center = center_rect(map_size);
        let rooms = generate_rooms(map_size, center, &mut rng)?;
        let layers = compose_layers(map_size, &center, &rooms);

        Ok(Grid {
            map_size,
            tile_size,
            center,
            layers,
            rooms,
            seed,
        })
    }

    /// The effective tile at `point`: topmost non-empty layer wins.
    /// None outside the map or where every layer is still empty.
    pub fn topmost_type_at(&self, point: Point) -> Option<TileType> {
        self.layers
            .iter()
            .rev()
            .filter_map(|layer| layer.get(point))
            .find(|&tile| tile != TileType::Empty)
    }

    /// Project a cell index to its screen position (standard isometric
    /// diamond projection)
    pub fn map_to_screen(&self, index: Point) -> ScreenPoint {
        ScreenPoint::new(
            (index.x - index.y) as f32 * self.tile_size.x / 2.0,
            (index.x + index.y) as f32 * self.tile_size.y / 2.0,
        )
    }

    /// Invert the projection back to a cell index, truncating toward zero.
    /// Exact over integer cell indices.
    pub fn screen_to_map(&self, screen: ScreenPoint) -> Point {
        Point::new(
            (screen.x / self.tile_size.x + screen.y / self.tile_size.y) as i32,
            (screen.y / self.tile_size.y - screen.x / self.tile_size.x) as i32,
        )
    }
}

/// The reserved central region: mapSize / [`CENTER_DIVISOR`] per axis,
/// centered on the map
pub fn center_rect(map_size: Point) -> Rect {
    let width = map_size.x / CENTER_DIVISOR;
    let height = map_size.y / CENTER_DIVISOR;
    Rect::new(
        Point::new((map_size.x - width) / 2, (map_size.y - height) / 2),
        width,
        height,
    )
}

/// Compose the map layers, bottom to top.
///
/// The ground layer covers every cell: center cells first, then all
/// remaining cells become background space. The room layer carries the
/// classified room tiles and stays empty everywhere else.
pub fn compose_layers(map_size: Point, center: &Rect, rooms: &[Room]) -> Vec<Layer> {
    let mut ground = Layer::new(map_size);
    ground.fill_rect(center, TileType::Center);
    ground.fill_empty(TileType::Space);

    let mut room_layer = Layer::new(map_size);
    for room in rooms {
        for room_tile in &room.tiles {
            room_layer.set(room_tile.point, room_tile.tile);
        }
    }

    vec![ground, room_layer]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_TILE_SIZE;

    fn tile_size() -> ScreenPoint {
        ScreenPoint::new(DEFAULT_TILE_SIZE.0, DEFAULT_TILE_SIZE.1)
    }

    #[test]
    fn test_center_rect_is_centered() {
        let center = center_rect(Point::new(64, 64));
        assert_eq!(center, Rect::new(Point::new(24, 24), 16, 16));

        let center = center_rect(Point::new(8, 8));
        assert_eq!(center, Rect::new(Point::new(3, 3), 2, 2));
    }

    #[test]
    fn test_generate_rejects_degenerate_input() {
        assert_eq!(
            Grid::generate(Point::new(0, 64), tile_size(), 1),
            Err(LevelError::InvalidMapSize { width: 0, height: 64 })
        );
        assert_eq!(
            Grid::generate(Point::new(64, 64), ScreenPoint::new(0.0, 16.0), 1),
            Err(LevelError::InvalidTileSize { width: 0.0, height: 16.0 })
        );
    }

    #[test]
    fn test_layer_order_is_ground_then_rooms() {
        let grid = Grid::generate(Point::new(64, 64), tile_size(), 7).unwrap();
        assert_eq!(grid.layers.len(), 2);

        // A room tile must win over the ground fill underneath it.
        let room_tile = grid.rooms[0].tiles[0];
        assert_eq!(grid.topmost_type_at(room_tile.point), Some(room_tile.tile));
        assert_eq!(grid.layers[0].get(room_tile.point), Some(TileType::Space));
    }

    #[test]
    fn test_topmost_lookup_out_of_bounds_is_none() {
        let grid = Grid::generate(Point::new(16, 16), tile_size(), 7).unwrap();
        assert_eq!(grid.topmost_type_at(Point::new(-1, 4)), None);
        assert_eq!(grid.topmost_type_at(Point::new(16, 4)), None);
    }

    #[test]
    fn test_map_to_screen() {
        let grid = Grid::generate(Point::new(16, 16), tile_size(), 7).unwrap();
        assert_eq!(grid.map_to_screen(Point::new(0, 0)), ScreenPoint::new(0.0, 0.0));
        assert_eq!(grid.map_to_screen(Point::new(1, 0)), ScreenPoint::new(16.0, 8.0));
        assert_eq!(grid.map_to_screen(Point::new(0, 1)), ScreenPoint::new(-16.0, 8.0));
        assert_eq!(grid.map_to_screen(Point::new(3, 3)), ScreenPoint::new(0.0, 48.0));
    }

    #[test]
    fn test_screen_to_map_truncates() {
        let grid = Grid::generate(Point::new(16, 16), tile_size(), 7).unwrap();
        assert_eq!(grid.screen_to_map(ScreenPoint::new(0.0, 0.0)), Point::new(0, 0));
        // A fraction of a tile away still lands in the same cell
        assert_eq!(grid.screen_to_map(ScreenPoint::new(4.0, 0.0)), Point::new(0, 0));
    }
}
