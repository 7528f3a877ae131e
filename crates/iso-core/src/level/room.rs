//! Placed rooms and per-tile classification.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use super::errors::LevelError;
use super::point::Point;
use super::rect::Rect;
use super::shape::RoomShape;
use super::tile::TileType;
use crate::rng::LevelRng;

/// One classified cell of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTile {
    pub point: Point,
    pub tile: TileType,
}

/// An accepted, immutable room: its footprint rectangles, the flattened
/// occupied cells, and the classification result for each of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub rects: Vec<Rect>,
    pub points: Vec<Point>,
    pub tiles: Vec<RoomTile>,
    pub shape: RoomShape,
}

impl Room {
    /// Build a room from its footprint rectangles.
    ///
    /// Flattens the rectangles into a deduplicated cell list (rect order,
    /// row-major within each rect, first occurrence wins, so the layout of
    /// `points` and `tiles` is deterministic), classifies every cell, and
    /// promotes one randomly chosen straight wall segment to an entrance.
    pub fn new(rects: Vec<Rect>, shape: RoomShape, rng: &mut LevelRng) -> Result<Self, LevelError> {
        let mut occupied = HashSet::new();
        let mut points = Vec::new();
        for rect in &rects {
            for point in rect.points() {
                if occupied.insert(point) {
                    points.push(point);
                }
            }
        }

        let mut tiles: Vec<RoomTile> = points
            .iter()
            .map(|&point| RoomTile {
                point,
                tile: classify_tile(&occupied, point),
            })
            .collect();

        let wall_indices: Vec<usize> = tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.tile.is_straight_wall())
            .map(|(i, _)| i)
            .collect();
        let &entrance = rng
            .choose(&wall_indices)
            .ok_or(LevelError::NoEntranceWall)?;
        if let Some(promoted) = tiles[entrance].tile.to_entrance() {
            tiles[entrance].tile = promoted;
        }

        Ok(Self {
            rects,
            points,
            tiles,
            shape,
        })
    }
}

/// Classify one occupied cell from the occupancy of its 8 neighbors.
///
/// The orthogonal neighbors form a 4-bit mask (bit set = neighbor absent,
/// in right/left/down/up bit order). Single absences are straight walls,
/// adjacent-pair absences are corners. A fully surrounded cell is probed
/// diagonally: the first absent diagonal marks an inner-corner junction,
/// none means interior floor. Masks the supported shapes never produce
/// (opposite-side or triple absences) degrade to floor instead of failing.
pub fn classify_tile(occupied: &HashSet<Point>, point: Point) -> TileType {
    let [right, left, down, up] = point.orthogonal();
    let mut mask = 0u8;
    if !occupied.contains(&right) {
        mask |= 1;
    }
    if !occupied.contains(&left) {
        mask |= 2;
    }
    if !occupied.contains(&down) {
        mask |= 4;
    }
    if !occupied.contains(&up) {
        mask |= 8;
    }

    match mask {
        5 => TileType::CornerDownRight,
        6 => TileType::CornerDownLeft,
        9 => TileType::CornerUpRight,
        10 => TileType::CornerUpLeft,
        1 => TileType::WallRight,
        2 => TileType::WallLeft,
        4 => TileType::WallDown,
        8 => TileType::WallUp,
        0 => {
            let junctions = [
                TileType::JunctionDownRight,
                TileType::JunctionDownLeft,
                TileType::JunctionUpRight,
                TileType::JunctionUpLeft,
            ];
            for (diagonal, junction) in point.diagonal().into_iter().zip(junctions) {
                if !occupied.contains(&diagonal) {
                    return junction;
                }
            }
            TileType::Floor
        }
        _ => TileType::Floor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::shape::shape_rects;

    fn occupied_set(rects: &[Rect]) -> HashSet<Point> {
        rects.iter().flat_map(|r| r.points()).collect()
    }

    #[test]
    fn test_rectangle_corners_and_walls() {
        let rect = Rect::new(Point::new(10, 10), 13, 7);
        let occupied = occupied_set(&[rect]);

        assert_eq!(
            classify_tile(&occupied, Point::new(10, 10)),
            TileType::CornerUpLeft
        );
        assert_eq!(
            classify_tile(&occupied, Point::new(22, 10)),
            TileType::CornerUpRight
        );
        assert_eq!(
            classify_tile(&occupied, Point::new(10, 16)),
            TileType::CornerDownLeft
        );
        assert_eq!(
            classify_tile(&occupied, Point::new(22, 16)),
            TileType::CornerDownRight
        );

        assert_eq!(classify_tile(&occupied, Point::new(15, 10)), TileType::WallUp);
        assert_eq!(classify_tile(&occupied, Point::new(15, 16)), TileType::WallDown);
        assert_eq!(classify_tile(&occupied, Point::new(10, 13)), TileType::WallLeft);
        assert_eq!(classify_tile(&occupied, Point::new(22, 13)), TileType::WallRight);

        assert_eq!(classify_tile(&occupied, Point::new(15, 13)), TileType::Floor);
    }

    #[test]
    fn test_l_shape_has_a_junction_at_the_elbow() {
        // L orientation 0: stem (20,20) 5x9, foot (20,29) 9x5. The cell
        // diagonally inside the elbow at (24,29) has all orthogonal
        // neighbors but is missing its up-right diagonal (25,28).
        let rects = shape_rects(Point::new(20, 20), RoomShape::LShape, 0);
        let occupied = occupied_set(&rects);

        assert_eq!(
            classify_tile(&occupied, Point::new(24, 29)),
            TileType::JunctionUpRight
        );
    }

    #[test]
    fn test_isolated_cell_degrades_to_floor() {
        let occupied = occupied_set(&[Rect::new(Point::new(5, 5), 1, 1)]);
        assert_eq!(classify_tile(&occupied, Point::new(5, 5)), TileType::Floor);
    }

    #[test]
    fn test_one_wide_strip_degrades_to_floor() {
        // Every cell of a 1-wide strip is missing both horizontal
        // neighbors, a mask outside the corner/wall table.
        let occupied = occupied_set(&[Rect::new(Point::new(0, 0), 1, 5)]);
        assert_eq!(classify_tile(&occupied, Point::new(0, 2)), TileType::Floor);
    }

    #[test]
    fn test_room_classifies_every_point_once() {
        let mut rng = LevelRng::new(1);
        let rects = shape_rects(Point::new(10, 10), RoomShape::TShape, 0);
        let room = Room::new(rects.clone(), RoomShape::TShape, &mut rng).unwrap();

        let expected: usize = rects.iter().map(|r| (r.width * r.height) as usize).sum();
        assert_eq!(room.points.len(), expected);
        assert_eq!(room.tiles.len(), expected);

        let unique: HashSet<Point> = room.points.iter().copied().collect();
        assert_eq!(unique.len(), room.points.len());
    }

    #[test]
    fn test_room_gets_exactly_one_entrance() {
        let mut rng = LevelRng::new(3);
        for shape in RoomShape::ALL {
            let rects = shape_rects(Point::new(30, 30), shape, 1);
            let room = Room::new(rects, shape, &mut rng).unwrap();
            let entrances = room.tiles.iter().filter(|t| t.tile.is_entrance()).count();
            assert_eq!(entrances, 1, "{shape}");
        }
    }

    #[test]
    fn test_entrance_fails_without_straight_walls() {
        // A 2x2 block classifies as four corners, leaving no wall segment
        // to promote.
        let mut rng = LevelRng::new(0);
        let result = Room::new(
            vec![Rect::new(Point::new(0, 0), 2, 2)],
            RoomShape::Rectangle,
            &mut rng,
        );
        assert_eq!(result, Err(LevelError::NoEntranceWall));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let rects = shape_rects(Point::new(12, 7), RoomShape::LShape, 2);
        let room_a = Room::new(rects.clone(), RoomShape::LShape, &mut LevelRng::new(5)).unwrap();
        let room_b = Room::new(rects, RoomShape::LShape, &mut LevelRng::new(5)).unwrap();
        assert_eq!(room_a, room_b);
    }
}
