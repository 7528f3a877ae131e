//! Per-cell tile types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Classification of one map cell
///
/// `Empty` is the unset sentinel: layers start out all-`Empty` and a cell
/// keeps it when nothing was written there. Wall, corner, junction and
/// entrance variants are named after the open side they face.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileType {
    #[default]
    Empty = 0,
    /// Background outside the center and all rooms
    Space,
    /// The reserved central region
    Center,
    /// Interior room floor
    Floor,
    WallLeft,
    WallRight,
    WallUp,
    WallDown,
    CornerDownLeft,
    CornerDownRight,
    CornerUpLeft,
    CornerUpRight,
    JunctionDownRight,
    JunctionDownLeft,
    JunctionUpRight,
    JunctionUpLeft,
    EntranceLeft,
    EntranceRight,
    EntranceUp,
    EntranceDown,
}

impl TileType {
    /// Check if this is a straight wall segment (the only tiles eligible
    /// to become an entrance)
    pub const fn is_straight_wall(&self) -> bool {
        matches!(
            self,
            TileType::WallLeft | TileType::WallRight | TileType::WallUp | TileType::WallDown
        )
    }

    /// Check if this is a corner tile
    pub const fn is_corner(&self) -> bool {
        matches!(
            self,
            TileType::CornerDownLeft
                | TileType::CornerDownRight
                | TileType::CornerUpLeft
                | TileType::CornerUpRight
        )
    }

    /// Check if this is a junction tile
    pub const fn is_junction(&self) -> bool {
        matches!(
            self,
            TileType::JunctionDownRight
                | TileType::JunctionDownLeft
                | TileType::JunctionUpRight
                | TileType::JunctionUpLeft
        )
    }

    /// Check if this is an entrance tile
    pub const fn is_entrance(&self) -> bool {
        matches!(
            self,
            TileType::EntranceLeft
                | TileType::EntranceRight
                | TileType::EntranceUp
                | TileType::EntranceDown
        )
    }

    /// The entrance variant facing the same way as this wall segment,
    /// or None for anything that is not a straight wall
    pub const fn to_entrance(&self) -> Option<TileType> {
        match self {
            TileType::WallLeft => Some(TileType::EntranceLeft),
            TileType::WallRight => Some(TileType::EntranceRight),
            TileType::WallUp => Some(TileType::EntranceUp),
            TileType::WallDown => Some(TileType::EntranceDown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_entrance_mapping_covers_exactly_the_straight_walls() {
        for tile in TileType::iter() {
            assert_eq!(tile.to_entrance().is_some(), tile.is_straight_wall());
        }
    }

    #[test]
    fn test_entrance_keeps_orientation() {
        assert_eq!(TileType::WallLeft.to_entrance(), Some(TileType::EntranceLeft));
        assert_eq!(TileType::WallRight.to_entrance(), Some(TileType::EntranceRight));
        assert_eq!(TileType::WallUp.to_entrance(), Some(TileType::EntranceUp));
        assert_eq!(TileType::WallDown.to_entrance(), Some(TileType::EntranceDown));
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(TileType::default(), TileType::Empty);
    }
}
