//! Level system
//!
//! Contains grid geometry, room shapes, placement, tile classification,
//! and the layered map composition.

mod errors;
mod generation;
mod grid;
mod layer;
mod point;
mod rect;
mod room;
mod shape;
mod tile;

pub use errors::LevelError;
pub use generation::{generate_rooms, room_can_be_placed};
pub use grid::{center_rect, compose_layers, Grid};
pub use layer::Layer;
pub use point::{Point, ScreenPoint};
pub use rect::Rect;
pub use room::{classify_tile, Room, RoomTile};
pub use shape::{create_room_shape, shape_rects, RoomShape};
pub use tile::TileType;
