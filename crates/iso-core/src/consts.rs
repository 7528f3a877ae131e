//! Generation policy constants.

/// Rooms the placement engine aims for per level
pub const TARGET_ROOM_COUNT: usize = 12;

/// Placement attempts before giving up on reaching the target
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 200;

/// Padding applied to a rectangle for overlap tests, in cells per side
pub const OVERSIZE_MARGIN: i32 = 2;

/// The reserved center region spans mapSize / CENTER_DIVISOR per axis
pub const CENTER_DIVISOR: i32 = 4;

/// Base footprint (width, height) of a rectangular room
pub const RECT_ROOM_SIZE: (i32, i32) = (13, 7);

/// Base footprint of the stem piece of an L-shaped room
pub const L_ROOM_SIZE: (i32, i32) = (5, 9);

/// Base footprint of the bar piece of a T-shaped room
pub const T_ROOM_SIZE: (i32, i32) = (9, 5);

/// Offset of the T stem along the bar's long edge
pub const T_STEM_OFFSET: i32 = 2;

/// Default map dimensions in cells
pub const DEFAULT_MAP_SIZE: (i32, i32) = (64, 64);

/// Default screen-space tile footprint for the isometric projection
pub const DEFAULT_TILE_SIZE: (f32, f32) = (32.0, 16.0);
