//! Room footprint construction.
//!
//! A room is one or two axis-aligned rectangles. L and T shapes come in
//! four orientations each (the mirror/rotation variants), rectangles in
//! two (base and transposed).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::point::Point;
use super::rect::Rect;
use crate::rng::LevelRng;
use crate::{L_ROOM_SIZE, RECT_ROOM_SIZE, T_ROOM_SIZE, T_STEM_OFFSET};

/// The supported room silhouettes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum RoomShape {
    LShape = 0,
    TShape,
    Rectangle,
}

impl RoomShape {
    /// All shapes, for uniform selection
    pub const ALL: [RoomShape; 3] = [RoomShape::LShape, RoomShape::TShape, RoomShape::Rectangle];

    /// How many distinct orientations this shape has
    pub const fn orientations(&self) -> u8 {
        match self {
            RoomShape::LShape | RoomShape::TShape => 4,
            RoomShape::Rectangle => 2,
        }
    }
}

/// Build the footprint rectangles for a room anchored at `anchor`, with the
/// orientation drawn uniformly from the shape's variants.
pub fn create_room_shape(anchor: Point, shape: RoomShape, rng: &mut LevelRng) -> Vec<Rect> {
    let orientation = rng.below(shape.orientations() as u32) as u8;
    shape_rects(anchor, shape, orientation)
}

/// Build the footprint rectangles for a specific orientation.
///
/// Pure in all arguments; `orientation` is taken modulo the shape's
/// orientation count. The two rectangles of an L or T never overlap and
/// always share an edge, so the union is a contiguous footprint.
pub fn shape_rects(anchor: Point, shape: RoomShape, orientation: u8) -> Vec<Rect> {
    let orientation = orientation % shape.orientations();
    match shape {
        RoomShape::LShape => l_shape_rects(anchor, orientation),
        RoomShape::TShape => t_shape_rects(anchor, orientation),
        RoomShape::Rectangle => rectangle_rects(anchor, orientation),
    }
}

fn l_shape_rects(anchor: Point, orientation: u8) -> Vec<Rect> {
    let (w, h) = L_ROOM_SIZE;
    let (top, bottom) = match orientation {
        // L: stem down from the anchor, foot extending right
        0 => (
            Rect::new(anchor, w, h),
            Rect::new(anchor.offset(0, h), h, w),
        ),
        // J: stem down, foot extending left, right edges flush
        1 => (
            Rect::new(anchor, w, h),
            Rect::new(anchor.offset(w - h, h), h, w),
        ),
        // Top bar at the anchor, stem descending from its left end
        2 => (
            Rect::new(anchor, h, w),
            Rect::new(anchor.offset(0, w), w, h),
        ),
        // Top bar at the anchor, stem descending from its right end
        _ => (
            Rect::new(anchor, h, w),
            Rect::new(anchor.offset(h - w, w), w, h),
        ),
    };

    vec![top, bottom]
}

fn t_shape_rects(anchor: Point, orientation: u8) -> Vec<Rect> {
    let (w, h) = T_ROOM_SIZE;
    let (bar, stem) = match orientation {
        // T: horizontal bar, stem descending below it
        0 => (
            Rect::new(anchor, w, h),
            Rect::new(anchor.offset(T_STEM_OFFSET, h), h, w),
        ),
        // Flipped T: horizontal bar, stem rising above it
        1 => (
            Rect::new(anchor, w, h),
            Rect::new(anchor.offset(T_STEM_OFFSET, -w), h, w),
        ),
        // Vertical bar, stem extending right
        2 => (
            Rect::new(anchor, h, w),
            Rect::new(anchor.offset(h, T_STEM_OFFSET), w, h),
        ),
        // Vertical bar, stem extending left
        _ => (
            Rect::new(anchor, h, w),
            Rect::new(anchor.offset(-w, T_STEM_OFFSET), w, h),
        ),
    };

    vec![bar, stem]
}

fn rectangle_rects(anchor: Point, orientation: u8) -> Vec<Rect> {
    let (w, h) = RECT_ROOM_SIZE;
    let rect = if orientation == 0 {
        Rect::new(anchor, w, h)
    } else {
        Rect::new(anchor, h, w)
    };

    vec![rect]
}
