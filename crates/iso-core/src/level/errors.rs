//! Level generation errors.

use thiserror::Error;

/// Errors surfaced by layout generation
///
/// Running out of placement attempts is not among them: a map with fewer
/// rooms than the target is a normal outcome.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LevelError {
    /// A room classified without a single straight wall segment cannot
    /// host an entrance. The supported shapes always produce one, so this
    /// signals a degenerate footprint.
    #[error("room has no straight wall segment to host an entrance")]
    NoEntranceWall,

    #[error("map size must be positive, got {width}x{height}")]
    InvalidMapSize { width: i32, height: i32 },

    #[error("tile size must be positive, got {width}x{height}")]
    InvalidTileSize { width: f32, height: f32 },
}
