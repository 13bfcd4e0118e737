//! Errors raised at the construction boundary. Queries never fail.

use glam::UVec2;
use thiserror::Error;

use crate::types::GeometryClass;

/// Result type for fallible grid construction.
pub type Result<T> = std::result::Result<T, GridError>;

#[derive(Error, Debug)]
pub enum GridError {
    /// Tile size of zero would divide by zero during projection.
    #[error("tile size must be at least 1")]
    ZeroTileSize,

    /// A grid handed in does not match the configuration's projected size.
    #[error("{class} grid is {actual} tiles, config projects {expected}")]
    DimensionMismatch {
        class: GeometryClass,
        expected: UVec2,
        actual: UVec2,
    },

    /// Strategy name not in the known set.
    #[error("unknown scan strategy: {0}")]
    UnknownStrategy(String),

    /// RON config text failed to parse.
    #[error("config parse error: {0}")]
    Config(#[from] ron::error::SpannedError),
}
