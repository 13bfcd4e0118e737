use std::fmt;
use std::str::FromStr;

use glam::UVec2;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Tile resolution and world extents shared by the rasterizer and the scan engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColliderConfig {
    /// Tile edge length in world units. Must be at least 1.
    pub tile_size: u32,
    /// World extent along X, in world units.
    pub world_width: u32,
    /// World extent along Y, in world units.
    pub world_height: u32,
}

impl ColliderConfig {
    /// Infallible constructor. `tile_size == 0` is a precondition violation.
    pub fn new(tile_size: u32, world_width: u32, world_height: u32) -> Self {
        debug_assert!(tile_size >= 1, "tile_size must be at least 1");
        Self { tile_size, world_width, world_height }
    }

    /// Checked constructor for values coming from outside the program.
    pub fn try_new(tile_size: u32, world_width: u32, world_height: u32) -> Result<Self> {
        if tile_size == 0 {
            return Err(GridError::ZeroTileSize);
        }
        Ok(Self { tile_size, world_width, world_height })
    }

    /// Convenience: world extents as a vector.
    pub fn with_world_size(tile_size: u32, world_size: UVec2) -> Self {
        Self::new(tile_size, world_size.x, world_size.y)
    }

    /// Parse a config from RON text, e.g.
    /// `(tile_size: 16, world_width: 640, world_height: 480)`.
    pub fn from_ron(text: &str) -> Result<Self> {
        let cfg: ColliderConfig = ron::from_str(text)?;
        Self::try_new(cfg.tile_size, cfg.world_width, cfg.world_height)
    }

    /// Grid columns: `world_width / tile_size`.
    pub fn projected_width(&self) -> u32 {
        self.world_width / self.tile_size
    }

    /// Grid rows: `world_height / tile_size`.
    pub fn projected_height(&self) -> u32 {
        self.world_height / self.tile_size
    }

    pub fn projected_size(&self) -> UVec2 {
        UVec2::new(self.projected_width(), self.projected_height())
    }

    /// Project a world rectangle into tile space.
    pub fn tile_bounds(&self, x: u32, y: u32, width: u32, height: u32) -> TileBounds {
        debug_assert!(self.tile_size >= 1, "tile_size must be at least 1");
        let ts = self.tile_size;
        TileBounds {
            col_start: x / ts,
            row_start: y / ts,
            col_end: x.saturating_add(width) / ts,
            row_end: y.saturating_add(height) / ts,
        }
    }
}

/// Tile-space rectangle covered by a world rectangle.
///
/// Ends are exclusive, so the last covered column is `col_end - 1`, which is
/// the `(x + width) / tile_size - 1` edge used for both marking and scanning.
/// Storing the exclusive end keeps the sub-tile case (`col_end == col_start`)
/// representable in unsigned arithmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TileBounds {
    pub col_start: u32,
    pub row_start: u32,
    pub col_end: u32,
    pub row_end: u32,
}

impl TileBounds {
    /// True when no tile is covered in at least one axis.
    pub fn is_empty(&self) -> bool {
        self.col_end <= self.col_start || self.row_end <= self.row_start
    }

    pub fn cols(&self) -> u32 {
        self.col_end.saturating_sub(self.col_start)
    }

    pub fn rows(&self) -> u32 {
        self.row_end.saturating_sub(self.row_start)
    }

    /// Inclusive last column. Only meaningful when not empty.
    pub fn last_col(&self) -> u32 {
        self.col_end - 1
    }

    /// Inclusive last row. Only meaningful when not empty.
    pub fn last_row(&self) -> u32 {
        self.row_end - 1
    }

    /// Intersection with a `width x height` grid (may become empty).
    pub fn clamp_to(&self, width: u32, height: u32) -> TileBounds {
        TileBounds {
            col_start: self.col_start.min(width),
            row_start: self.row_start.min(height),
            col_end: self.col_end.min(width),
            row_end: self.row_end.min(height),
        }
    }
}

/// Anything with an integer world-space position and size.
pub trait Block {
    /// Top-left corner in world units.
    fn position(&self) -> UVec2;
    /// Extent in world units.
    fn size(&self) -> UVec2;
}

impl<T: Block + ?Sized> Block for &T {
    fn position(&self) -> UVec2 {
        (**self).position()
    }

    fn size(&self) -> UVec2 {
        (**self).size()
    }
}

/// Axis-aligned world rectangle; used both as a block and as a query box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldRect {
    pub position: UVec2,
    pub size: UVec2,
}

impl WorldRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { position: UVec2::new(x, y), size: UVec2::new(width, height) }
    }

    /// Exclusive bottom-right corner.
    pub fn max(&self) -> UVec2 {
        self.position.saturating_add(self.size)
    }
}

impl Block for WorldRect {
    fn position(&self) -> UVec2 {
        self.position
    }

    fn size(&self) -> UVec2 {
        self.size
    }
}

/// Which cells of the query rectangle a scan visits.
///
/// Row 0 is the top of the world, so `Bottom` variants probe the last row.
/// Only [`ScanStrategy::RowByRow`] and [`ScanStrategy::TopLeftBottomRight`]
/// visit every cell; every other variant is a partial probe that can miss
/// occupied cells but never reports a cell that is not occupied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScanStrategy {
    /// Full rectangle, row-major.
    #[default]
    RowByRow,
    /// Full rectangle, four corners converging toward the centre in lockstep.
    TopLeftBottomRight,
    /// Perimeter cells.
    BorderOnly,
    BorderBottomOnly,
    BorderTopOnly,
    BorderLeftOnly,
    BorderRightOnly,
    /// The four corner cells.
    CornersOnly,
    CornerTopLeftOnly,
    CornerTopRightOnly,
    CornerBottomLeftOnly,
    CornerBottomRightOnly,
    CornersTopOnly,
    CornersBottomOnly,
    CornersLeftOnly,
    CornersRightOnly,
}

impl ScanStrategy {
    pub const ALL: [ScanStrategy; 16] = [
        ScanStrategy::RowByRow,
        ScanStrategy::TopLeftBottomRight,
        ScanStrategy::BorderOnly,
        ScanStrategy::BorderBottomOnly,
        ScanStrategy::BorderTopOnly,
        ScanStrategy::BorderLeftOnly,
        ScanStrategy::BorderRightOnly,
        ScanStrategy::CornersOnly,
        ScanStrategy::CornerTopLeftOnly,
        ScanStrategy::CornerTopRightOnly,
        ScanStrategy::CornerBottomLeftOnly,
        ScanStrategy::CornerBottomRightOnly,
        ScanStrategy::CornersTopOnly,
        ScanStrategy::CornersBottomOnly,
        ScanStrategy::CornersLeftOnly,
        ScanStrategy::CornersRightOnly,
    ];

    /// True if the strategy visits every cell of the query rectangle.
    pub fn is_exhaustive(self) -> bool {
        matches!(self, ScanStrategy::RowByRow | ScanStrategy::TopLeftBottomRight)
    }

    /// Name used in config files and logs.
    pub fn name(self) -> &'static str {
        match self {
            ScanStrategy::RowByRow => "rowByRow",
            ScanStrategy::TopLeftBottomRight => "topLeftBottomRight",
            ScanStrategy::BorderOnly => "borderOnly",
            ScanStrategy::BorderBottomOnly => "borderBottomOnly",
            ScanStrategy::BorderTopOnly => "borderTopOnly",
            ScanStrategy::BorderLeftOnly => "borderLeftOnly",
            ScanStrategy::BorderRightOnly => "borderRightOnly",
            ScanStrategy::CornersOnly => "cornersOnly",
            ScanStrategy::CornerTopLeftOnly => "cornerTopLeftOnly",
            ScanStrategy::CornerTopRightOnly => "cornerTopRightOnly",
            ScanStrategy::CornerBottomLeftOnly => "cornerBottomLeftOnly",
            ScanStrategy::CornerBottomRightOnly => "cornerBottomRightOnly",
            ScanStrategy::CornersTopOnly => "cornersTopOnly",
            ScanStrategy::CornersBottomOnly => "cornersBottomOnly",
            ScanStrategy::CornersLeftOnly => "cornersLeftOnly",
            ScanStrategy::CornersRightOnly => "cornersRightOnly",
        }
    }
}

impl fmt::Display for ScanStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScanStrategy {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        ScanStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| GridError::UnknownStrategy(s.to_owned()))
    }
}

/// Geometry class of a grid within [`crate::WorldGrids`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryClass {
    /// Solid from every side.
    Walls,
    /// Passable from below, solid from above.
    JumpThrough,
}

impl fmt::Display for GeometryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryClass::Walls => f.write_str("walls"),
            GeometryClass::JumpThrough => f.write_str("jump-through"),
        }
    }
}

/// Occupancy counts for one grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GridStats {
    pub cells: usize,
    pub occupied: usize,
}

/// Per-class stats for a [`crate::WorldGrids`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldGridStats {
    pub walls: GridStats,
    pub jump_through: GridStats,
}
