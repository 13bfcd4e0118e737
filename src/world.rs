use crate::api::{GridBuilderApi, ScanApi};
use crate::error::{GridError, Result};
use crate::grid::Grid;
use crate::raster::Rasterizer;
use crate::scan::Scanner;
use crate::types::*;

/// Walls and jump-through grids for one world, plus the config they were built with.
///
/// Built once at world load and read-only afterwards. Geometry changes go
/// through [`WorldGrids::rebuild`], which swaps in freshly built grids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldGrids {
    cfg: ColliderConfig,
    walls: Grid,
    jump_through: Grid,
}

impl WorldGrids {
    /// Rasterize both block collections.
    pub fn build<W, J>(cfg: ColliderConfig, wall_blocks: W, jump_through_blocks: J) -> Self
    where
        W: IntoIterator,
        W::Item: Block,
        J: IntoIterator,
        J::Item: Block,
    {
        Rasterizer::build_world_grids(&cfg, wall_blocks, jump_through_blocks)
    }

    /// Pair grids built elsewhere, checking they match `cfg`.
    pub fn from_parts(cfg: ColliderConfig, walls: Grid, jump_through: Grid) -> Result<Self> {
        if cfg.tile_size == 0 {
            return Err(GridError::ZeroTileSize);
        }
        for (class, grid) in [(GeometryClass::Walls, &walls), (GeometryClass::JumpThrough, &jump_through)] {
            if !grid.matches(&cfg) {
                return Err(GridError::DimensionMismatch {
                    class,
                    expected: cfg.projected_size(),
                    actual: grid.size(),
                });
            }
        }
        Ok(Self { cfg, walls, jump_through })
    }

    /// Grids straight out of the rasterizer already match `cfg`.
    pub(crate) fn from_built(cfg: ColliderConfig, walls: Grid, jump_through: Grid) -> Self {
        debug_assert!(walls.matches(&cfg) && jump_through.matches(&cfg));
        Self { cfg, walls, jump_through }
    }

    pub fn config(&self) -> &ColliderConfig {
        &self.cfg
    }

    pub fn walls(&self) -> &Grid {
        &self.walls
    }

    pub fn jump_through(&self) -> &Grid {
        &self.jump_through
    }

    pub fn grid(&self, class: GeometryClass) -> &Grid {
        match class {
            GeometryClass::Walls => &self.walls,
            GeometryClass::JumpThrough => &self.jump_through,
        }
    }

    /// Query one geometry class.
    pub fn collides<B: Block + ?Sized>(&self, class: GeometryClass, rect: &B, strategy: ScanStrategy) -> bool {
        Scanner::collides_block(self.grid(class), &self.cfg, rect, strategy)
    }

    /// Query walls, then jump-through platforms.
    pub fn collides_any<B: Block + ?Sized>(&self, rect: &B, strategy: ScanStrategy) -> bool {
        self.collides(GeometryClass::Walls, rect, strategy)
            || self.collides(GeometryClass::JumpThrough, rect, strategy)
    }

    /// Replace both grids with ones built from new geometry. The config is kept.
    pub fn rebuild<W, J>(&mut self, wall_blocks: W, jump_through_blocks: J)
    where
        W: IntoIterator,
        W::Item: Block,
        J: IntoIterator,
        J::Item: Block,
    {
        tracing::debug!(tile_size = self.cfg.tile_size, "rebuilding world grids");
        *self = Rasterizer::build_world_grids(&self.cfg, wall_blocks, jump_through_blocks);
    }

    /// Return occupancy stats for both grids.
    pub fn stats(&self) -> WorldGridStats {
        WorldGridStats { walls: self.walls.stats(), jump_through: self.jump_through.stats() }
    }
}
