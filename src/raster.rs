use crate::api::GridBuilderApi;
use crate::grid::Grid;
use crate::types::*;
use crate::world::WorldGrids;

/// Rasterizes static geometry into occupancy grids.
pub struct Rasterizer;

impl GridBuilderApi for Rasterizer {
    fn new_grid(width: u32, height: u32) -> Grid {
        Grid::new(width, height)
    }

    fn mark_region(grid: &mut Grid, cfg: &ColliderConfig, x: u32, y: u32, width: u32, height: u32) {
        let bounds = cfg.tile_bounds(x, y, width, height);
        if bounds.is_empty() {
            tracing::trace!(x, y, width, height, "region smaller than a tile, nothing marked");
            return;
        }
        let clipped = bounds.clamp_to(grid.width(), grid.height());
        if clipped != bounds {
            tracing::debug!(?bounds, grid_w = grid.width(), grid_h = grid.height(), "region clipped to grid");
        }
        for row in clipped.row_start..clipped.row_end {
            for col in clipped.col_start..clipped.col_end {
                grid.mark(row, col);
            }
        }
    }

    fn mark_block<B: Block + ?Sized>(grid: &mut Grid, cfg: &ColliderConfig, block: &B) {
        let p = block.position();
        let s = block.size();
        Self::mark_region(grid, cfg, p.x, p.y, s.x, s.y);
    }

    fn build_grid<I>(cfg: &ColliderConfig, blocks: I) -> Grid
    where
        I: IntoIterator,
        I::Item: Block,
    {
        let _span = tracing::debug_span!("build_grid", tile_size = cfg.tile_size).entered();
        let mut grid = Self::new_grid(cfg.projected_width(), cfg.projected_height());
        let mut count = 0usize;
        for block in blocks {
            Self::mark_block(&mut grid, cfg, &block);
            count += 1;
        }
        tracing::debug!(
            blocks = count,
            width = grid.width(),
            height = grid.height(),
            occupied = grid.occupied_count(),
            "grid built"
        );
        grid
    }

    fn build_world_grids<W, J>(cfg: &ColliderConfig, wall_blocks: W, jump_through_blocks: J) -> WorldGrids
    where
        W: IntoIterator,
        W::Item: Block,
        J: IntoIterator,
        J::Item: Block,
    {
        let walls = Self::build_grid(cfg, wall_blocks);
        let jump_through = Self::build_grid(cfg, jump_through_blocks);
        WorldGrids::from_built(*cfg, walls, jump_through)
    }
}
