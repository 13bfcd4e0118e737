use crate::grid::Grid;
use crate::types::*;
use crate::world::WorldGrids;

/// Build-time contract: allocation and rasterization of static geometry.
pub trait GridBuilderApi {
    // --- Storage -----------------------------------------------------------

    /// Allocate a `width x height` grid with every cell free.
    fn new_grid(width: u32, height: u32) -> Grid;

    // --- Rasterization -----------------------------------------------------

    /// Mark every tile covered by the world rectangle `(x, y, width, height)`.
    fn mark_region(grid: &mut Grid, cfg: &ColliderConfig, x: u32, y: u32, width: u32, height: u32);

    /// Convenience: mark the tiles covered by `block`.
    fn mark_block<B: Block + ?Sized>(grid: &mut Grid, cfg: &ColliderConfig, block: &B);

    // --- Building ----------------------------------------------------------

    /// Allocate a grid sized for `cfg` and rasterize every block into it.
    fn build_grid<I>(cfg: &ColliderConfig, blocks: I) -> Grid
    where
        I: IntoIterator,
        I::Item: Block;

    /// Build one grid per geometry class from a single pass over world data.
    fn build_world_grids<W, J>(cfg: &ColliderConfig, wall_blocks: W, jump_through_blocks: J) -> WorldGrids
    where
        W: IntoIterator,
        W::Item: Block,
        J: IntoIterator,
        J::Item: Block;
}

/// Query-time contract: overlap tests against a built grid.
pub trait ScanApi {
    /// Does the world rectangle `(x, y, width, height)` overlap any occupied
    /// tile visited by `strategy`?
    fn collides(
        grid: &Grid,
        cfg: &ColliderConfig,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        strategy: ScanStrategy,
    ) -> bool;

    /// Convenience: query with a block's position and size.
    fn collides_block<B: Block + ?Sized>(
        grid: &Grid,
        cfg: &ColliderConfig,
        block: &B,
        strategy: ScanStrategy,
    ) -> bool;

    /// Query already-projected tile bounds.
    fn collides_tiles(grid: &Grid, bounds: TileBounds, strategy: ScanStrategy) -> bool;
}
