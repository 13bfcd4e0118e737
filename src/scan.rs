use crate::api::ScanApi;
use crate::grid::Grid;
use crate::types::*;

/// Overlap queries against a built occupancy grid.
///
/// Every query projects the world rectangle with inclusive far edges
/// (`(x + width) / tile_size - 1`), then dispatches once on the strategy.
/// Cells outside the grid read as free, so a query hanging off the world
/// edge only sees the part that lies on the grid.
pub struct Scanner;

impl ScanApi for Scanner {
    fn collides(
        grid: &Grid,
        cfg: &ColliderConfig,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        strategy: ScanStrategy,
    ) -> bool {
        debug_assert!(grid.matches(cfg), "grid was not built for this config");
        Self::collides_tiles(grid, cfg.tile_bounds(x, y, width, height), strategy)
    }

    fn collides_block<B: Block + ?Sized>(
        grid: &Grid,
        cfg: &ColliderConfig,
        block: &B,
        strategy: ScanStrategy,
    ) -> bool {
        let p = block.position();
        let s = block.size();
        Self::collides(grid, cfg, p.x, p.y, s.x, s.y, strategy)
    }

    fn collides_tiles(grid: &Grid, b: TileBounds, strategy: ScanStrategy) -> bool {
        if b.is_empty() {
            return false;
        }
        let (top, bottom) = (b.row_start, b.last_row());
        let (left, right) = (b.col_start, b.last_col());

        match strategy {
            ScanStrategy::RowByRow => scan_rows(grid, b),
            ScanStrategy::TopLeftBottomRight => scan_converging(grid, b),

            ScanStrategy::BorderOnly => {
                grid.row_span_occupied(top, left, b.col_end)
                    || grid.row_span_occupied(bottom, left, b.col_end)
                    || grid.col_span_occupied(left, top, b.row_end)
                    || grid.col_span_occupied(right, top, b.row_end)
            }
            ScanStrategy::BorderBottomOnly => grid.row_span_occupied(bottom, left, b.col_end),
            ScanStrategy::BorderTopOnly => grid.row_span_occupied(top, left, b.col_end),
            ScanStrategy::BorderLeftOnly => grid.col_span_occupied(left, top, b.row_end),
            ScanStrategy::BorderRightOnly => grid.col_span_occupied(right, top, b.row_end),

            ScanStrategy::CornersOnly => {
                grid.get(top, left) || grid.get(top, right) || grid.get(bottom, left) || grid.get(bottom, right)
            }
            ScanStrategy::CornerTopLeftOnly => grid.get(top, left),
            ScanStrategy::CornerTopRightOnly => grid.get(top, right),
            ScanStrategy::CornerBottomLeftOnly => grid.get(bottom, left),
            ScanStrategy::CornerBottomRightOnly => grid.get(bottom, right),
            ScanStrategy::CornersTopOnly => grid.get(top, left) || grid.get(top, right),
            ScanStrategy::CornersBottomOnly => grid.get(bottom, left) || grid.get(bottom, right),
            ScanStrategy::CornersLeftOnly => grid.get(top, left) || grid.get(bottom, left),
            ScanStrategy::CornersRightOnly => grid.get(top, right) || grid.get(bottom, right),
        }
    }
}

fn scan_rows(grid: &Grid, b: TileBounds) -> bool {
    let b = b.clamp_to(grid.width(), grid.height());
    (b.row_start..b.row_end).any(|row| grid.row_span_occupied(row, b.col_start, b.col_end))
}

/// Walk the four quadrants outward-in: ring `r` holds every offset `(i, j)`
/// with `max(i, j) == r`, probed from all four corners at once.
fn scan_converging(grid: &Grid, b: TileBounds) -> bool {
    let b = b.clamp_to(grid.width(), grid.height());
    if b.is_empty() {
        return false;
    }
    let (top, bottom) = (b.row_start, b.last_row());
    let (left, right) = (b.col_start, b.last_col());
    // Offsets up to the middle row/col from each side cover the whole rectangle.
    let half_rows = (b.rows() - 1) / 2;
    let half_cols = (b.cols() - 1) / 2;

    let probe = |i: u32, j: u32| {
        grid.get(top + i, left + j)
            || grid.get(top + i, right - j)
            || grid.get(bottom - i, left + j)
            || grid.get(bottom - i, right - j)
    };

    for ring in 0..=half_rows.max(half_cols) {
        if ring <= half_rows && (0..=ring.min(half_cols)).any(|j| probe(ring, j)) {
            return true;
        }
        if ring <= half_cols && (0..ring.min(half_rows + 1)).any(|i| probe(i, ring)) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GridBuilderApi;
    use crate::raster::Rasterizer;

    use crate::types::ScanStrategy::*;

    /// xorshift32; deterministic fill for sweep tests.
    struct Rng(u32);

    impl Rng {
        fn next(&mut self) -> u32 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            self.0 = x;
            x
        }

        fn below(&mut self, n: u32) -> u32 {
            self.next() % n
        }
    }

    fn grid_with(width: u32, height: u32, cells: &[(u32, u32)]) -> Grid {
        let mut g = Grid::new(width, height);
        for &(row, col) in cells {
            assert!(g.mark(row, col));
        }
        g
    }

    fn hits(grid: &Grid, cfg: &ColliderConfig, rect: WorldRect) -> Vec<ScanStrategy> {
        ScanStrategy::ALL
            .into_iter()
            .filter(|&s| Scanner::collides_block(grid, cfg, &rect, s))
            .collect()
    }

    #[test]
    fn test_single_tile_hit_and_miss() {
        let cfg = ColliderConfig::new(10, 100, 100);
        let grid = Rasterizer::build_grid(&cfg, [WorldRect::new(0, 0, 10, 10)]);
        assert!(Scanner::collides(&grid, &cfg, 0, 0, 10, 10, RowByRow));
        assert!(!Scanner::collides(&grid, &cfg, 10, 10, 10, 10, RowByRow));
        // Every strategy probes the single cell of a one-tile query.
        assert_eq!(hits(&grid, &cfg, WorldRect::new(0, 0, 10, 10)).len(), ScanStrategy::ALL.len());
    }

    #[test]
    fn test_sub_tile_query_is_empty() {
        let cfg = ColliderConfig::new(10, 100, 100);
        let grid = Rasterizer::build_grid(&cfg, [WorldRect::new(0, 0, 100, 100)]);
        assert!(hits(&grid, &cfg, WorldRect::new(0, 0, 5, 5)).is_empty());
        assert!(hits(&grid, &cfg, WorldRect::new(42, 42, 0, 0)).is_empty());
    }

    #[test]
    fn test_interior_cell_only_found_by_exhaustive() {
        let cfg = ColliderConfig::new(1, 10, 10);
        let grid = grid_with(10, 10, &[(4, 4)]);
        assert_eq!(hits(&grid, &cfg, WorldRect::new(2, 2, 5, 5)), vec![RowByRow, TopLeftBottomRight]);
    }

    #[test]
    fn test_top_left_corner_visibility() {
        let cfg = ColliderConfig::new(1, 10, 10);
        let grid = grid_with(10, 10, &[(2, 2)]);
        assert_eq!(
            hits(&grid, &cfg, WorldRect::new(2, 2, 5, 5)),
            vec![
                RowByRow,
                TopLeftBottomRight,
                BorderOnly,
                BorderTopOnly,
                BorderLeftOnly,
                CornersOnly,
                CornerTopLeftOnly,
                CornersTopOnly,
                CornersLeftOnly,
            ]
        );
    }

    #[test]
    fn test_bottom_right_corner_visibility() {
        let cfg = ColliderConfig::new(1, 10, 10);
        let grid = grid_with(10, 10, &[(6, 6)]);
        assert_eq!(
            hits(&grid, &cfg, WorldRect::new(2, 2, 5, 5)),
            vec![
                RowByRow,
                TopLeftBottomRight,
                BorderOnly,
                BorderBottomOnly,
                BorderRightOnly,
                CornersOnly,
                CornerBottomRightOnly,
                CornersBottomOnly,
                CornersRightOnly,
            ]
        );
    }

    #[test]
    fn test_ground_beneath_probe() {
        // Row 6 is the bottom edge of the query; floor cell mid-edge.
        let cfg = ColliderConfig::new(1, 10, 10);
        let grid = grid_with(10, 10, &[(6, 4)]);
        assert_eq!(
            hits(&grid, &cfg, WorldRect::new(2, 2, 5, 5)),
            vec![RowByRow, TopLeftBottomRight, BorderOnly, BorderBottomOnly]
        );
        let grid = grid_with(10, 10, &[(3, 2)]);
        assert_eq!(
            hits(&grid, &cfg, WorldRect::new(2, 2, 5, 5)),
            vec![RowByRow, TopLeftBottomRight, BorderOnly, BorderLeftOnly]
        );
    }

    #[test]
    fn test_empty_grid_never_collides() {
        let cfg = ColliderConfig::new(4, 64, 48);
        let grid = Rasterizer::build_grid(&cfg, Vec::<WorldRect>::new());
        let mut rng = Rng(0x9e37_79b9);
        for _ in 0..200 {
            let rect = WorldRect::new(rng.below(80), rng.below(60), 1 + rng.below(40), 1 + rng.below(40));
            assert!(hits(&grid, &cfg, rect).is_empty(), "{rect:?}");
        }
    }

    #[test]
    fn test_exhaustive_strategies_agree_and_partials_are_sound() {
        let cfg = ColliderConfig::new(2, 32, 24);
        let (w, h) = (cfg.projected_width(), cfg.projected_height());
        let mut rng = Rng(0x1234_5678);
        for round in 0..60 {
            let mut grid = Grid::new(w, h);
            // Sparse to dense occupancy as rounds progress.
            let fill = 1 + round % 12;
            for row in 0..h {
                for col in 0..w {
                    if rng.below(40) < fill {
                        grid.mark(row, col);
                    }
                }
            }
            for _ in 0..80 {
                // Some queries spill past the world edge on purpose.
                let rect = WorldRect::new(rng.below(40), rng.below(30), rng.below(20), rng.below(20));
                let full = Scanner::collides_block(&grid, &cfg, &rect, RowByRow);
                let converging = Scanner::collides_block(&grid, &cfg, &rect, TopLeftBottomRight);
                assert_eq!(full, converging, "{rect:?}\n{}", grid.to_ascii());
                for s in ScanStrategy::ALL {
                    if Scanner::collides_block(&grid, &cfg, &rect, s) {
                        assert!(full, "{s} reported a hit rowByRow missed for {rect:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_converging_scan_covers_every_cell() {
        // Each single occupied cell must be found for odd and even extents.
        for (w, h) in [(1, 1), (1, 4), (5, 1), (4, 4), (5, 7), (6, 3)] {
            for row in 0..h {
                for col in 0..w {
                    let grid = grid_with(w, h, &[(row, col)]);
                    let b = TileBounds { col_start: 0, row_start: 0, col_end: w, row_end: h };
                    assert!(Scanner::collides_tiles(&grid, b, TopLeftBottomRight), "{w}x{h} at ({row},{col})");
                }
            }
        }
    }

    #[test]
    fn test_out_of_bounds_queries() {
        let cfg = ColliderConfig::new(10, 50, 50);
        let grid = Rasterizer::build_grid(&cfg, [WorldRect::new(40, 40, 10, 10)]);
        // Fully outside: nothing to see.
        assert!(hits(&grid, &cfg, WorldRect::new(60, 60, 30, 30)).is_empty());
        assert!(hits(&grid, &cfg, WorldRect::new(u32::MAX - 5, 0, 100, 100)).is_empty());
        // Overhanging the bottom-right corner: cell (4,4) is the query's top-left.
        let overhang = WorldRect::new(40, 40, 30, 30);
        assert_eq!(
            hits(&grid, &cfg, overhang),
            vec![
                RowByRow,
                TopLeftBottomRight,
                BorderOnly,
                BorderTopOnly,
                BorderLeftOnly,
                CornersOnly,
                CornerTopLeftOnly,
                CornersTopOnly,
                CornersLeftOnly,
            ]
        );
    }

    #[test]
    fn test_zero_sized_grid() {
        let cfg = ColliderConfig::new(16, 8, 8);
        let grid = Rasterizer::build_grid(&cfg, [WorldRect::new(0, 0, 8, 8)]);
        assert!(grid.is_empty());
        assert!(hits(&grid, &cfg, WorldRect::new(0, 0, 32, 32)).is_empty());
    }
}
