use std::time::Instant;

use tilebonk::*;
use tracing_subscriber::EnvFilter;

fn lcg(seed: &mut u32) -> u32 {
    *seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
    *seed
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 4096x4096 world at 16-unit tiles -> 256x256 grid.
    let cfg = ColliderConfig::new(16, 4096, 4096);

    // ~20k random blocks, 1..4 tiles per side
    let mut seed = 7u32;
    let n_blocks = 20_000usize;
    let mut walls = Vec::with_capacity(n_blocks);
    for _ in 0..n_blocks {
        let x = lcg(&mut seed) % 4096;
        let y = lcg(&mut seed) % 4096;
        let w = 16 * (1 + lcg(&mut seed) % 4);
        let h = 16 * (1 + lcg(&mut seed) % 4);
        walls.push(WorldRect::new(x, y, w, h));
    }

    let t0 = Instant::now();
    let grids = WorldGrids::build(cfg, &walls, Vec::<WorldRect>::new());
    let build = t0.elapsed();
    let stats = grids.stats();
    println!(
        "build: blocks={} cells={} occupied={} secs={:.4}",
        n_blocks,
        stats.walls.cells,
        stats.walls.occupied,
        build.as_secs_f64()
    );

    // Actor-sized queries, 2x3 tiles
    let n_queries = 500_000usize;
    let queries: Vec<WorldRect> = (0..n_queries)
        .map(|_| WorldRect::new(lcg(&mut seed) % 4000, lcg(&mut seed) % 4000, 32, 48))
        .collect();

    for strategy in ScanStrategy::ALL {
        let t = Instant::now();
        let mut hits = 0usize;
        for q in &queries {
            if grids.collides(GeometryClass::Walls, q, strategy) {
                hits += 1;
            }
        }
        let dt = t.elapsed().as_secs_f64();
        println!(
            "{:<22} exhaustive={:<5} hits={:<7} secs={:.4} throughput={:.0} q/s",
            strategy.name(),
            strategy.is_exhaustive(),
            hits,
            dt,
            n_queries as f64 / dt
        );
    }
}
