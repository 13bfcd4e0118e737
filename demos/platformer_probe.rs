use tilebonk::*;
use tracing_subscriber::EnvFilter;

const LEVEL: &str = "(tile_size: 16, world_width: 320, world_height: 160)";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let cfg = match ColliderConfig::from_ron(LEVEL) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("bad level config: {e}");
            std::process::exit(1);
        }
    };

    let walls = [
        WorldRect::new(0, 144, 320, 16), // floor
        WorldRect::new(0, 0, 16, 144),   // left wall
        WorldRect::new(304, 0, 16, 144), // right wall
    ];
    let platforms = [WorldRect::new(96, 96, 64, 16), WorldRect::new(192, 64, 48, 16)];
    let grids = WorldGrids::build(cfg, walls, platforms);

    println!("walls:\n{}", grids.walls().to_ascii());
    println!("jump-through:\n{}", grids.jump_through().to_ascii());

    // A 16x32 actor walking right along the floor, probing ahead and below.
    for x in (16..=288).step_by(32) {
        let actor = WorldRect::new(x, 112, 16, 32);
        let grounded = grids.collides(GeometryClass::Walls, &actor, ScanStrategy::BorderBottomOnly);
        let ahead = WorldRect::new(x + 16, 112, 16, 16);
        let blocked = grids.collides(GeometryClass::Walls, &ahead, ScanStrategy::BorderRightOnly);
        println!("x={x:>3} grounded={grounded} blocked_ahead={blocked}");
    }

    // Standing on a jump-through platform.
    let on_platform = WorldRect::new(112, 64, 16, 48);
    println!(
        "on platform: jump_through={} walls={}",
        grids.collides(GeometryClass::JumpThrough, &on_platform, ScanStrategy::CornersBottomOnly),
        grids.collides(GeometryClass::Walls, &on_platform, ScanStrategy::RowByRow)
    );
}
