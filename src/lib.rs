//! tilebonk: tile-grid collision matrix (static geometry rasterized once, AABB scans per query)

pub mod types;
pub mod error;
pub mod api;
pub mod grid;
pub mod raster;
pub mod scan;
pub mod world;

pub use crate::types::*;
pub use crate::api::*;
pub use crate::error::GridError;
pub use crate::grid::Grid;
pub use crate::raster::Rasterizer;
pub use crate::scan::Scanner;
pub use crate::world::WorldGrids;
