pub mod config;
pub mod geometry;

pub use config::Config;
pub use geometry::hex::{HexCoordinate, InvalidCoordinate};
