pub mod hex;

pub use hex::{Cube, Direction, HexCoordinate};
