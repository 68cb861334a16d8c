//! Hexagonal geometry support.
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/)

pub mod coordinate;
pub mod cube;
pub mod direction;

pub use coordinate::{HexCoordinate, InvalidCoordinate, ParseCoordinateError, DEFAULT_RADIUS};
pub use cube::Cube;
pub use direction::Direction;
