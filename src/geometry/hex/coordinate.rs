use std::{fmt, hash, str::FromStr};

use super::{cube::Cube, direction::Direction};

/// `sqrt(3)`, correctly rounded.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Default cell size.
pub const DEFAULT_RADIUS: f64 = 1.0;

/// A single hex cell, positioned in both cube and cartesian space.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates).
///
/// Constraint: `q + r + s == 0`. It is checked at construction, so every
/// `HexCoordinate` in existence satisfies it.
///
/// Everything derived from the cube position (cartesian center, neighbors,
/// vertices) is computed once, when the coordinate is built.
///
/// Equality and hashing consider only `(q, r, s)`: two coordinates with
/// different radii but the same cube position are equal.
#[derive(Clone, Debug)]
pub struct HexCoordinate {
    cube: Cube,
    radius: f64,
    x: f64,
    y: f64,
    neighbors: [Cube; 6],
    vertices: [[f64; 2]; 6],
    edges: [bool; 6],
}

impl HexCoordinate {
    /// Create a coordinate with the default radius.
    pub fn new(q: i32, r: i32, s: i32) -> Result<HexCoordinate, InvalidCoordinate> {
        Self::with_radius(q, r, s, DEFAULT_RADIUS)
    }

    /// Create a coordinate whose cells have the given radius.
    ///
    /// Fails if `q + r + s != 0`.
    pub fn with_radius(
        q: i32,
        r: i32,
        s: i32,
        radius: f64,
    ) -> Result<HexCoordinate, InvalidCoordinate> {
        let cube = Cube::new(q, r, s);
        if !cube.is_valid() {
            tracing::debug!(q, r, s, "rejected hex coordinate off the q + r + s = 0 plane");
            return Err(InvalidCoordinate { q, r, s });
        }
        Ok(Self::from_valid_cube(cube, radius))
    }

    /// Build a coordinate from a triple already known to be valid.
    fn from_valid_cube(cube: Cube, radius: f64) -> HexCoordinate {
        debug_assert!(cube.is_valid());

        let (x, y) = center(cube, radius);

        // cos(π/6)
        let x_projection = 0.5 * SQRT_3 * radius;
        let y_projection = 0.5 * radius;

        let vertices = [
            [x_projection, y_projection],
            [0.0, radius],
            [-x_projection, y_projection],
            [-x_projection, -y_projection],
            [0.0, -radius],
            [x_projection, -y_projection],
        ];

        HexCoordinate {
            cube,
            radius,
            x,
            y,
            neighbors: cube.neighbors(),
            vertices,
            edges: [true; 6],
        }
    }

    #[inline]
    pub fn q(&self) -> i32 {
        self.cube.q
    }

    #[inline]
    pub fn r(&self) -> i32 {
        self.cube.r
    }

    #[inline]
    pub fn s(&self) -> i32 {
        self.cube.s
    }

    /// Horizontal position of this cell's center.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical position of this cell's center.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Size of this cell: the distance from its center to any vertex.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The bare cube triple of this coordinate.
    #[inline]
    pub fn cube(&self) -> Cube {
        self.cube
    }

    /// Cube triples of the six adjacent cells, in [`Direction::iter`] order.
    #[inline]
    pub fn neighbors(&self) -> &[Cube; 6] {
        &self.neighbors
    }

    /// Vertex offsets from this cell's center, counterclockwise from the east-northeast.
    #[inline]
    pub fn vertices(&self) -> &[[f64; 2]; 6] {
        &self.vertices
    }

    /// Which of the six edges should be drawn.
    #[inline]
    pub fn edges(&self) -> &[bool; 6] {
        &self.edges
    }

    /// The adjacent cell in `direction`, with the same radius.
    ///
    /// Fails only when the step would leave the `i32` range.
    pub fn neighbor(&self, direction: Direction) -> Result<HexCoordinate, InvalidCoordinate> {
        let delta = direction.delta();
        let step = |from: i32, by: i32| from.checked_add(by);
        match (
            step(self.q(), delta.q),
            step(self.r(), delta.r),
            step(self.s(), delta.s),
        ) {
            (Some(q), Some(r), Some(s)) => Self::with_radius(q, r, s, self.radius),
            _ => Err(InvalidCoordinate {
                q: self.q().wrapping_add(delta.q),
                r: self.r().wrapping_add(delta.r),
                s: self.s().wrapping_add(delta.s),
            }),
        }
    }

    /// Reduced two-coordinate form: `(q, s)`.
    ///
    /// Note that this drops `r`, not `s`.
    pub fn to_axial(&self) -> (i32, i32) {
        (self.q(), self.s())
    }

    /// Number of steps between this cell and `other`.
    pub fn distance_to(&self, other: &HexCoordinate) -> u64 {
        self.cube.distance(other.cube)
    }

    /// Find the cell containing the cartesian point `(x, y)`.
    ///
    /// `radius` scales the input point only: the returned coordinate always
    /// has the default radius.
    ///
    /// This never fails. Non-finite input resolves to a valid coordinate
    /// (NaN lands on the origin).
    pub fn from_cartesian(x: f64, y: f64, radius: f64) -> HexCoordinate {
        Self::from_valid_cube(locate(x, y, radius), DEFAULT_RADIUS)
    }

    /// The cells along a straight line from this cell to `other`.
    ///
    /// Both endpoints are included, so the line has `distance_to(other) + 1`
    /// cells. The last cell is `other` itself.
    ///
    /// The line is traced in this cell's layout: intermediate cells take this
    /// cell's radius, and `other`'s radius does not affect which cells are chosen.
    ///
    /// Memory grows with the distance; lines spanning a large part of the `i32`
    /// range will not fit in memory.
    pub fn line_to(&self, other: &HexCoordinate) -> Vec<HexCoordinate> {
        let distance = self.distance_to(other);
        tracing::trace!(from = %self, to = %other, distance, "rasterizing hex line");

        if distance == 0 {
            return vec![other.clone()];
        }

        let (target_x, target_y) = center(other.cube, self.radius);
        let steps = distance as f64;
        let dx = (target_x - self.x) / steps;
        let dy = (target_y - self.y) / steps;

        let mut line = Vec::new();
        for i in 0..distance {
            let i = i as f64;
            let cube = locate(self.x + dx * i, self.y + dy * i, self.radius);
            line.push(Self::from_valid_cube(cube, self.radius));
        }
        line.push(other.clone());
        line
    }
}

/// Cartesian center of `cube` in a layout of cells with the given radius.
fn center(cube: Cube, radius: f64) -> (f64, f64) {
    let height = 2.0 * radius;
    let width = SQRT_3 * radius;

    let x = 0.5 * width * (cube.q as f64 - cube.r as f64);
    let y = 0.75 * height * cube.s as f64;
    (x, y)
}

/// Find the cube triple of the cell containing `(x, y)`.
fn locate(x: f64, y: f64, radius: f64) -> Cube {
    let x = x / radius;
    let y = y / radius;

    let t = x / SQRT_3;
    let a = (2.0 * t).ceil();
    let b = (-t - y).ceil();
    let c = (-t + y).ceil();

    Cube::round((a - c) / 3.0, (b - a) / 3.0, (c - b) / 3.0)
}

impl PartialEq for HexCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.cube == other.cube
    }
}

impl Eq for HexCoordinate {}

impl hash::Hash for HexCoordinate {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(&self.cube, state);
    }
}

impl fmt::Display for HexCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cube, f)
    }
}

impl TryFrom<Cube> for HexCoordinate {
    type Error = InvalidCoordinate;

    fn try_from(cube: Cube) -> Result<Self, Self::Error> {
        HexCoordinate::new(cube.q, cube.r, cube.s)
    }
}

impl From<&HexCoordinate> for Cube {
    fn from(coordinate: &HexCoordinate) -> Cube {
        coordinate.cube
    }
}

impl FromStr for HexCoordinate {
    type Err = ParseCoordinateError;

    /// Parse the canonical `q,r,s` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cube: Cube = s.parse()?;
        HexCoordinate::try_from(cube).map_err(Into::into)
    }
}

/// Cube coordinates did not satisfy `q + r + s == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid hex coordinates ({q}, {r}, {s}): q + r + s must be 0")]
pub struct InvalidCoordinate {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseCoordinateError {
    #[error("malformed hex coordinate; expected `q,r,s`")]
    Malformed(#[from] parse_display::ParseError),
    #[error(transparent)]
    Invalid(#[from] InvalidCoordinate),
}
