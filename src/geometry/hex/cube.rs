use std::ops::{Add, AddAssign, Sub};

use super::direction::Direction;

/// Largest magnitude a rounded `q` or `r` may take.
///
/// Keeps `s = -q - r` representable in an `i32`.
const COMPONENT_LIMIT: f64 = (i32::MAX / 2) as f64;

/// A bare cube coordinate triple.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
///
/// Unlike [`HexCoordinate`][super::HexCoordinate], a `Cube` is not validated:
/// it may be used to hold deltas or neighbor triples. Use [`Cube::is_valid`]
/// to check the `q + r + s == 0` constraint.
///
/// The display form `q,r,s` is the canonical text key for a hex cell.
///
/// Arithmetic wraps at the edge of the `i32` range.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display("{q},{r},{s}")]
pub struct Cube {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

impl Cube {
    pub const ORIGIN: Cube = Cube::new(0, 0, 0);

    pub const fn new(q: i32, r: i32, s: i32) -> Cube {
        Cube { q, r, s }
    }

    /// `true` when this triple lies on the `q + r + s == 0` plane.
    pub fn is_valid(self) -> bool {
        self.q as i64 + self.r as i64 + self.s as i64 == 0
    }

    /// Largest absolute component.
    ///
    /// For a valid triple this is its hex distance from the origin.
    pub fn length(self) -> u64 {
        self.q
            .unsigned_abs()
            .max(self.r.unsigned_abs())
            .max(self.s.unsigned_abs()) as u64
    }

    /// Hex distance between two triples.
    ///
    /// Computed in 64 bits so that distant cells cannot overflow.
    pub fn distance(self, other: Cube) -> u64 {
        let dq = (other.q as i64 - self.q as i64).unsigned_abs();
        let dr = (other.r as i64 - self.r as i64).unsigned_abs();
        let ds = (other.s as i64 - self.s as i64).unsigned_abs();
        dq.max(dr).max(ds)
    }

    /// The six triples adjacent to this one, in [`Direction::iter`] order.
    pub fn neighbors(self) -> [Cube; 6] {
        let mut neighbors = [self; 6];
        for (neighbor, direction) in neighbors.iter_mut().zip(Direction::iter()) {
            *neighbor += direction;
        }
        neighbors
    }

    /// Round fractional cube components to the nearest valid triple.
    ///
    /// Each component is rounded independently. If that breaks the
    /// `q + r + s == 0` constraint, the component which moved furthest is
    /// recomputed from the other two.
    pub(crate) fn round(q: f64, r: f64, s: f64) -> Cube {
        let mut rq = q.round();
        let mut rr = r.round();
        let rs = s.round();

        let dq = (rq - q).abs();
        let dr = (rr - r).abs();
        let ds = (rs - s).abs();

        if dq > dr && dq > ds {
            rq = -rr - rs;
        } else if dr > ds {
            rr = -rq - rs;
        }

        // NaN survives `clamp` and then casts to 0.
        let q = rq.clamp(-COMPONENT_LIMIT, COMPONENT_LIMIT) as i32;
        let r = rr.clamp(-COMPONENT_LIMIT, COMPONENT_LIMIT) as i32;
        Cube::new(q, r, -q - r)
    }
}

impl Add for Cube {
    type Output = Cube;

    fn add(self, rhs: Cube) -> Cube {
        Cube::new(
            self.q.wrapping_add(rhs.q),
            self.r.wrapping_add(rhs.r),
            self.s.wrapping_add(rhs.s),
        )
    }
}

impl Sub for Cube {
    type Output = Cube;

    fn sub(self, rhs: Cube) -> Cube {
        Cube::new(
            self.q.wrapping_sub(rhs.q),
            self.r.wrapping_sub(rhs.r),
            self.s.wrapping_sub(rhs.s),
        )
    }
}

impl AddAssign<Direction> for Cube {
    fn add_assign(&mut self, rhs: Direction) {
        *self = *self + rhs.delta();
    }
}

impl Add<Direction> for Cube {
    type Output = Cube;

    fn add(mut self, rhs: Direction) -> Self::Output {
        self += rhs;
        self
    }
}

impl From<(i32, i32, i32)> for Cube {
    fn from((q, r, s): (i32, i32, i32)) -> Cube {
        Cube::new(q, r, s)
    }
}

impl From<Cube> for (i32, i32, i32) {
    fn from(cube: Cube) -> (i32, i32, i32) {
        (cube.q, cube.r, cube.s)
    }
}
