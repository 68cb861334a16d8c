use crate::geometry::hex::{HexCoordinate, InvalidCoordinate, DEFAULT_RADIUS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Layout settings shared by every coordinate a host application builds.
///
/// Loaded from TOML text supplied by the host; this crate never touches the filesystem.
///
/// ```toml
/// radius = 32.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cell size: distance from a cell's center to any of its vertices.
    pub radius: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            radius: DEFAULT_RADIUS,
        }
    }
}

impl Config {
    /// Parse and validate a configuration.
    pub fn from_toml(data: &str) -> Result<Self, Error> {
        let config: Config = toml::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, Error> {
        toml::to_string_pretty(self).map_err(Into::into)
    }

    /// The radius must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), Error> {
        if self.radius.is_finite() && self.radius > 0.0 {
            Ok(())
        } else {
            tracing::debug!(radius = self.radius, "rejected layout configuration");
            Err(Error::InvalidRadius(self.radius))
        }
    }

    /// Create a coordinate at the configured radius.
    pub fn coordinate(&self, q: i32, r: i32, s: i32) -> Result<HexCoordinate, InvalidCoordinate> {
        HexCoordinate::with_radius(q, r, s, self.radius)
    }

    /// Find the cell containing the cartesian point `(x, y)` in this layout.
    ///
    /// As with [`HexCoordinate::from_cartesian`], the result has the default radius,
    /// not the configured one: it compares equal to the matching [`Config::coordinate`]
    /// cell, but its `x`, `y` and vertices are those of a radius-1 layout.
    pub fn locate(&self, x: f64, y: f64) -> HexCoordinate {
        HexCoordinate::from_cartesian(x, y, self.radius)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
    #[error("cell radius must be finite and positive; got {0}")]
    InvalidRadius(f64),
}
