//! Fixed-point geographic coordinates.
//!
//! Latitude and longitude are stored as integers scaled by
//! [`FIXED_POINT_SCALE`] (100 000), i.e. in hundred-thousandths of a degree.
//! Decimal text is converted by multiplying and **truncating toward zero**,
//! never rounding, so `"53.618369"` becomes `5361836` and `"-113.602987"`
//! becomes `-11360298`.  Nearest-vertex results depend on this bit-for-bit.
//!
//! Distances between `FixedCoord`s are planar Euclidean distances in
//! fixed-point units.  This is not a geodesic distance; at city scale the
//! ordering of candidate routes is what matters.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Scale factor between decimal degrees and fixed-point units.
pub const FIXED_POINT_SCALE: f64 = 100_000.0;

/// Largest accepted magnitude for a decimal coordinate component.
const MAX_DEGREES: f64 = 360.0;

/// Largest accepted magnitude for a fixed-point component (±360°).
///
/// Road maps and spatial queries only deal in coordinates inside this box;
/// squared distances between any two of them fit comfortably in `i64`.
pub const MAX_FIXED: i64 = 36_000_000;

/// A latitude/longitude pair in fixed-point units.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedCoord {
    pub lat: i64,
    pub lon: i64,
}

impl FixedCoord {
    #[inline]
    pub fn new(lat: i64, lon: i64) -> Self {
        Self { lat, lon }
    }

    /// Parse a decimal `(latitude, longitude)` text pair.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidCoordinate`] if either component is not a finite
    /// decimal number within ±360 degrees.
    pub fn parse(lat: &str, lon: &str) -> CoreResult<Self> {
        Ok(Self {
            lat: parse_fixed(lat)?,
            lon: parse_fixed(lon)?,
        })
    }

    /// Parse a single `"<lat>,<lon>"` string, as accepted on command lines.
    pub fn parse_pair(s: &str) -> CoreResult<Self> {
        match s.split_once(',') {
            Some((lat, lon)) => Self::parse(lat, lon),
            None => Err(CoreError::InvalidCoordinate {
                input:  s.to_owned(),
                reason: "expected \"<lat>,<lon>\"",
            }),
        }
    }

    /// `true` if both components lie within ±[`MAX_FIXED`].
    #[inline]
    pub fn is_in_range(self) -> bool {
        let range = -MAX_FIXED..=MAX_FIXED;
        range.contains(&self.lat) && range.contains(&self.lon)
    }

    /// Squared planar distance in fixed-point units.  Exact for in-range
    /// coordinates, so equal distances compare equal; saturates at
    /// `i64::MAX` otherwise.
    #[inline]
    pub fn distance_sq(self, other: FixedCoord) -> i64 {
        let d_lat = u128::from(self.lat.abs_diff(other.lat));
        let d_lon = u128::from(self.lon.abs_diff(other.lon));
        let sum = (d_lat * d_lat).saturating_add(d_lon * d_lon);
        i64::try_from(sum).unwrap_or(i64::MAX)
    }

    /// Straight-line planar distance in fixed-point units.
    #[inline]
    pub fn distance(self, other: FixedCoord) -> f64 {
        (self.distance_sq(other) as f64).sqrt()
    }
}

impl fmt::Display for FixedCoord {
    /// Space-separated, matching the route coordinate string format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.lat, self.lon)
    }
}

/// Convert one decimal-degree text component to fixed-point units,
/// truncating toward zero.
///
/// Leading/trailing whitespace (including a trailing newline from road data)
/// is ignored.  Values beyond ±360 degrees are rejected, so every parsed
/// component is within [`MAX_FIXED`].
pub fn parse_fixed(s: &str) -> CoreResult<i64> {
    let trimmed = s.trim();
    let degrees: f64 = trimmed.parse().map_err(|_| CoreError::InvalidCoordinate {
        input:  trimmed.to_owned(),
        reason: "not a decimal number",
    })?;
    if !degrees.is_finite() {
        return Err(CoreError::InvalidCoordinate {
            input:  trimmed.to_owned(),
            reason: "not a finite number",
        });
    }
    if degrees.abs() > MAX_DEGREES {
        return Err(CoreError::InvalidCoordinate {
            input:  trimmed.to_owned(),
            reason: "outside ±360 degrees",
        });
    }
    Ok((degrees * FIXED_POINT_SCALE).trunc() as i64)
}
