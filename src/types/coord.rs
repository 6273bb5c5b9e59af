use anyhow::{anyhow, bail, Result};
use geo::Point;
use serde::{Deserialize, Serialize};

use crate::spatial::point_distance;

/// A position on the globe in decimal degrees.
///
/// Stored as a `geo::Point` with `x = longitude` and `y = latitude`.
/// Values are plain `f64`; any text-to-number conversion happens when the
/// coordinate is decoded, never inside distance code.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "CoordinateRepr")]
pub struct Coordinate(Point<f64>);

impl Coordinate {
    /// Largest accepted magnitude of either component. Values past a full
    /// turn are certainly garbage, and differences of huge values overflow
    /// the distance formula.
    pub const MAX_DEGREES: f64 = 360.0;

    /// Build a coordinate from latitude/longitude in degrees.
    /// Fails for NaN, infinite, or beyond `±MAX_DEGREES` components.
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            bail!("coordinate components must be finite, got lat={lat}, lng={lng}");
        }
        if lat.abs() > Self::MAX_DEGREES || lng.abs() > Self::MAX_DEGREES {
            bail!("coordinate components must be within ±{} degrees, got lat={lat}, lng={lng}", Self::MAX_DEGREES);
        }
        Ok(Self(Point::new(lng, lat)))
    }

    /// Parse a coordinate from its textual form, e.g. `("-37.3159", "81.1496")`.
    pub fn parse(lat: &str, lng: &str) -> Result<Self> {
        Self::new(parse_degrees("lat", lat)?, parse_degrees("lng", lng)?)
    }

    #[inline] pub fn lat(&self) -> f64 { self.0.y() }

    #[inline] pub fn lng(&self) -> f64 { self.0.x() }

    #[inline] pub fn point(&self) -> Point<f64> { self.0 }

    /// Great-circle distance to `other`, rounded to whole metres.
    pub fn distance_to(&self, other: &Coordinate) -> u64 {
        point_distance(self.0, other.0)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coord: Coordinate) -> Self { coord.0 }
}

/// Same checks as [`Coordinate::new`], reading `y` as latitude.
impl TryFrom<Point<f64>> for Coordinate {
    type Error = anyhow::Error;

    fn try_from(point: Point<f64>) -> Result<Self> {
        Coordinate::new(point.y(), point.x())
    }
}

fn parse_degrees(field: &str, text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|e| anyhow!("invalid {field} {text:?}: {e}"))
}

/// Degrees as they appear in source payloads: either a JSON number or a
/// numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Degrees {
    Number(f64),
    Text(String),
}

impl Degrees {
    fn to_f64(&self, field: &str) -> Result<f64> {
        match self {
            Degrees::Number(value) => Ok(*value),
            Degrees::Text(text) => parse_degrees(field, text),
        }
    }
}

#[derive(Deserialize)]
struct RawCoordinate {
    lat: Degrees,
    lng: Degrees,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = anyhow::Error;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Coordinate::new(raw.lat.to_f64("lat")?, raw.lng.to_f64("lng")?)
    }
}

#[derive(Serialize)]
struct CoordinateRepr {
    lat: f64,
    lng: f64,
}

impl From<Coordinate> for CoordinateRepr {
    fn from(coord: Coordinate) -> Self {
        Self { lat: coord.lat(), lng: coord.lng() }
    }
}
