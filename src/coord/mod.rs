mod axes;
mod dd;
mod format;
mod group;
mod lexer;
mod parse;
mod refine;

pub use axes::{AxisAssignment, assign_axes};
pub use dd::{DdGroup, DdMatch, is_positive_direction, match_dd, parse_dd, to_digits};
pub use format::{CoordinateFormat, format_lat_lon};
pub use group::{RawCoordinate, group_tokens};
pub use lexer::{SEPARATOR, lex_lat_lon};
pub use parse::parse_lat_lon;
pub use refine::{RefinedCoordinate, refine_coordinate};

use crate::error::CoordError;
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trait for types that can provide x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples and `geo_types::Point<f64>`.
/// For geographic values x is longitude and y is latitude.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude or easting).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude or northing).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// Which half of a lat/lon pair a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Lat,
    Lon,
}

impl Axis {
    /// The other axis.
    pub fn complement(self) -> Self {
        match self {
            Axis::Lat => Axis::Lon,
            Axis::Lon => Axis::Lat,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Lat => write!(f, "lat"),
            Axis::Lon => write!(f, "lon"),
        }
    }
}

/// Expected order of the two values when compass letters don't say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrder {
    #[default]
    LatLon,
    LonLat,
}

impl AxisOrder {
    /// Axis expected for the first value.
    pub fn first(self) -> Axis {
        match self {
            AxisOrder::LatLon => Axis::Lat,
            AxisOrder::LonLat => Axis::Lon,
        }
    }
}

impl fmt::Display for AxisOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisOrder::LatLon => write!(f, "latlon"),
            AxisOrder::LonLat => write!(f, "lonlat"),
        }
    }
}

impl FromStr for AxisOrder {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latlon" => Ok(AxisOrder::LatLon),
            "lonlat" => Ok(AxisOrder::LonLat),
            other => Err(CoordError::Parse(format!("Unknown axis order: {}", other))),
        }
    }
}

/// Compass direction letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compass {
    N,
    S,
    E,
    W,
}

impl Compass {
    /// Parses a single compass letter, case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Compass::N),
            'S' => Some(Compass::S),
            'E' => Some(Compass::E),
            'W' => Some(Compass::W),
            _ => None,
        }
    }

    /// `+1.0` for N/E, `-1.0` for S/W.
    pub fn sign(self) -> f64 {
        match self {
            Compass::N | Compass::E => 1.0,
            Compass::S | Compass::W => -1.0,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Compass::N | Compass::S => Axis::Lat,
            Compass::E | Compass::W => Axis::Lon,
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Compass::N => 'N',
            Compass::S => 'S',
            Compass::E => 'E',
            Compass::W => 'W',
        };
        write!(f, "{}", c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (-79.98, 40.44);
        assert_eq!(tuple.x(), -79.98);
        assert_eq!(tuple.y(), 40.44);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(-79.98, 40.44);
        assert_eq!(point.x(), -79.98);
        assert_eq!(point.y(), 40.44);
    }

    #[test]
    fn test_compass_table() {
        assert_eq!(Compass::from_char('n'), Some(Compass::N));
        assert_eq!(Compass::from_char('x'), None);
        assert_eq!(Compass::W.sign(), -1.0);
        assert_eq!(Compass::E.axis(), Axis::Lon);
        assert_eq!(Compass::S.axis(), Axis::Lat);
    }

    #[test]
    fn test_axis_order_from_str() -> Result<(), CoordError> {
        assert_eq!("LonLat".parse::<AxisOrder>()?, AxisOrder::LonLat);
        assert_eq!("latlon".parse::<AxisOrder>()?, AxisOrder::LatLon);
        assert!("xy".parse::<AxisOrder>().is_err());
        Ok(())
    }
}
