use crate::coord::{AxisOrder, parse_lat_lon};
use crate::error::CoordError;
use crate::grid::{Mgrs, Utm};
use geo_types::Point;

/// Which notation a piece of coordinate text was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateKind {
    LatLon,
    Mgrs,
    Utm,
}

/// A coordinate parsed from free text, in whichever notation it was written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedCoordinate {
    LatLon(Point<f64>),
    Mgrs(Mgrs),
    Utm(Utm),
}

impl ParsedCoordinate {
    pub fn kind(&self) -> CoordinateKind {
        match self {
            ParsedCoordinate::LatLon(_) => CoordinateKind::LatLon,
            ParsedCoordinate::Mgrs(_) => CoordinateKind::Mgrs,
            ParsedCoordinate::Utm(_) => CoordinateKind::Utm,
        }
    }

    /// WGS84 position (x = longitude, y = latitude). MGRS references resolve to
    /// the south-west corner of their square.
    pub fn to_point(&self) -> Result<Point<f64>, CoordError> {
        match self {
            ParsedCoordinate::LatLon(point) => Ok(*point),
            ParsedCoordinate::Mgrs(mgrs) => mgrs.to_lat_lon(),
            ParsedCoordinate::Utm(utm) => utm.to_lat_lon(),
        }
    }
}

/// Guesses the grid notation from the `<zone><band>` prefix: two more letters
/// mean MGRS, a following number means UTM.
fn grid_kind(input: &str) -> Option<CoordinateKind> {
    let trimmed = input.trim_start();
    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if !(1..=2).contains(&digits) {
        return None;
    }

    let mut rest = trimmed[digits..].trim_start().chars();
    if !rest.next()?.is_ascii_alphabetic() {
        return None;
    }
    let after_band = rest.as_str().trim_start();
    match after_band.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => Some(CoordinateKind::Mgrs),
        Some(c) if c.is_ascii_digit() => Some(CoordinateKind::Utm),
        _ => None,
    }
}

/// Parses lat/lon, MGRS or UTM text.
///
/// Lat/lon is tried first. Text that fails as lat/lon but looks like a grid
/// reference is parsed as MGRS or UTM and that error is reported instead.
///
/// # Example
/// ```
/// use geocoord_rs::{CoordinateKind, parse_coordinate};
///
/// # fn main() -> Result<(), geocoord_rs::CoordError> {
/// let parsed = parse_coordinate("31U DQ 48252 11932", None)?;
/// assert_eq!(parsed.kind(), CoordinateKind::Mgrs);
///
/// let parsed = parse_coordinate("40° 26' 46\" N 79° 58' 56\" W", None)?;
/// assert_eq!(parsed.kind(), CoordinateKind::LatLon);
/// # Ok(())
/// # }
/// ```
pub fn parse_coordinate(
    input: &str,
    order: Option<AxisOrder>,
) -> Result<ParsedCoordinate, CoordError> {
    let lat_lon_error = match parse_lat_lon(input, order) {
        Ok(point) => return Ok(ParsedCoordinate::LatLon(point)),
        Err(e) => e,
    };

    match grid_kind(input) {
        Some(CoordinateKind::Mgrs) => input.parse().map(ParsedCoordinate::Mgrs),
        Some(CoordinateKind::Utm) => input.parse().map(ParsedCoordinate::Utm),
        _ => Err(lat_lon_error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_kind() {
        assert_eq!(grid_kind("31U DQ 48252 11932"), Some(CoordinateKind::Mgrs));
        assert_eq!(grid_kind("31UDQ4825211932"), Some(CoordinateKind::Mgrs));
        assert_eq!(grid_kind("31U 448252 5411932"), Some(CoordinateKind::Utm));
        assert_eq!(grid_kind("31 U 448252 5411932"), Some(CoordinateKind::Utm));
        assert_eq!(grid_kind("40.7 -74.0"), None);
        assert_eq!(grid_kind("N 40 W 74"), None);
    }

    #[test]
    fn test_parse_lat_lon_first() -> Result<(), CoordError> {
        let parsed = parse_coordinate("40N 79W", None)?;
        assert_eq!(parsed, ParsedCoordinate::LatLon(Point::new(-79.0, 40.0)));
        Ok(())
    }

    #[test]
    fn test_parse_utm_with_compass_band() -> Result<(), CoordError> {
        // band N also reads as a compass letter, but 448252 is no longitude
        let parsed = parse_coordinate("31N 448252 885000", None)?;
        assert_eq!(parsed.kind(), CoordinateKind::Utm);
        Ok(())
    }

    #[test]
    fn test_parse_mgrs_and_point() -> Result<(), CoordError> {
        let parsed = parse_coordinate("31U DQ 48252 11932", None)?;
        let point = parsed.to_point()?;
        assert!((point.x() - 2.2945).abs() < 0.0001);
        assert!((point.y() - 48.8582).abs() < 0.0001);
        Ok(())
    }

    #[test]
    fn test_errors_follow_detected_kind() {
        let err = parse_coordinate("31U DQ 482521193", None).unwrap_err();
        assert!(err.to_string().contains("must be even number of digits"));

        let err = parse_coordinate("31U 4482520 5411932", None).unwrap_err();
        assert!(err.to_string().contains("greater than 6 digits"));

        let err = parse_coordinate("91 N, 10 E", None).unwrap_err();
        assert!(err.to_string().contains("Latitude value out of range"));
    }
}
