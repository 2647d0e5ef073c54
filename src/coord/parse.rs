use crate::coord::axes::assign_axes;
use crate::coord::group::group_tokens;
use crate::coord::lexer::lex_lat_lon;
use crate::coord::refine::refine_coordinate;
use crate::coord::{Axis, AxisOrder};
use crate::error::CoordError;
use geo_types::Point;

/// Parses free-text latitude/longitude into a `Point` (x = longitude, y = latitude).
///
/// Accepts decimal degrees, degrees decimal minutes and degrees-minutes-seconds,
/// with compass letters before or after each value, or signed values without
/// them. `order` resolves which value is which when no compass letter says.
///
/// # Example
/// ```
/// use geocoord_rs::parse_lat_lon;
///
/// # fn main() -> Result<(), geocoord_rs::CoordError> {
/// let pt = parse_lat_lon("40° 26' 46\" N, 79° 58' 56\" W", None)?;
/// assert!((pt.y() - 40.446111).abs() < 0.000001);
/// assert!((pt.x() + 79.982222).abs() < 0.000001);
/// # Ok(())
/// # }
/// ```
pub fn parse_lat_lon(input: &str, order: Option<AxisOrder>) -> Result<Point<f64>, CoordError> {
    let tokens = lex_lat_lon(input)?;
    let [first, second] = group_tokens(&tokens);

    let (first, second) = match (refine_coordinate(&first), refine_coordinate(&second)) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(a), Err(b)) => return Err(a.merge(b)),
        (Err(e), _) | (_, Err(e)) => return Err(e),
    };

    let pair = assign_axes(first, second, order)?;

    let mut lat = 0.0;
    let mut lon = 0.0;
    for assignment in pair {
        match assignment.axis {
            Axis::Lat => lat = assignment.value,
            Axis::Lon => lon = assignment.value,
        }
    }

    let mut errors = Vec::new();
    if lat.abs() > 90.0 {
        errors.push(format!("Latitude value out of range: {}", lat));
    }
    if lon.abs() > 180.0 {
        errors.push(format!("Longitude value out of range: {}", lon));
    }
    if !errors.is_empty() {
        return Err(CoordError::Validation(errors));
    }

    Ok(Point::new(lon, lat))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 0.000001;

    fn assert_close(pt: Point<f64>, lat: f64, lon: f64) {
        assert!((pt.y() - lat).abs() < EPS, "lat {} != {}", pt.y(), lat);
        assert!((pt.x() - lon).abs() < EPS, "lon {} != {}", pt.x(), lon);
    }

    #[test]
    fn test_fixture_formats() -> Result<(), CoordError> {
        let fixtures = [
            "40.446111, -79.982222",
            "40.446111 N, 79.982222 W",
            "N 40.446111 W 79.982222",
            "40.446111N 79.982222W",
            "40° 26.7667' N, 79° 58.9333' W",
            "40° 26' 46\" N, 79° 58' 56\" W",
            "40 26 46 N 79 58 56 W",
            "40:26:46N 79:58:56W",
            "79 58 56 W 40 26 46 N",
            "-79.982222 40.446111 N",
        ];
        for fixture in fixtures {
            let pt = parse_lat_lon(fixture, None)?;
            assert!((pt.y() - 40.446111).abs() < 0.0001, "{}", fixture);
            assert!((pt.x() + 79.982222).abs() < 0.0001, "{}", fixture);
        }
        Ok(())
    }

    #[test]
    fn test_lonlat_order() -> Result<(), CoordError> {
        let pt = parse_lat_lon("-79.982222, 40.446111", Some(AxisOrder::LonLat))?;
        assert_close(pt, 40.446111, -79.982222);
        Ok(())
    }

    #[test]
    fn test_southern_eastern() -> Result<(), CoordError> {
        let pt = parse_lat_lon("33° 52' S 151° 12' E", None)?;
        assert_close(pt, -(33.0 + 52.0 / 60.0), 151.2);
        Ok(())
    }

    #[test]
    fn test_minutes_too_high_propagates() {
        let result = parse_lat_lon("40 61 N, 79 W", None);
        assert!(matches!(
            result,
            Err(CoordError::Validation(msgs)) if msgs[0].starts_with("Minutes value too high:")
        ));
    }

    #[test]
    fn test_errors_from_both_halves_merged() {
        let result = parse_lat_lon("40 61, 79 75", None);
        match result {
            Err(CoordError::Validation(msgs)) => assert_eq!(msgs.len(), 2),
            other => panic!("Expected two messages, got {:?}", other),
        }
    }

    #[test]
    fn test_same_axis() {
        let result = parse_lat_lon("40 N, 50 S", None);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Both parts assigned to the same axis")
        );
    }

    #[test]
    fn test_latitude_out_of_range() {
        let result = parse_lat_lon("95, 10", None);
        assert!(matches!(
            result,
            Err(CoordError::Validation(msgs)) if msgs[0].starts_with("Latitude value out of range")
        ));
    }

    #[test]
    fn test_longitude_out_of_range_lonlat() {
        let result = parse_lat_lon("185, 10", Some(AxisOrder::LonLat));
        assert!(matches!(
            result,
            Err(CoordError::Validation(msgs)) if msgs[0].starts_with("Longitude value out of range")
        ));
    }
}
