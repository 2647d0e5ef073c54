use crate::coord::Coordinate;
use crate::error::CoordError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output notation for [`format_lat_lon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateFormat {
    /// Decimal degrees, e.g. `40.446111 N`
    #[default]
    Dd,
    /// Degrees and decimal minutes, e.g. `40° 26.7667' N`
    Ddm,
    /// Degrees, minutes and seconds, e.g. `40° 26' 46" N`
    Dms,
}

impl FromStr for CoordinateFormat {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dd" => Ok(CoordinateFormat::Dd),
            "ddm" => Ok(CoordinateFormat::Ddm),
            "dms" => Ok(CoordinateFormat::Dms),
            other => Err(CoordError::Parse(format!(
                "Unknown coordinate format: {}",
                other
            ))),
        }
    }
}

/// Formats a lon/lat coordinate as `"<lat>, <lon>"` text with compass letters.
///
/// # Example
/// ```
/// use geocoord_rs::{CoordinateFormat, format_lat_lon};
///
/// let text = format_lat_lon(&(-79.982222, 40.446111), CoordinateFormat::Dms);
/// assert_eq!(text, "40° 26' 46\" N, 79° 58' 56\" W");
/// ```
pub fn format_lat_lon(coord: &impl Coordinate, format: CoordinateFormat) -> String {
    let lat_dir = if coord.y() < 0.0 { 'S' } else { 'N' };
    let lon_dir = if coord.x() < 0.0 { 'W' } else { 'E' };

    format!(
        "{} {}, {} {}",
        format_value(coord.y().abs(), format),
        lat_dir,
        format_value(coord.x().abs(), format),
        lon_dir
    )
}

fn format_value(value: f64, format: CoordinateFormat) -> String {
    match format {
        CoordinateFormat::Dd => format!("{:.6}", value),
        CoordinateFormat::Ddm => {
            // ten-thousandths of a minute, so rounding carries into degrees
            let units = (value * 600_000.0).round() as u64;
            let degrees = units / 600_000;
            let minutes = (units % 600_000) as f64 / 10_000.0;
            format!("{}° {}'", degrees, minutes)
        }
        CoordinateFormat::Dms => {
            // hundredths of a second
            let units = (value * 360_000.0).round() as u64;
            let degrees = units / 360_000;
            let minutes = (units % 360_000) / 6_000;
            let seconds = (units % 6_000) as f64 / 100.0;
            format!("{}° {}' {}\"", degrees, minutes, seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::parse_lat_lon;
    use geo_types::Point;

    #[test]
    fn test_format_dd() {
        let text = format_lat_lon(&Point::new(151.2093, -33.8688), CoordinateFormat::Dd);
        assert_eq!(text, "33.868800 S, 151.209300 E");
    }

    #[test]
    fn test_format_ddm() {
        let text = format_lat_lon(&(-79.982222, 40.446111), CoordinateFormat::Ddm);
        assert_eq!(text, "40° 26.7667' N, 79° 58.9333' W");
    }

    #[test]
    fn test_dms_carries_rounded_seconds() {
        // 59.999999" rounds up into the next minute and degree
        let text = format_lat_lon(&(0.0, 10.0 - 0.0000001), CoordinateFormat::Dms);
        assert_eq!(text, "10° 0' 0\" N, 0° 0' 0\" E");
    }

    #[test]
    fn test_format_then_parse() -> Result<(), CoordError> {
        let original = Point::new(-122.419416, 37.774929);
        for format in [
            CoordinateFormat::Dd,
            CoordinateFormat::Ddm,
            CoordinateFormat::Dms,
        ] {
            let text = format_lat_lon(&original, format);
            let parsed = parse_lat_lon(&text, None)?;
            assert!((parsed.x() - original.x()).abs() < 0.00001, "{}", text);
            assert!((parsed.y() - original.y()).abs() < 0.00001, "{}", text);
        }
        Ok(())
    }

    #[test]
    fn test_format_from_str() -> Result<(), CoordError> {
        assert_eq!("DMS".parse::<CoordinateFormat>()?, CoordinateFormat::Dms);
        assert!("utm".parse::<CoordinateFormat>().is_err());
        Ok(())
    }
}
