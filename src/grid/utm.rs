use crate::coord::Coordinate;
use crate::error::CoordError;
use crate::grid::constants::{MAX_MGRS_PRECISION, grid_zone_limit};
use crate::grid::lexer::lex_utm;
use crate::grid::mgrs::Mgrs;
use crate::grid::projection::{band_letter_for, from_utm, to_utm, zone_number_for};
use crate::grid::square::{allowed_columns, column_letter, row_letter};
use crate::grid::validate::validate_utm;
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hemisphere of a UTM coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hemisphere {
    N,
    S,
}

impl Hemisphere {
    /// Bands C–M are south of the equator, N–X north.
    pub fn from_zone_letter(zone_letter: char) -> Self {
        if zone_letter.to_ascii_uppercase() < 'N' {
            Hemisphere::S
        } else {
            Hemisphere::N
        }
    }
}

/// Digit counts of a UTM easting and northing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtmPrecision {
    pub easting: u8,
    pub northing: u8,
}

impl UtmPrecision {
    /// Counts the digits of the whole-meter part of each value.
    pub fn of(easting: f64, northing: f64) -> Self {
        Self {
            easting: digit_count(easting),
            northing: digit_count(northing),
        }
    }
}

fn digit_count(value: f64) -> u8 {
    (value.abs().trunc() as u64).to_string().len() as u8
}

/// A UTM coordinate in meters.
///
/// # Example
/// ```
/// use geocoord_rs::{Hemisphere, Utm};
///
/// # fn main() -> Result<(), geocoord_rs::CoordError> {
/// let utm: Utm = "31U 448252 5411932".parse()?;
/// assert_eq!(utm.zone_number, 31);
/// assert_eq!(utm.hemisphere, Hemisphere::N);
///
/// let mgrs = utm.to_mgrs(5)?;
/// assert_eq!(mgrs.to_string(), "31U DQ 48252 11932");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Utm {
    pub easting: f64,
    pub northing: f64,
    pub zone_number: u8,
    pub zone_letter: char,
    pub hemisphere: Hemisphere,
    pub precision: UtmPrecision,
}

impl Utm {
    /// Builds a UTM value, deriving hemisphere and precision.
    pub fn new(easting: f64, northing: f64, zone_number: u8, zone_letter: char) -> Self {
        let zone_letter = zone_letter.to_ascii_uppercase();
        Self {
            easting,
            northing,
            zone_number,
            zone_letter,
            hemisphere: Hemisphere::from_zone_letter(zone_letter),
            precision: UtmPrecision::of(easting, northing),
        }
    }

    /// Projects a WGS84 lon/lat coordinate into its UTM zone.
    ///
    /// # Example
    /// ```
    /// use geocoord_rs::Utm;
    ///
    /// # fn main() -> Result<(), geocoord_rs::CoordError> {
    /// let utm = Utm::from_lat_lon(&(2.2945, 48.85825))?;
    /// assert_eq!(utm.zone_number, 31);
    /// assert_eq!(utm.zone_letter, 'U');
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_lat_lon(coord: &impl Coordinate) -> Result<Self, CoordError> {
        let lon = coord.x();
        let lat = coord.y();

        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoordError::invalid(format!(
                "Longitude value out of range: {}",
                lon
            )));
        }
        let zone_letter = band_letter_for(lat).ok_or_else(|| {
            CoordError::invalid(format!("Latitude outside UTM limits: {}", lat))
        })?;

        let zone_number = zone_number_for(lat, lon);
        let southern = Hemisphere::from_zone_letter(zone_letter) == Hemisphere::S;
        let (easting, northing) = to_utm(lat, lon, zone_number, southern)?;
        Ok(Self::new(easting, northing, zone_number, zone_letter))
    }

    /// Converts back to WGS84, returning a `Point` with x = longitude, y = latitude.
    pub fn to_lat_lon(&self) -> Result<Point<f64>, CoordError> {
        let (lat, lon) = from_utm(
            self.easting,
            self.northing,
            self.zone_number,
            self.hemisphere == Hemisphere::S,
        )?;
        Ok(Point::new(lon, lat))
    }

    /// See [`to_mgrs_from_utm`].
    pub fn to_mgrs(&self, precision: u8) -> Result<Mgrs, CoordError> {
        to_mgrs_from_utm(self, precision)
    }
}

impl FromStr for Utm {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = lex_utm(s)?;
        validate_utm(&tokens)?;

        let easting: f64 = tokens
            .easting
            .parse()
            .map_err(|_| CoordError::invalid(format!("Invalid easting: {}", tokens.easting)))?;
        let northing: f64 = tokens
            .northing
            .parse()
            .map_err(|_| CoordError::invalid(format!("Invalid northing: {}", tokens.northing)))?;

        let mut utm = Utm::new(easting, northing, tokens.zone_number, tokens.zone_letter);
        utm.precision = UtmPrecision {
            easting: tokens.easting.len() as u8,
            northing: tokens.northing.len() as u8,
        };
        Ok(utm)
    }
}

impl fmt::Display for Utm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {:.0} {:.0}",
            self.zone_number, self.zone_letter, self.easting, self.northing
        )
    }
}

/// Converts a UTM coordinate into MGRS at the given precision (0–5 digits).
///
/// The grid square letters come from the zone's column set and row cycle;
/// the easting/northing digits are the position inside the 100 km square
/// truncated to `precision` digits.
pub fn to_mgrs_from_utm(utm: &Utm, precision: u8) -> Result<Mgrs, CoordError> {
    if precision > MAX_MGRS_PRECISION {
        return Err(CoordError::invalid(format!(
            "Invalid MGRS precision: {} (must be between 0 and {})",
            precision, MAX_MGRS_PRECISION
        )));
    }
    if grid_zone_limit(utm.zone_letter).is_none() {
        return Err(CoordError::invalid(format!(
            "Invalid zone letter: {}",
            utm.zone_letter
        )));
    }

    let grid_col = column_letter(utm.zone_number, utm.easting).ok_or_else(|| {
        CoordError::invalid(format!("Easting out of range: {}", utm.easting))
    })?;
    // Zone 32V spans 3°E to 12°E, but only its J-N columns are lettered.
    match allowed_columns(utm.zone_number, utm.zone_letter) {
        None => {
            return Err(CoordError::invalid(format!(
                "Zone {}{} does not exist",
                utm.zone_number,
                utm.zone_letter.to_ascii_uppercase()
            )));
        }
        Some(allowed) if !allowed.contains(grid_col) => {
            return Err(CoordError::invalid(format!(
                "Invalid grid square column {} for zone {}{}",
                grid_col,
                utm.zone_number,
                utm.zone_letter.to_ascii_uppercase()
            )));
        }
        Some(_) => {}
    }
    let grid_row = row_letter(utm.zone_number, utm.northing).ok_or_else(|| {
        CoordError::invalid(format!("Northing out of range: {}", utm.northing))
    })?;

    let divisor = 10u32.pow((MAX_MGRS_PRECISION - precision) as u32);
    let within = |value: f64| (value.floor() as u64 % 100_000) as u32 / divisor;

    Ok(Mgrs {
        easting: within(utm.easting),
        northing: within(utm.northing),
        zone_number: utm.zone_number,
        zone_letter: utm.zone_letter.to_ascii_uppercase(),
        grid_col,
        grid_row,
        precision,
    })
}
