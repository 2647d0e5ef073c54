use crate::coord::Coordinate;
use crate::error::CoordError;
use crate::grid::constants::MAX_MGRS_PRECISION;
use crate::grid::lexer::lex_mgrs;
use crate::grid::square::{column_easting, row_northing};
use crate::grid::utm::{Utm, UtmPrecision, to_mgrs_from_utm};
use crate::grid::validate::validate_mgrs;
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An MGRS grid reference.
///
/// `easting` and `northing` are the digits inside the 100 km square at
/// `precision` digits each (5 = 1 m, 1 = 10 km, 0 = the square itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mgrs {
    pub easting: u32,
    pub northing: u32,
    pub zone_number: u8,
    pub zone_letter: char,
    pub grid_col: char,
    pub grid_row: char,
    pub precision: u8,
}

impl Mgrs {
    /// Projects a WGS84 lon/lat coordinate and reduces it to an MGRS
    /// reference at `precision` digits.
    ///
    /// # Example
    /// ```
    /// use geocoord_rs::Mgrs;
    ///
    /// # fn main() -> Result<(), geocoord_rs::CoordError> {
    /// let mgrs = Mgrs::from_lat_lon(&(2.2945, 48.85825), 3)?;
    /// assert_eq!(mgrs.to_string(), "31U DQ 482 119");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_lat_lon(coord: &impl Coordinate, precision: u8) -> Result<Self, CoordError> {
        to_mgrs_from_utm(&Utm::from_lat_lon(coord)?, precision)
    }

    /// South-west corner of the referenced square as a `Point` (x = lon, y = lat).
    pub fn to_lat_lon(&self) -> Result<Point<f64>, CoordError> {
        self.to_utm(None)?.to_lat_lon()
    }

    /// See [`to_utm_from_mgrs`].
    pub fn to_utm(&self, precision: Option<UtmPrecision>) -> Result<Utm, CoordError> {
        to_utm_from_mgrs(self, precision)
    }

    fn scale(&self) -> u32 {
        10u32.pow((MAX_MGRS_PRECISION - self.precision.min(MAX_MGRS_PRECISION)) as u32)
    }
}

impl FromStr for Mgrs {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = lex_mgrs(s)?;
        validate_mgrs(&tokens)?;

        let (Some(grid_col), Some(grid_row)) = (tokens.grid_col, tokens.grid_row) else {
            return Err(CoordError::invalid("Missing grid square letters"));
        };

        let digits = |value: &str| -> Result<u32, CoordError> {
            if value.is_empty() {
                return Ok(0);
            }
            value
                .parse()
                .map_err(|_| CoordError::invalid(format!("Invalid grid digits: {}", value)))
        };

        Ok(Mgrs {
            easting: digits(&tokens.easting)?,
            northing: digits(&tokens.northing)?,
            zone_number: tokens.zone_number,
            zone_letter: tokens.zone_letter,
            grid_col,
            grid_row,
            precision: tokens.easting.len() as u8,
        })
    }
}

impl fmt::Display for Mgrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {}{}",
            self.zone_number, self.zone_letter, self.grid_col, self.grid_row
        )?;
        if self.precision > 0 {
            let width = self.precision as usize;
            write!(
                f,
                " {:0width$} {:0width$}",
                self.easting,
                self.northing,
                width = width
            )?;
        }
        Ok(())
    }
}

/// Expands an MGRS reference into full UTM meters.
///
/// The 100 km square's origin comes from the column and row letters; the
/// digits are scaled to meters from the reference's precision, so `"4"` at
/// precision 1 is 40,000 m into the square. Hemisphere follows the zone
/// letter. Without `precision` the result's precision is the digit count of
/// the whole-meter easting and northing.
///
/// # Example
/// ```
/// use geocoord_rs::{Hemisphere, Mgrs, to_utm_from_mgrs};
///
/// # fn main() -> Result<(), geocoord_rs::CoordError> {
/// let mgrs: Mgrs = "31U DQ 48252 11932".parse()?;
/// let utm = to_utm_from_mgrs(&mgrs, None)?;
/// assert_eq!(utm.easting, 448252.0);
/// assert_eq!(utm.northing, 5411932.0);
/// assert_eq!(utm.hemisphere, Hemisphere::N);
/// # Ok(())
/// # }
/// ```
pub fn to_utm_from_mgrs(mgrs: &Mgrs, precision: Option<UtmPrecision>) -> Result<Utm, CoordError> {
    let west = column_easting(mgrs.zone_number, mgrs.grid_col).ok_or_else(|| {
        CoordError::invalid(format!(
            "Invalid grid square column {} for zone {}",
            mgrs.grid_col, mgrs.zone_number
        ))
    })?;
    let south = row_northing(mgrs.zone_number, mgrs.zone_letter, mgrs.grid_row).ok_or_else(
        || {
            CoordError::invalid(format!(
                "Invalid grid square row letter: {}",
                mgrs.grid_row
            ))
        },
    )?;

    let scale = mgrs.scale() as f64;
    let easting = west + mgrs.easting as f64 * scale;
    let northing = south + mgrs.northing as f64 * scale;

    let mut utm = Utm::new(easting, northing, mgrs.zone_number, mgrs.zone_letter);
    if let Some(precision) = precision {
        utm.precision = precision;
    }
    Ok(utm)
}
