//! WGS84 ↔ UTM zone projection through PROJ, plus zone and band lookup.

use crate::error::CoordError;
use crate::grid::constants::{
    BAND_LETTERS, MAX_UTM_LATITUDE, MIN_UTM_LATITUDE, UTM_NORTH_EPSG, UTM_SOUTH_EPSG,
};
use proj::Proj;

const WGS84_CRS: &str = "EPSG:4326";

/// Longitude of a zone's central meridian in degrees.
pub fn central_meridian(zone_number: u8) -> f64 {
    (zone_number as f64 - 1.0) * 6.0 - 180.0 + 3.0
}

/// EPSG identifier of a WGS84 / UTM zone CRS, e.g. `"EPSG:32631"`.
pub fn utm_crs(zone_number: u8, southern: bool) -> String {
    let base = if southern {
        UTM_SOUTH_EPSG
    } else {
        UTM_NORTH_EPSG
    };
    format!("EPSG:{}", base + zone_number as u32)
}

/// UTM zone for a position, including the Norway and Svalbard exceptions.
pub fn zone_number_for(lat: f64, lon: f64) -> u8 {
    if (56.0..64.0).contains(&lat) && (3.0..12.0).contains(&lon) {
        return 32;
    }
    if (72.0..=84.0).contains(&lat) && (0.0..42.0).contains(&lon) {
        return match lon {
            l if l < 9.0 => 31,
            l if l < 21.0 => 33,
            l if l < 33.0 => 35,
            _ => 37,
        };
    }
    let zone = ((lon + 180.0) / 6.0).floor() as i64 + 1;
    zone.clamp(1, 60) as u8
}

/// Latitude band letter, or `None` outside the UTM limits.
pub fn band_letter_for(lat: f64) -> Option<char> {
    if !(MIN_UTM_LATITUDE..=MAX_UTM_LATITUDE).contains(&lat) {
        return None;
    }
    let index = (((lat - MIN_UTM_LATITUDE) / 8.0).floor() as usize).min(BAND_LETTERS.len() - 1);
    BAND_LETTERS.chars().nth(index)
}

/// Projects a WGS84 position into the given zone, returning `(easting, northing)`.
/// `southern` selects the 327zz CRS with its 10,000 km false northing.
pub fn to_utm(
    lat: f64,
    lon: f64,
    zone_number: u8,
    southern: bool,
) -> Result<(f64, f64), CoordError> {
    let proj = Proj::new_known_crs(WGS84_CRS, &utm_crs(zone_number, southern), None)
        .map_err(|e| CoordError::ProjectionError(e.to_string()))?;

    proj.convert((lon, lat))
        .map_err(|e| CoordError::ProjectionError(e.to_string()))
}

/// Inverse of [`to_utm`], returning `(lat, lon)` in degrees.
pub fn from_utm(
    easting: f64,
    northing: f64,
    zone_number: u8,
    southern: bool,
) -> Result<(f64, f64), CoordError> {
    let proj = Proj::new_known_crs(&utm_crs(zone_number, southern), WGS84_CRS, None)
        .map_err(|e| CoordError::ProjectionError(e.to_string()))?;

    let (lon, lat) = proj
        .convert((easting, northing))
        .map_err(|e| CoordError::ProjectionError(e.to_string()))?;
    Ok((lat, lon))
}
