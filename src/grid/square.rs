//! 100 km grid square lettering (WGS84 "AA" scheme).

use crate::grid::constants::{
    COLUMN_SETS, GRID_SQUARE_SIZE, ROW_CYCLE, ROW_LETTERS, grid_zone_limit,
};

/// Column letters used by a zone (the cycle repeats every three zones).
pub fn column_set(zone_number: u8) -> &'static str {
    COLUMN_SETS[(zone_number.saturating_sub(1) % 3) as usize]
}

/// Column letters allowed in the irregular Norway and Svalbard zones, or the
/// zone's full set otherwise. `None` when the zone does not exist at all.
pub fn allowed_columns(zone_number: u8, zone_letter: char) -> Option<&'static str> {
    match (zone_number, zone_letter.to_ascii_uppercase()) {
        (32 | 34 | 36, 'X') => None,
        (32, 'V') => Some("JKLMN"),
        (31, 'X') => Some("CDEFG"),
        (33, 'X') => Some("TUVWXY"),
        (35, 'X') => Some("KLMNPQ"),
        (37, 'X') => Some("BCDEF"),
        _ => Some(column_set(zone_number)),
    }
}

/// Column letter for a UTM easting.
pub fn column_letter(zone_number: u8, easting: f64) -> Option<char> {
    let index = (easting / GRID_SQUARE_SIZE).floor() as i64 - 1;
    if index < 0 {
        return None;
    }
    column_set(zone_number).chars().nth(index as usize)
}

/// Easting of the west edge of a column.
pub fn column_easting(zone_number: u8, column: char) -> Option<f64> {
    let column = column.to_ascii_uppercase();
    column_set(zone_number)
        .chars()
        .position(|c| c == column)
        .map(|i| (i + 1) as f64 * GRID_SQUARE_SIZE)
}

fn row_offset(zone_number: u8) -> usize {
    if zone_number % 2 == 0 { 5 } else { 0 }
}

/// Row letter for a UTM northing (including any false northing).
pub fn row_letter(zone_number: u8, northing: f64) -> Option<char> {
    if northing < 0.0 {
        return None;
    }
    let index = (northing / GRID_SQUARE_SIZE).floor() as usize;
    ROW_LETTERS
        .chars()
        .nth((index % 20 + row_offset(zone_number)) % 20)
}

/// Northing of the south edge of a row, picking the first repetition of the
/// row cycle at or above the latitude band's minimum northing.
pub fn row_northing(zone_number: u8, zone_letter: char, row: char) -> Option<f64> {
    let row = row.to_ascii_uppercase();
    let position = ROW_LETTERS.chars().position(|c| c == row)?;
    let index = (position + 20 - row_offset(zone_number)) % 20;

    let band = grid_zone_limit(zone_letter)?;
    let band_floor = (band.northing_min / GRID_SQUARE_SIZE).floor() * GRID_SQUARE_SIZE;

    let mut northing = index as f64 * GRID_SQUARE_SIZE;
    while northing < band_floor {
        northing += ROW_CYCLE;
    }
    Some(northing)
}
