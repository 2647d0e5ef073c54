//! MGRS and UTM grid references: lexing, validation and conversion.

mod constants;
mod lexer;
mod mgrs;
mod projection;
mod square;
mod utm;
mod validate;

pub use constants::{
    BAND_LETTERS, COLUMN_SETS, GRID_SQUARE_SIZE, GRID_ZONE_LIMITS, GridZoneLimit, MAX_EASTING,
    MAX_MGRS_PRECISION, MAX_UTM_LATITUDE, MAX_ZONE_NUMBER, MGRS_ALPHABET, MIN_EASTING,
    MIN_UTM_LATITUDE, MIN_ZONE_NUMBER, ROW_CYCLE, ROW_LETTERS, UTM_NORTH_EPSG, UTM_SOUTH_EPSG,
    grid_zone_limit,
};
pub use lexer::{LexerTokens, lex_mgrs, lex_utm};
pub use mgrs::{Mgrs, to_utm_from_mgrs};
pub use projection::{
    band_letter_for, central_meridian, from_utm, to_utm, utm_crs, zone_number_for,
};
pub use square::{
    allowed_columns, column_easting, column_letter, column_set, row_letter, row_northing,
};
pub use utm::{Hemisphere, Utm, UtmPrecision, to_mgrs_from_utm};
pub use validate::{
    MGRS_VALIDATORS, UTM_VALIDATORS, Validator, ZONE_VALIDATORS, invalid_square_column,
    invalid_square_row, missing_square_column, missing_square_row, northing_outside_band,
    validate_all, validate_mgrs, validate_precision_mgrs, validate_precision_utm, validate_utm,
    validate_zone_letter, validate_zone_number,
};
