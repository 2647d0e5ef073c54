//! # geocoord-rs
//!
//! Parses human-entered coordinate text and converts between notations.
//! There are currently four main entry points.
//!
//! ### 1. `parse_lat_lon` - Latitude/Longitude Text
//!
//! Accepts decimal degrees, degrees decimal minutes and degrees minutes
//! seconds, with or without compass letters:
//!
//! ```
//! use geocoord_rs::{AxisOrder, parse_lat_lon};
//!
//! # fn main() -> Result<(), geocoord_rs::CoordError> {
//! let point = parse_lat_lon("40° 26' 46\" N 79° 58' 56\" W", None)?;
//! assert!((point.y() - 40.446111).abs() < 0.000001);
//! assert!((point.x() + 79.982222).abs() < 0.000001);
//!
//! let point = parse_lat_lon("-79.982222, 40.446111", Some(AxisOrder::LonLat))?;
//! assert!((point.y() - 40.446111).abs() < 0.000001);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `Mgrs` / `Utm` - Grid References
//!
//! ```
//! use geocoord_rs::{Mgrs, to_mgrs_from_utm, to_utm_from_mgrs};
//!
//! # fn main() -> Result<(), geocoord_rs::CoordError> {
//! let mgrs: Mgrs = "31U DQ 48252 11932".parse()?;
//! let utm = to_utm_from_mgrs(&mgrs, None)?;
//! assert_eq!(utm.to_string(), "31U 448252 5411932");
//! assert_eq!(to_mgrs_from_utm(&utm, mgrs.precision)?, mgrs);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `parse_coordinate` - Any Notation
//!
//! ```
//! use geocoord_rs::{CoordinateFormat, format_lat_lon, parse_coordinate};
//!
//! # fn main() -> Result<(), geocoord_rs::CoordError> {
//! let point = parse_coordinate("56H 334900 6252288", None)?.to_point()?;
//! println!("{}", format_lat_lon(&point, CoordinateFormat::Dms));
//! # Ok(())
//! # }
//! ```
//!
//! ### 4. `CsvToCoords` - CSV File Conversion
//!
//! ```no_run
//! use geocoord_rs::{CsvCoordConfig, CsvToCoords, OutputFormat};
//!
//! # fn main() -> Result<(), geocoord_rs::CoordError> {
//! let config = CsvCoordConfig::new("Location")
//!     .exclude(vec!["Notes".into()])
//!     .output(OutputFormat::Mgrs { precision: 5 });
//!
//! // Using trait method
//! "input.csv".to_coords_csv("output.csv", &config)?;
//! # Ok(())
//! # }
//! ```
//!

pub mod coord;
pub mod detect;
pub mod error;
pub mod grid;
pub mod io;
pub mod util;

pub use coord::{
    Axis, AxisAssignment, AxisOrder, Compass, Coordinate, CoordinateFormat, DdGroup, DdMatch,
    RawCoordinate, RefinedCoordinate, SEPARATOR, assign_axes, format_lat_lon, group_tokens,
    is_positive_direction, lex_lat_lon, match_dd, parse_dd, parse_lat_lon, refine_coordinate,
    to_digits,
};
pub use detect::{CoordinateKind, ParsedCoordinate, parse_coordinate};
pub use error::CoordError;
pub use grid::{
    GRID_ZONE_LIMITS, GridZoneLimit, Hemisphere, LexerTokens, Mgrs, Utm, UtmPrecision, Validator,
    grid_zone_limit, lex_mgrs, lex_utm, to_mgrs_from_utm, to_utm_from_mgrs, validate_mgrs,
    validate_utm,
};
pub use io::{CsvCoordConfig, CsvToCoords, OutputFormat, csv_to_coords_csv};
pub use util::{clamp, hex_to_rgba255_tuple, rgba255_tuple_to_hex};

pub use geo_types;
