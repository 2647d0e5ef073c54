/// Latitude band letters, south to north (I and O are never used).
pub const BAND_LETTERS: &str = "CDEFGHJKLMNPQRSTUVWX";

/// Grid square column letters for each set of the six-zone cycle.
pub const COLUMN_SETS: [&str; 3] = ["ABCDEFGH", "JKLMNPQR", "STUVWXYZ"];

/// Grid square row letters; even zones start five letters in.
pub const ROW_LETTERS: &str = "ABCDEFGHJKLMNPQRSTUV";

/// Letters used anywhere in an MGRS grid square identifier.
pub const MGRS_ALPHABET: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Size of one grid square in meters.
pub const GRID_SQUARE_SIZE: f64 = 100_000.0;

/// Northing distance after which the row letters repeat.
pub const ROW_CYCLE: f64 = 2_000_000.0;

/// Valid UTM easting range in meters.
pub const MIN_EASTING: f64 = 100_000.0;
pub const MAX_EASTING: f64 = 900_000.0;

pub const MIN_ZONE_NUMBER: u8 = 1;
pub const MAX_ZONE_NUMBER: u8 = 60;

/// Digits of an MGRS easting/northing at 1 m resolution.
pub const MAX_MGRS_PRECISION: u8 = 5;

/// EPSG code prefixes of the WGS84 / UTM zone CRSs (`326zz` north, `327zz` south).
pub const UTM_NORTH_EPSG: u32 = 32600;
pub const UTM_SOUTH_EPSG: u32 = 32700;

/// UTM latitude limits.
pub const MIN_UTM_LATITUDE: f64 = -80.0;
pub const MAX_UTM_LATITUDE: f64 = 84.0;

/// Latitude and UTM northing limits of one latitude band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridZoneLimit {
    pub letter: char,
    pub latitude_min: f64,
    pub latitude_max: f64,
    pub northing_min: f64,
    pub northing_max: f64,
}

const fn limit(
    letter: char,
    latitude_min: f64,
    latitude_max: f64,
    northing_min: f64,
    northing_max: f64,
) -> GridZoneLimit {
    GridZoneLimit {
        letter,
        latitude_min,
        latitude_max,
        northing_min,
        northing_max,
    }
}

/// Northing range of every latitude band, rounded outward to the kilometre.
///
/// Each minimum is the smaller northing found along the band's southern
/// parallel and each maximum the larger northing along its northern parallel,
/// taken across the zone width (6° out for the widened V and X zones). North
/// of the equator the minimum sits on the central meridian; south of it, at
/// the zone edge. Southern bands include the 10,000 km false northing.
pub static GRID_ZONE_LIMITS: [GridZoneLimit; 20] = [
    limit('C', -80.0, -72.0, 1_116_000.0, 2_012_000.0),
    limit('D', -72.0, -64.0, 2_008_000.0, 2_903_000.0),
    limit('E', -64.0, -56.0, 2_899_000.0, 3_794_000.0),
    limit('F', -56.0, -48.0, 3_789_000.0, 4_684_000.0),
    limit('G', -48.0, -40.0, 4_679_000.0, 5_573_000.0),
    limit('H', -40.0, -32.0, 5_567_000.0, 6_460_000.0),
    limit('J', -32.0, -24.0, 6_455_000.0, 7_346_000.0),
    limit('K', -24.0, -16.0, 7_342_000.0, 8_232_000.0),
    limit('L', -16.0, -8.0, 8_228_000.0, 9_116_000.0),
    limit('M', -8.0, 0.0, 9_114_000.0, 10_000_000.0),
    limit('N', 0.0, 8.0, 0.0, 886_000.0),
    limit('P', 8.0, 16.0, 884_000.0, 1_772_000.0),
    limit('Q', 16.0, 24.0, 1_768_000.0, 2_658_000.0),
    limit('R', 24.0, 32.0, 2_654_000.0, 3_545_000.0),
    limit('S', 32.0, 40.0, 3_540_000.0, 4_433_000.0),
    limit('T', 40.0, 48.0, 4_427_000.0, 5_321_000.0),
    limit('U', 48.0, 56.0, 5_316_000.0, 6_211_000.0),
    limit('V', 56.0, 64.0, 6_206_000.0, 7_111_000.0),
    limit('W', 64.0, 72.0, 7_097_000.0, 7_992_000.0),
    limit('X', 72.0, 84.0, 7_988_000.0, 9_332_000.0),
];

/// Looks up the limits of a latitude band letter (case-insensitive).
pub fn grid_zone_limit(letter: char) -> Option<&'static GridZoneLimit> {
    let letter = letter.to_ascii_uppercase();
    GRID_ZONE_LIMITS.iter().find(|l| l.letter == letter)
}
