use crate::error::CoordError;
use crate::grid::constants::{
    BAND_LETTERS, GRID_SQUARE_SIZE, MAX_EASTING, MAX_MGRS_PRECISION, MAX_ZONE_NUMBER,
    MGRS_ALPHABET, MIN_EASTING, MIN_ZONE_NUMBER, ROW_LETTERS, grid_zone_limit,
};
use crate::grid::lexer::LexerTokens;
use crate::grid::square::{allowed_columns, column_set, row_northing};

/// A single validation rule over lexed MGRS/UTM tokens.
pub type Validator = fn(&LexerTokens) -> Result<(), CoordError>;

/// Zone checks that every other rule relies on.
pub const ZONE_VALIDATORS: &[Validator] = &[validate_zone_number, validate_zone_letter];

pub const MGRS_VALIDATORS: &[Validator] = &[
    missing_square_column,
    invalid_square_column,
    missing_square_row,
    invalid_square_row,
    northing_outside_band,
    validate_precision_mgrs,
];

pub const UTM_VALIDATORS: &[Validator] = &[validate_precision_utm];

/// Runs every validator and merges all failures into one error.
pub fn validate_all(tokens: &LexerTokens, validators: &[Validator]) -> Result<(), CoordError> {
    let messages: Vec<String> = validators
        .iter()
        .filter_map(|validate| validate(tokens).err())
        .flat_map(|e| e.messages())
        .collect();

    if messages.is_empty() {
        Ok(())
    } else {
        Err(CoordError::Validation(messages))
    }
}

/// Validates tokens lexed from an MGRS string.
///
/// Zone checks run first; the remaining rules only run once the zone is known
/// to be valid.
pub fn validate_mgrs(tokens: &LexerTokens) -> Result<(), CoordError> {
    validate_all(tokens, ZONE_VALIDATORS)?;
    validate_all(tokens, MGRS_VALIDATORS)
}

/// Validates tokens lexed from a UTM string.
pub fn validate_utm(tokens: &LexerTokens) -> Result<(), CoordError> {
    validate_all(tokens, ZONE_VALIDATORS)?;
    validate_all(tokens, UTM_VALIDATORS)
}

pub fn validate_zone_number(tokens: &LexerTokens) -> Result<(), CoordError> {
    match tokens.zone_number {
        0 => Err(CoordError::invalid("No zone number found")),
        n if (MIN_ZONE_NUMBER..=MAX_ZONE_NUMBER).contains(&n) => Ok(()),
        n => Err(CoordError::invalid(format!(
            "Invalid zone number: {} (must be between {} and {})",
            n, MIN_ZONE_NUMBER, MAX_ZONE_NUMBER
        ))),
    }
}

pub fn validate_zone_letter(tokens: &LexerTokens) -> Result<(), CoordError> {
    let letter = tokens.zone_letter.to_ascii_uppercase();
    if BAND_LETTERS.contains(letter) {
        Ok(())
    } else {
        Err(CoordError::invalid(format!(
            "Invalid zone letter: {}",
            tokens.zone_letter
        )))
    }
}

/// Easting and northing digits together must be numeric, even in count and at
/// most ten long (five each, 1 m resolution).
pub fn validate_precision_mgrs(tokens: &LexerTokens) -> Result<(), CoordError> {
    let digits = format!("{}{}", tokens.easting, tokens.northing);

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoordError::invalid(format!(
            "Invalid (non-numeric) characters in easting/northing: {}",
            digits
        )));
    }
    if digits.len() % 2 != 0 {
        return Err(CoordError::invalid(format!(
            "Invalid precision - must be even number of digits: {}",
            digits
        )));
    }
    if digits.len() > 10 {
        return Err(CoordError::invalid(format!(
            "Invalid precision - greater than 10 digits: {}",
            digits
        )));
    }
    Ok(())
}

/// UTM easting (≤ 6 digits) and northing (≤ 7 digits) must be numeric, the
/// easting within 100,000–900,000 m and the northing inside the band's range.
///
/// # Panics
///
/// If the zone letter has no entry in
/// [`GRID_ZONE_LIMITS`](crate::grid::GRID_ZONE_LIMITS). Callers must run
/// [`validate_zone_letter`] first, as [`validate_utm`] does.
pub fn validate_precision_utm(tokens: &LexerTokens) -> Result<(), CoordError> {
    let mut errors = Vec::new();

    if tokens.easting.len() > 6 {
        errors.push("Invalid easting precision - greater than 6 digits".to_string());
    }
    if tokens.northing.len() > 7 {
        errors.push("Invalid northing precision - greater than 7 digits".to_string());
    }
    if tokens.easting.is_empty() || !tokens.easting.chars().all(|c| c.is_ascii_digit()) {
        errors.push(format!(
            "Invalid (non-numeric) characters in easting: {}",
            tokens.easting
        ));
    }
    if tokens.northing.is_empty() || !tokens.northing.chars().all(|c| c.is_ascii_digit()) {
        errors.push(format!(
            "Invalid (non-numeric) characters in northing: {}",
            tokens.northing
        ));
    }
    if !errors.is_empty() {
        return Err(CoordError::Validation(errors));
    }

    let easting: f64 = tokens
        .easting
        .parse()
        .map_err(|_| CoordError::invalid(format!("Invalid easting: {}", tokens.easting)))?;
    let northing: f64 = tokens
        .northing
        .parse()
        .map_err(|_| CoordError::invalid(format!("Invalid northing: {}", tokens.northing)))?;

    if !(MIN_EASTING..=MAX_EASTING).contains(&easting) {
        errors.push(format!(
            "Easting out of range: {} (must be between {} and {})",
            easting, MIN_EASTING, MAX_EASTING
        ));
    }

    let Some(band) = grid_zone_limit(tokens.zone_letter) else {
        panic!(
            "\n\
             ================================================================\n\
             INTERNAL ERROR: zone letter '{}' has no entry in GRID_ZONE_LIMITS\n\
             \n\
             validate_zone_letter must reject unknown letters before\n\
             validate_precision_utm runs. Reaching this point means the\n\
             validators were composed in the wrong order.\n\
             ================================================================",
            tokens.zone_letter
        );
    };

    if !(band.northing_min..=band.northing_max).contains(&northing) {
        errors.push(format!(
            "Northing out of range for zone letter {}: {} (must be between {} and {})",
            band.letter, northing, band.northing_min, band.northing_max
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoordError::Validation(errors))
    }
}

pub fn missing_square_column(tokens: &LexerTokens) -> Result<(), CoordError> {
    match tokens.grid_col {
        Some(_) => Ok(()),
        None => Err(CoordError::invalid("Missing grid square column letter")),
    }
}

pub fn missing_square_row(tokens: &LexerTokens) -> Result<(), CoordError> {
    match tokens.grid_row {
        Some(_) => Ok(()),
        None => Err(CoordError::invalid("Missing grid square row letter")),
    }
}

/// Column letter must be in the MGRS alphabet and in the zone's column set,
/// including the Norway (32V) and Svalbard (31X–37X) exceptions.
pub fn invalid_square_column(tokens: &LexerTokens) -> Result<(), CoordError> {
    let Some(col) = tokens.grid_col else {
        return Ok(());
    };
    let col = col.to_ascii_uppercase();
    let zone = tokens.zone_number;
    let band = tokens.zone_letter.to_ascii_uppercase();

    if !MGRS_ALPHABET.contains(col) {
        return Err(CoordError::invalid(format!(
            "Invalid grid square column letter: {}",
            col
        )));
    }

    match allowed_columns(zone, band) {
        None => Err(CoordError::invalid(format!(
            "Zone {}{} does not exist",
            zone, band
        ))),
        Some(allowed) if allowed.contains(col) => Ok(()),
        Some(allowed) if allowed == column_set(zone) => Err(CoordError::invalid(format!(
            "Invalid grid square column {} for zone {}",
            col, zone
        ))),
        Some(_) => Err(CoordError::invalid(format!(
            "Invalid grid square column {} for zone {}{}",
            col, zone, band
        ))),
    }
}

/// Row letter must be in the row alphabet (A–V, no I/O) and its 100 km square
/// must fall inside the latitude band.
pub fn invalid_square_row(tokens: &LexerTokens) -> Result<(), CoordError> {
    let Some(row) = tokens.grid_row else {
        return Ok(());
    };
    let row = row.to_ascii_uppercase();

    if !ROW_LETTERS.contains(row) {
        return Err(CoordError::invalid(format!(
            "Invalid grid square row letter: {}",
            row
        )));
    }

    let (Some(band), Some(northing)) = (
        grid_zone_limit(tokens.zone_letter),
        row_northing(tokens.zone_number, tokens.zone_letter, row),
    ) else {
        return Ok(());
    };

    if northing > band.northing_max || northing + GRID_SQUARE_SIZE <= band.northing_min {
        return Err(CoordError::invalid(format!(
            "Grid square row {} is outside latitude band {}",
            row, band.letter
        )));
    }
    Ok(())
}

/// The square the northing digits name, `[northing, northing + scale)` with
/// `scale` the size of one digit step, must overlap the latitude band.
///
/// At five digits this is the band range check a UTM northing gets. Inputs
/// that other rules reject (bad digits, unknown row, row outside the band)
/// pass here so each problem is reported once.
pub fn northing_outside_band(tokens: &LexerTokens) -> Result<(), CoordError> {
    let digits = tokens.northing.as_str();
    let precision = digits.len();
    if precision == 0
        || precision > MAX_MGRS_PRECISION as usize
        || precision != tokens.easting.len()
        || !digits.chars().all(|c| c.is_ascii_digit())
    {
        return Ok(());
    }

    let Some(row) = tokens.grid_row else {
        return Ok(());
    };
    let (Some(band), Some(row_start)) = (
        grid_zone_limit(tokens.zone_letter),
        row_northing(tokens.zone_number, tokens.zone_letter, row),
    ) else {
        return Ok(());
    };
    if row_start > band.northing_max || row_start + GRID_SQUARE_SIZE <= band.northing_min {
        return Ok(());
    }

    let Ok(value) = digits.parse::<u32>() else {
        return Ok(());
    };
    let scale = 10f64.powi((MAX_MGRS_PRECISION as usize - precision) as i32);
    let northing = row_start + value as f64 * scale;

    if northing > band.northing_max || northing + scale <= band.northing_min {
        return Err(CoordError::invalid(format!(
            "Northing out of range for zone letter {}: {} (must be between {} and {})",
            band.letter, northing, band.northing_min, band.northing_max
        )));
    }
    Ok(())
}
