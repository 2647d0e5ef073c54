use crate::error::CoordError;
use serde::{Deserialize, Serialize};

/// Raw pieces of an MGRS or UTM string.
///
/// Easting and northing stay as the characters the user typed so their
/// precision (digit count) can be validated before they are parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexerTokens {
    pub easting: String,
    pub northing: String,
    pub zone_letter: char,
    pub zone_number: u8,
    pub grid_col: Option<char>,
    pub grid_row: Option<char>,
}

/// Splits a `"<zone><band>"` prefix, returning the zone number, band letter
/// and whatever follows the letter.
fn lex_zone(input: &str) -> Result<(u8, char, &str), CoordError> {
    let digits_end = input
        .char_indices()
        .take(2)
        .take_while(|(_, c)| c.is_ascii_digit())
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);
    let digits = &input[..digits_end];

    if digits.is_empty() {
        return Err(CoordError::invalid("No zone number found"));
    }
    let zone_number: u8 = digits
        .parse()
        .map_err(|_| CoordError::invalid(format!("Invalid zone number: {}", digits)))?;

    let rest = &input[digits_end..];
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() => Ok((zone_number, c.to_ascii_uppercase(), chars.as_str())),
        _ => Err(CoordError::invalid("No zone letter found")),
    }
}

/// Tokenizes an MGRS string such as `"31U DQ 48252 11932"` or `"31UDQ4825211932"`.
///
/// Whitespace is ignored. The digits after the grid square letters are split
/// in half into easting and northing; validation of their content happens in
/// [`validate_mgrs`](super::validate_mgrs).
pub fn lex_mgrs(input: &str) -> Result<LexerTokens, CoordError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let (zone_number, zone_letter, rest) = lex_zone(&compact)?;

    let mut chars = rest.chars().peekable();
    let grid_col = chars
        .next_if(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase());
    let grid_row = match grid_col {
        Some(_) => chars
            .next_if(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase()),
        None => None,
    };

    let digits: Vec<char> = chars.collect();
    let half = digits.len().div_ceil(2);
    let easting: String = digits[..half].iter().collect();
    let northing: String = digits[half..].iter().collect();

    Ok(LexerTokens {
        easting,
        northing,
        zone_letter,
        zone_number,
        grid_col,
        grid_row,
    })
}

/// Tokenizes a UTM string such as `"31U 448252 5411932"` or `"31 U 448252 5411932"`.
pub fn lex_utm(input: &str) -> Result<LexerTokens, CoordError> {
    let joined: String;
    let mut parts: Vec<&str> = input.split_whitespace().collect();

    // "31 U ..." -> "31U ..."
    if parts.len() > 1 && parts[0].chars().all(|c| c.is_ascii_digit()) && parts[1].len() == 1 {
        joined = format!("{}{}", parts[0], parts[1]);
        parts.drain(0..2);
        parts.insert(0, joined.as_str());
    }

    let Some((zone, values)) = parts.split_first() else {
        return Err(CoordError::invalid("No zone number found"));
    };
    let (zone_number, zone_letter, trailing) = lex_zone(zone)?;
    if !trailing.is_empty() {
        return Err(CoordError::invalid(format!("Invalid zone letter: {}", zone)));
    }

    match values {
        [] => Err(CoordError::invalid("No easting found")),
        [_] => Err(CoordError::invalid("No northing found")),
        [easting, northing] => Ok(LexerTokens {
            easting: easting.to_string(),
            northing: northing.to_string(),
            zone_letter,
            zone_number,
            grid_col: None,
            grid_row: None,
        }),
        _ => Err(CoordError::invalid("Unexpected values after northing")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_mgrs_spaced() -> Result<(), CoordError> {
        let tokens = lex_mgrs("31U DQ 48252 11932")?;
        assert_eq!(tokens.zone_number, 31);
        assert_eq!(tokens.zone_letter, 'U');
        assert_eq!(tokens.grid_col, Some('D'));
        assert_eq!(tokens.grid_row, Some('Q'));
        assert_eq!(tokens.easting, "48252");
        assert_eq!(tokens.northing, "11932");
        Ok(())
    }

    #[test]
    fn test_lex_mgrs_compact_lowercase() -> Result<(), CoordError> {
        let tokens = lex_mgrs("4qfj12345678")?;
        assert_eq!(tokens.zone_number, 4);
        assert_eq!(tokens.zone_letter, 'Q');
        assert_eq!(tokens.grid_col, Some('F'));
        assert_eq!(tokens.grid_row, Some('J'));
        assert_eq!(tokens.easting, "1234");
        assert_eq!(tokens.northing, "5678");
        Ok(())
    }

    #[test]
    fn test_lex_mgrs_odd_digits_kept_for_validation() -> Result<(), CoordError> {
        let tokens = lex_mgrs("31UDQ123")?;
        assert_eq!(tokens.easting, "12");
        assert_eq!(tokens.northing, "3");
        Ok(())
    }

    #[test]
    fn test_lex_mgrs_missing_square() -> Result<(), CoordError> {
        let tokens = lex_mgrs("31U 4825211932")?;
        assert_eq!(tokens.grid_col, None);
        assert_eq!(tokens.grid_row, None);

        let tokens = lex_mgrs("31UD 4825211932")?;
        assert_eq!(tokens.grid_col, Some('D'));
        assert_eq!(tokens.grid_row, None);
        Ok(())
    }

    #[test]
    fn test_lex_no_zone_number() {
        let result = lex_mgrs("UDQ4825211932");
        assert_eq!(result, Err(CoordError::invalid("No zone number found")));
    }

    #[test]
    fn test_lex_no_zone_letter() {
        let result = lex_mgrs("31 4825211932");
        assert_eq!(result, Err(CoordError::invalid("No zone letter found")));
    }

    #[test]
    fn test_lex_utm() -> Result<(), CoordError> {
        let tokens = lex_utm("31U 448252 5411932")?;
        assert_eq!(tokens.zone_number, 31);
        assert_eq!(tokens.zone_letter, 'U');
        assert_eq!(tokens.easting, "448252");
        assert_eq!(tokens.northing, "5411932");
        assert_eq!(tokens.grid_col, None);

        let split = lex_utm("31 u 448252 5411932")?;
        assert_eq!(split, tokens);
        Ok(())
    }

    #[test]
    fn test_lex_utm_missing_parts() {
        assert_eq!(lex_utm(""), Err(CoordError::invalid("No zone number found")));
        assert_eq!(lex_utm("31U"), Err(CoordError::invalid("No easting found")));
        assert_eq!(lex_utm("31U 448252"), Err(CoordError::invalid("No northing found")));
        assert!(lex_utm("31U 448252 5411932 12").is_err());
    }
}
