//! Hex color strings to and from RGBA tuples (0–255 per channel).

use crate::error::CoordError;

/// Decodes `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
/// Alpha defaults to 255 when absent.
///
/// # Example
/// ```
/// use geocoord_rs::hex_to_rgba255_tuple;
///
/// # fn main() -> Result<(), geocoord_rs::CoordError> {
/// assert_eq!(hex_to_rgba255_tuple("#ff8000")?, [255, 128, 0, 255]);
/// assert_eq!(hex_to_rgba255_tuple("f80c")?, [255, 136, 0, 204]);
/// # Ok(())
/// # }
/// ```
pub fn hex_to_rgba255_tuple(hex: &str) -> Result<[u8; 4], CoordError> {
    let digits = hex.trim().trim_start_matches('#');

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CoordError::InvalidColor(format!(
            "non-hex characters in '{}'",
            hex
        )));
    }

    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        n => {
            return Err(CoordError::InvalidColor(format!(
                "expected 3, 4, 6 or 8 hex digits, got {} in '{}'",
                n, hex
            )));
        }
    };

    let mut rgba = [255u8; 4];
    for (i, channel) in rgba.iter_mut().enumerate().take(expanded.len() / 2) {
        *channel = u8::from_str_radix(&expanded[i * 2..i * 2 + 2], 16)
            .map_err(|e| CoordError::InvalidColor(e.to_string()))?;
    }
    Ok(rgba)
}

/// Encodes an RGBA tuple as lowercase `#rrggbb`, or `#rrggbbaa` with `include_alpha`.
pub fn rgba255_tuple_to_hex(rgba: [u8; 4], include_alpha: bool) -> String {
    let [r, g, b, a] = rgba;
    if include_alpha {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    } else {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_lengths() -> Result<(), CoordError> {
        assert_eq!(hex_to_rgba255_tuple("#fff")?, [255, 255, 255, 255]);
        assert_eq!(hex_to_rgba255_tuple("0008")?, [0, 0, 0, 136]);
        assert_eq!(hex_to_rgba255_tuple("1a2B3c")?, [26, 43, 60, 255]);
        assert_eq!(hex_to_rgba255_tuple("#1a2b3c80")?, [26, 43, 60, 128]);
        Ok(())
    }

    #[test]
    fn test_invalid_hex() {
        assert!(matches!(
            hex_to_rgba255_tuple("#12345"),
            Err(CoordError::InvalidColor(_))
        ));
        assert!(matches!(
            hex_to_rgba255_tuple("#gg0000"),
            Err(CoordError::InvalidColor(_))
        ));
        assert!(hex_to_rgba255_tuple("").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(rgba255_tuple_to_hex([255, 128, 0, 64], false), "#ff8000");
        assert_eq!(rgba255_tuple_to_hex([255, 128, 0, 64], true), "#ff800040");
    }

    #[test]
    fn test_round_trip() -> Result<(), CoordError> {
        for rgba in [[0, 0, 0, 0], [255, 255, 255, 255], [1, 2, 3, 4], [200, 17, 99, 254]] {
            assert_eq!(hex_to_rgba255_tuple(&rgba255_tuple_to_hex(rgba, true))?, rgba);
        }
        Ok(())
    }
}
