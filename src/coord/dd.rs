use serde::{Deserialize, Serialize};

/// Decimal places kept by [`parse_dd`].
const DD_DIGITS: u32 = 6;

/// Captured pieces of one decimal-degree value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DdGroup {
    /// Compass letter before or after the number, uppercased.
    pub direction: Option<char>,
    /// Explicit `+` or `-`.
    pub sign: Option<char>,
    pub integer: String,
    pub fraction: String,
}

/// Result of [`match_dd`]: the first and second values in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DdMatch {
    pub first: DdGroup,
    pub second: DdGroup,
}

struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn digits(&mut self) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            out.push(c);
            self.pos += 1;
        }
        out
    }

    fn compass(&mut self) -> Option<char> {
        let c = self.peek()?.to_ascii_uppercase();
        if matches!(c, 'N' | 'S' | 'E' | 'W') {
            self.pos += 1;
            Some(c)
        } else {
            None
        }
    }

    fn group(&mut self) -> Option<DdGroup> {
        self.skip_ws();
        let before = self.compass();
        self.skip_ws();

        let sign = match self.peek() {
            Some(c @ ('+' | '-')) => {
                self.pos += 1;
                Some(c)
            }
            _ => None,
        };

        let integer = self.digits();
        if integer.is_empty() {
            return None;
        }

        let fraction = if self.peek() == Some('.') {
            self.bump();
            self.digits()
        } else {
            String::new()
        };

        if self.peek() == Some('°') {
            self.bump();
        }

        let direction = match before {
            Some(d) => Some(d),
            None => {
                self.skip_ws();
                self.compass()
            }
        };

        Some(DdGroup {
            direction,
            sign,
            integer,
            fraction,
        })
    }
}

/// Matches a pair of decimal-degree values, each optionally signed and
/// optionally carrying a compass letter before or after it.
///
/// Returns `None` unless the whole input is consumed.
pub fn match_dd(val: &str) -> Option<DdMatch> {
    let mut cursor = Cursor::new(val.trim());

    let first = cursor.group()?;
    cursor.skip_ws();
    if cursor.peek() == Some(',') {
        cursor.bump();
    }
    let second = cursor.group()?;
    cursor.skip_ws();

    if cursor.peek().is_some() {
        return None;
    }

    Some(DdMatch { first, second })
}

/// `true` unless the direction is `S`/`W` or an explicit `-` sign was given.
pub fn is_positive_direction(direction: Option<char>, sign: Option<char>) -> bool {
    let negative_direction = matches!(
        direction.map(|d| d.to_ascii_uppercase()),
        Some('S') | Some('W')
    );
    !(negative_direction || sign == Some('-'))
}

/// Rounds `value` to `digits` decimal places.
pub fn to_digits(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

fn group_value(group: &DdGroup) -> f64 {
    let literal = if group.fraction.is_empty() {
        group.integer.clone()
    } else {
        format!("{}.{}", group.integer, group.fraction)
    };
    let magnitude: f64 = literal.parse().unwrap_or(f64::NAN);
    let value = if is_positive_direction(group.direction, group.sign) {
        magnitude
    } else {
        -magnitude
    };
    to_digits(value, DD_DIGITS)
}

/// Quick decimal-degree parser returning `(latitude, longitude)`.
///
/// Values are taken positionally (latitude first) and rounded to six decimal
/// places. Malformed input gives `(NaN, NaN)` instead of an error; use
/// [`parse_lat_lon`](super::parse_lat_lon) for structured errors.
///
/// # Example
/// ```
/// use geocoord_rs::parse_dd;
///
/// let (lat, lon) = parse_dd("40.4461111 N, 79.9822222 W");
/// assert_eq!(lat, 40.446111);
/// assert_eq!(lon, -79.982222);
///
/// let (lat, _) = parse_dd("not a coordinate");
/// assert!(lat.is_nan());
/// ```
pub fn parse_dd(val: &str) -> (f64, f64) {
    match match_dd(val) {
        Some(m) => (group_value(&m.first), group_value(&m.second)),
        None => (f64::NAN, f64::NAN),
    }
}
