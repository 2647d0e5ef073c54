use crate::coord::Compass;
use crate::error::CoordError;
use tracing::debug;

/// Token dividing the latitude half from the longitude half.
pub const SEPARATOR: &str = ",";

const DEGREE: char = '°';
const MINUTE: char = '\'';
const SECOND: char = '"';

/// Splits free-text lat/lon input into tokens for [`group_tokens`](super::group_tokens).
///
/// Numbers keep any trailing `°`, `'` or `"` marker, compass letters are
/// uppercased, and exactly one [`SEPARATOR`] token is present in the output.
/// When the input has no `,`, `;` or `/` the separator position is inferred
/// from compass letters, degree markers or an even split of the numbers.
///
/// # Example
/// ```
/// use geocoord_rs::lex_lat_lon;
///
/// # fn main() -> Result<(), geocoord_rs::CoordError> {
/// let tokens = lex_lat_lon("40° 26' 46\" N 79° 58' 56\" W")?;
/// assert_eq!(tokens, vec!["40°", "26'", "46\"", "N", ",", "79°", "58'", "56\"", "W"]);
/// # Ok(())
/// # }
/// ```
pub fn lex_lat_lon(input: &str) -> Result<Vec<String>, CoordError> {
    let normalized = normalize(input);
    let mut tokens: Vec<String> = Vec::new();
    let mut chars = normalized.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() || c == ':' => {}
            ',' | ';' | '/' => tokens.push(SEPARATOR.to_string()),
            '0'..='9' | '.' | '-' | '+' => {
                let mut number = String::new();
                if c != '+' {
                    number.push(c);
                }
                while let Some(&next) = chars.peek() {
                    if next.is_ascii_digit() || next == '.' {
                        number.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(number);
            }
            DEGREE | MINUTE | SECOND => match tokens.last_mut() {
                Some(last) if is_bare_number(last) => last.push(c),
                _ => {
                    return Err(CoordError::Parse(format!("Unexpected symbol '{}'", c)));
                }
            },
            c if Compass::from_char(c).is_some() => {
                tokens.push(c.to_ascii_uppercase().to_string());
            }
            other => {
                return Err(CoordError::Parse(format!("Invalid character '{}'", other)));
            }
        }
    }

    if tokens.is_empty() {
        return Err(CoordError::Parse("No coordinate values found".to_string()));
    }

    match tokens.iter().filter(|t| *t == SEPARATOR).count() {
        0 => {
            let idx = infer_split(&tokens).ok_or_else(|| {
                CoordError::Parse(
                    "Unable to determine where latitude ends and longitude begins".to_string(),
                )
            })?;
            debug!(index = idx, "inferred lat/lon separator");
            tokens.insert(idx, SEPARATOR.to_string());
            Ok(tokens)
        }
        1 => Ok(tokens),
        _ => Err(CoordError::Parse("Too many separators".to_string())),
    }
}

fn normalize(input: &str) -> String {
    let mapped: String = input
        .trim()
        .chars()
        .map(|c| match c {
            '′' | '’' | '‘' | '´' => MINUTE,
            '″' | '”' | '“' => SECOND,
            'º' | '˚' => DEGREE,
            other => other,
        })
        .collect();
    mapped.replace("''", "\"")
}

fn is_bare_number(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-')
}

fn is_compass(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if Compass::from_char(c).is_some())
}

/// Index at which the separator should be inserted, if one can be inferred.
fn infer_split(tokens: &[String]) -> Option<usize> {
    let compass: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| is_compass(t))
        .map(|(i, _)| i)
        .collect();
    let last = tokens.len() - 1;

    match compass.as_slice() {
        // prefix style "N 40 W 79" splits before the second letter,
        // suffix style "40 N 79 W" after the first
        [first, second] => {
            if *first == 0 {
                Some(*second)
            } else {
                Some(first + 1)
            }
        }
        [only] if *only != 0 && *only != last => Some(only + 1),
        [] | [_] => {
            let degrees: Vec<usize> = tokens
                .iter()
                .enumerate()
                .filter(|(_, t)| t.ends_with(DEGREE))
                .map(|(i, _)| i)
                .collect();
            if degrees.len() == 2 {
                return Some(degrees[1]);
            }

            let numbers: Vec<usize> = tokens
                .iter()
                .enumerate()
                .filter(|(_, t)| !is_compass(t))
                .map(|(i, _)| i)
                .collect();
            if numbers.is_empty() || numbers.len() % 2 != 0 {
                return None;
            }
            Some(numbers[numbers.len() / 2])
        }
        _ => None,
    }
}
