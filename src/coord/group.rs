use crate::coord::lexer::SEPARATOR;
use crate::coord::Compass;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One half of a lat/lon pair as written, before any validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCoordinate {
    pub compass: Option<Compass>,
    pub degrees: Option<f64>,
    pub minutes: Option<f64>,
    pub seconds: Option<f64>,
}

/// Partitions a token stream into two raw coordinates at the first separator.
///
/// Marked tokens (`40°`, `26'`, `46"`) go to their slot directly. Unmarked
/// numbers fill degrees, then minutes, then seconds; any beyond that are
/// dropped.
pub fn group_tokens(tokens: &[String]) -> [RawCoordinate; 2] {
    let split = tokens
        .iter()
        .position(|t| t == SEPARATOR)
        .unwrap_or(tokens.len());
    let (first, rest) = tokens.split_at(split);
    let second = rest.get(1..).unwrap_or(&[]);

    [group_half(first), group_half(second)]
}

fn group_half(tokens: &[String]) -> RawCoordinate {
    let mut raw = RawCoordinate::default();

    for token in tokens {
        if let Some(value) = token.strip_suffix('°') {
            raw.degrees = Some(parse_number(value));
        } else if let Some(value) = token.strip_suffix('\'') {
            raw.minutes = Some(parse_number(value));
        } else if let Some(value) = token.strip_suffix('"') {
            raw.seconds = Some(parse_number(value));
        } else if let Some(compass) = single_compass(token) {
            raw.compass = Some(compass);
        } else {
            let value = parse_number(token);
            if raw.degrees.is_none() {
                raw.degrees = Some(value);
            } else if raw.minutes.is_none() {
                raw.minutes = Some(value);
            } else if raw.seconds.is_none() {
                raw.seconds = Some(value);
            } else {
                warn!(token = %token, "dropping numeric token beyond degrees/minutes/seconds");
            }
        }
    }

    raw
}

fn single_compass(token: &str) -> Option<Compass> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Compass::from_char(c),
        _ => None,
    }
}

// Unparseable numbers become NaN and are rejected by the refiner.
fn parse_number(s: &str) -> f64 {
    s.parse().unwrap_or(f64::NAN)
}
