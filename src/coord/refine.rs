use crate::coord::group::RawCoordinate;
use crate::coord::{Axis, Compass};
use crate::error::CoordError;
use serde::{Deserialize, Serialize};

/// A signed decimal-degree value, with its axis when a compass letter fixed it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefinedCoordinate {
    pub axis: Option<Axis>,
    pub value: f64,
}

/// Converts a raw degrees/minutes/seconds/compass quad into a signed decimal value.
///
/// Every rule violation is collected, so the returned
/// [`CoordError::Validation`] may carry several messages.
///
/// # Example
/// ```
/// use geocoord_rs::{Axis, Compass, RawCoordinate, refine_coordinate};
///
/// # fn main() -> Result<(), geocoord_rs::CoordError> {
/// let raw = RawCoordinate {
///     compass: Some(Compass::W),
///     degrees: Some(79.0),
///     minutes: Some(30.0),
///     seconds: None,
/// };
/// let refined = refine_coordinate(&raw)?;
/// assert_eq!(refined.axis, Some(Axis::Lon));
/// assert_eq!(refined.value, -79.5);
/// # Ok(())
/// # }
/// ```
pub fn refine_coordinate(raw: &RawCoordinate) -> Result<RefinedCoordinate, CoordError> {
    let Some(degrees) = raw.degrees else {
        return Err(CoordError::invalid("Missing degrees value"));
    };
    let minutes = raw.minutes.unwrap_or(0.0);
    let seconds = raw.seconds.unwrap_or(0.0);

    let mut errors = Vec::new();

    if !degrees.is_finite() || !minutes.is_finite() || !seconds.is_finite() {
        errors.push("Invalid numeric value".to_string());
    }

    if minutes < 0.0 {
        errors.push(format!("Minutes value cannot be negative: {}", minutes));
    } else if minutes >= 60.0 {
        errors.push(format!("Minutes value too high: {}", minutes));
    }

    if seconds < 0.0 {
        errors.push(format!("Seconds value cannot be negative: {}", seconds));
    } else if seconds >= 60.0 {
        errors.push(format!("Seconds value too high: {}", seconds));
    }

    if let Some(compass @ (Compass::N | Compass::E)) = raw.compass {
        if degrees < 0.0 {
            errors.push(format!(
                "Negative degrees value conflicts with compass direction {}",
                compass
            ));
        }
    }

    if !errors.is_empty() {
        return Err(CoordError::Validation(errors));
    }

    let sign = match raw.compass {
        Some(compass) => compass.sign(),
        None if degrees.is_sign_negative() => -1.0,
        None => 1.0,
    };

    Ok(RefinedCoordinate {
        axis: raw.compass.map(Compass::axis),
        value: (degrees.abs() + minutes / 60.0 + seconds / 3600.0) * sign,
    })
}
