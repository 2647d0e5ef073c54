use crate::error::CoordError;

/// Restricts `value` to the inclusive range `[min, max]`.
///
/// # Example
/// ```
/// use geocoord_rs::clamp;
///
/// # fn main() -> Result<(), geocoord_rs::CoordError> {
/// assert_eq!(clamp(1.0, 2.0, 0.0)?, 1.0);
/// assert_eq!(clamp(1.0, 2.0, 3.0)?, 2.0);
/// # Ok(())
/// # }
/// ```
pub fn clamp(min: f64, max: f64, value: f64) -> Result<f64, CoordError> {
    if min > max {
        return Err(CoordError::Range("min exceeded max".to_string()));
    }
    Ok(value.max(min).min(max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() -> Result<(), CoordError> {
        assert_eq!(clamp(1.0, 2.0, 0.0)?, 1.0);
        assert_eq!(clamp(1.0, 2.0, 3.0)?, 2.0);
        assert_eq!(clamp(1.0, 3.0, 2.0)?, 2.0);
        assert_eq!(clamp(-5.0, -5.0, 10.0)?, -5.0);
        Ok(())
    }

    #[test]
    fn test_clamp_min_exceeds_max() {
        let result = clamp(3.0, 1.0, 2.0);
        assert_eq!(result, Err(CoordError::Range("min exceeded max".to_string())));
        assert_eq!(
            result.map_err(|e| e.to_string()),
            Err("min exceeded max".to_string())
        );
    }
}
