use crate::coord::refine::RefinedCoordinate;
use crate::coord::{Axis, AxisOrder};
use crate::error::CoordError;
use serde::{Deserialize, Serialize};

/// A refined value whose axis is known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAssignment {
    pub axis: Axis,
    pub value: f64,
}

/// Resolves which of two refined values is latitude and which is longitude.
///
/// A value with a known axis forces the other to the complementary axis.
/// When neither is known the `order` decides, defaulting to lat/lon. When
/// both are known and an `order` is given, the first value must match it.
///
/// Both inputs are consumed and a new pair is returned in input order.
///
/// # Example
/// ```
/// use geocoord_rs::{Axis, AxisOrder, RefinedCoordinate, assign_axes};
///
/// # fn main() -> Result<(), geocoord_rs::CoordError> {
/// let first = RefinedCoordinate { axis: None, value: -79.98 };
/// let second = RefinedCoordinate { axis: Some(Axis::Lat), value: 40.44 };
///
/// let [a, b] = assign_axes(first, second, Some(AxisOrder::LatLon))?;
/// assert_eq!(a.axis, Axis::Lon);
/// assert_eq!(b.axis, Axis::Lat);
/// # Ok(())
/// # }
/// ```
pub fn assign_axes(
    first: RefinedCoordinate,
    second: RefinedCoordinate,
    order: Option<AxisOrder>,
) -> Result<[AxisAssignment; 2], CoordError> {
    if let (Some(a), Some(b)) = (first.axis, second.axis) {
        if a == b {
            return Err(CoordError::Parse(
                "Both parts assigned to the same axis".to_string(),
            ));
        }
        if let Some(order) = order {
            if a != order.first() {
                return Err(CoordError::Parse(format!(
                    "Axis order mismatch: expected {} but first value is {}",
                    order, a
                )));
            }
        }
    }

    let (first_axis, second_axis) = match (first.axis, second.axis) {
        (Some(a), Some(b)) => (a, b),
        (Some(a), None) => (a, a.complement()),
        (None, Some(b)) => (b.complement(), b),
        (None, None) => {
            let a = order.unwrap_or_default().first();
            (a, a.complement())
        }
    };

    Ok([
        AxisAssignment {
            axis: first_axis,
            value: first.value,
        },
        AxisAssignment {
            axis: second_axis,
            value: second.value,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refined(axis: Option<Axis>, value: f64) -> RefinedCoordinate {
        RefinedCoordinate { axis, value }
    }

    #[test]
    fn test_same_axis_is_error() {
        for axis in [Axis::Lat, Axis::Lon] {
            for order in [None, Some(AxisOrder::LatLon), Some(AxisOrder::LonLat)] {
                let result = assign_axes(refined(Some(axis), 1.0), refined(Some(axis), 2.0), order);
                assert!(matches!(
                    result,
                    Err(CoordError::Parse(msg)) if msg.contains("Both parts assigned to the same axis")
                ));
            }
        }
    }

    #[test]
    fn test_order_contradiction() {
        let result = assign_axes(
            refined(Some(Axis::Lon), 1.0),
            refined(Some(Axis::Lat), 2.0),
            Some(AxisOrder::LatLon),
        );
        assert!(matches!(result, Err(CoordError::Parse(msg)) if msg.contains("Axis order mismatch")));
    }

    #[test]
    fn test_both_known_without_order() -> Result<(), CoordError> {
        let [a, b] = assign_axes(refined(Some(Axis::Lon), 1.0), refined(Some(Axis::Lat), 2.0), None)?;
        assert_eq!((a.axis, b.axis), (Axis::Lon, Axis::Lat));
        Ok(())
    }

    #[test]
    fn test_missing_axis_is_complement() -> Result<(), CoordError> {
        for axis in [Axis::Lat, Axis::Lon] {
            let [a, b] = assign_axes(refined(Some(axis), 1.0), refined(None, 2.0), None)?;
            assert_eq!(a.axis, axis);
            assert_eq!(b.axis, axis.complement());

            let [a, b] = assign_axes(refined(None, 1.0), refined(Some(axis), 2.0), None)?;
            assert_eq!(a.axis, axis.complement());
            assert_eq!(b.axis, axis);
        }
        Ok(())
    }

    #[test]
    fn test_known_axis_wins_over_order() -> Result<(), CoordError> {
        let [a, b] = assign_axes(
            refined(Some(Axis::Lon), 1.0),
            refined(None, 2.0),
            Some(AxisOrder::LatLon),
        )?;
        assert_eq!((a.axis, b.axis), (Axis::Lon, Axis::Lat));
        Ok(())
    }

    #[test]
    fn test_order_default_and_lonlat() -> Result<(), CoordError> {
        let [a, b] = assign_axes(refined(None, 1.0), refined(None, 2.0), None)?;
        assert_eq!((a.axis, b.axis), (Axis::Lat, Axis::Lon));

        let [a, b] = assign_axes(refined(None, 1.0), refined(None, 2.0), Some(AxisOrder::LonLat))?;
        assert_eq!((a.axis, b.axis), (Axis::Lon, Axis::Lat));
        assert_eq!((a.value, b.value), (1.0, 2.0));
        Ok(())
    }
}
