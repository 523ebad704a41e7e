//! Parsing and checking of the raw area and velocity fields.

use log::warn;
use uom::si::area::square_meter;
use uom::si::f64::{Area, Velocity};
use uom::si::velocity::meter_per_second;

use crate::errors::{Field, InvalidInput};

/// A validated pair of inputs for one calculation.
///
/// The area is strictly positive, the velocity is non-negative and both are finite.
/// Values are only produced by [`validate`], so holding one is proof the checks passed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputPair {
    /// Cross-sectional area, strictly positive.
    area: Area,
    /// Mean velocity, zero or more.
    velocity: Velocity,
}

impl InputPair {
    /// Cross-sectional area of the channel.
    #[must_use]
    pub const fn area(&self) -> Area {
        self.area
    }

    /// Mean flow velocity.
    #[must_use]
    pub const fn velocity(&self) -> Velocity {
        self.velocity
    }
}

/// Parse and check the two raw inputs.
///
/// Each value is trimmed and parsed as a decimal number. The numbers are returned
/// without rounding or clamping.
///
/// # Errors
///
/// Returns [`InvalidInput::NotANumber`] when either field does not parse to a finite
/// number, [`InvalidInput::NonPositiveArea`] when the area is not strictly positive and
/// [`InvalidInput::NegativeVelocity`] when the velocity is below zero. Both fields are
/// parsed before the range checks, and the area is checked first.
///
/// # Examples
///
/// ```
/// use flowcalc::validate;
/// use uom::si::area::square_meter;
///
/// let input = validate("2", "0.5").expect("valid input");
/// assert_eq!(input.area().get::<square_meter>(), 2.0);
/// assert!(validate("abc", "1").is_err());
/// ```
pub fn validate(raw_area: &str, raw_velocity: &str) -> Result<InputPair, InvalidInput> {
    let checked = parse_field(Field::Area, raw_area).and_then(|area| {
        let velocity = parse_field(Field::Velocity, raw_velocity)?;
        check_ranges(area, velocity)
    });
    if let Err(error) = &checked {
        warn!("rejected input: {error}");
    }
    checked
}

/// Parse one raw field, ignoring surrounding whitespace.
///
/// Infinities and NaN count as not a number.
fn parse_field(field: Field, raw: &str) -> Result<f64, InvalidInput> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InvalidInput::NotANumber {
            field,
            raw: raw.to_owned(),
        }),
    }
}

/// Enforce the physical ranges on already parsed values.
fn check_ranges(area: f64, velocity: f64) -> Result<InputPair, InvalidInput> {
    if area <= 0.0 {
        return Err(InvalidInput::NonPositiveArea { area });
    }
    if velocity < 0.0 {
        return Err(InvalidInput::NegativeVelocity { velocity });
    }
    Ok(InputPair {
        area: Area::new::<square_meter>(area),
        velocity: Velocity::new::<meter_per_second>(velocity),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_area_and_velocity() {
        let input = validate("2", "0.5").expect("valid input");
        assert_eq!(input.area().get::<square_meter>(), 2.0);
        assert_eq!(input.velocity().get::<meter_per_second>(), 0.5);
    }

    #[test]
    fn accepts_zero_velocity_and_surrounding_whitespace() {
        let input = validate(" 0.75 ", "0\n").expect("valid input");
        assert_eq!(input.area().get::<square_meter>(), 0.75);
        assert_eq!(input.velocity().get::<meter_per_second>(), 0.0);
    }

    #[test]
    fn rejects_non_positive_area() {
        assert_eq!(
            validate("0", "1"),
            Err(InvalidInput::NonPositiveArea { area: 0.0 })
        );
        assert_eq!(
            validate("-5", "1"),
            Err(InvalidInput::NonPositiveArea { area: -5.0 })
        );
    }

    #[test]
    fn rejects_negative_velocity() {
        assert_eq!(
            validate("1", "-1"),
            Err(InvalidInput::NegativeVelocity { velocity: -1.0 })
        );
    }

    #[test]
    fn rejects_text_and_non_finite_values() {
        for (area, velocity, field) in [
            ("abc", "1", Field::Area),
            ("", "1", Field::Area),
            ("NaN", "1", Field::Area),
            ("1", "inf", Field::Velocity),
            ("1", "12abc", Field::Velocity),
        ] {
            let error = validate(area, velocity).expect_err("unparseable input rejected");
            assert!(
                matches!(error, InvalidInput::NotANumber { field: f, .. } if f == field),
                "unexpected error for ({area:?}, {velocity:?}): {error:?}"
            );
        }
    }

    #[test]
    fn unparseable_velocity_wins_over_bad_area_range() {
        let error = validate("-1", "x").expect_err("rejected");
        assert!(matches!(
            error,
            InvalidInput::NotANumber {
                field: Field::Velocity,
                ..
            }
        ));
    }
}
