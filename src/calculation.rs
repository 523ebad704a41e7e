//! One pass of the validate → discharge → classify → geometry pipeline.

use log::info;
use uom::si::f64::VolumeRate;

use crate::discharge::{compute_discharge, format_discharge};
use crate::errors::InvalidInput;
use crate::geometry::{build_geometry, ChartGeometry};
use crate::status::{classify, StatusCategory};
use crate::validation::{validate, InputPair};

/// Result of one accepted calculation request.
///
/// Every field is derived from the inputs of this request only; nothing is carried over
/// between calculations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calculation {
    /// The validated inputs.
    pub input: InputPair,
    /// Discharge through the section.
    pub discharge: VolumeRate,
    /// Operational status of the discharge.
    pub status: StatusCategory,
    /// Chart geometry for the inputs and discharge.
    pub geometry: ChartGeometry,
}

impl Calculation {
    /// Discharge rendered with three decimals.
    #[must_use]
    pub fn discharge_text(&self) -> String {
        format_discharge(self.discharge)
    }
}

/// Run the full calculation for two raw input values.
///
/// # Errors
///
/// Returns [`InvalidInput`] when the inputs fail validation, in which case nothing else is
/// computed.
///
/// # Examples
/// ```
/// use flowcalc::{calculate, StatusCategory};
///
/// let calculation = calculate("0.5", "0.3").expect("valid input");
/// assert_eq!(calculation.discharge_text(), "0.150");
/// assert_eq!(calculation.status, StatusCategory::Operative);
/// assert_eq!(calculation.geometry.axis_max_velocity, 3.0);
/// ```
pub fn calculate(raw_area: &str, raw_velocity: &str) -> Result<Calculation, InvalidInput> {
    let input = validate(raw_area, raw_velocity)?;
    let discharge = compute_discharge(input.area(), input.velocity());
    let status = classify(discharge);
    let geometry = build_geometry(input.area(), input.velocity(), discharge);

    let calculation = Calculation {
        input,
        discharge,
        status,
        geometry,
    };
    info!(
        "calculated Q = {} m³/s ({})",
        calculation.discharge_text(),
        status.severity_tag()
    );
    Ok(calculation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point;
    use approx::assert_relative_eq;
    use uom::si::volume_rate::cubic_meter_per_second;

    #[test]
    fn operative_scenario() {
        let calculation = calculate("0.5", "0.3").expect("valid input");
        assert_relative_eq!(
            calculation.discharge.get::<cubic_meter_per_second>(),
            0.15,
            epsilon = 1.0e-12
        );
        assert_eq!(calculation.discharge_text(), "0.150");
        assert_eq!(calculation.status, StatusCategory::Operative);
        assert_eq!(calculation.geometry.axis_max_velocity, 3.0);
        assert_eq!(calculation.geometry.trend_line[0], point(0.0, 0.0));
        assert_relative_eq!(calculation.geometry.trend_line[1].y, 1.5, epsilon = 1.0e-12);
    }

    #[test]
    fn high_scenario() {
        let calculation = calculate("2", "0.5").expect("valid input");
        assert_eq!(calculation.discharge_text(), "1.000");
        assert_eq!(calculation.status, StatusCategory::High);
    }

    #[test]
    fn exact_tie_is_displayed_rounded_up() {
        let calculation = calculate("0.25", "0.25").expect("valid input");
        assert_eq!(calculation.discharge_text(), "0.063");
        assert_eq!(calculation.status, StatusCategory::Low);
    }

    #[test]
    fn overflowing_discharge_is_shown_as_infinity() {
        let calculation = calculate("1e308", "10").expect("valid input");
        assert_eq!(calculation.discharge_text(), "Infinity");
        assert_eq!(calculation.status, StatusCategory::High);
    }

    #[test]
    fn invalid_input_produces_nothing() {
        let error = calculate("abc", "1").expect_err("rejected");
        assert!(matches!(error, InvalidInput::NotANumber { .. }));
    }
}
